use dioxus::prelude::*;

/// Modal notice that covers the page until dismissed.
#[component]
pub fn Confirmation(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "
            position: fixed;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            background: rgba(0,0,0,.5);
            ",
            div {
                class: "confirmation",
                style: "
                background: #1f2937;
                padding: 1.5rem;
                border-radius: 8px;
                box-shadow: 0 2px 12px rgba(0,0,0,.4);
                ",
                p { "{message}" }
                button {
                    autofocus: true,
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}
