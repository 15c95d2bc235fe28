use dioxus::prelude::*;

use crate::prompt_console::poem_lines;

#[component]
pub fn OutputPanel(
    story: String,
    poem: String,
    on_copy: Callback<(), ()>,
    on_edit: Callback<(), ()>,
) -> Element {
    rsx! {
        div { class: "output-panel",
            div { class: "output-actions",
                button { class: "copy", onclick: move |_e| on_copy.call(()), "📋 Copy" }
                button { class: "edit", onclick: move |_e| on_edit.call(()), "✏️ Edit" }
            }
            if !story.is_empty() {
                div { class: "output-text",
                    p { "{story}" }
                }
            }
            // one paragraph per line, blank lines included
            if !poem.is_empty() {
                div { class: "output-text",
                    for (index, line) in poem_lines(&poem).into_iter().enumerate() {
                        p { key: "{index}", "{line}" }
                    }
                }
            }
        }
    }
}
