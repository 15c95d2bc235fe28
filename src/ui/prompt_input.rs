// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::writing::WritingType;

/// Prompt textarea with the story and poem buttons underneath.
#[component]
pub fn PromptInput(
    prompt: String,
    loading: bool,
    generating: Option<WritingType>,
    on_input: Callback<String, ()>,
    on_generate: Callback<WritingType, ()>,
) -> Element {
    let set_text = move |e: Event<FormData>| {
        on_input.call(e.value());
    };
    let disabled = if loading { Some(true) } else { None };
    let label = move |kind: WritingType| {
        if generating == Some(kind) {
            "Generating..."
        } else {
            kind.button_label()
        }
    };
    rsx! {
        div { class: "prompt-input",
            textarea {
                rows: "4",
                placeholder: "Enter a theme or idea...",
                oninput: set_text,
                value: prompt,
            }
            div { class: "generate-buttons",
                button {
                    class: "generate story",
                    disabled,
                    onclick: move |_e| on_generate.call(WritingType::Story),
                    {label(WritingType::Story)}
                }
                button {
                    class: "generate poem",
                    disabled,
                    onclick: move |_e| on_generate.call(WritingType::Poem),
                    {label(WritingType::Poem)}
                }
            }
        }
    }
}
