//! Main page: prompt input, generate buttons and the generated text.
//!
//! The state lives in a [`PromptConsole`] signal. A generation begins and
//! finishes on the console; only the HTTP request runs in between, so the
//! page stays responsive while it is outstanding.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    Route,
    app_settings::AppSettings,
    clipboard::ClipboardSink,
    generation::HttpGenerationService,
    prompt_console::{PromptConsole, copy_to_clipboard, fulfil},
    ui::{confirm::Confirmation, output::OutputPanel, prompt_input::PromptInput},
    writing::WritingType,
};

#[component]
pub fn Home() -> Element {
    let settings = use_context::<Signal<Option<AppSettings>>>();
    let clipboard = use_context::<Rc<dyn ClipboardSink>>();
    let mut console = use_signal(PromptConsole::new);
    let mut copied = use_signal(|| false);

    let generate = move |kind: WritingType| async move {
        let Some(pending) = console.write().begin(kind) else {
            return;
        };
        let endpoint = settings.cloned().unwrap_or_default().endpoint;
        let service = HttpGenerationService::new(endpoint);
        let result = fulfil(&service, &pending).await;
        console.write().finish(pending, result);
    };

    let copy = move |_: ()| {
        let clipboard = clipboard.clone();
        async move {
            let text = console.read().displayed().to_string();
            copy_to_clipboard(clipboard.as_ref(), &text).await;
            copied.set(true);
        }
    };

    let edit = move |_: ()| {
        console.write().edit_content();
    };

    let state = console.cloned();
    let generating = [WritingType::Story, WritingType::Poem]
        .into_iter()
        .find(|kind| state.is_generating(*kind));

    rsx! {
        div { class: "page",
            div { class: "top-bar",
                Link { to: Route::Settings {}, class: "settings-link", "⚙" }
            }
            h1 { class: "title", "✨ StoryBot AI ✨" }

            PromptInput {
                prompt: state.prompt.clone(),
                loading: state.loading,
                generating,
                on_input: move |text: String| {
                    console.write().prompt = text;
                },
                on_generate: generate,
            }

            if state.has_output() {
                OutputPanel {
                    story: state.story.clone(),
                    poem: state.poem.clone(),
                    on_copy: copy,
                    on_edit: edit,
                }
            }

            if copied() {
                Confirmation {
                    message: "Copied to clipboard! ✅".to_string(),
                    on_close: move |_| copied.set(false),
                }
            }
        }
    }
}
