// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::{info, warn}, prelude::*};

use crate::{
    AppSettings, Route,
    storage::{get_storage, save_settings_to},
};

#[allow(non_snake_case)]
#[component]
pub fn Settings() -> Element {
    let mut settings_ctx = use_context::<Signal<Option<AppSettings>>>();
    let current = settings_ctx.cloned().unwrap_or_default();
    let mut endpoint = use_signal(move || current.endpoint);
    let mut status: Signal<Option<Result<String, String>>> = use_signal(|| None);

    let save_settings = move |_| async move {
        let s = AppSettings {
            endpoint: endpoint().trim().to_string(),
            ..settings_ctx.cloned().unwrap_or_default()
        };
        if let Err(e) = s.validate() {
            status.set(Some(Err(format!("{e:#}"))));
            return;
        }
        match save_settings_to(get_storage().await, &s).await {
            Ok(()) => {
                info!("endpoint set to {}", s.endpoint);
                status.set(Some(Ok("Saved.".to_string())));
            }
            Err(e) => {
                warn!("Could not save settings: {e:?}");
                status.set(Some(Err(format!("Saved for this session only: {e:#}"))));
            }
        }
        settings_ctx.set(Some(s));
    };

    let reset = move |_| {
        endpoint.set(AppSettings::default().endpoint);
        status.set(None);
    };

    rsx! {
        div { class: "page settings",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                h3 { style: "margin: 0;", "Settings" }
                Link { to: Route::Home {}, "× Back" }
            }

            hr { style: "margin-bottom: 1rem;" }

            div { style: "margin-bottom: 1rem;",
                label { style: "display: block; margin-bottom: 0.25rem; font-weight: bold;",
                    "Generation endpoint"
                }
                input {
                    style: "
                        width: 100%;
                        padding: 0.5rem;
                        border-radius: 3px;
                        box-sizing: border-box;
                    ",
                    value: endpoint(),
                    placeholder: "https://example.com/generate",
                    oninput: move |e| {
                        endpoint.set(e.value());
                        status.set(None);
                    },
                }
            }

            div { style: "display: flex; gap: 0.5rem;",
                button { onclick: save_settings, "Save" }
                button { onclick: reset, "Use default" }
            }

            match status() {
                Some(Ok(msg)) => rsx! {
                    p { class: "status ok", "{msg}" }
                },
                Some(Err(msg)) => rsx! {
                    p { class: "status error", "{msg}" }
                },
                None => rsx! {},
            }
        }
    }
}
