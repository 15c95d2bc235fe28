use std::rc::Rc;

use dioxus::prelude::*;

pub mod app_settings;
pub mod clipboard;
pub mod generation;
pub mod prompt_console;
pub mod storage;
mod ui;
pub mod writing;

pub use app_settings::AppSettings;
use clipboard::{ClipboardSink, SystemClipboard};
use storage::load_settings_or_default;
use ui::home::Home;
use ui::settings::Settings;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Rc::new(SystemClipboard::default()) as Rc<dyn ClipboardSink>);
    let mut settings = use_context_provider(|| Signal::new(None::<AppSettings>));
    let init = use_resource(move || async move {
        settings.set(Some(load_settings_or_default().await));
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if init.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/settings")]
    Settings { },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
