use dioxus::{logger::tracing::Level, prelude::*};

use storybot::App;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("could not start logging: {e}");
    }
    LaunchBuilder::new().launch(App)
}
