//! User interface components for StoryBot.
//!
//! The main page and the settings page, plus the pieces the main page is
//! built from.

mod confirm;       // Blocking confirmation dialog
pub mod home;      // Prompt page (public for routing)
mod output;        // Generated story/poem display
mod prompt_input;  // Prompt textarea and generate buttons
pub mod settings;  // Endpoint configuration page (public for routing)
