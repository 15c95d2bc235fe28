//! View state behind the main page.
//!
//! `PromptConsole` holds the prompt, the last story or poem, and the loading
//! flag. It does no I/O: a generation is split into [`PromptConsole::begin`],
//! which hands out a [`PendingGeneration`], and [`PromptConsole::finish`],
//! which applies the result. The caller runs the request in between, so the
//! UI never holds a borrow of the state across an await point.

use dioxus::logger::tracing::{info, warn};

use crate::{
    clipboard::ClipboardSink,
    generation::{GenerationRequest, GenerationService},
    writing::WritingType,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptConsole {
    pub prompt: String,
    pub story: String,
    pub poem: String,
    pub loading: bool,
    pub writing_type: WritingType,
    latest: u64,
}

/// A generation that has been started but whose result is not applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    seq: u64,
    pub request: GenerationRequest,
}

impl PromptConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a generation of `kind` from the current prompt.
    ///
    /// Returns `None` and leaves the state alone when the prompt is empty.
    pub fn begin(&mut self, kind: WritingType) -> Option<PendingGeneration> {
        if self.prompt.is_empty() {
            return None;
        }
        self.latest += 1;
        self.loading = true;
        self.writing_type = kind;
        Some(PendingGeneration {
            seq: self.latest,
            request: GenerationRequest {
                prompt: self.prompt.clone(),
                kind,
            },
        })
    }

    /// Applies the outcome of `pending`.
    ///
    /// A success fills the matching field and clears the other one. A failure
    /// only overwrites the matching field with the fixed error text. Results
    /// of anything but the most recent `begin` are dropped; returns whether
    /// the result was applied.
    pub fn finish(&mut self, pending: PendingGeneration, result: anyhow::Result<String>) -> bool {
        if pending.seq != self.latest {
            warn!(
                "dropping stale {} response (request {}, latest {})",
                pending.request.kind, pending.seq, self.latest
            );
            return false;
        }
        let kind = pending.request.kind;
        match result {
            Ok(text) => match kind {
                WritingType::Story => {
                    self.story = text;
                    self.poem.clear();
                }
                WritingType::Poem => {
                    self.poem = text;
                    self.story.clear();
                }
            },
            Err(e) => {
                warn!("{kind} generation failed: {e:?}");
                *self.field_mut(kind) = kind.error_text().to_string();
            }
        }
        self.loading = false;
        true
    }

    /// Text for the current writing type, which is what Copy and Edit act on.
    pub fn displayed(&self) -> &str {
        match self.writing_type {
            WritingType::Story => &self.story,
            WritingType::Poem => &self.poem,
        }
    }

    pub fn has_output(&self) -> bool {
        !self.story.is_empty() || !self.poem.is_empty()
    }

    /// Moves the displayed text back into the prompt and clears both outputs.
    pub fn edit_content(&mut self) {
        self.prompt = self.displayed().to_string();
        self.story.clear();
        self.poem.clear();
    }

    /// Whether the generate button for `kind` should read "Generating...".
    pub fn is_generating(&self, kind: WritingType) -> bool {
        self.loading && self.writing_type == kind
    }

    fn field_mut(&mut self, kind: WritingType) -> &mut String {
        match kind {
            WritingType::Story => &mut self.story,
            WritingType::Poem => &mut self.poem,
        }
    }
}

/// Runs the request of `pending` against `service`.
pub async fn fulfil(
    service: &dyn GenerationService,
    pending: &PendingGeneration,
) -> anyhow::Result<String> {
    info!(
        "requesting {} for a {} character prompt",
        pending.request.kind,
        pending.request.prompt.chars().count()
    );
    let text = service.generate(&pending.request).await?;
    info!("received {} characters", text.chars().count());
    Ok(text)
}

/// Writes `text` to the clipboard. Failures are logged, never surfaced.
pub async fn copy_to_clipboard(sink: &dyn ClipboardSink, text: &str) {
    if let Err(e) = sink.write_text(text).await {
        warn!("Could not write to clipboard: {e:?}");
    }
}

/// Splits a poem into the lines rendered as separate paragraphs.
pub fn poem_lines(poem: &str) -> Vec<&str> {
    poem.split('\n').collect()
}
