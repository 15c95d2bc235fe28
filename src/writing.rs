use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of text the generation endpoint can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingType {
    #[default]
    Story,
    Poem,
}

impl WritingType {
    /// Wire name, also the key of the response field carrying the text.
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingType::Story => "story",
            WritingType::Poem => "poem",
        }
    }

    /// Literal shown in place of the output when generation fails.
    pub fn error_text(&self) -> &'static str {
        match self {
            WritingType::Story => "Error generating story.",
            WritingType::Poem => "Error generating poem.",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            WritingType::Story => "Write Story 📖",
            WritingType::Poem => "Write Poem ✍️",
        }
    }
}

impl fmt::Display for WritingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WritingType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "story" => Ok(WritingType::Story),
            "poem" => Ok(WritingType::Poem),
            other => anyhow::bail!("unknown writing type {other:?}, expected story or poem"),
        }
    }
}
