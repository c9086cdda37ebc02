//! Supported output languages.

use serde::{Deserialize, Serialize};

/// Output language for insights and sign names.
///
/// Parsing is deliberately forgiving: anything that is not `"hi"`
/// resolves to English, so an unknown `language` query parameter never
/// fails a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Two-letter language code (`"en"` / `"hi"`).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Parse a language code, falling back to English for anything
    /// unrecognized.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hi" => Language::Hi,
            _ => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
