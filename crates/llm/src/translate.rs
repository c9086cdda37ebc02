//! Free-text translation for the secondary language.
//!
//! English is the identity language; Hindi goes through the LLM when a
//! client is configured. Any failure degrades silently to the original
//! text — translation is best-effort, never an error. (Sign display
//! names are translated separately via the static dictionary in
//! `starlore_core::Sign::localized_name`.)

use starlore_core::Language;

use crate::client::{LlmError, OpenAiClient};

const TRANSLATOR_SYSTEM_PROMPT: &str = "You are a professional translator. \
     Translate English to Hindi (Devanagari script). Maintain the tone and meaning.";

/// Translate `text` into `language`, returning the input unchanged for
/// English, for an unconfigured client, or on any LLM failure.
pub async fn translate_text(
    client: Option<&OpenAiClient>,
    text: &str,
    language: Language,
) -> String {
    match language {
        Language::En => text.to_string(),
        Language::Hi => {
            let Some(client) = client else {
                return text.to_string();
            };
            match translate_to_hindi(client, text).await {
                Ok(translated) => translated,
                Err(err) => {
                    tracing::warn!(error = %err, "Translation failed, keeping original text");
                    text.to_string()
                }
            }
        }
    }
}

/// The fallible Hindi translation call.
pub async fn translate_to_hindi(client: &OpenAiClient, text: &str) -> Result<String, LlmError> {
    let prompt = format!("Translate to Hindi: {text}");
    client.chat(TRANSLATOR_SYSTEM_PROMPT, &prompt, 200, 0.3).await
}
