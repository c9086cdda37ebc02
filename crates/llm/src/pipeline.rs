//! Shared insight pipeline used by both the HTTP API and the CLI.

use starlore_core::{InsightCache, Language, Sign};

use crate::insight::InsightGenerator;
use crate::translate::translate_text;

/// Resolve today's insight for `(sign, language)`.
///
/// Cache hit short-circuits; on a miss the insight is generated,
/// translated when the target language is Hindi and the LLM is
/// configured (the fallback lines are English-only), stored, and
/// returned. Never fails.
pub async fn daily_insight(
    cache: &InsightCache,
    generator: &InsightGenerator,
    name: &str,
    sign: Sign,
    language: Language,
) -> String {
    if let Some(cached) = cache.get(sign, language) {
        tracing::debug!(sign = %sign, language = %language, "Insight cache hit");
        return cached;
    }

    let mut insight = generator.generate(name, sign, language).await;

    if language == Language::Hi && generator.is_llm_enabled() {
        insight = translate_text(generator.client(), &insight, language).await;
    }

    cache.set(sign, language, insight.clone());
    insight
}
