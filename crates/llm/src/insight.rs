//! Personalized daily insight generation.
//!
//! Two paths: an LLM call with a constructed prompt (non-deterministic
//! by design — the thematic focus is chosen at random per call), and a
//! deterministic fallback that rotates through 3 pre-written lines per
//! sign keyed by day-of-year. The generator never fails: any LLM
//! failure is logged and resolved to the fallback.

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;

use starlore_core::{Language, Sign};

use crate::client::{LlmError, OpenAiClient};

/// Thematic focus areas rotated into the LLM prompt.
pub const DAILY_THEMES: [&str; 8] = [
    "relationships",
    "career",
    "personal growth",
    "creativity",
    "challenges",
    "opportunities",
    "communication",
    "emotions",
];

const INSIGHT_SYSTEM_PROMPT: &str =
    "You are an expert astrologer providing personalized daily insights.";

/// Pre-written insights used when the LLM is unavailable, 3 per sign.
fn fallback_lines(sign: Sign) -> [&'static str; 3] {
    match sign {
        Sign::Aries => [
            "Your natural courage will help you face challenges head-on today.",
            "Channel your energy into productive pursuits and avoid hasty decisions.",
            "Leadership opportunities may arise - trust your instincts.",
        ],
        Sign::Taurus => [
            "Your grounded nature will help you handle unexpected situations with grace.",
            "Focus on building stability and nurturing important relationships.",
            "Trust in your practical approach to solve today's challenges.",
        ],
        Sign::Gemini => [
            "Your adaptability and communication skills will be your greatest assets today.",
            "Stay curious and open to new ideas that come your way.",
            "Connect with others and share your versatile perspective.",
        ],
        Sign::Cancer => [
            "Trust your intuition as you navigate emotional situations today.",
            "Your nurturing nature will bring comfort to those around you.",
            "Create a safe space for yourself and honor your feelings.",
        ],
        Sign::Leo => [
            "Your innate leadership and warmth will shine today. Embrace spontaneity.",
            "Creative pursuits will bring you joy and recognition.",
            "Let your generous spirit guide your interactions with others.",
        ],
        Sign::Virgo => [
            "Your analytical mind will help you solve complex problems today.",
            "Pay attention to details, but don't lose sight of the bigger picture.",
            "Your practical approach will be appreciated by those around you.",
        ],
        Sign::Libra => [
            "Seek harmony in your relationships and trust your diplomatic nature.",
            "Balance is key - find time for both work and personal pursuits.",
            "Your fair-minded approach will help resolve conflicts gracefully.",
        ],
        Sign::Scorpio => [
            "Your passion and determination will drive you toward your goals today.",
            "Trust your deep intuition and embrace transformation.",
            "Channel your intensity into meaningful pursuits.",
        ],
        Sign::Sagittarius => [
            "Your optimistic outlook will open new doors and opportunities.",
            "Embrace adventure and let your philosophical nature guide you.",
            "Share your wisdom and inspire others with your honesty.",
        ],
        Sign::Capricorn => [
            "Your discipline and ambition will bring progress toward your goals.",
            "Patient persistence will yield rewards - stay focused on your path.",
            "Your responsible approach will earn respect and recognition.",
        ],
        Sign::Aquarius => [
            "Your innovative thinking will lead to breakthrough solutions today.",
            "Embrace your independence while staying connected to your community.",
            "Let your humanitarian spirit guide your actions.",
        ],
        Sign::Pisces => [
            "Your compassionate nature will bring healing to those around you.",
            "Trust your artistic intuition and express yourself creatively.",
            "Your gentle wisdom will guide others through difficult times.",
        ],
    }
}

/// Deterministic fallback insight: same sign and calendar day always
/// yield the same line, cycling through the 3 pre-written lines by
/// day-of-year.
pub fn fallback_insight(sign: Sign, date: NaiveDate) -> &'static str {
    let lines = fallback_lines(sign);
    lines[date.ordinal() as usize % lines.len()]
}

/// Build the insight prompt for the LLM path.
pub fn build_insight_prompt(
    name: &str,
    sign: Sign,
    language: Language,
    weekday: &str,
    theme: &str,
) -> String {
    let info = sign.info();
    let traits = info.traits[..3].join(", ");
    let language_line = match language {
        Language::Hi => "Hindi (Devanagari script)",
        Language::En => "English",
    };

    format!(
        "Generate a personalized daily astrological insight for {name}.\n\
         \n\
         Zodiac Sign: {sign}\n\
         Element: {element}\n\
         Key Traits: {traits}\n\
         Day: {weekday}\n\
         Focus Area: {theme}\n\
         \n\
         Create a warm, encouraging insight (2-3 sentences) that:\n\
         1. Acknowledges their zodiac traits\n\
         2. Provides guidance related to {theme}\n\
         3. Is positive and actionable\n\
         \n\
         Language: {language_line}\n\
         Tone: Friendly, mystical, encouraging",
        element = info.element,
    )
}

/// Insight generator holding the optional LLM client.
///
/// Without a configured client every call takes the fallback path, so
/// construction always succeeds and generation never fails.
pub struct InsightGenerator {
    client: Option<OpenAiClient>,
}

impl InsightGenerator {
    pub fn new(client: Option<OpenAiClient>) -> Self {
        Self { client }
    }

    /// Whether the LLM path is available.
    pub fn is_llm_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub fn client(&self) -> Option<&OpenAiClient> {
        self.client.as_ref()
    }

    /// Produce a non-empty insight, preferring the LLM path when a
    /// client is configured. Failures are logged and absorbed.
    pub async fn generate(&self, name: &str, sign: Sign, language: Language) -> String {
        if let Some(client) = &self.client {
            match self.generate_with_llm(client, name, sign, language).await {
                Ok(text) => return text,
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        sign = %sign,
                        "LLM insight generation failed, falling back to rule-based"
                    );
                }
            }
        }

        fallback_insight(sign, Local::now().date_naive()).to_string()
    }

    /// The fallible LLM path, exposed so the never-fails contract of
    /// [`generate`](Self::generate) stays visible at the boundary.
    pub async fn generate_with_llm(
        &self,
        client: &OpenAiClient,
        name: &str,
        sign: Sign,
        language: Language,
    ) -> Result<String, LlmError> {
        let theme = DAILY_THEMES[rand::rng().random_range(0..DAILY_THEMES.len())];
        let weekday = Local::now().format("%A").to_string();
        let prompt = build_insight_prompt(name, sign, language, &weekday, theme);

        client.chat(INSIGHT_SYSTEM_PROMPT, &prompt, 150, 0.8).await
    }
}
