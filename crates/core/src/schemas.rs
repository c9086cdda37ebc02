//! Request and response data types.

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::language::Language;
use crate::zodiac::Sign;

/// A person's birth information, validated on construction.
///
/// `birth_time` and `birth_place` are accepted and carried through but
/// drive no computation; the time-of-birth chart hook is intentionally
/// unused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthDetails {
    pub name: String,
    pub birth_date: NaiveDate,
    pub birth_time: Option<NaiveTime>,
    pub birth_place: Option<String>,
}

impl BirthDetails {
    /// Build validated birth details against the current local date.
    ///
    /// The name is trimmed; an empty name or a future birth date is a
    /// [`CoreError::Validation`].
    pub fn new(
        name: &str,
        birth_date: NaiveDate,
        birth_time: Option<NaiveTime>,
        birth_place: Option<String>,
    ) -> Result<Self, CoreError> {
        Self::new_as_of(name, birth_date, birth_time, birth_place, Local::now().date_naive())
    }

    /// Clock-injected variant of [`new`](Self::new) used by tests.
    pub fn new_as_of(
        name: &str,
        birth_date: NaiveDate,
        birth_time: Option<NaiveTime>,
        birth_place: Option<String>,
        today: NaiveDate,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("Name cannot be empty".to_string()));
        }
        validate_birth_date(birth_date, today)?;

        Ok(Self {
            name: name.to_string(),
            birth_date,
            birth_time,
            birth_place,
        })
    }
}

/// Reject birth dates after `today`.
pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if birth_date > today {
        return Err(CoreError::Validation(
            "Birth date cannot be in the future".to_string(),
        ));
    }
    Ok(())
}

/// Zodiac sign information as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacInfo {
    pub sign: String,
    pub element: String,
    pub ruling_planet: String,
    pub traits: Vec<String>,
    pub date_range: String,
}

impl ZodiacInfo {
    /// Project a sign's static traits, localizing the display name.
    pub fn for_sign(sign: Sign, language: Language) -> Self {
        let info = sign.info();
        Self {
            sign: sign.localized_name(language).to_string(),
            element: info.element.to_string(),
            ruling_planet: info.ruling_planet.to_string(),
            traits: info.traits.iter().map(|t| t.to_string()).collect(),
            date_range: info.date_range.to_string(),
        }
    }
}

/// Personalized insight response returned by the API and the CLI's
/// JSON output mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightResponse {
    /// Localized sign display name.
    pub zodiac: String,
    pub insight: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruling_planet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<String>>,
}

impl InsightResponse {
    /// Assemble the full response for a computed sign and insight text.
    pub fn new(sign: Sign, insight: String, language: Language) -> Self {
        let info = sign.info();
        Self {
            zodiac: sign.localized_name(language).to_string(),
            insight,
            language,
            element: Some(info.element.to_string()),
            ruling_planet: Some(info.ruling_planet.to_string()),
            traits: Some(info.traits.iter().map(|t| t.to_string()).collect()),
        }
    }
}
