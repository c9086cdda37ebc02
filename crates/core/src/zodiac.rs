//! Zodiac sign calculation and the astrological knowledge base.
//!
//! The tropical zodiac divides the calendar into 12 fixed month/day
//! ranges. [`Sign::from_date`] classifies any date against those ranges
//! and is total: every possible month/day combination maps to exactly
//! one sign.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One of the 12 tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Static characteristics of a sign.
#[derive(Debug, Clone, Serialize)]
pub struct ZodiacTraits {
    pub element: &'static str,
    pub ruling_planet: &'static str,
    pub traits: [&'static str; 5],
    pub date_range: &'static str,
}

/// Sign date ranges as `(sign, (start_month, start_day), (end_month, end_day))`.
///
/// Capricorn wraps the year boundary (Dec 22 – Jan 19); the ranges do
/// not overlap, so first-match is unique-match.
const SIGN_DATES: [(Sign, (u32, u32), (u32, u32)); 12] = [
    (Sign::Capricorn, (12, 22), (1, 19)),
    (Sign::Aquarius, (1, 20), (2, 18)),
    (Sign::Pisces, (2, 19), (3, 20)),
    (Sign::Aries, (3, 21), (4, 19)),
    (Sign::Taurus, (4, 20), (5, 20)),
    (Sign::Gemini, (5, 21), (6, 20)),
    (Sign::Cancer, (6, 21), (7, 22)),
    (Sign::Leo, (7, 23), (8, 22)),
    (Sign::Virgo, (8, 23), (9, 22)),
    (Sign::Libra, (9, 23), (10, 22)),
    (Sign::Scorpio, (10, 23), (11, 21)),
    (Sign::Sagittarius, (11, 22), (12, 21)),
];

impl Sign {
    /// All 12 signs in traditional order.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Classify a birth date into its tropical zodiac sign.
    ///
    /// A date matches a range when it falls in the start month on or
    /// after the start day, in the end month on or before the end day,
    /// or in any month strictly between the two. Ranges that wrap the
    /// year boundary (start month > end month) have no "between" case.
    ///
    /// Total over the month/day space. The trailing `Aries` return is a
    /// defined fallback kept so callers never see an error from this
    /// function; full calendar coverage means it is unreachable.
    pub fn from_date(birth_date: NaiveDate) -> Sign {
        let month = birth_date.month();
        let day = birth_date.day();

        for (sign, (start_month, start_day), (end_month, end_day)) in SIGN_DATES {
            let in_start = month == start_month && day >= start_day;
            let in_end = month == end_month && day <= end_day;

            if start_month > end_month {
                // Year-wrapping range (Capricorn).
                if in_start || in_end {
                    return sign;
                }
            } else if in_start || in_end || (start_month < month && month < end_month) {
                return sign;
            }
        }

        Sign::Aries
    }

    /// Look up a sign by its English name. Returns `None` for any
    /// string outside the fixed 12.
    pub fn from_name(name: &str) -> Option<Sign> {
        Sign::ALL.into_iter().find(|s| s.name() == name)
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Static characteristics (element, ruling planet, traits, range).
    pub fn info(self) -> &'static ZodiacTraits {
        match self {
            Sign::Aries => &ZodiacTraits {
                element: "Fire",
                ruling_planet: "Mars",
                traits: ["courageous", "confident", "enthusiastic", "impulsive", "energetic"],
                date_range: "March 21 - April 19",
            },
            Sign::Taurus => &ZodiacTraits {
                element: "Earth",
                ruling_planet: "Venus",
                traits: ["reliable", "patient", "practical", "devoted", "stable"],
                date_range: "April 20 - May 20",
            },
            Sign::Gemini => &ZodiacTraits {
                element: "Air",
                ruling_planet: "Mercury",
                traits: ["adaptable", "curious", "communicative", "witty", "versatile"],
                date_range: "May 21 - June 20",
            },
            Sign::Cancer => &ZodiacTraits {
                element: "Water",
                ruling_planet: "Moon",
                traits: ["intuitive", "emotional", "nurturing", "protective", "sensitive"],
                date_range: "June 21 - July 22",
            },
            Sign::Leo => &ZodiacTraits {
                element: "Fire",
                ruling_planet: "Sun",
                traits: ["confident", "generous", "warm-hearted", "creative", "charismatic"],
                date_range: "July 23 - August 22",
            },
            Sign::Virgo => &ZodiacTraits {
                element: "Earth",
                ruling_planet: "Mercury",
                traits: ["analytical", "practical", "meticulous", "reliable", "modest"],
                date_range: "August 23 - September 22",
            },
            Sign::Libra => &ZodiacTraits {
                element: "Air",
                ruling_planet: "Venus",
                traits: ["diplomatic", "fair-minded", "social", "gracious", "cooperative"],
                date_range: "September 23 - October 22",
            },
            Sign::Scorpio => &ZodiacTraits {
                element: "Water",
                ruling_planet: "Pluto",
                traits: ["passionate", "resourceful", "brave", "determined", "intense"],
                date_range: "October 23 - November 21",
            },
            Sign::Sagittarius => &ZodiacTraits {
                element: "Fire",
                ruling_planet: "Jupiter",
                traits: ["optimistic", "adventurous", "philosophical", "freedom-loving", "honest"],
                date_range: "November 22 - December 21",
            },
            Sign::Capricorn => &ZodiacTraits {
                element: "Earth",
                ruling_planet: "Saturn",
                traits: ["disciplined", "responsible", "ambitious", "patient", "practical"],
                date_range: "December 22 - January 19",
            },
            Sign::Aquarius => &ZodiacTraits {
                element: "Air",
                ruling_planet: "Uranus",
                traits: ["progressive", "independent", "humanitarian", "original", "intellectual"],
                date_range: "January 20 - February 18",
            },
            Sign::Pisces => &ZodiacTraits {
                element: "Water",
                ruling_planet: "Neptune",
                traits: ["compassionate", "artistic", "intuitive", "gentle", "wise"],
                date_range: "February 19 - March 20",
            },
        }
    }

    /// Localized display name. Static dictionary lookup; identity for
    /// English. Never fails — a sign missing from a dictionary would
    /// fall back to its English name.
    pub fn localized_name(self, language: Language) -> &'static str {
        match language {
            Language::En => self.name(),
            Language::Hi => match self {
                Sign::Aries => "मेष",
                Sign::Taurus => "वृषभ",
                Sign::Gemini => "मिथुन",
                Sign::Cancer => "कर्क",
                Sign::Leo => "सिंह",
                Sign::Virgo => "कन्या",
                Sign::Libra => "तुला",
                Sign::Scorpio => "वृश्चिक",
                Sign::Sagittarius => "धनु",
                Sign::Capricorn => "मकर",
                Sign::Aquarius => "कुंभ",
                Sign::Pisces => "मीन",
            },
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_day_of_year_maps_to_a_sign() {
        // Leap year so Feb 29 is covered too.
        let mut d = date(2024, 1, 1);
        while d.year() == 2024 {
            // from_date is total; just exercise every day once.
            let sign = Sign::from_date(d);
            assert!(Sign::ALL.contains(&sign), "no sign for {d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_boundary_dates() {
        assert_eq!(Sign::from_date(date(2024, 3, 20)), Sign::Pisces);
        assert_eq!(Sign::from_date(date(2024, 3, 21)), Sign::Aries);
        assert_eq!(Sign::from_date(date(2024, 4, 19)), Sign::Aries);
        assert_eq!(Sign::from_date(date(2024, 4, 20)), Sign::Taurus);
        assert_eq!(Sign::from_date(date(2024, 6, 21)), Sign::Cancer);
        assert_eq!(Sign::from_date(date(2024, 7, 22)), Sign::Cancer);
        assert_eq!(Sign::from_date(date(2024, 7, 23)), Sign::Leo);
        assert_eq!(Sign::from_date(date(2024, 11, 22)), Sign::Sagittarius);
    }

    #[test]
    fn test_capricorn_wraps_year_boundary() {
        assert_eq!(Sign::from_date(date(2024, 12, 21)), Sign::Sagittarius);
        assert_eq!(Sign::from_date(date(2024, 12, 22)), Sign::Capricorn);
        assert_eq!(Sign::from_date(date(2024, 12, 31)), Sign::Capricorn);
        assert_eq!(Sign::from_date(date(2025, 1, 1)), Sign::Capricorn);
        assert_eq!(Sign::from_date(date(2025, 1, 19)), Sign::Capricorn);
        assert_eq!(Sign::from_date(date(2025, 1, 20)), Sign::Aquarius);
    }

    #[test]
    fn test_leap_day_is_pisces() {
        assert_eq!(Sign::from_date(date(2024, 2, 29)), Sign::Pisces);
    }

    #[test]
    fn test_mid_range_dates() {
        assert_eq!(Sign::from_date(date(2024, 7, 10)), Sign::Cancer);
        assert_eq!(Sign::from_date(date(1990, 9, 1)), Sign::Virgo);
        assert_eq!(Sign::from_date(date(2000, 2, 10)), Sign::Aquarius);
    }

    #[test]
    fn test_from_name_round_trips_all_signs() {
        for sign in Sign::ALL {
            assert_eq!(Sign::from_name(sign.name()), Some(sign));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(Sign::from_name("Ophiuchus"), None);
        assert_eq!(Sign::from_name("aries"), None);
        assert_eq!(Sign::from_name(""), None);
    }

    #[test]
    fn test_info_has_five_traits_and_valid_element() {
        let elements = ["Fire", "Earth", "Air", "Water"];
        for sign in Sign::ALL {
            let info = sign.info();
            assert_eq!(info.traits.len(), 5);
            assert!(elements.contains(&info.element));
            assert!(!info.ruling_planet.is_empty());
        }
    }

    #[test]
    fn test_localized_name_hindi() {
        assert_eq!(Sign::Aries.localized_name(Language::Hi), "मेष");
        assert_eq!(Sign::Pisces.localized_name(Language::Hi), "मीन");
    }

    #[test]
    fn test_localized_name_english_is_identity() {
        assert_eq!(Sign::Aries.localized_name(Language::En), "Aries");
    }
}
