//! Starlore core domain library.
//!
//! Pure domain logic shared by the HTTP API and the CLI: the zodiac
//! knowledge base, sign calculation, birth-detail validation, the
//! day-keyed insight cache, and sign-name localization. No I/O and no
//! async — everything here is synchronous and deterministic.

pub mod cache;
pub mod error;
pub mod language;
pub mod schemas;
pub mod zodiac;

pub use cache::InsightCache;
pub use error::CoreError;
pub use language::Language;
pub use schemas::{BirthDetails, InsightResponse, ZodiacInfo};
pub use zodiac::Sign;
