//! Interface languages, their string tables and locale detection.

pub mod language;
pub mod messages;

pub use language::{detect_from, detect_system_language, parse_locale, Language, LOCALE_ENV_VARS};
pub use messages::Messages;
