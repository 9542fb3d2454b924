//! Persisted user settings.
//!
//! The only setting is the last interface language, stored as pretty JSON:
//!
//! ```json
//! {
//!   "language": "pt"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::SettingsError;
use crate::i18n::Language;

/// Default settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "config.json";

/// Settings remembered between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Last language code used. Kept as a raw code so an unknown value in the
    /// file degrades to the default instead of failing the whole load.
    #[serde(default)]
    pub language: Option<String>,
}

impl Settings {
    /// Settings selecting `language`.
    pub fn with_language(language: Language) -> Self {
        Self {
            language: Some(language.code().to_string()),
        }
    }

    /// Load settings from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&content)?;
        debug!(language = ?settings.language, "settings loaded");
        Ok(settings)
    }

    /// Load settings, treating a missing or malformed file as "no settings".
    pub fn load_or_default(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return None;
        }
        match Self::load(path) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "ignoring unreadable settings");
                None
            }
        }
    }

    /// Write settings as pretty JSON, replacing any existing file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), data)?;
        info!(language = ?self.language, "settings saved");
        Ok(())
    }

    /// The saved language, if it names a supported one.
    #[must_use]
    pub fn saved_language(&self) -> Option<Language> {
        self.language.as_deref().and_then(Language::from_code)
    }
}

/// Pick the interface language.
///
/// An explicit code wins, falling back to English when unknown. Without one,
/// readable settings decide, again falling back to English when their code is
/// unknown or absent. The system language is only detected when there are no
/// settings at all.
#[instrument(skip(saved, detect))]
pub fn resolve_language<F>(explicit: Option<&str>, saved: Option<&Settings>, detect: F) -> Language
where
    F: FnOnce() -> Option<Language>,
{
    if let Some(code) = explicit {
        return Language::resolve(code);
    }
    match saved {
        Some(settings) => settings.saved_language().unwrap_or_else(|| {
            debug!(language = ?settings.language, "saved language unusable, using default");
            Language::default()
        }),
        None => {
            let detected = detect();
            if let Some(language) = detected {
                info!(%language, "system language detected");
            }
            detected.unwrap_or_default()
        }
    }
}
