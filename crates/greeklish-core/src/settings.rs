//! Expansion defaults and the Greek language list.
//!
//! Values come from `default_settings.toml` unless a replacement file is
//! installed with [`init_custom`] before [`settings`] is first read. Both
//! paths go through [`parse_settings_toml`], so a bad override is rejected
//! up front instead of at first use.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub expansion: ExpansionSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionSettings {
    pub max_variants: usize,
    pub expansion_factor: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub greek_languages: Vec<String>,
}

impl SearchSettings {
    /// Case-insensitive match; `el_GR` and `el-gr` are the same code.
    pub fn is_greek_language(&self, code: &str) -> bool {
        let code = code.trim().to_ascii_lowercase().replace('_', "-");
        self.greek_languages
            .iter()
            .any(|lang| lang.to_ascii_lowercase().replace('_', "-") == code)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(expansion.max_variants);
    check_positive_usize!(expansion.expansion_factor);

    if s.search.greek_languages.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "search.greek_languages".to_string(),
            reason: "must list at least one language code".to_string(),
        });
    }
    if s.search.greek_languages.iter().any(|l| l.trim().is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "search.greek_languages".to_string(),
            reason: "language codes must be non-empty".to_string(),
        });
    }

    Ok(())
}
