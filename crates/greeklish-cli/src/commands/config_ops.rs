use std::fs;
use std::path::Path;

use greeklish_core::settings::{self, parse_settings_toml};
use greeklish_core::table::{self, TransliterationTable};

use crate::CliError;

pub fn table_export() -> &'static str {
    table::default_toml()
}

pub fn table_validate(file: &Path) -> Result<String, CliError> {
    let content = fs::read_to_string(file)?;
    let parsed = table::parse_table_toml(&content)?;
    Ok(format!(
        "OK: {} digraphs, {} letters",
        parsed.digraphs.len(),
        parsed.letters.len()
    ))
}

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

pub fn settings_validate(file: &Path) -> Result<String, CliError> {
    let content = fs::read_to_string(file)?;
    let s = parse_settings_toml(&content)?;
    Ok(format!(
        "OK: expansion.max_variants={}, expansion.expansion_factor={}, search.greek_languages={}",
        s.expansion.max_variants,
        s.expansion.expansion_factor,
        s.search.greek_languages.join(",")
    ))
}

/// Install custom table and settings files before any conversion runs.
pub fn load_custom(table_file: Option<&Path>, settings_file: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = table_file {
        TransliterationTable::init_custom(fs::read_to_string(path)?)?;
    }
    if let Some(path) = settings_file {
        settings::init_custom(fs::read_to_string(path)?)?;
    }
    Ok(())
}
