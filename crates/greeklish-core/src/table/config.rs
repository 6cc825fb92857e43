use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

#[derive(Deserialize)]
struct TableConfig {
    #[serde(default)]
    digraphs: Vec<DigraphConfig>,
    #[serde(default)]
    letters: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct DigraphConfig {
    latin: String,
    greek: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("both [[digraphs]] and [letters] are empty")]
    Empty,
    #[error("digraph must be two lowercase ASCII letters: {0:?}")]
    InvalidDigraphKey(String),
    #[error("letter key must be one lowercase ASCII letter: {0:?}")]
    InvalidLetterKey(String),
    #[error("duplicate digraph: {0}")]
    DuplicateDigraph(String),
    #[error("empty replacement for key: {0}")]
    EmptyReplacement(String),
    #[error("transliteration table already initialized")]
    AlreadyInitialized,
}

/// Validated table contents, digraphs in priority order.
#[derive(Debug)]
pub struct ParsedTable {
    pub digraphs: Vec<([char; 2], Vec<String>)>,
    pub letters: BTreeMap<char, Vec<String>>,
}

/// Parse TOML text into a validated [`ParsedTable`].
pub fn parse_table_toml(toml_str: &str) -> Result<ParsedTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.digraphs.is_empty() && config.letters.is_empty() {
        return Err(TableError::Empty);
    }

    let mut seen = HashSet::new();
    let mut digraphs = Vec::with_capacity(config.digraphs.len());
    for entry in config.digraphs {
        let pattern = match entry.latin.chars().collect::<Vec<_>>()[..] {
            [a, b] if a.is_ascii_lowercase() && b.is_ascii_lowercase() => [a, b],
            _ => return Err(TableError::InvalidDigraphKey(entry.latin)),
        };
        if !seen.insert(pattern) {
            return Err(TableError::DuplicateDigraph(entry.latin));
        }
        check_replacements(&entry.latin, &entry.greek)?;
        digraphs.push((pattern, entry.greek));
    }

    let mut letters = BTreeMap::new();
    for (key, options) in config.letters {
        let letter = match key.chars().collect::<Vec<_>>()[..] {
            [c] if c.is_ascii_lowercase() => c,
            _ => return Err(TableError::InvalidLetterKey(key)),
        };
        check_replacements(&key, &options)?;
        letters.insert(letter, options);
    }

    Ok(ParsedTable { digraphs, letters })
}

fn check_replacements(key: &str, options: &[String]) -> Result<(), TableError> {
    if options.is_empty() || options.iter().any(|o| o.is_empty()) {
        return Err(TableError::EmptyReplacement(key.to_string()));
    }
    Ok(())
}
