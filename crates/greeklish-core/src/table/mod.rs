//! Greeklish-to-Greek transliteration tables.
//!
//! The default table is embedded TOML, parsed once into a process-wide
//! read-only singleton. A custom table can be installed before first use.

mod config;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use config::{parse_table_toml, ParsedTable, TableError};

pub const DEFAULT_TOML: &str = include_str!("default_greeklish.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// A Latin digraph and its Greek replacements (primary first).
#[derive(Debug, Clone, PartialEq)]
pub struct Digraph {
    pattern: [char; 2],
    latin: String,
    greek: Vec<String>,
}

impl Digraph {
    pub fn pattern(&self) -> [char; 2] {
        self.pattern
    }

    pub fn latin(&self) -> &str {
        &self.latin
    }

    pub fn primary(&self) -> &str {
        &self.greek[0]
    }

    pub fn replacements(&self) -> &[String] {
        &self.greek
    }
}

pub struct TransliterationTable {
    digraphs: Vec<Digraph>,
    letters: BTreeMap<char, Vec<String>>,
}

impl TransliterationTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static TransliterationTable {
        static INSTANCE: OnceLock<TransliterationTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            // Custom TOML is validated in init_custom, the default in build.rs.
            Self::from_toml(toml_str).expect("transliteration TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self::from_parsed(parse_table_toml(toml_str)?))
    }

    pub fn from_parsed(parsed: ParsedTable) -> Self {
        let digraphs = parsed
            .digraphs
            .into_iter()
            .map(|(pattern, greek)| Digraph {
                pattern,
                latin: pattern.iter().collect(),
                greek,
            })
            .collect();
        Self {
            digraphs,
            letters: parsed.letters,
        }
    }

    /// Digraphs in priority order.
    pub fn digraphs(&self) -> &[Digraph] {
        &self.digraphs
    }

    /// Greek options for a single Latin letter, primary first.
    pub fn letter_options(&self, c: char) -> Option<&[String]> {
        self.letters.get(&c).map(|v| v.as_slice())
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_digraph_priority() {
        let table = TransliterationTable::global();
        let first = &table.digraphs()[0];
        assert_eq!(first.latin(), "th");
        assert_eq!(first.primary(), "θ");
    }

    #[test]
    fn test_ps_before_single_letters() {
        let table = TransliterationTable::global();
        let ps = table
            .digraphs()
            .iter()
            .find(|d| d.pattern() == ['p', 's'])
            .unwrap();
        assert_eq!(ps.primary(), "ψ");
    }

    #[test]
    fn test_letter_primary() {
        let table = TransliterationTable::global();
        assert_eq!(table.letter_options('k').unwrap()[0], "κ");
        assert_eq!(table.letter_options('i').unwrap()[0], "ι");
        assert!(table.letter_options('i').unwrap().len() > 1);
    }

    #[test]
    fn test_unknown_letter() {
        let table = TransliterationTable::global();
        assert!(table.letter_options('1').is_none());
        assert!(table.letter_options('K').is_none());
        assert!(table.letter_options('α').is_none());
    }

    #[test]
    fn test_every_letter_mapped() {
        let table = TransliterationTable::global();
        assert_eq!(table.letter_count(), 26);
        for c in 'a'..='z' {
            assert!(table.letter_options(c).is_some(), "missing {c}");
        }
    }

    #[test]
    fn test_custom_table() {
        let table = TransliterationTable::from_toml(
            "[[digraphs]]\nlatin = \"ou\"\ngreek = [\"ου\", \"ω\"]\n",
        )
        .unwrap();
        assert_eq!(table.digraphs()[0].replacements(), ["ου", "ω"]);
        assert_eq!(table.letter_count(), 0);
    }
}
