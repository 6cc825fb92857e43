//! Greeklish-to-Greek variant generation.
//!
//! Text is lowercased and segmented into digraph, letter and passthrough
//! tokens, then expanded into a bounded list of Greek spellings. The original
//! text always leads the result so a literal match is never lost.

mod expand;


use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::settings::settings;
use crate::table::TransliterationTable;
use crate::tokenizer::tokenize;

/// Generates candidate Greek renderings of Greeklish text.
///
/// Construction only stores the table reference and the branch budget, so a
/// converter can be created per call. It holds no state between calls.
#[derive(Clone, Copy)]
pub struct GreeklishConverter<'t> {
    table: &'t TransliterationTable,
    max_expansions: usize,
}

impl GreeklishConverter<'static> {
    /// Converter over the global transliteration table.
    pub fn new(max_expansions: usize) -> Self {
        Self::with_table(TransliterationTable::global(), max_expansions)
    }
}

impl<'t> GreeklishConverter<'t> {
    pub fn with_table(table: &'t TransliterationTable, max_expansions: usize) -> Self {
        Self {
            table,
            max_expansions,
        }
    }

    /// Total number of branch variants one call may spawn.
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Produce at most `max_variants` unique candidates for `text`, the
    /// original text first.
    ///
    /// Empty input yields `[""]`. A `max_variants` of zero yields an empty
    /// list: the cap applies to the original text as well.
    pub fn convert_to_greek_variants(&self, text: &str, max_variants: usize) -> Vec<String> {
        let _span = debug_span!(
            "convert_to_greek_variants",
            text,
            max_variants,
            max_expansions = self.max_expansions
        )
        .entered();

        if max_variants == 0 {
            return Vec::new();
        }

        let normalized = text.to_lowercase();
        let tokens = tokenize(&normalized, self.table);
        let expansion = expand::expand_tokens(&tokens, max_variants, self.max_expansions);

        let branches = expansion.branches_spawned;
        let mut variants = Vec::with_capacity(expansion.variants.len() + 1);
        variants.push(text.to_string());
        variants.extend(expansion.variants);

        let mut variants = dedup_preserving_order(variants);
        variants.truncate(max_variants);

        debug!(
            tokens = tokens.len(),
            branches,
            variants_out = variants.len()
        );
        variants
    }
}

/// Generate variants with the configured expansion headroom
/// (`max_variants * expansion_factor` branches).
pub fn convert_to_greek_variants(text: &str, max_variants: usize) -> Vec<String> {
    let factor = settings().expansion.expansion_factor;
    GreeklishConverter::new(max_variants.saturating_mul(factor))
        .convert_to_greek_variants(text, max_variants)
}

/// Remove duplicates, keeping the first occurrence of each entry.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
