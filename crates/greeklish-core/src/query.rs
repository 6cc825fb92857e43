//! Search-query expansion: classify, then expand Greeklish into an OR-able
//! list of spellings joined by spaces.

use std::borrow::Cow;

use tracing::{debug, debug_span};

use crate::classifier::is_greeklish;
use crate::converter::GreeklishConverter;
use crate::settings::settings;

pub const DEFAULT_MAX_VARIANTS: usize = 3;

/// Branch headroom given to the generator before truncation.
const EXPANSION_HEADROOM: usize = 2;

/// Expand `query` into space-joined variants if it looks like Greeklish,
/// otherwise return it unchanged.
pub fn expand_greeklish_query(query: &str, max_variants: usize) -> String {
    expand_with(query, max_variants, EXPANSION_HEADROOM)
}

/// [`expand_greeklish_query`] with the configured default variant count.
pub fn expand_greeklish_query_default(query: &str) -> String {
    let expansion = &settings().expansion;
    expand_with(query, expansion.max_variants, expansion.expansion_factor)
}

fn expand_with(query: &str, max_variants: usize, factor: usize) -> String {
    let _span = debug_span!("expand_greeklish_query", query, max_variants).entered();
    if !is_greeklish(query) {
        return query.to_string();
    }
    let variants = GreeklishConverter::new(max_variants.saturating_mul(factor))
        .convert_to_greek_variants(query, max_variants);
    debug!(variants = variants.len());
    variants.join(" ")
}

/// Whether `code` is one of the configured Greek language codes.
pub fn is_greek_language(code: &str) -> bool {
    settings().search.is_greek_language(code)
}

/// Pre-process a search query for `language`. Only Greek-language queries
/// are expanded; everything else is borrowed back untouched.
pub fn prepare_search_query<'a>(query: &'a str, language: &str) -> Cow<'a, str> {
    if !is_greek_language(language) {
        return Cow::Borrowed(query);
    }
    let expanded = expand_greeklish_query_default(query);
    if expanded == query {
        Cow::Borrowed(query)
    } else {
        Cow::Owned(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_when_not_greeklish() {
        for q in ["dog", "καλημέρα", "", "   "] {
            assert_eq!(expand_greeklish_query(q, 5), q);
        }
    }

    #[test]
    fn test_krifa() {
        let expanded = expand_greeklish_query("krifa", 5);
        let tokens: Vec<&str> = expanded.split(' ').collect();
        assert!(tokens.contains(&"krifa"));
        assert!(tokens.iter().any(|t| t.contains('κ')));
        assert!(tokens.len() <= 5);
    }

    #[test]
    fn test_thalassa() {
        let expanded = expand_greeklish_query("thalassa", 3);
        assert!(expanded.split(' ').any(|t| t.contains('θ')));
    }

    #[test]
    fn test_default_count() {
        assert_eq!(
            expand_greeklish_query_default("kalimera"),
            expand_greeklish_query("kalimera", DEFAULT_MAX_VARIANTS)
        );
        assert_eq!(
            expand_greeklish_query_default("kalimera"),
            "kalimera καλιμερα καλημερα"
        );
    }

    #[test]
    fn test_language_gate() {
        assert!(is_greek_language("el"));
        assert!(is_greek_language("el_GR"));
        assert!(!is_greek_language("en"));

        assert!(matches!(
            prepare_search_query("kalimera", "en"),
            Cow::Borrowed("kalimera")
        ));
        assert!(matches!(
            prepare_search_query("dog", "el"),
            Cow::Borrowed("dog")
        ));
        let prepared = prepare_search_query("kalimera", "el");
        assert!(matches!(prepared, Cow::Owned(_)));
        assert!(prepared.starts_with("kalimera "));
    }
}
