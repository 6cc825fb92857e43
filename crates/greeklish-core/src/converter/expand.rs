use tracing::debug;

use crate::tokenizer::Token;

/// In-progress variants after walking a token stream.
pub(crate) struct Expansion {
    pub variants: Vec<String>,
    pub branches_spawned: usize,
}

/// Walk `tokens` left to right, growing a list of variants that starts as a
/// single empty string.
///
/// The first ambiguous letter met before anything is emitted seeds one
/// variant per option, up to `max_variants`, without touching the branch
/// budget. Later ambiguous letters extend every existing variant with their
/// primary option and spawn `variant + secondary` branches while the list
/// holds fewer than `max_variants` entries and `max_expansions` branches
/// remain in the budget.
///
/// A `σ` emitted for a letter becomes `ς` when it follows a letter and the
/// next token produces no letter. Passthrough characters are never rewritten.
pub(crate) fn expand_tokens(
    tokens: &[Token<'_>],
    max_variants: usize,
    max_expansions: usize,
) -> Expansion {
    let mut variants = vec![String::new()];
    let mut budget = max_expansions;

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::Digraph { greek, .. } => {
                for v in &mut variants {
                    v.push_str(greek);
                }
            }
            Token::Letter { options, .. } => {
                let ends_word = tokens.get(i + 1).map_or(true, |next| !emits_letter(next));
                if is_unseeded(&variants) {
                    seed(&mut variants, options, max_variants);
                } else {
                    branch(&mut variants, options, max_variants, &mut budget, ends_word);
                }
            }
            Token::Passthrough(c) => {
                for v in &mut variants {
                    v.push(c);
                }
            }
        }
    }

    let branches_spawned = max_expansions - budget;
    debug!(
        variants = variants.len(),
        branches_spawned,
        budget_left = budget
    );
    Expansion {
        variants,
        branches_spawned,
    }
}

fn emits_letter(token: &Token<'_>) -> bool {
    match *token {
        Token::Digraph { .. } | Token::Letter { .. } => true,
        Token::Passthrough(c) => c.is_alphabetic(),
    }
}

fn is_unseeded(variants: &[String]) -> bool {
    matches!(variants, [only] if only.is_empty())
}

fn seed(variants: &mut Vec<String>, options: &[String], max_variants: usize) {
    let take = options.len().min(max_variants.max(1));
    if take == 0 {
        return;
    }
    *variants = options[..take].to_vec();
}

fn branch(
    variants: &mut Vec<String>,
    options: &[String],
    max_variants: usize,
    budget: &mut usize,
    ends_word: bool,
) {
    let Some((primary, secondary)) = options.split_first() else {
        return;
    };
    let existing = variants.len();
    let mut spawned = Vec::new();
    for variant in variants.iter_mut() {
        for option in secondary {
            if existing + spawned.len() >= max_variants || *budget == 0 {
                break;
            }
            let option = sigma_form(option, variant, ends_word);
            let mut alt = String::with_capacity(variant.len() + option.len());
            alt.push_str(variant);
            alt.push_str(option);
            spawned.push(alt);
            *budget -= 1;
        }
        let primary = sigma_form(primary, variant, ends_word);
        variant.push_str(primary);
    }
    variants.extend(spawned);
}

/// `ς` in place of a word-final `σ` that follows a letter.
fn sigma_form<'a>(option: &'a str, variant: &str, ends_word: bool) -> &'a str {
    let follows_letter = variant.chars().last().is_some_and(char::is_alphabetic);
    if option == "σ" && ends_word && follows_letter {
        "ς"
    } else {
        option
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TransliterationTable;
    use crate::tokenizer::tokenize;

    fn run(text: &str, max_variants: usize, max_expansions: usize) -> Expansion {
        let tokens = tokenize(text, TransliterationTable::global());
        expand_tokens(&tokens, max_variants, max_expansions)
    }

    #[test]
    fn test_seed_one_variant_per_option() {
        let e = run("o", 10, 10);
        assert_eq!(e.variants, vec!["ο", "ω"]);
        assert_eq!(e.branches_spawned, 0);
    }

    #[test]
    fn test_seed_ignores_budget_but_not_cap() {
        let e = run("o", 10, 0);
        assert_eq!(e.variants, vec!["ο", "ω"]);
        let e = run("i", 2, 0);
        assert_eq!(e.variants, vec!["ι", "η"]);
    }

    #[test]
    fn test_seed_after_leading_passthrough() {
        // Only an untouched empty seed counts as unseeded.
        let e = run("1o", 10, 0);
        assert_eq!(e.variants, vec!["1ο"]);
    }

    #[test]
    fn test_primary_extends_existing() {
        let e = run("oo", 10, 10);
        // "ο" and "ω" both get the primary, then each branches once.
        assert_eq!(e.variants, vec!["οο", "ωο", "οω", "ωω"]);
    }

    #[test]
    fn test_cap_stops_branching() {
        let e = run("oo", 3, 10);
        assert_eq!(e.variants, vec!["οο", "ωο", "οω"]);
    }

    #[test]
    fn test_budget_stops_branching() {
        let e = run("ooo", 100, 1);
        assert_eq!(e.variants, vec!["οοο", "ωοο", "οωο"]);
        assert_eq!(e.branches_spawned, 1);
    }

    #[test]
    fn test_zero_budget_is_primary_only() {
        let e = run("kalimera", 10, 0);
        assert_eq!(e.variants, vec!["καλιμερα"]);
    }

    #[test]
    fn test_digraph_and_passthrough() {
        let e = run("th-1", 10, 10);
        assert_eq!(e.variants, vec!["θ-1"]);
    }

    #[test]
    fn test_word_final_sigma_from_letter() {
        assert_eq!(run("logos", 1, 0).variants, vec!["λογος"]);
        assert_eq!(run("os os", 1, 0).variants, vec!["ος ος"]);
        assert_eq!(run("ss", 1, 0).variants, vec!["σς"]);
        assert_eq!(run("s", 1, 0).variants, vec!["σ"]);
        assert_eq!(run("oss1", 1, 0).variants, vec!["οσς1"]);
    }

    #[test]
    fn test_passthrough_sigma_is_literal() {
        assert_eq!(run("ασ", 5, 5).variants, vec!["ασ"]);
        assert_eq!(run("kalοσ", 5, 5).variants, vec!["καλοσ"]);
        // A literal Greek letter after `s` keeps it medial.
        assert_eq!(run("osα", 1, 0).variants, vec!["οσα"]);
    }

    #[test]
    fn test_empty_tokens() {
        let e = run("", 5, 5);
        assert_eq!(e.variants, vec![""]);
    }
}
