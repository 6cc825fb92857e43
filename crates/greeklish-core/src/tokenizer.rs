//! Digraph-aware segmentation of Greeklish text.
//!
//! Digraphs are claimed first, one table entry at a time in table order,
//! each scanning left to right over positions no earlier digraph has taken.
//! The remaining characters become single-letter or passthrough tokens.

use crate::table::TransliterationTable;

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'t> {
    /// A digraph resolved to its primary Greek replacement.
    Digraph { latin: &'t str, greek: &'t str },
    /// A single Latin letter with its Greek options, primary first.
    Letter { latin: char, options: &'t [String] },
    /// Copied verbatim into every variant.
    Passthrough(char),
}

/// Segment `text` into tokens. `text` is expected to be lowercase already;
/// uppercase letters have no table entry and pass through.
pub fn tokenize<'t>(text: &str, table: &'t TransliterationTable) -> Vec<Token<'t>> {
    let chars: Vec<char> = text.chars().collect();
    let mut covered = vec![false; chars.len()];
    let mut starts: Vec<Option<usize>> = vec![None; chars.len()];

    for (idx, digraph) in table.digraphs().iter().enumerate() {
        let [first, second] = digraph.pattern();
        let mut i = 0;
        while i + 1 < chars.len() {
            if !covered[i] && !covered[i + 1] && chars[i] == first && chars[i + 1] == second {
                covered[i] = true;
                covered[i + 1] = true;
                starts[i] = Some(idx);
                i += 2;
            } else {
                i += 1;
            }
        }
    }

    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if let Some(idx) = starts[i] {
            let digraph = &table.digraphs()[idx];
            tokens.push(Token::Digraph {
                latin: digraph.latin(),
                greek: digraph.primary(),
            });
            i += 2;
            continue;
        }
        let c = chars[i];
        match table.letter_options(c) {
            Some(options) => tokens.push(Token::Letter { latin: c, options }),
            None => tokens.push(Token::Passthrough(c)),
        }
        i += 1;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(tokens: &[Token<'_>]) -> String {
        tokens
            .iter()
            .map(|t| match t {
                Token::Digraph { latin, .. } => format!("[{latin}]"),
                Token::Letter { latin, .. } => latin.to_string(),
                Token::Passthrough(c) => format!("<{c}>"),
            })
            .collect()
    }

    #[test]
    fn test_digraph_before_letters() {
        let tokens = tokenize("psomi", TransliterationTable::global());
        assert_eq!(shape(&tokens), "[ps]omi");
        assert_eq!(
            tokens[0],
            Token::Digraph {
                latin: "ps",
                greek: "ψ"
            }
        );
    }

    #[test]
    fn test_passthrough() {
        let tokens = tokenize("test 12!", TransliterationTable::global());
        assert_eq!(shape(&tokens), "test< ><1><2><!>");
    }

    #[test]
    fn test_table_order_wins_over_position() {
        // "ou" is listed before "eu", so in "eou" the later pair is taken.
        let tokens = tokenize("eou", TransliterationTable::global());
        assert_eq!(shape(&tokens), "e[ou]");
    }

    #[test]
    fn test_earlier_digraph_blocks_later_overlap() {
        let tokens = tokenize("thalassa", TransliterationTable::global());
        assert_eq!(shape(&tokens), "[th]alassa");
        // "ps" is listed before "mp" and takes the shared 'p'.
        let tokens = tokenize("mps", TransliterationTable::global());
        assert_eq!(shape(&tokens), "m[ps]");
        let tokens = tokenize("ntz", TransliterationTable::global());
        assert_eq!(shape(&tokens), "[nt]z");
    }

    #[test]
    fn test_repeated_digraph_non_overlapping() {
        let tokens = tokenize("ggg", TransliterationTable::global());
        assert_eq!(shape(&tokens), "[gg]g");
    }

    #[test]
    fn test_uppercase_and_greek_pass_through() {
        let tokens = tokenize("Aα", TransliterationTable::global());
        assert_eq!(tokens, vec![Token::Passthrough('A'), Token::Passthrough('α')]);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("", TransliterationTable::global()).is_empty());
    }
}
