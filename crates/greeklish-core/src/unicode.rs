//! Character-level classification for Greek and Greeklish text.

/// Check the fixed Greek letter set: basic lowercase and uppercase letters
/// (including final sigma), tonos forms, diaeresis forms and the two
/// diaeresis+tonos forms (ΐ, ΰ). Greek punctuation and the extended
/// polytonic block are not letters for our purposes.
pub fn is_greek_letter(c: char) -> bool {
    matches!(c,
        '\u{0391}'..='\u{03A1}'   // Α-Ρ
        | '\u{03A3}'..='\u{03A9}' // Σ-Ω
        | '\u{03B1}'..='\u{03C9}' // α-ω, ς
        | '\u{0386}'              // Ά
        | '\u{0388}'..='\u{038A}' // Έ Ή Ί
        | '\u{038C}'              // Ό
        | '\u{038E}'..='\u{0390}' // Ύ Ώ ΐ
        | '\u{03AA}'..='\u{03B0}' // Ϊ Ϋ ά έ ή ί ΰ
        | '\u{03CA}'..='\u{03CE}' // ϊ ϋ ό ύ ώ
    )
}

pub fn contains_greek(s: &str) -> bool {
    s.chars().any(is_greek_letter)
}

/// Latin vowels as used by the Greeklish heuristics. `y` counts as a vowel
/// because it usually stands for υ.
pub fn is_latin_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Consonants that are much more frequent in Greeklish than in English
/// (κ, φ, ξ/χ, ζ).
pub fn is_greek_signal_consonant(c: char) -> bool {
    matches!(c, 'k' | 'f' | 'x' | 'z')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_letters() {
        for c in "αβγδεζηθικλμνξοπρστυφχψως".chars() {
            assert!(is_greek_letter(c), "{c} should be Greek");
        }
        for c in "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ".chars() {
            assert!(is_greek_letter(c), "{c} should be Greek");
        }
        for c in "άέήίόύώϊϋΐΰΆΈΉΊΌΎΏΪΫ".chars() {
            assert!(is_greek_letter(c), "{c} should be Greek");
        }
    }

    #[test]
    fn test_non_greek() {
        for c in "abcxyzéü123 .;·".chars() {
            assert!(!is_greek_letter(c), "{c} should not be Greek");
        }
        // U+03A2 is unassigned, U+0387 is the ano teleia.
        assert!(!is_greek_letter('\u{03A2}'));
        assert!(!is_greek_letter('\u{0387}'));
    }

    #[test]
    fn test_contains_greek() {
        assert!(contains_greek("καλημέρα"));
        assert!(contains_greek("abc δ"));
        assert!(!contains_greek("kalimera"));
        assert!(!contains_greek(""));
    }

    #[test]
    fn test_latin_classes() {
        assert!(is_latin_vowel('y'));
        assert!(!is_latin_vowel('k'));
        assert!(is_greek_signal_consonant('x'));
        assert!(!is_greek_signal_consonant('t'));
    }
}
