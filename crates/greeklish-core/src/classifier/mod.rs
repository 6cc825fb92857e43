//! Heuristic detection of Greeklish text.
//!
//! The rules run in a fixed order and the first positive rule decides.
//! Reordering them changes the outcome for borderline words, so the order
//! below is part of the contract, as are the thresholds.


use tracing::{debug, debug_span};

use crate::unicode::{contains_greek, is_greek_signal_consonant, is_latin_vowel};

/// Digraphs rare enough in English that one occurrence is decisive.
const STRONG_DIGRAPHS: &[&str] = &["ps", "ph", "ou", "ai", "ei", "oi", "mp", "nt", "gk", "gg"];
/// Digraphs that also occur in short English words ("the", "chip").
const WEAK_DIGRAPHS: &[&str] = &["th", "ch"];
const GREEK_SUFFIXES: &[&str] = &[
    "os", "as", "is", "es", "hs", "a", "o", "i", "io", "ia", "sis", "tis",
];

const WEAK_DIGRAPH_MIN_LETTERS: usize = 4;
const LONG_WORD_MIN_LETTERS: usize = 6;
const SIGNAL_VOWEL_RATIO: f64 = 0.35;
const SIGNAL_CONSONANT_MIN: usize = 2;
const SUFFIX_VOWEL_RATIO: f64 = 0.4;
const VOWEL_ENDING_RATIO: f64 = 0.3;
const LONG_WORD_VOWEL_RATIO: f64 = 0.35;
const HIATUS_VOWEL_RATIO: f64 = 0.25;

/// Which rule decided the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Empty,
    AlreadyGreek,
    NoLetters,
    StrongDigraph,
    WeakDigraph,
    VowelRatioWithSignal,
    SignalConsonants,
    GreekSuffix,
    LongWordVowelEnding,
    LongWordVowelRatio,
    LongWordHiatus,
    NoSignal,
}

impl Verdict {
    pub fn is_greeklish(self) -> bool {
        matches!(
            self,
            Verdict::StrongDigraph
                | Verdict::WeakDigraph
                | Verdict::VowelRatioWithSignal
                | Verdict::SignalConsonants
                | Verdict::GreekSuffix
                | Verdict::LongWordVowelEnding
                | Verdict::LongWordVowelRatio
                | Verdict::LongWordHiatus
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Empty => "empty",
            Verdict::AlreadyGreek => "already_greek",
            Verdict::NoLetters => "no_letters",
            Verdict::StrongDigraph => "strong_digraph",
            Verdict::WeakDigraph => "weak_digraph",
            Verdict::VowelRatioWithSignal => "vowel_ratio_with_signal",
            Verdict::SignalConsonants => "signal_consonants",
            Verdict::GreekSuffix => "greek_suffix",
            Verdict::LongWordVowelEnding => "long_word_vowel_ending",
            Verdict::LongWordVowelRatio => "long_word_vowel_ratio",
            Verdict::LongWordHiatus => "long_word_hiatus",
            Verdict::NoSignal => "no_signal",
        }
    }
}

/// Letter statistics of the normalized text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    /// Alphabetic characters of any script.
    pub letters: usize,
    pub vowels: usize,
    pub signal_consonants: usize,
}

impl TextStats {
    fn of(text: &str) -> Self {
        let mut stats = TextStats::default();
        for c in text.chars() {
            if c.is_alphabetic() {
                stats.letters += 1;
            }
            if is_latin_vowel(c) {
                stats.vowels += 1;
            }
            if is_greek_signal_consonant(c) {
                stats.signal_consonants += 1;
            }
        }
        stats
    }

    pub fn vowel_ratio(&self) -> f64 {
        if self.letters == 0 {
            0.0
        } else {
            self.vowels as f64 / self.letters as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub verdict: Verdict,
    pub stats: TextStats,
}

impl Classification {
    pub fn is_greeklish(&self) -> bool {
        self.verdict.is_greeklish()
    }
}

/// Whether `text` looks like Greek written in Latin letters.
pub fn is_greeklish(text: &str) -> bool {
    classify(text).is_greeklish()
}

/// Classify `text` and report the deciding rule.
pub fn classify(text: &str) -> Classification {
    let _span = debug_span!("classify", text).entered();
    let result = run_rules(text);
    debug!(verdict = result.verdict.as_str(), letters = result.stats.letters);
    result
}

fn run_rules(text: &str) -> Classification {
    let done = |verdict, stats| Classification { verdict, stats };

    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return done(Verdict::Empty, TextStats::default());
    }
    if contains_greek(&normalized) {
        return done(Verdict::AlreadyGreek, TextStats::default());
    }

    let stats = TextStats::of(&normalized);
    if stats.letters == 0 {
        return done(Verdict::NoLetters, stats);
    }

    if STRONG_DIGRAPHS.iter().any(|d| normalized.contains(d)) {
        return done(Verdict::StrongDigraph, stats);
    }
    if stats.letters >= WEAK_DIGRAPH_MIN_LETTERS
        && WEAK_DIGRAPHS.iter().any(|d| normalized.contains(d))
    {
        return done(Verdict::WeakDigraph, stats);
    }

    let ratio = stats.vowel_ratio();
    let has_signal = stats.signal_consonants > 0;
    if ratio >= SIGNAL_VOWEL_RATIO && has_signal {
        return done(Verdict::VowelRatioWithSignal, stats);
    }
    if stats.signal_consonants >= SIGNAL_CONSONANT_MIN {
        return done(Verdict::SignalConsonants, stats);
    }

    if GREEK_SUFFIXES.iter().any(|s| normalized.ends_with(s))
        && (has_signal || ratio >= SUFFIX_VOWEL_RATIO)
    {
        return done(Verdict::GreekSuffix, stats);
    }

    if stats.letters >= LONG_WORD_MIN_LETTERS {
        let ends_in_vowel = normalized.chars().last().is_some_and(is_latin_vowel);
        if ends_in_vowel && ratio >= VOWEL_ENDING_RATIO {
            return done(Verdict::LongWordVowelEnding, stats);
        }
        if ratio >= LONG_WORD_VOWEL_RATIO {
            return done(Verdict::LongWordVowelRatio, stats);
        }
        if has_vowel_hiatus(&normalized) && ratio >= HIATUS_VOWEL_RATIO {
            return done(Verdict::LongWordHiatus, stats);
        }
    }

    done(Verdict::NoSignal, stats)
}

/// Two different vowels side by side ("ea", "io").
fn has_vowel_hiatus(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .any(|w| is_latin_vowel(w[0]) && is_latin_vowel(w[1]) && w[0] != w[1])
}
