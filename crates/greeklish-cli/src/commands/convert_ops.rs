use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use greeklish_core::settings::settings;
use greeklish_core::{classify, expand_greeklish_query, is_greek_language, GreeklishConverter};

use crate::CliError;

/// Classification report for one text.
#[derive(Debug, Serialize)]
struct ClassifyReport<'a> {
    text: &'a str,
    greeklish: bool,
    verdict: &'static str,
    letters: usize,
    vowels: usize,
    signal_consonants: usize,
    vowel_ratio: f64,
}

pub fn classify_report(text: &str, json: bool) -> Result<String, CliError> {
    let c = classify(text);
    let report = ClassifyReport {
        text,
        greeklish: c.is_greeklish(),
        verdict: c.verdict.as_str(),
        letters: c.stats.letters,
        vowels: c.stats.vowels,
        signal_consonants: c.stats.signal_consonants,
        vowel_ratio: c.stats.vowel_ratio(),
    };
    if json {
        return Ok(serde_json::to_string(&report)?);
    }
    Ok(format!(
        "{}: {} ({}), letters={} vowels={} signal={} ratio={:.2}",
        report.text,
        if report.greeklish { "greeklish" } else { "not greeklish" },
        report.verdict,
        report.letters,
        report.vowels,
        report.signal_consonants,
        report.vowel_ratio,
    ))
}

/// Numbered variant list, one per line. Without `expansions` the branch
/// budget is `n` times the configured expansion factor.
pub fn variants_report(text: &str, n: usize, expansions: Option<usize>) -> String {
    let budget =
        expansions.unwrap_or_else(|| n.saturating_mul(settings().expansion.expansion_factor));
    let converter = GreeklishConverter::new(budget);
    converter
        .convert_to_greek_variants(text, n)
        .iter()
        .enumerate()
        .map(|(i, v)| format!("#{:>2}: {}", i + 1, v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Expanded query; with `lang` the language gate decides whether to expand.
pub fn expand_report(query: &str, n: usize, lang: Option<&str>) -> String {
    match lang {
        Some(lang) if !is_greek_language(lang) => query.to_string(),
        _ => expand_greeklish_query(query, n),
    }
}

/// A single batch entry (one per input line).
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchEntry {
    pub query: String,
    pub greeklish: bool,
    pub expanded: String,
}

/// Expand every non-empty line of `input_file` and write JSONL to
/// `output_file`. Returns the number of entries written.
pub fn batch(input_file: &Path, output_file: &Path, n: usize) -> Result<usize, CliError> {
    let reader = BufReader::new(fs::File::open(input_file)?);
    let mut writer = BufWriter::new(fs::File::create(output_file)?);
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let entry = BatchEntry {
            query: query.to_string(),
            greeklish: classify(query).is_greeklish(),
            expanded: expand_greeklish_query(query, n),
        };
        serde_json::to_writer(&mut writer, &entry)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
