//! Word extraction and frequency counting

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::input::{split_lines, Diagnostic, LineError};
use crate::report::execution_time_line;

/// Words accepted from an input text, plus the rejected tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedWords {
    /// Lowercased words in input order.
    pub words: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractedWords {
    pub fn invalid_count(&self) -> usize {
        self.diagnostics.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Word counts for a whole input file, ordered by word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCountSummary {
    pub frequencies: Vec<WordFrequency>,
    pub distinct_words: usize,
    pub total_words: usize,
    pub invalid_count: usize,
}

/// A token is a word when it is non-empty and purely alphabetic.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Split `text` on whitespace and keep the alphabetic tokens, lowercased.
///
/// Blank lines are skipped without a diagnostic.
pub fn extract_words(text: &str) -> ExtractedWords {
    let mut extracted = ExtractedWords::default();

    for (idx, line) in split_lines(text).into_iter().enumerate() {
        for token in line.split_whitespace() {
            if is_word(token) {
                extracted.words.push(token.to_lowercase());
            } else {
                extracted.diagnostics.push(Diagnostic {
                    line: idx + 1,
                    error: LineError::InvalidToken {
                        token: token.to_string(),
                    },
                });
            }
        }
    }

    extracted
}

/// Count how often each word occurs.
pub fn count_word_frequencies<S: AsRef<str>>(words: &[S]) -> BTreeMap<String, usize> {
    let mut freqs = BTreeMap::new();
    for word in words {
        *freqs.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    freqs
}

pub fn summarize(extracted: &ExtractedWords) -> WordCountSummary {
    let freqs = count_word_frequencies(&extracted.words);

    WordCountSummary {
        distinct_words: freqs.len(),
        total_words: extracted.words.len(),
        invalid_count: extracted.invalid_count(),
        frequencies: freqs
            .into_iter()
            .map(|(word, count)| WordFrequency { word, count })
            .collect(),
    }
}

/// Render the `WordCountResults.txt` body.
pub fn render_report(summary: &WordCountSummary, elapsed: Duration) -> String {
    let mut out = execution_time_line(elapsed);
    out.push_str(&format!("Invalid tokens: {}\n\n", summary.invalid_count));

    out.push_str(&format!("{:<20}  {:>10}\n", "Word", "Count"));
    out.push_str(&format!("{}  {}\n", "-".repeat(20), "-".repeat(10)));

    for entry in &summary.frequencies {
        out.push_str(&format!("{:<20}  {:>10}\n", entry.word, entry.count));
    }

    out
}
