//! Integer conversion to binary and hexadecimal
//!
//! Conversion is by repeated division. Negative numbers are rendered as a
//! `-` sign followed by the digits of the magnitude, never as two's complement.

use serde::Serialize;
use std::time::Duration;

use crate::input::ParsedLines;
use crate::report::{execution_time_line, NAN};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// One line of the conversion table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRow {
    pub original: String,
    pub binary: String,
    pub hexadecimal: String,
}

/// Conversion results for a whole input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub rows: Vec<ConversionRow>,
    pub invalid_count: usize,
}

/// Render `n` in the given radix (2..=16) with lowercase digits.
pub fn to_radix(n: i64, radix: u32) -> String {
    debug_assert!((2..=16).contains(&radix), "unsupported radix {radix}");

    if n == 0 {
        return "0".to_string();
    }

    let radix = u64::from(radix);
    let mut magnitude = n.unsigned_abs();
    let mut digits = Vec::new();

    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % radix) as usize] as char);
        magnitude /= radix;
    }

    if n < 0 {
        digits.push('-');
    }

    digits.iter().rev().collect()
}

fn convert_all(entries: &[Option<i64>], radix: u32) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            Some(n) => to_radix(*n, radix),
            None => NAN.to_string(),
        })
        .collect()
}

/// Binary form of every entry, `nan` for placeholders.
pub fn numbers_to_binary(entries: &[Option<i64>]) -> Vec<String> {
    convert_all(entries, 2)
}

/// Hexadecimal form of every entry, `nan` for placeholders.
pub fn numbers_to_hexadecimal(entries: &[Option<i64>]) -> Vec<String> {
    convert_all(entries, 16)
}

/// Build the conversion table for a parsed input file.
pub fn convert(parsed: &ParsedLines<i64>) -> ConversionSummary {
    let binaries = numbers_to_binary(&parsed.entries);
    let hexes = numbers_to_hexadecimal(&parsed.entries);

    let rows = parsed
        .entries
        .iter()
        .zip(binaries)
        .zip(hexes)
        .map(|((entry, binary), hexadecimal)| ConversionRow {
            original: entry.map_or_else(|| NAN.to_string(), |n| n.to_string()),
            binary,
            hexadecimal,
        })
        .collect();

    ConversionSummary {
        rows,
        invalid_count: parsed.invalid_count(),
    }
}

/// Render the `ConversionResults.txt` body.
pub fn render_report(summary: &ConversionSummary, elapsed: Duration) -> String {
    let mut out = execution_time_line(elapsed);
    out.push_str(&format!("Invalid lines: {}\n\n", summary.invalid_count));

    out.push_str(&format!("{:>8}  {:>12}  {:>8}\n", "Number", "Binary", "Hex"));
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(8),
        "-".repeat(12),
        "-".repeat(8)
    ));

    for row in &summary.rows {
        out.push_str(&format!(
            "{:>8}  {:>12}  {:>8}\n",
            row.original, row.binary, row.hexadecimal
        ));
    }

    out
}
