//! Value formatting shared by the report renderers.

use std::time::Duration;

/// Placeholder printed for missing values and rejected lines.
pub const NAN: &str = "nan";

/// Format an elapsed time as seconds with microsecond precision.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

/// Header line every report file starts with.
pub fn execution_time_line(elapsed: Duration) -> String {
    format!("Execution time: {} seconds\n", format_elapsed(elapsed))
}

/// Exponents outside `[-4, 16)` switch to scientific notation.
const MIN_POSITIONAL_EXP: i32 = -4;
const MAX_POSITIONAL_EXP: i32 = 16;

/// Full-precision value in shortest round-trip form.
///
/// Positional values always carry a decimal point (`2.0`, `0.0001`). Very
/// large or small magnitudes use a signed exponent of at least two digits
/// (`1e+16`, `1.5e-05`).
pub fn format_value(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if !v.is_nan() => v,
        _ => return NAN.to_string(),
    };

    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-5`.
    let scientific = format!("{:e}", v);
    let (mantissa, exp) = match scientific.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (MIN_POSITIONAL_EXP..MAX_POSITIONAL_EXP).contains(&exp) {
        let positional = v.to_string();
        if positional.contains('.') {
            positional
        } else {
            format!("{positional}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

/// Value rounded to two decimals, for console summaries.
pub fn format_rounded(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{:.2}", v),
        _ => NAN.to_string(),
    }
}
