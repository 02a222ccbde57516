use std::time::Duration;

use super::types::StatisticsSummary;
use crate::report::{execution_time_line, format_rounded, format_value};

/// Render the `StatisticsResults.txt` body.
pub fn render_report(summary: &StatisticsSummary, elapsed: Duration) -> String {
    let mut out = execution_time_line(elapsed);

    out.push_str(&format!("Valid numbers: {}\n", summary.valid_count));
    out.push_str(&format!("Invalid lines: {}\n\n", summary.invalid_count));

    out.push_str("Descriptive Statistics\n");
    out.push_str("----------------------\n");
    out.push_str(&format!("Mean: {}\n", format_value(summary.mean)));
    out.push_str(&format!("Median: {}\n", format_value(summary.median)));
    out.push_str(&format!("Mode: {}\n", summary.mode));
    out.push_str(&format!("Variance: {}\n", format_value(summary.variance)));
    out.push_str(&format!(
        "Standard Deviation: {}\n",
        format_value(summary.std_dev)
    ));

    out
}

/// Statistic lines for the console, rounded to two decimals.
pub fn render_console(summary: &StatisticsSummary) -> Vec<String> {
    vec![
        format!("Mean: {}", format_rounded(summary.mean)),
        format!("Median: {}", format_rounded(summary.median)),
        format!("Mode: {}", summary.mode),
        format!("Variance: {}", format_rounded(summary.variance)),
        format!("Standard Deviation: {}", format_rounded(summary.std_dev)),
    ]
}
