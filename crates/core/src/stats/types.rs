use serde::Serialize;
use std::fmt;

use crate::report::{format_value, NAN};

/// Most frequent value(s) of a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every value tied at the highest count, sorted ascending.
    Values(Vec<f64>),
    /// No valid values, or every value appears exactly once.
    NoMode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Values(values) => {
                let parts: Vec<String> = values.iter().map(|v| format_value(Some(*v))).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Mode::NoMode => f.write_str(NAN),
        }
    }
}

/// Descriptive statistics over the valid lines of an input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub valid_count: usize,
    pub invalid_count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Mode,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
}
