pub mod compute;
pub mod report;
pub mod types;

pub use compute::{
    compute_mean, compute_median, compute_mode, compute_standard_deviation, compute_variance,
    newton_sqrt, summarize,
};
pub use report::{render_console, render_report};
pub use types::{Mode, StatisticsSummary};
