use crate::io::{
    print_diagnostics, print_execution_time, print_json, print_verbose_paths, read_input,
    write_report, CommandOutput,
};
use crate::prelude::{println, *};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use tally_core::input::{parse_float, parse_lines};
use tally_core::stats::{render_console, render_report, summarize, StatisticsSummary};

#[derive(Debug, clap::Args, Clone)]
pub struct StatsOptions {
    /// File with one number per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Name of the report file
    #[arg(long, env = "TALLY_STATS_OUTPUT", default_value = "StatisticsResults.txt")]
    pub output: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: StatsOptions, global: crate::Global) -> Result<()> {
    print_verbose_paths(&global, &options.file, &options.output)?;

    let output = stats_data(&options, &global).await?;

    if options.json {
        print_json(&output)?;
    } else {
        print_diagnostics(&output.diagnostics);
        output_formatted(&output.summary);
        print_execution_time(output.elapsed);
    }

    Ok(())
}

/// Compute statistics for the input file and write the report.
pub async fn stats_data(
    options: &StatsOptions,
    global: &crate::Global,
) -> Result<CommandOutput<StatisticsSummary>> {
    let start = Instant::now();

    let text = read_input(&options.file).await?;
    let parsed = parse_lines(&text, parse_float);
    let summary = summarize(&parsed);

    let elapsed = start.elapsed();
    log::debug!(
        "Parsed {} lines ({} invalid) in {:?}",
        parsed.entries.len(),
        summary.invalid_count,
        elapsed
    );

    let report_path = write_report(
        &global.output_dir,
        &options.output,
        &render_report(&summary, elapsed),
    )
    .await?;

    Ok(CommandOutput::new(
        report_path,
        elapsed,
        parsed.diagnostics,
        summary,
    ))
}

fn output_formatted(summary: &StatisticsSummary) {
    println!("Valid numbers: {}", summary.valid_count);
    println!("Invalid lines: {}", summary.invalid_count);
    println!("{}", "Descriptive Statistics".bright_cyan().bold());
    println!("{}", "-".repeat(22).bright_cyan());
    for line in render_console(summary) {
        println!("{line}");
    }
}
