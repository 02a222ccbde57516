use crate::io::{
    print_diagnostics, print_execution_time, print_json, print_verbose_paths, read_input,
    write_report, CommandOutput,
};
use crate::prelude::{println, *};
use std::path::PathBuf;
use std::time::Instant;
use tally_core::convert::{convert, render_report, ConversionSummary};
use tally_core::input::{parse_integer, parse_lines};

#[derive(Debug, clap::Args, Clone)]
pub struct ConvertOptions {
    /// File with one integer per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Name of the report file
    #[arg(long, env = "TALLY_CONVERT_OUTPUT", default_value = "ConversionResults.txt")]
    pub output: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    print_verbose_paths(&global, &options.file, &options.output)?;

    let output = convert_data(&options, &global).await?;

    if options.json {
        print_json(&output)?;
    } else {
        print_diagnostics(&output.diagnostics);
        output_formatted(&output.summary);
        print_execution_time(output.elapsed);
    }

    Ok(())
}

/// Convert every integer in the input file and write the report.
pub async fn convert_data(
    options: &ConvertOptions,
    global: &crate::Global,
) -> Result<CommandOutput<ConversionSummary>> {
    let start = Instant::now();

    let text = read_input(&options.file).await?;
    let parsed = parse_lines(&text, parse_integer);
    let summary = convert(&parsed);

    let elapsed = start.elapsed();
    log::debug!(
        "Converted {} lines ({} invalid) in {:?}",
        summary.rows.len(),
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

fn output_formatted(summary: &ConversionSummary) {
    let mut table = new_table();
    table.set_titles(prettytable::row!["Number", "Binary", "Hex"]);

    for row in &summary.rows {
        table.add_row(prettytable::row![r->row.original, r->row.binary, r->row.hexadecimal]);
    }

    table.printstd();
    println!("Invalid lines: {}", summary.invalid_count);
}
