use crate::io::{
    print_diagnostics, print_execution_time, print_json, print_verbose_paths, read_input,
    write_report, CommandOutput,
};
use crate::prelude::{println, *};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use tally_core::words::{extract_words, render_report, summarize, WordCountSummary};

#[derive(Debug, clap::Args, Clone)]
pub struct WordsOptions {
    /// Text file to count words in
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Name of the report file
    #[arg(long, env = "TALLY_WORDS_OUTPUT", default_value = "WordCountResults.txt")]
    pub output: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: WordsOptions, global: crate::Global) -> Result<()> {
    print_verbose_paths(&global, &options.file, &options.output)?;

    let output = words_data(&options, &global).await?;

    if options.json {
        print_json(&output)?;
    } else {
        print_diagnostics(&output.diagnostics);
        output_formatted(&output.summary);
        print_execution_time(output.elapsed);
    }

    Ok(())
}

/// Count word frequencies in the input file and write the report.
pub async fn words_data(
    options: &WordsOptions,
    global: &crate::Global,
) -> Result<CommandOutput<WordCountSummary>> {
    let start = Instant::now();

    let text = read_input(&options.file).await?;
    let extracted = extract_words(&text);
    let summary = summarize(&extracted);

    let elapsed = start.elapsed();
    log::debug!(
        "Counted {} words ({} distinct, {} invalid tokens) in {:?}",
        summary.total_words,
        summary.distinct_words,
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
        extracted.diagnostics,
        summary,
    ))
}

fn output_formatted(summary: &WordCountSummary) {
    println!("{}", "Word frequencies:".bright_cyan().bold());

    if summary.frequencies.is_empty() {
        println!("{}", "No words found.".yellow());
    } else {
        let mut table = new_table();
        table.set_titles(prettytable::row!["Word", r->"Count"]);

        for entry in &summary.frequencies {
            table.add_row(prettytable::row![entry.word, r->entry.count]);
        }

        table.printstd();
    }

    println!(
        "Distinct words: {} | Total words: {}",
        summary.distinct_words, summary.total_words
    );
    println!("Invalid tokens: {}", summary.invalid_count);
}
