//! File and console helpers shared by the subcommands.

use crate::prelude::{println, *};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tally_core::input::Diagnostic;
use tally_core::report::format_elapsed;

/// Everything a subcommand produced, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T> {
    pub report_path: PathBuf,
    pub execution_seconds: f64,
    #[serde(skip)]
    pub elapsed: Duration,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: T,
}

impl<T> CommandOutput<T> {
    pub fn new(
        report_path: PathBuf,
        elapsed: Duration,
        diagnostics: Vec<Diagnostic>,
        summary: T,
    ) -> Self {
        Self {
            report_path,
            execution_seconds: elapsed.as_secs_f64(),
            elapsed,
            diagnostics,
            summary,
        }
    }
}

/// Read the whole input file as UTF-8 text.
pub async fn read_input(path: &Path) -> Result<String> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::InputNotFound(path.display().to_string()).into());
        }
        Err(e) => {
            return Err(e).wrap_err_with(|| f!("Failed to read input file '{}'", path.display()))
        }
    };

    if !metadata.is_file() {
        return Err(Error::InputNotAFile(path.display().to_string()).into());
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| f!("Failed to read input file '{}'", path.display()))?;

    log::debug!("Read {} bytes from {}", text.len(), path.display());

    Ok(text)
}

/// Write (or overwrite) `name` inside `dir`, returning the full path.
pub async fn write_report(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(name);

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| Error::ReportWrite {
            path: dir.display().to_string(),
            source,
        })?;

    tokio::fs::write(&path, body)
        .await
        .map_err(|source| Error::ReportWrite {
            path: path.display().to_string(),
            source,
        })?;

    log::info!("Wrote report to {}", path.display());

    Ok(path)
}

/// Print one `[ERROR] Line N: ...` line per rejected line or token.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        println!("{diagnostic}");
    }
}

pub fn print_json<T: Serialize>(output: &CommandOutput<T>) -> Result<()> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
    println!("{json}");
    Ok(())
}

pub fn print_execution_time(elapsed: Duration) {
    println!("Execution took {} seconds", format_elapsed(elapsed));
}

/// Resolved input and report paths, written only with `--verbose`.
pub fn write_verbose_paths<W: std::io::Write>(
    out: &mut W,
    global: &crate::Global,
    input: &Path,
    output: &str,
) -> std::io::Result<()> {
    if global.verbose {
        writeln!(out, "Input file: {}", input.display())?;
        writeln!(
            out,
            "Report file: {}",
            global.output_dir.join(output).display()
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Verbose output goes to stderr so `--json` keeps stdout parseable.
pub fn print_verbose_paths(global: &crate::Global, input: &Path, output: &str) -> Result<()> {
    write_verbose_paths(&mut anstream::stderr(), global, input, output)
        .wrap_err("Failed to write verbose output")
}
