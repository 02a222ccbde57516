use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod convert;
mod error;
mod io;
mod prelude;
mod stats;
mod words;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Descriptive statistics, base conversion and word counts for text files"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Directory the report file is written to
    #[clap(long, env = "TALLY_OUTPUT_DIR", global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Whether to display additional information.
    #[clap(long, env = "TALLY_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Mean, median, mode, variance and standard deviation of a file of numbers
    Stats(crate::stats::StatsOptions),

    /// Convert a file of integers to binary and hexadecimal
    Convert(crate::convert::ConvertOptions),

    /// Count distinct words and their frequency in a file
    Words(crate::words::WordsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Stats(options) => crate::stats::run(options, app.global).await,
        SubCommands::Convert(options) => crate::convert::run(options, app.global).await,
        SubCommands::Words(options) => crate::words::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> App {
        App::try_parse_from(args).unwrap()
    }

    fn report_name(app: &App) -> &str {
        match &app.command {
            SubCommands::Stats(options) => &options.output,
            SubCommands::Convert(options) => &options.output,
            SubCommands::Words(options) => &options.output,
        }
    }

    // Defaults and env overrides share one test since env vars are process-wide.
    #[test]
    fn test_defaults_and_env_overrides() {
        for var in [
            "TALLY_OUTPUT_DIR",
            "TALLY_VERBOSE",
            "TALLY_STATS_OUTPUT",
            "TALLY_CONVERT_OUTPUT",
            "TALLY_WORDS_OUTPUT",
        ] {
            std::env::remove_var(var);
        }

        let app = parse(&["tally", "stats", "nums.txt"]);
        assert_eq!(report_name(&app), "StatisticsResults.txt");
        assert_eq!(app.global.output_dir, PathBuf::from("."));
        assert!(!app.global.verbose);

        let app = parse(&["tally", "convert", "nums.txt"]);
        assert_eq!(report_name(&app), "ConversionResults.txt");

        let app = parse(&["tally", "words", "text.txt"]);
        assert_eq!(report_name(&app), "WordCountResults.txt");

        std::env::set_var("TALLY_OUTPUT_DIR", "from-env");
        std::env::set_var("TALLY_VERBOSE", "true");
        std::env::set_var("TALLY_WORDS_OUTPUT", "Words.txt");

        let app = parse(&["tally", "words", "text.txt"]);
        assert_eq!(report_name(&app), "Words.txt");
        assert_eq!(app.global.output_dir, PathBuf::from("from-env"));
        assert!(app.global.verbose);

        // Flags win over the environment.
        let app = parse(&["tally", "words", "text.txt", "--output", "Cli.txt"]);
        assert_eq!(report_name(&app), "Cli.txt");

        for var in ["TALLY_OUTPUT_DIR", "TALLY_VERBOSE", "TALLY_WORDS_OUTPUT"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = parse(&[
            "tally",
            "stats",
            "nums.txt",
            "--output-dir",
            "out",
            "--verbose",
        ]);

        assert_eq!(app.global.output_dir, PathBuf::from("out"));
        assert!(app.global.verbose);
        match app.command {
            SubCommands::Stats(options) => {
                assert_eq!(options.file, PathBuf::from("nums.txt"));
                assert!(!options.json);
            }
            other => panic!("expected stats, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let app = parse(&["tally", "--output-dir", "out", "convert", "nums.txt", "--json"]);

        assert_eq!(app.global.output_dir, PathBuf::from("out"));
        match app.command {
            SubCommands::Convert(options) => assert!(options.json),
            other => panic!("expected convert, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_argument_is_rejected() {
        assert!(App::try_parse_from(["tally", "words"]).is_err());
        assert!(App::try_parse_from(["tally"]).is_err());
    }
}
