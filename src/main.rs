mod report;

use std::io::{self, IsTerminal};
use timecorpus::{load_test_corpus, load_timeparse_corpus};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TIMECORPUS_LOG";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(config: &CliConfig) -> Result<(), timecorpus::CorpusError> {
    if let Some(path) = &config.corpus {
        let entries = load_timeparse_corpus(path)?;
        report::print_timeparse_corpus(path, &entries, config.color);
    }
    if let Some(path) = &config.tests {
        let cases = load_test_corpus(path)?;
        report::print_test_corpus(path, &cases, config.color);
    }
    Ok(())
}

struct CliConfig {
    corpus: Option<String>,
    tests: Option<String>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut corpus: Option<String> = None;
    let mut tests: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("timecorpus {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--corpus" => {
                let value = args.next().ok_or_else(|| "error: --corpus expects a value".to_string())?;
                set_once(&mut corpus, value, "--corpus")?;
            }
            "--tests" => {
                let value = args.next().ok_or_else(|| "error: --tests expects a value".to_string())?;
                set_once(&mut tests, value, "--tests")?;
            }
            _ if arg.starts_with("--corpus=") => {
                set_once(&mut corpus, arg.trim_start_matches("--corpus=").to_string(), "--corpus")?;
            }
            _ if arg.starts_with("--tests=") => {
                set_once(&mut tests, arg.trim_start_matches("--tests=").to_string(), "--tests")?;
            }
            _ => return Err(format!("error: unknown argument '{arg}'")),
        }
    }

    if corpus.is_none() && tests.is_none() {
        return Err(format!("error: nothing to inspect\n\n{}", help_text()));
    }

    Ok(CliConfig { corpus, tests, color })
}

fn set_once(slot: &mut Option<String>, value: String, flag: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("error: {flag} provided multiple times"));
    }
    *slot = Some(value);
    Ok(())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "timecorpus {version}

Inspect time-parse corpora used for training and regression runs.

Usage:
  timecorpus [OPTIONS] --corpus <file.json>
  timecorpus [OPTIONS] --tests <file.json>

Options:
  --corpus <file>            Time-parse corpus: [{{text, ref_time, gold_parse}}, ...]
  --tests <file>             Regression corpus: [[target, ref_time, [sentence, ...]], ...]
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}              Log filter (default: info).

Exit codes:
  0  Success.
  1  Corpus could not be loaded.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV
    )
}
