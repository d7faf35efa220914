use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use patmatch::{results::SearchReport, search, Algorithm, SearchConfig, SearchError};
use std::io::{self, Write};
use std::{num::NonZeroUsize, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, SearchError>;

/// Finds the first occurrence of PATTERN in TEXT with brute force, KMP,
/// Boyer-Moore and Rabin-Karp, and prints each result aligned under the text
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pattern to search for (defaults to "THEM" unless TEXT is also given)
    ///
    /// Values starting with '-' are taken literally unless they only consist of
    /// known short flags; put `--` before such a pattern, e.g. `-- -s text`.
    #[arg(allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Text to search in (defaults to "THETHEYTHYTHEMEM" unless PATTERN is also given)
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,

    /// Run a single algorithm (brute-force|kmp|boyer-moore|rabin-karp)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Show how much work each algorithm did
    #[arg(short, long)]
    stats: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    run()
}

/// Parses arguments, falling back to defaults on anything malformed
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            _ => {
                let reason = e.to_string();
                let reason = reason.lines().next().unwrap_or_default();
                eprintln!("{} {} (using defaults)", "warning:".yellow(), reason);
                Cli::default()
            }
        },
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// An explicit `--config` must load; the default locations only warn
fn load_config(cli: &Cli) -> Result<SearchConfig> {
    match cli.config.as_deref() {
        Some(path) => Ok(SearchConfig::load_from(Some(path))?),
        None => Ok(SearchConfig::load().unwrap_or_else(|e| {
            eprintln!(
                "{} ignoring config: {} (using defaults)",
                "warning:".yellow(),
                e
            );
            SearchConfig::default()
        })),
    }
}

fn run() -> Result<()> {
    let cli = parse_args();

    let file_config = load_config(&cli)?;

    // Pattern and text only override the defaults together
    let pair = match (cli.pattern, cli.text) {
        (Some(pattern), Some(text)) => Some((pattern, text)),
        _ => None,
    };

    let algorithm = cli
        .algorithm
        .as_deref()
        .and_then(|name| match name.parse::<Algorithm>() {
            Ok(algorithm) => Some(algorithm),
            Err(e) => {
                eprintln!("{} {} (running all algorithms)", "warning:".yellow(), e);
                None
            }
        });

    let config = file_config.merge_with_cli(pair, algorithm, cli.threads, cli.log_level);
    init_logging(&config.log_level);
    debug!("Using config: {:?}", config);

    let report = search(&config)?;
    let mut out = io::stdout().lock();
    if cli.json {
        writeln!(out, "{}", report.to_json_pretty()?)?;
    } else {
        print_report(&mut out, &report, cli.stats)?;
    }
    out.flush()?;
    Ok(())
}

fn print_report(out: &mut impl Write, report: &SearchReport, show_stats: bool) -> Result<()> {
    let labelled = report.outcomes.len() > 1;

    for (i, outcome) in report.outcomes.iter().enumerate() {
        if labelled {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", outcome.algorithm.name().blue())?;
        }

        write!(out, "{}", report.render(outcome))?;

        if show_stats {
            let stats = &outcome.stats;
            writeln!(
                out,
                "{} {} comparisons, {} alignments, {} hash matches ({} spurious)",
                "stats:".green(),
                stats.comparisons,
                stats.alignments,
                stats.hash_matches,
                stats.spurious_hits
            )?;
        }
    }

    if !report.outcomes.is_empty() && report.agreed_index().is_none() {
        eprintln!(
            "{} algorithms disagree on the first occurrence",
            "warning:".red()
        );
    }
    Ok(())
}
