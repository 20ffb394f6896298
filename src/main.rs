//! cvescope: CVE lookup and risk triage from the terminal.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use cvescope::cli::{self, exit_codes, SearchConfig};
use cvescope::report::ReportFormat;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cvescope")]
#[command(version)]
#[command(about = "CVE lookup and risk triage from the terminal", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Search completed
    1  Keyword search returned no results
    2  Critical risk assessed (with --fail-on-risk)
    3  Error occurred

EXAMPLES:
    # Look up one CVE and print a risk assessment
    cvescope search CVE-2021-44228

    # Keyword search
    cvescope search apache struts rce

    # JSON output for processing
    cvescope search CVE-2021-44228 -o json > assessment.json

    # CI-style triage gate
    cvescope search CVE-2021-44228 --fail-on-risk")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `search` subcommand
#[derive(Parser)]
struct SearchArgs {
    /// Search term: a CVE id (detail lookup) or keywords (list search)
    #[arg(required = true)]
    term: Vec<String>,

    /// Output format (auto detects TTY: summary if interactive, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Relay prefix for the CVE database fetch (CORS-proxy style; the
    /// target URL is percent-encoded and appended)
    #[arg(long)]
    relay: Option<String>,

    /// Route the search through an aggregation backend at this base URL
    #[arg(long)]
    gateway: Option<String>,

    /// API timeout in seconds (default: 30)
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Exit with code 2 if the assessed risk is CRITICAL or CRITICAL_KEV
    #[arg(long)]
    fail_on_risk: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a CVE or search by keyword
    Search(SearchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Search(args) => {
            let config = SearchConfig {
                term: args.term.join(" "),
                output: args.output,
                output_file: args.output_file,
                no_color: cli.no_color,
                relay: args.relay,
                gateway: args.gateway,
                timeout_secs: args.timeout,
                fail_on_risk: args.fail_on_risk,
            };

            match cli::run_search(config) {
                Ok(exit_code) => {
                    if exit_code != 0 {
                        std::process::exit(exit_code);
                    }
                }
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(exit_codes::ERROR);
                }
            }
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "cvescope", &mut io::stdout());
        }
    }
}
