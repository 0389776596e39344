//! axe-scan - Accessibility scanning of web pages with axe-core.

mod commands;
mod prompt;

use axe_scan_common::AxeScanError;
use axe_scan_scanner::{AxeSource, ChromeOptions, DEFAULT_AXE_SOURCE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "axe-scan")]
#[command(
    author,
    version,
    about = "Scan web pages for accessibility issues and report them against WCAG"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// axe-core script to inject (URL or local file)
    #[arg(long, global = true, default_value = DEFAULT_AXE_SOURCE)]
    axe_source: AxeSource,

    /// Chrome/Chromium executable to use instead of the detected one
    #[arg(long, global = true)]
    browser: Option<PathBuf>,

    /// Launch the browser without its sandbox
    #[arg(long, global = true)]
    no_sandbox: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a configuration file
    Init {
        /// Create the file in the home directory
        #[arg(long, short)]
        global: bool,

        /// Overwrite an existing file without asking
        #[arg(long, short)]
        yes: bool,
    },

    /// Show or change settings
    Config {
        /// Setting to change, as key=value
        #[arg(long, short = 'V', num_args = 0..=1, default_missing_value = "")]
        change_value: Option<String>,

        /// Use the configuration file in the home directory
        #[arg(long, short)]
        global: bool,
    },

    /// Scan the listed pages and report every finding
    Run {
        /// File listing the URLs to scan
        #[arg(long, short = 'F')]
        file: Option<PathBuf>,

        /// CSV of findings to leave out of the report
        #[arg(long, short = 'A', visible_alias = "whitelist")]
        allowlist: Option<PathBuf>,

        /// Print the axe-core results as JSON instead of CSV
        #[arg(long, short = 'R')]
        raw: bool,
    },

    /// Scan the listed pages and summarize them by WCAG success criterion
    Summary {
        /// File listing the URLs to scan
        #[arg(long, short = 'F')]
        file: Option<PathBuf>,

        /// Summarize each page separately
        #[arg(long, short = 'P')]
        page: bool,

        /// CSV of findings to treat as passing
        #[arg(long, short = 'A', visible_alias = "whitelist")]
        allowlist: Option<PathBuf>,
    },
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let browser = commands::BrowserSettings {
        axe_source: cli.axe_source,
        chrome: ChromeOptions {
            executable: cli.browser,
            no_sandbox: cli.no_sandbox,
        },
    };

    match cli.command {
        Commands::Init { global, yes } => commands::init::run(global, yes),
        Commands::Config {
            change_value,
            global,
        } => commands::config::run(change_value.as_deref(), global),
        Commands::Run {
            file,
            allowlist,
            raw,
        } => commands::run::run(&browser, file, allowlist, raw).await,
        Commands::Summary {
            file,
            page,
            allowlist,
        } => commands::summary::run(&browser, file, allowlist, page).await,
    }
}

/// The domain error behind `err`, if it is one.
fn domain_error(err: &anyhow::Error) -> Option<&AxeScanError> {
    err.downcast_ref::<AxeScanError>().or_else(|| {
        err.downcast_ref::<axe_scan_common::Error>()
            .and_then(|e| e.as_domain())
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match domain_error(&e) {
            Some(domain) => {
                eprintln!("{}", domain);
                ExitCode::from(domain.exit_code())
            }
            None => {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}
