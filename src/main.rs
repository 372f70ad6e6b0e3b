// SPDX-License-Identifier: PMPL-1.0-or-later
//! AccessScan CLI - static HTML accessibility auditor

use accessscan::config::{default_config_path, load_config, write_default_config, Config};
use accessscan::report::{generate_report, OutputFormat};
use accessscan::scanner;
use accessscan::ScanResult;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Static HTML accessibility auditor (WCAG / RGAA)
#[derive(Parser)]
#[command(name = "accessscan")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and analyze it
    Scan {
        /// Page URL (https:// is assumed when no scheme is given)
        url: String,

        #[command(flatten)]
        common: CommonArgs,

        /// Fetch deadline in seconds (overrides the config file)
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Analyze a local HTML file
    Analyze {
        /// HTML file to analyze
        file: PathBuf,

        /// URL label to report (defaults to the file path)
        #[arg(long)]
        url: Option<String>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Output format (overrides the config file)
    #[arg(long)]
    format: Option<FormatArg>,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Scan result JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("accessscan=debug")
    } else {
        EnvFilter::new("accessscan=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { url, common, timeout } => {
            init_logging(common.verbose);
            let mut config = load(&common)?;
            if let Some(secs) = timeout {
                config.fetch.timeout_secs = secs.max(1);
            }
            let result = scanner::scan_url(&url, &config)?;
            finish(&result, &common, &config)?;
        }

        Commands::Analyze { file, url, common } => {
            init_logging(common.verbose);
            let config = load(&common)?;
            let result = scanner::scan_file(&file, url.as_deref())?;
            finish(&result, &common, &config)?;
        }

        Commands::InitConfig { path } => {
            init_logging(false);
            let path = path.unwrap_or_else(default_config_path);
            write_default_config(&path)?;
            eprintln!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

fn load(common: &CommonArgs) -> anyhow::Result<Config> {
    let path = common.config.clone().unwrap_or_else(default_config_path);
    Ok(load_config(&path)?)
}

/// Render, write, and exit non-zero when critical issues were found
fn finish(result: &ScanResult, common: &CommonArgs, config: &Config) -> anyhow::Result<()> {
    let format = common.format.map(OutputFormat::from).unwrap_or(config.report.format);
    let report = generate_report(result, format);
    write_output(&report, common.output.as_deref())?;

    if result.has_critical() {
        std::process::exit(1);
    }
    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
