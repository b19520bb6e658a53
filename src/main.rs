use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tab_recap::{
    detect_default_browser, logging, query_all_browsers, query_tabs, write_report, BrowserKind,
    EnvConfig, OutputFormat, SessionLocations, TabReport,
};

#[derive(Debug, Parser)]
#[command(
    name = "tab-recap",
    version,
    about = "List open tabs of Chromium-based browsers as JSON",
    long_about = "Reads the newest SNSS session snapshot of Chrome, Chromium, Edge, Brave or \
                  Vivaldi and prints the open tabs, in window order, as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<CliCommand>,

    /// Browser to read; `auto` picks the first one with a session directory.
    #[arg(long, short = 'b', value_enum, default_value_t = BrowserChoice::Auto)]
    browser: BrowserChoice,

    /// Session directory or snapshot file to read instead of the default.
    #[arg(long, value_name = "PATH")]
    session_path: Option<PathBuf>,

    /// Read every detected browser and merge the results.
    #[arg(long, conflicts_with_all = ["browser", "session_path"])]
    all_browsers: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Output file (default: stdout).
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Show detected browsers and their session directories.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BrowserChoice {
    Auto,
    Chrome,
    Chromium,
    Edge,
    Brave,
    Vivaldi,
}

impl BrowserChoice {
    fn kind(self) -> Option<BrowserKind> {
        match self {
            Self::Auto => None,
            Self::Chrome => Some(BrowserKind::Chrome),
            Self::Chromium => Some(BrowserKind::Chromium),
            Self::Edge => Some(BrowserKind::Edge),
            Self::Brave => Some(BrowserKind::Brave),
            Self::Vivaldi => Some(BrowserKind::Vivaldi),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = EnvConfig::from_env();
    logging::init(&config);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &EnvConfig) -> Result<()> {
    if let Some(CliCommand::List) = cli.command {
        let locations = SessionLocations::from_config(config)?;
        return list_browsers(&locations);
    }

    let report = if cli.all_browsers {
        let locations = SessionLocations::from_config(config)?;
        TabReport::new("all", query_all_browsers(&locations))
    } else {
        single_browser_report(&cli, config)?
    };

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, cli.format, &report)?;
            writer
                .flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_report(&mut stdout, cli.format, &report)?;
        }
    }

    Ok(())
}

fn single_browser_report(cli: &Cli, config: &EnvConfig) -> Result<TabReport> {
    let explicit_path = cli
        .session_path
        .clone()
        .or_else(|| config.session_path.clone());

    let (kind, session_path) = match (cli.browser.kind(), explicit_path) {
        (Some(kind), Some(path)) => (kind, path),
        // An explicit path with `auto` has no directory to infer the browser from.
        (None, Some(path)) => (BrowserKind::Chrome, path),
        (Some(kind), None) => {
            let locations = SessionLocations::from_config(config)?;
            (kind, locations.session_dir(kind))
        }
        (None, None) => {
            let locations = SessionLocations::from_config(config)?;
            detect_default_browser(&locations)?
        }
    };

    let snapshot = query_tabs(kind, &session_path).with_context(|| {
        format!(
            "failed to read {} tabs from {}",
            kind.label(),
            session_path.display()
        )
    })?;
    Ok(TabReport::new(kind.label(), snapshot.entries))
}

fn list_browsers(locations: &SessionLocations) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for kind in BrowserKind::ALL {
        let dir = locations.session_dir(kind);
        let status = if dir.is_dir() { "found" } else { "missing" };
        writeln!(stdout, "{:<9} {:<8} {}", kind.label(), status, dir.display())?;
    }
    Ok(())
}
