//! Pipeline trace analyzer CLI.
//!
//! Reads a simulator trace from a file or standard input, echoes every
//! non-record line to stdout, and finishes with a CPI/IPC and instruction-mix
//! report. Exits with status 1 and no report when the trace is malformed or
//! never reaches the measured workload.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pipetrace_core::config::{AnalyzerConfig, StartCondition, parse_address};
use pipetrace_core::trace::TraceFormat;
use pipetrace_core::{Report, TraceError, analyze};

#[derive(Parser, Debug)]
#[command(
    name = "pipetrace",
    author,
    version,
    about = "Pipeline trace analyzer: CPI, IPC, bubbles and instruction mix",
    long_about = "Analyze a per-cycle pipeline trace and report CPI, IPC, bubble count and the retired instruction mix.\n\nStatistics are collected from the first retirement at the boot-exit address (0x80000000 by default).\nLines that are not trace records are echoed unchanged.\n\nExamples:\n  pipetrace workload.out\n  pipetrace --microcode ucode.out\n  emulator +verbose 2>&1 | pipetrace --format dasm"
)]
struct Cli {
    /// Trace file to analyze (standard input when omitted or `-`).
    file: Option<PathBuf>,

    /// Parse the microcoded-machine trace layout.
    #[arg(short, long, conflicts_with = "format")]
    microcode: bool,

    /// Trace layout: regfile, microcode or dasm.
    #[arg(short, long)]
    format: Option<TraceFormat>,

    /// Boot-exit address that opens the measurement window (hex).
    #[arg(long, value_parser = parse_address, conflicts_with = "from_start")]
    start_pc: Option<u32>,

    /// Collect from the first record instead of waiting for the boot-exit address.
    #[arg(long)]
    from_start: bool,

    /// JSON configuration file; command-line flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Merges the optional config file with the command-line overrides.
    fn analyzer_config(&self) -> Result<AnalyzerConfig, TraceError> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::default(),
        };
        if self.microcode {
            config.format = TraceFormat::Microcode;
        } else if let Some(format) = self.format {
            config.format = format;
        }
        if self.from_start {
            config.start = Some(StartCondition::Immediate);
        } else if let Some(pc) = self.start_pc {
            config.start = Some(StartCondition::BootExit { pc });
        }
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("pipetrace: {e}");
        process::exit(1);
    }
}

/// Runs one analysis and prints the report; nothing is printed after an error.
fn run(cli: &Cli) -> Result<(), TraceError> {
    let config = cli.analyzer_config()?;
    debug!(?config, "effective configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let reader = BufReader::new(File::open(path)?);
            analyze(&config, reader, &mut out)?
        }
        _ => analyze(&config, io::stdin().lock(), &mut out)?,
    };

    let report = Report::from_stats(&stats)?;
    if cli.json {
        let json = report.to_json().map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
    } else {
        write!(out, "{report}")?;
    }
    out.flush()?;
    Ok(())
}
