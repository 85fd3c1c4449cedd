//! assetstage CLI - bundled asset materializer
//!
//! Usage: assetstage <COMMAND>
//!
//! Commands:
//!   run       Materialize assets, then optionally launch a program
//!   verify    Compare materialized files against the source
//!   manifest  Print the resolved asset manifest

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use assetstage::config::{Config, ConfigWarning, EnvWarning};
use assetstage::domain::entities::VerifyStatus;
use assetstage::domain::ports::{FanoutEventSink, MaterializeEventSink};
use assetstage::infrastructure::{DirSource, JsonEventSink, LogEventSink};
use assetstage::{Launcher, MaterializeUseCase, VerifyUseCase};

/// assetstage - copy bundled assets to a writable directory before startup
#[derive(Parser, Debug)]
#[command(name = "assetstage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./assetstage.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output NDJSON events and JSON results
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Locations {
    /// Directory holding the bundled assets
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Writable directory receiving the assets
    #[arg(short, long)]
    target: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Materialize assets, then optionally launch a program with the target directory
    Run {
        #[command(flatten)]
        locations: Locations,

        /// Write files in place instead of temp file + rename
        #[arg(long)]
        no_atomic: bool,

        /// Leave files whose content already matches the source
        #[arg(long)]
        skip_unchanged: bool,

        /// Copy buffer size in bytes
        #[arg(long)]
        buffer_size: Option<usize>,

        /// Exit non-zero when any asset fails (ignored when launching)
        #[arg(long)]
        strict: bool,

        /// Program to launch afterwards; receives the target directory as last argument
        #[arg(last = true)]
        program: Vec<OsString>,
    },

    /// Compare materialized files against the source (exits non-zero on differences)
    Verify {
        #[command(flatten)]
        locations: Locations,
    },

    /// Print the resolved asset manifest
    Manifest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = load_config(cli.config.as_ref())?;
    let (mut config, env_warnings) = config.with_env_overrides();
    init_logging(&config, cli.verbose);
    if !cli.json {
        print_config_warnings(&warnings);
    }
    print_env_warnings(&env_warnings);

    let code = match cli.command {
        Commands::Run {
            locations,
            no_atomic,
            skip_unchanged,
            buffer_size,
            strict,
            program,
        } => {
            apply_locations(&mut config, locations);
            if no_atomic {
                config.transfer.atomic_writes = false;
            }
            if skip_unchanged {
                config.transfer.skip_unchanged = true;
            }
            if let Some(size) = buffer_size {
                config.transfer.buffer_size = size;
            }
            cmd_run(&config, strict, &program, cli.json)?
        }
        Commands::Verify { locations } => {
            apply_locations(&mut config, locations);
            cmd_verify(&config, cli.json)?
        }
        Commands::Manifest => cmd_manifest(&config, cli.json)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> Result<(Config, Vec<ConfigWarning>)> {
    match explicit {
        Some(path) => Config::load_with_warnings(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            Ok(Config::load_or_default(&cwd)?)
        }
    }
}

fn init_logging(config: &Config, verbose: u8) {
    let default_filter = match verbose {
        0 => config.output.verbosity.log_filter(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("ASSETSTAGE_LOG", default_filter),
    )
    .format_timestamp(None)
    .try_init();
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

fn print_env_warnings(warnings: &[EnvWarning]) {
    for w in warnings {
        eprintln!(
            "⚠ Ignoring {}='{}' (expected {})",
            w.var, w.value, w.expected
        );
    }
}

fn apply_locations(config: &mut Config, locations: Locations) {
    if let Some(source) = locations.source {
        config.source.path = Some(source);
    }
    if let Some(target) = locations.target {
        config.target.path = Some(target);
    }
}

fn cmd_run(config: &Config, strict: bool, program: &[OsString], json: bool) -> Result<i32> {
    let manifest = config.manifest()?;
    let options = config.materialize_options()?;
    let source_dir = config.source_dir();
    if !source_dir.is_dir() {
        log::warn!("source directory {} does not exist", source_dir.display());
    }

    let log_sink = LogEventSink::new();
    let json_sink = JsonEventSink::stdout();
    let sinks: Vec<&dyn MaterializeEventSink> = if json {
        vec![&log_sink, &json_sink]
    } else {
        vec![&log_sink]
    };
    let events = FanoutEventSink::new(sinks);

    let use_case = MaterializeUseCase::new(DirSource::new(&source_dir));
    let report = use_case.execute_with_events(&manifest, &options, &events);

    if json {
        println!("{}", serde_json::json!({ "report": report.to_json() }));
    } else {
        println!("{} → {}", report.summary(), report.target().display());
    }

    if let Some((first, rest)) = program.split_first() {
        let launcher = Launcher::new(first).args(rest);
        let status = launcher
            .launch(report.target())
            .with_context(|| format!("failed to launch {}", first.to_string_lossy()))?;
        return Ok(status.code().unwrap_or(1));
    }

    if strict && !report.is_complete() {
        return Ok(1);
    }
    Ok(0)
}

fn cmd_verify(config: &Config, json: bool) -> Result<i32> {
    let manifest = config.manifest()?;
    let options = config.materialize_options()?;
    let use_case = VerifyUseCase::new(DirSource::new(config.source_dir()));
    let report = use_case.execute(&manifest, &options);

    if json {
        let entries: Vec<serde_json::Value> = report
            .entries()
            .iter()
            .map(|e| {
                let status = match &e.status {
                    VerifyStatus::Match => "match",
                    VerifyStatus::Mismatch { .. } => "mismatch",
                    VerifyStatus::MissingTarget => "missing_target",
                    VerifyStatus::UnreadableTarget { .. } => "unreadable_target",
                    VerifyStatus::SourceUnavailable => "source_unavailable",
                };
                serde_json::json!({ "name": e.name.as_str(), "status": status })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({ "clean": report.is_clean(), "assets": entries })
        );
    } else {
        for entry in report.problems() {
            match &entry.status {
                VerifyStatus::Mismatch { expected, actual } => println!(
                    "✗ {} differs (expected {}, found {})",
                    entry.name, expected, actual
                ),
                VerifyStatus::MissingTarget => println!("✗ {} missing from target", entry.name),
                VerifyStatus::UnreadableTarget { reason } => {
                    println!("✗ {} unreadable in target: {}", entry.name, reason)
                }
                VerifyStatus::SourceUnavailable => {
                    println!("✗ {} unavailable in source", entry.name)
                }
                VerifyStatus::Match => {}
            }
        }
        if report.is_clean() {
            println!("✓ {} assets verified", report.entries().len());
        }
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

fn cmd_manifest(config: &Config, json: bool) -> Result<i32> {
    let manifest = config.manifest()?;
    if json {
        let names: Vec<&str> = manifest.iter().map(|n| n.as_str()).collect();
        println!("{}", serde_json::json!({ "assets": names }));
    } else {
        for name in &manifest {
            println!("{}", name);
        }
    }
    Ok(0)
}
