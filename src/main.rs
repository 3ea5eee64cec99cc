//! Command line front end for the specifier resolver.
//!
//! Resolves URLs given as arguments (or one per stdin line) and prints one
//! JSON resolution per line on stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use specifier_resolver::config::loader::{load_config, ConfigError};
use specifier_resolver::config::validation::validate_config;
use specifier_resolver::lifecycle::build_resolver;
use specifier_resolver::observability::logging::init_logging;
use specifier_resolver::{Resolution, ResolverConfig};

#[derive(Parser)]
#[command(name = "specifier-resolver")]
#[command(about = "Classify module specifier URLs by registry", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve URLs (reads stdin when none are given)
    Resolve {
        urls: Vec<String>,
    },
    /// List registries and their URL templates in resolution order
    Registries,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ResolverConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;
    let resolver = build_resolver(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Resolve { urls } => {
            if urls.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line?;
                    let specifier = line.trim();
                    if specifier.is_empty() {
                        continue;
                    }
                    emit(&mut out, &resolver.resolve(specifier))?;
                }
            } else {
                for url in &urls {
                    emit(&mut out, &resolver.resolve(url))?;
                }
            }
        }
        Commands::Registries => {
            for registry in resolver.table().registries() {
                writeln!(out, "{}", registry.name())?;
                for matcher in registry.matchers() {
                    writeln!(out, "  {}", matcher)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn emit(out: &mut impl Write, resolution: &Resolution) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer(&mut *out, resolution)?;
    writeln!(out)?;
    Ok(())
}
