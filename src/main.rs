//! # fichepack CLI
//!
//! Command-line interface for the fichepack library.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser as ClapParser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use fichepack::cli::Args;
use fichepack::config::FicheConfig;
use fichepack::core::{FicheStore, OutputConfig, ingest, lookup};
use fichepack::error::parse_size;
use fichepack::format::{ExportFormat, write_to_format};
use fichepack::parser::RawUnit;
use fichepack::{FicheError, Result};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let export_size = parse_size(&args.size)?;

    let mut config = FicheConfig::new()
        .with_retain_landline(args.keep_landline)
        .with_export_size(export_size);
    if let Some(limit) = args.limit {
        config = config.with_lookup_limit(limit);
    }

    let units = load_units(&args.inputs)?;
    let mut store = FicheStore::new();
    let stats = ingest(&mut store, &units, &config);
    println!("Loaded {} fiches — total {}", stats.added, store.len());
    if stats.rejected > 0 {
        println!(
            "Skipped {} fiches without a phone number ({:.1}% accepted)",
            stats.rejected,
            stats.acceptance_rate()
        );
    }

    for query in &args.queries {
        println!("{query}:");
        let found = lookup(&store, query, config.lookup_limit);
        if found.is_empty() {
            println!("No fiche");
        }
        for fiche in found {
            println!("- {} | {}", fiche.nom_prenom, fiche.mobile);
        }
    }

    if let Some(output) = &args.output {
        let format = match args.format {
            Some(format) => format.into(),
            None => ExportFormat::from_path(output).unwrap_or_else(|e| {
                warn!(path = %output, error = %e, "unknown export extension, falling back to CSV");
                ExportFormat::default()
            }),
        };
        let mut output_config = OutputConfig::new();
        if args.no_header {
            output_config = output_config.without_header();
        }

        let batch = store.head(config.export_size);
        write_to_format(batch, output, format, &output_config)?;
        println!("Exported {} fiches to {output} ({format})", batch.len());
    }

    Ok(())
}

/// Reads every input file, expanding directories one level deep.
fn load_units(inputs: &[PathBuf]) -> Result<Vec<RawUnit>> {
    let mut units = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for path in dir_files(input)? {
                units.push(RawUnit::read(&path)?);
            }
        } else {
            units.push(RawUnit::read(input)?);
        }
    }
    debug!(units = units.len(), "loaded input units");
    Ok(units)
}

/// Regular files directly inside `dir`, sorted by name.
fn dir_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FicheError::read(dir, e))? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-file directory entry");
        }
    }
    files.sort();
    Ok(files)
}
