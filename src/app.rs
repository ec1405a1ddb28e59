// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod exclude;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::io::Write;

use self::cli::Cli;
use self::config::{load_presets_file, presets_path, resolve_config};
use self::exclude::apply_exclude_file;
use self::formatter::{OutputFile, OutputGenerator};
use self::models::RuntimeConfig;
use self::scanner::{classify, sort_buckets, Scanner};

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let presets = match presets_path() {
        Some(path) => load_presets_file(&path)?,
        None => Default::default(),
    };
    let config = resolve_config(args, current_dir, &presets)?;
    logger_builder(config.verbose, env::var("RUST_LOG").ok().as_deref()).init();
    log::debug!("{:?}", config);

    build_index(&config)
}

/// Runs the indexing pipeline for an already resolved configuration.
pub fn build_index(config: &RuntimeConfig) -> Result<()> {
    // 3. Open the target and the output file before reading anything
    log::info!("opening path...");
    let scanner = Scanner::open(&config.path)?;
    let output = OutputFile::create(&config.outfile)?;

    // 4. Read Directory
    log::info!("getting directory contents...");
    let skip = if config.include_index {
        None
    } else {
        config.outfile.file_name()
    };
    let mut content = scanner.read_content(skip)?;

    // 5. Drop Excluded Names
    if let Some(exfile) = &config.exfile {
        apply_exclude_file(&mut content, exfile)?;
    }

    // 6. Classify and Sort
    log::info!("sorting content into directories and files...");
    let mut buckets = classify(&config.path, content);
    if config.sort {
        sort_buckets(&mut buckets);
    }

    // 7. Generate Output
    log::info!("generating file content...");
    let document = OutputGenerator::new(config).render(&buckets);
    output.write_document(&document)?;

    Ok(())
}

/// Diagnostics go to stdout as `rhindex: <level>: <message>`.
///
/// Without `--verbose` only errors pass. With it the level is `info`, and
/// `RUST_LOG` (when set) replaces that filter.
fn logger_builder(verbose: bool, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stdout).format(|buf, record| {
        writeln!(
            buf,
            "{}: {}: {}",
            env!("CARGO_PKG_NAME"),
            record.level().as_str().to_lowercase(),
            record.args()
        )
    });

    match (verbose, rust_log) {
        (true, Some(filters)) => builder.parse_filters(filters),
        (true, None) => builder.filter_level(log::LevelFilter::Info),
        (false, _) => builder.filter_level(log::LevelFilter::Error),
    };
    builder
}
