// src/bin/sitelint.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;

use sitelint_core::check::Checker;
use sitelint_core::config::Config;
use sitelint_core::discovery;
use sitelint_core::exit::SitelintExit;
use sitelint_core::probe::FsProbe;
use sitelint_core::reporting;
use sitelint_core::requires;
use sitelint_core::types::{DeclaredRequire, Package};

#[derive(Parser)]
#[command(name = "sitelint")]
#[command(about = "Packaging-convention linter for Python site-packages trees")]
struct Cli {
    /// Buildroot containing the installed tree to scan
    root: PathBuf,

    /// Package name attributed to diagnostics (defaults to the buildroot's
    /// directory name)
    #[arg(long)]
    package: Option<String>,

    /// File listing the package's declared requirements, one per line
    #[arg(long)]
    requires: Option<PathBuf>,

    /// Configuration file
    #[arg(long, default_value = "sitelint.toml")]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Console,
    Json,
}

fn main() -> SitelintExit {
    match run() {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            SitelintExit::Error
        }
    }
}

fn run() -> Result<SitelintExit> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    if cli.verbose {
        config.verbose = true;
    }

    let package = build_package(&cli, &config)?;
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&package);

    match cli.format {
        Format::Console => reporting::print_console(&diags),
        Format::Json => println!("{}", reporting::to_json(&diags)?),
    }

    Ok(if diags.is_empty() {
        SitelintExit::Clean
    } else {
        SitelintExit::Findings
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.config.exists() {
        Ok(Config::load(&cli.config)?)
    } else {
        Ok(Config::default())
    }
}

fn build_package(cli: &Cli, config: &Config) -> Result<Package> {
    let name = cli.package.clone().unwrap_or_else(|| {
        cli.root.file_name().map_or_else(
            || "package".to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    });

    let files = discovery::file_list(&cli.root, config.verbose);
    if config.verbose {
        eprintln!("Scanning {} paths in {}", files.len(), cli.root.display());
    }

    let requires = match &cli.requires {
        Some(path) => read_requires(path)?,
        None => Vec::new(),
    };

    Ok(Package {
        name,
        root: cli.root.clone(),
        files,
        requires,
    })
}

fn read_requires(path: &Path) -> Result<Vec<DeclaredRequire>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed = requires::parse(&text)
        .with_context(|| format!("parsing declared requirements in {}", path.display()))?;
    Ok(parsed
        .into_iter()
        .map(|r| DeclaredRequire {
            name: r.name,
            constraint: r.constraint,
        })
        .collect())
}
