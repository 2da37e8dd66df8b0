//! icongen - icon-font metadata to C++ source generator
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Family Adapter (awesome/bootstrap/material)│
//! │      fetch → raw key/codepoint mapping      │
//! │                     ↓                       │
//! │  Collator: sanitize identifiers, sort keys  │
//! │                     ↓                       │
//! │  Emitter: <base>.h + <base>.cpp             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Each run regenerates the artifact pair(s) of one family from scratch;
//! output is byte-identical for identical metadata.

mod collate;
mod config;
mod emit;
mod error;
mod family;
mod fetch;
mod keywords;
mod sanitize;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

use family::Family;

fn print_help() {
    println!("icongen - icon-font metadata to C++ source generator");
    println!();
    println!("Usage: icongen <family> [metadata-path]");
    println!();
    println!("Families:");
    println!("  awesome    Font Awesome (icons.json glyph catalog)");
    println!("  bootstrap  Bootstrap Icons (bootstrap-icons.json numeric catalog)");
    println!("  material   Material Icons (.codepoints files, all five styles)");
    println!();
    println!("With no metadata-path the family's published metadata is fetched");
    println!("over the network. A local path replaces the fetch: a JSON file for");
    println!("awesome/bootstrap, a directory of .codepoints files for material.");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help");
    println!("  -V, --version  Show version");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("icongen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut positional = args.iter().skip(1).filter(|a| !a.starts_with('-'));
    let family_name = match positional.next() {
        Some(name) => name,
        None => {
            print_help();
            bail!("missing <family> argument");
        }
    };
    let local: Option<PathBuf> = positional.next().map(PathBuf::from);
    if positional.next().is_some() {
        bail!("too many arguments; expected <family> [metadata-path]");
    }

    let family = match Family::parse(family_name) {
        Some(f) => f,
        None => bail!(
            "unknown family {:?}; expected awesome, bootstrap or material",
            family_name
        ),
    };

    let config = config::Config::load();
    if config.output.dir != "." {
        std::fs::create_dir_all(&config.output.dir).with_context(|| {
            format!("Failed to create output directory: {}", config.output.dir)
        })?;
    }

    info!(
        "Generating {} artifacts into {}",
        family.name(),
        Path::new(&config.output.dir).display()
    );

    family
        .generate(local.as_deref(), &config)
        .with_context(|| format!("generation failed for family {}", family.name()))?;

    Ok(())
}
