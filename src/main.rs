//! Kartka CLI - Command-line tool for importing and inspecting character cards.
//!
//! This is the main entry point for the Kartka command-line application.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kartka::card::is_candidate;
use kartka::prelude::*;

/// Kartka - character card import tool
#[derive(Parser)]
#[command(name = "kartka")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a character card (PNG or JSON) and emit the canonical record
    Import {
        /// Input card file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the emitted JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// List a PNG's chunks and decoded text records
    Inspect {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            input,
            output,
            pretty,
        } => cmd_import(&input, output.as_deref(), pretty),
        Commands::Inspect { input } => cmd_inspect(&input),
    }
}

fn cmd_import(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let mut session = ImportSession::new();
    let record = session
        .import_path(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Imported \"{}\" -> {}", record.name, path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let container = PngContainer::parse(&bytes).context("Failed to parse PNG chunk stream")?;

    println!("{} chunks:", container.chunks().len());
    for chunk in container.chunks() {
        println!(
            "  {}  {:>8} bytes  crc {:08x}",
            chunk.tag_str(),
            chunk.data.len(),
            chunk.crc
        );
    }

    let records = decode_text_chunks(&container);
    if records.is_empty() {
        println!("\nno text records");
        return Ok(());
    }

    println!("\n{} text records:", records.len());
    for record in &records {
        let marker = if is_candidate(record) { "*" } else { " " };
        let preview: String = record.text.chars().take(60).collect();
        println!(
            "{} {} [{}] {} chars: {}",
            marker,
            record.keyword,
            record.kind,
            record.text.len(),
            preview
        );
    }
    println!("\n(* = candidate for character payload extraction)");

    Ok(())
}
