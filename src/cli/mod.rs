//! Command-line interface for snp-annotator.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Annotate a vendor export against the marker catalog
//! - **markers**: List, show, or export catalogued markers
//! - **genotype**: Encode or decode a single genotype
//! - **vendors**: List supported vendor layouts
//! - **serve**: Start the JSON web API
//!
//! ## Usage
//!
//! ```text
//! # Annotate a Genera export
//! snp-annotator analyze genome.csv --vendor genera
//!
//! # Gzipped exports and stdin both work
//! snp-annotator analyze genome_23andme.txt.gz --vendor 23andme
//! zcat genome.txt.gz | snp-annotator analyze - --vendor 23andme
//!
//! # JSON output for scripting
//! snp-annotator analyze genome.csv --vendor genera --format json
//!
//! # Inspect the catalog
//! snp-annotator markers list --group medical-conditions
//! snp-annotator markers show rs4680
//!
//! # Start the API
//! snp-annotator serve --port 8080 --open
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::store::MarkerCatalog;

pub mod analyze;
pub mod genotype;
pub mod markers;
pub mod vendors;

#[derive(Parser)]
#[command(name = "snp-annotator")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Annotate consumer genetic-testing exports against a curated SNP catalog")]
#[command(
    long_about = "snp-annotator reads the raw data export from a consumer genetic-testing company and reports what is known about the markers it contains.\n\nEach row is reduced to a marker id and genotype, matched against a curated catalog of SNP markers, and reported with:\n- The marker's group and description\n- The outcome recorded for your genotype, if any\n- Sources backing the outcome"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate a raw genetic-testing export
    Analyze(analyze::AnalyzeArgs),

    /// Inspect the marker catalog
    Markers(markers::MarkersArgs),

    /// Encode or decode a genotype
    Genotype(genotype::GenotypeArgs),

    /// List supported vendors
    Vendors,

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog if one was given, otherwise the embedded one
pub(crate) fn load_catalog(path: Option<&Path>, verbose: bool) -> anyhow::Result<MarkerCatalog> {
    let catalog = if let Some(path) = path {
        MarkerCatalog::load_from_file(path)?
    } else {
        MarkerCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} markers", catalog.len());
    }
    Ok(catalog)
}

pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
