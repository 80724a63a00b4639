//! # snp-annotator
//!
//! A library for annotating consumer genetic-testing exports against a curated
//! catalog of SNP markers.
//!
//! Raw data downloads from genetic-testing companies list hundreds of
//! thousands of markers with the genotype called at each. Only a handful have
//! well-studied effects. `snp-annotator` reduces each export row to a marker id
//! and a packed genotype, keeps the markers the catalog knows, and reports the
//! outcome recorded for each genotype.
//!
//! ## Features
//!
//! - **Compact genotype encoding**: each letter has a power-of-two weight, so
//!   `AG` and `GA` pack to the same value
//! - **Multiple vendors**: Genera, 23andMe, AncestryDNA and MyHeritage layouts
//! - **Best-effort parsing**: malformed rows are dropped, never fatal
//! - **Embedded catalog**: validated at build time, replaceable at runtime
//!
//! ## Example
//!
//! ```rust,no_run
//! use snp_annotator::{Analyzer, MarkerCatalog};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! // Load the embedded catalog of known markers
//! let catalog = MarkerCatalog::load_embedded()?;
//!
//! // Annotate a Genera export
//! let raw = "RSID,CHROMOSOME,POSITION,RESULT\nrs4680,22,19951271,AG\n";
//! let results = Analyzer::new(&catalog).analyze(raw, "genera").await?;
//!
//! for result in results {
//!     if let (Some(marker), Some(outcome)) = (result.marker, result.outcome) {
//!         println!("{} ({}): {}", marker.id, result.pair, outcome.outcome);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Genotype encoding, marker and record types
//! - [`catalog`]: Marker catalog storage and the read-only table interface
//! - [`matching`]: Lookup of a marker id and genotype against the catalog
//! - [`parsing`]: Vendor export parsing and normalization
//! - [`analysis`]: End-to-end analysis and grouped summaries
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON web API

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use analysis::{AnalysisSummary, Analyzer};
pub use catalog::store::MarkerCatalog;
pub use catalog::table::MarkerTable;
pub use core::marker::{GroupName, MarkerEntry, MarkerId, PairOutcome};
pub use core::nucleobase::{decode, encode, EncodedPair, Nucleobase};
pub use core::record::NormalizedRecord;
pub use matching::engine::{AnalysisResult, LookupEngine};
pub use parsing::vendor::{parse_raw_text, Vendor};
pub use parsing::ParseError;
