//! Reading genetic-testing exports into normalized records.
//!
//! Each supported vendor writes its raw data as delimited text with its own
//! quirks: comment preambles, quoting, header rows, and one or two genotype
//! columns. Parsing happens in three layers:
//!
//! - [`tabular`]: tokenize delimited text into [`Row`](tabular::Row)s
//! - [`vendors`]: per-vendor layouts that keep well-formed rows and encode
//!   their genotypes
//! - [`vendor`]: the [`Vendor`](vendor::Vendor) selector and the async entry
//!   points that tie the two together
//!
//! ## Example
//!
//! ```rust,no_run
//! use snp_annotator::parsing::vendor::parse_raw_text;
//!
//! # async fn demo() -> Result<(), snp_annotator::parsing::ParseError> {
//! let raw = "RSID,CHROMOSOME,POSITION,RESULT\nrs4680,22,19951271,AG\n";
//! let records = parse_raw_text(raw, "genera").await?;
//! assert_eq!(records[0].pair.value(), 5);
//! # Ok(())
//! # }
//! ```
//!
//! ## Row Shape Checks
//!
//! | Field     | Accepted                                  |
//! |-----------|-------------------------------------------|
//! | Marker id | two letters then 3 to 12 digits (`rs4680`) |
//! | Genotype  | exactly two of `A`, `C`, `G`, `T`          |

pub mod input;
pub mod tabular;
pub mod vendor;
pub mod vendors;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported vendor: {0}")]
    UnsupportedVendor(String),

    #[error("Parsing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
