use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

use crate::core::record::NormalizedRecord;
use crate::parsing::tabular::{self, ColumnMapping, Row, TabularConfig};
use crate::parsing::vendors::{ancestry, genera, myheritage, twentythree};
use crate::parsing::ParseError;

/// A genetic-testing company whose raw export layout is understood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Genera,
    #[serde(rename = "23andme")]
    TwentyThreeAndMe,
    AncestryDna,
    MyHeritage,
}

/// How one vendor's export is tokenized and normalized
#[derive(Clone, Copy)]
pub struct VendorAdapter {
    pub config: TabularConfig,
    pub columns: ColumnMapping,
    pub normalize: fn(&[Row], &ColumnMapping) -> Vec<NormalizedRecord>,
}

impl Vendor {
    pub const ALL: [Vendor; 4] = [
        Self::Genera,
        Self::TwentyThreeAndMe,
        Self::AncestryDna,
        Self::MyHeritage,
    ];

    /// Selector string accepted by [`FromStr`]
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Genera => "genera",
            Self::TwentyThreeAndMe => "23andme",
            Self::AncestryDna => "ancestrydna",
            Self::MyHeritage => "myheritage",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Genera => "Genera",
            Self::TwentyThreeAndMe => "23andMe",
            Self::AncestryDna => "AncestryDNA",
            Self::MyHeritage => "MyHeritage",
        }
    }

    #[must_use]
    pub fn adapter(self) -> VendorAdapter {
        match self {
            Self::Genera => VendorAdapter {
                config: genera::CONFIG,
                columns: genera::COLUMNS,
                normalize: genera::normalize,
            },
            Self::TwentyThreeAndMe => VendorAdapter {
                config: twentythree::CONFIG,
                columns: twentythree::COLUMNS,
                normalize: twentythree::normalize,
            },
            Self::AncestryDna => VendorAdapter {
                config: ancestry::CONFIG,
                columns: ancestry::COLUMNS,
                normalize: ancestry::normalize,
            },
            Self::MyHeritage => VendorAdapter {
                config: myheritage::CONFIG,
                columns: myheritage::COLUMNS,
                normalize: myheritage::normalize,
            },
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.selector())
    }
}

impl FromStr for Vendor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "genera" => Ok(Self::Genera),
            "23andme" => Ok(Self::TwentyThreeAndMe),
            "ancestry" | "ancestrydna" => Ok(Self::AncestryDna),
            "myheritage" => Ok(Self::MyHeritage),
            _ => Err(ParseError::UnsupportedVendor(s.to_string())),
        }
    }
}

/// Parse a raw export, choosing the layout by vendor selector string.
///
/// The selector is resolved before any parsing work starts.
///
/// # Errors
///
/// Returns `ParseError::UnsupportedVendor` if `vendor` names no known
/// vendor, or `ParseError::Task` if the parsing task panics.
pub async fn parse_raw_text(raw: &str, vendor: &str) -> Result<Vec<NormalizedRecord>, ParseError> {
    let vendor: Vendor = vendor.parse()?;
    parse_with_vendor(raw, vendor).await
}

/// Parse a raw export using `vendor`'s layout.
///
/// Inside a Tokio runtime, tokenizing runs on the blocking pool so large
/// exports do not stall the async runtime. Under any other executor it runs
/// inline. Malformed rows are dropped, never reported as errors.
///
/// # Errors
///
/// Returns `ParseError::Task` if the parsing task panics or is cancelled.
pub async fn parse_with_vendor(
    raw: &str,
    vendor: Vendor,
) -> Result<Vec<NormalizedRecord>, ParseError> {
    let adapter = vendor.adapter();

    let rows = match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            let text = raw.to_owned();
            handle
                .spawn_blocking(move || tabular::parse_rows(&text, &adapter.config))
                .await?
        }
        Err(_) => tabular::parse_rows(raw, &adapter.config),
    };

    let records = (adapter.normalize)(&rows, &adapter.columns);
    debug!(
        "{}: {} records from {} rows",
        vendor.display_name(),
        records.len(),
        rows.len()
    );
    Ok(records)
}
