//! End-to-end analysis of a raw export against a marker table.
//!
//! [`Analyzer`] normalizes an export with the selected vendor layout, keeps
//! the records whose marker id is catalogued, and looks each one up. Ids the
//! table does not know are dropped before lookup rather than reported as
//! absent results.
//!
//! ```rust,no_run
//! use snp_annotator::{Analyzer, MarkerCatalog};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let catalog = MarkerCatalog::load_embedded()?;
//! let raw = std::fs::read_to_string("export.csv")?;
//!
//! let results = Analyzer::new(&catalog).analyze(&raw, "genera").await?;
//! for result in &results {
//!     if let (Some(marker), Some(outcome)) = (result.marker, result.outcome) {
//!         println!("{}: {}", marker.id, outcome.outcome);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::table::MarkerTable;
use crate::core::marker::{GroupInfo, GroupName};
use crate::core::record::NormalizedRecord;
use crate::matching::engine::{AnalysisResult, LookupEngine};
use crate::parsing::vendor::{parse_with_vendor, Vendor};
use crate::parsing::ParseError;

/// Ties vendor normalization and lookup together over one marker table
pub struct Analyzer<'a, T: MarkerTable + ?Sized> {
    table: &'a T,
}

impl<'a, T: MarkerTable + ?Sized> Analyzer<'a, T> {
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }

    /// Analyze a raw export, choosing the layout by vendor selector string.
    ///
    /// Results follow the order of the surviving input rows. An export with
    /// no catalogued markers yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedVendor` if `vendor` names no known
    /// vendor, or `ParseError::Task` if the parsing task fails.
    pub async fn analyze(
        &self,
        raw: &str,
        vendor: &str,
    ) -> Result<Vec<AnalysisResult<'a>>, ParseError> {
        let vendor: Vendor = vendor.parse()?;
        self.analyze_with_vendor(raw, vendor).await
    }

    /// Analyze a raw export using `vendor`'s layout
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Task` if the parsing task fails.
    pub async fn analyze_with_vendor(
        &self,
        raw: &str,
        vendor: Vendor,
    ) -> Result<Vec<AnalysisResult<'a>>, ParseError> {
        let records = parse_with_vendor(raw, vendor).await?;
        let results = self.analyze_records(&records);

        info!(
            "Analyzed {} records from {}: {} catalogued markers",
            records.len(),
            vendor.display_name(),
            results.len()
        );
        Ok(results)
    }

    /// Look up already-normalized records, skipping ids not in the table
    pub fn analyze_records(&self, records: &[NormalizedRecord]) -> Vec<AnalysisResult<'a>> {
        let known = self.table.ids();
        let engine = LookupEngine::new(self.table);

        let results: Vec<AnalysisResult<'a>> = records
            .iter()
            .filter(|record| known.contains(record.id.as_str()))
            .map(|record| engine.lookup(record.id.as_str(), record.pair))
            .collect();

        debug!(
            "{} of {} records name a catalogued marker",
            results.len(),
            records.len()
        );
        results
    }
}

/// Results for one group
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary<'a> {
    #[serde(flatten)]
    pub info: &'static GroupInfo,

    /// Markers whose pair has a recorded outcome
    pub with_outcome: usize,

    /// Markers whose pair has no recorded outcome
    pub without_outcome: usize,

    pub results: Vec<AnalysisResult<'a>>,
}

/// Analysis results grouped by [`GroupName`], in enum order
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary<'a> {
    pub total: usize,
    pub with_outcome: usize,
    pub groups: Vec<GroupSummary<'a>>,
}

impl<'a> AnalysisSummary<'a> {
    /// Group `results`, keeping their order within each group.
    ///
    /// Results without a marker carry no group and are left out. Groups
    /// with no results are omitted.
    #[must_use]
    pub fn from_results(results: &[AnalysisResult<'a>]) -> Self {
        let groups: Vec<GroupSummary<'a>> = GroupName::ALL
            .into_iter()
            .filter_map(|group| {
                let in_group: Vec<AnalysisResult<'a>> = results
                    .iter()
                    .filter(|r| r.marker.is_some_and(|m| m.group == group))
                    .copied()
                    .collect();
                if in_group.is_empty() {
                    return None;
                }

                let with_outcome = in_group.iter().filter(|r| r.has_outcome()).count();
                Some(GroupSummary {
                    info: group.info(),
                    with_outcome,
                    without_outcome: in_group.len() - with_outcome,
                    results: in_group,
                })
            })
            .collect();

        Self {
            total: groups.iter().map(|g| g.results.len()).sum(),
            with_outcome: groups.iter().map(|g| g.with_outcome).sum(),
            groups,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
