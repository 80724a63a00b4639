use serde::Serialize;

use crate::catalog::table::MarkerTable;
use crate::core::marker::{MarkerEntry, PairOutcome};
use crate::core::nucleobase::EncodedPair;

/// Result of looking up one marker and pair against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisResult<'a> {
    /// The pair that was looked up
    pub pair: EncodedPair,

    /// The catalogued marker, absent when the id is unknown
    pub marker: Option<&'a MarkerEntry>,

    /// The outcome for `pair`, absent when the marker is unknown or has no
    /// outcome recorded for this pair
    pub outcome: Option<&'a PairOutcome>,
}

impl<'a> AnalysisResult<'a> {
    #[must_use]
    pub fn is_known_marker(&self) -> bool {
        self.marker.is_some()
    }

    #[must_use]
    pub fn has_outcome(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Resolves marker ids and pairs to catalog entries
pub struct LookupEngine<'a, T: MarkerTable + ?Sized> {
    table: &'a T,
}

impl<'a, T: MarkerTable + ?Sized> LookupEngine<'a, T> {
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }

    /// Look up `id` exactly (case-sensitive), then the outcome for `pair`
    /// within that marker.
    pub fn lookup(&self, id: &str, pair: EncodedPair) -> AnalysisResult<'a> {
        let marker = self.table.get(id);
        let outcome = marker.and_then(|m| m.outcome_for(pair));

        AnalysisResult {
            pair,
            marker,
            outcome,
        }
    }
}
