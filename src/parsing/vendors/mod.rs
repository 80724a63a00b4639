//! Per-vendor export layouts and normalizers.
//!
//! Each vendor module exposes its [`TabularConfig`], its [`ColumnMapping`]
//! and a `normalize` function. Rows failing the marker-id or genotype shape
//! checks are dropped, so a partially corrupt export still yields the rows
//! that could be read.

pub mod ancestry;
pub mod genera;
pub mod myheritage;
pub mod twentythree;

use tracing::debug;

use crate::core::record::NormalizedRecord;
use crate::parsing::tabular::{ColumnMapping, Row};
use crate::utils::validation::{is_valid_genotype, is_valid_marker_id};

/// Keep rows with a well-formed marker id and genotype, encoding the genotype
pub(crate) fn normalize_rows(rows: &[Row], columns: &ColumnMapping) -> Vec<NormalizedRecord> {
    let records: Vec<NormalizedRecord> = rows
        .iter()
        .filter_map(|row| {
            let id = row.get(columns.marker).filter(|id| is_valid_marker_id(id))?;
            let genotype = row
                .genotype(columns.genotype)
                .filter(|genotype| is_valid_genotype(genotype))?;
            Some(NormalizedRecord::from_genotype(id, &genotype))
        })
        .collect();

    debug!(
        "Normalized {} of {} rows ({} dropped)",
        records.len(),
        rows.len(),
        rows.len() - records.len()
    );
    records
}
