//! MyHeritage DNA raw data exports.
//!
//! Comment preamble, then quoted comma-separated fields with a header row:
//!
//! ```text
//! # MyHeritage DNA raw data.
//! RSID,CHROMOSOME,POSITION,RESULT
//! "rs4680","22","19951271","AG"
//! ```

use super::normalize_rows;
use crate::core::record::NormalizedRecord;
use crate::parsing::tabular::{Column, ColumnMapping, GenotypeColumns, Row, TabularConfig};

pub const CONFIG: TabularConfig = TabularConfig::csv().with_comment(b'#');

pub const COLUMNS: ColumnMapping = ColumnMapping {
    marker: Column::Named("RSID"),
    genotype: GenotypeColumns::Single(Column::Named("RESULT")),
};

pub fn normalize(rows: &[Row], columns: &ColumnMapping) -> Vec<NormalizedRecord> {
    normalize_rows(rows, columns)
}
