//! Genera (<https://www.genera.com.br>) raw data exports.
//!
//! Comma-separated with a header row. Fields are never quoted, so a stray
//! `"` only spoils its own row:
//!
//! ```text
//! RSID,CHROMOSOME,POSITION,RESULT
//! rs4680,22,19951271,AG
//! ```

use super::normalize_rows;
use crate::core::record::NormalizedRecord;
use crate::parsing::tabular::{Column, ColumnMapping, GenotypeColumns, Row, TabularConfig};

pub const CONFIG: TabularConfig = TabularConfig::csv().with_quoting(false).with_comment(b'#');

pub const COLUMNS: ColumnMapping = ColumnMapping {
    marker: Column::Named("RSID"),
    genotype: GenotypeColumns::Single(Column::Named("RESULT")),
};

pub fn normalize(rows: &[Row], columns: &ColumnMapping) -> Vec<NormalizedRecord> {
    normalize_rows(rows, columns)
}
