//! AncestryDNA raw data exports.
//!
//! Tab-separated with a `#` comment preamble and a header row; each allele
//! has its own column and no-calls are written as `0`:
//!
//! ```text
//! rsid	chromosome	position	allele1	allele2
//! rs4680	22	19951271	A	G
//! ```

use super::normalize_rows;
use crate::core::record::NormalizedRecord;
use crate::parsing::tabular::{Column, ColumnMapping, GenotypeColumns, Row, TabularConfig};

pub const CONFIG: TabularConfig = TabularConfig::tsv().with_comment(b'#');

pub const COLUMNS: ColumnMapping = ColumnMapping {
    marker: Column::Named("rsid"),
    genotype: GenotypeColumns::Split(Column::Named("allele1"), Column::Named("allele2")),
};

pub fn normalize(rows: &[Row], columns: &ColumnMapping) -> Vec<NormalizedRecord> {
    normalize_rows(rows, columns)
}
