//! 23andMe raw data exports.
//!
//! Tab-separated with a `#` comment preamble and no header row. The column
//! names only appear inside the last comment line:
//!
//! ```text
//! # rsid	chromosome	position	genotype
//! rs4680	22	19951271	AG
//! i5000001	1	82154	GG
//! ```
//!
//! Internal `i`-prefixed ids and haploid calls on X/Y/MT (`A`) fail the
//! shape checks and are dropped.

use super::normalize_rows;
use crate::core::record::NormalizedRecord;
use crate::parsing::tabular::{Column, ColumnMapping, GenotypeColumns, Row, TabularConfig};

pub const CONFIG: TabularConfig = TabularConfig::tsv().with_headers(false).with_comment(b'#');

pub const COLUMNS: ColumnMapping = ColumnMapping {
    marker: Column::Index(0),
    genotype: GenotypeColumns::Single(Column::Index(3)),
};

pub fn normalize(rows: &[Row], columns: &ColumnMapping) -> Vec<NormalizedRecord> {
    normalize_rows(rows, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nucleobase::EncodedPair;
    use crate::parsing::tabular::parse_rows;

    #[test]
    fn test_twentythree_export() {
        let text = "# This data file generated by 23andMe\n\
                    # rsid\tchromosome\tposition\tgenotype\n\
                    rs4680\t22\t19951271\tAG\n\
                    i5000001\t1\t82154\tGG\n\
                    rs5918\tX\t45473373\tT\n\
                    rs1815739\t11\t66328095\t--\n\
                    rs3798220\t6\t160540105\tTC\n";

        let records = normalize(&parse_rows(text, &CONFIG), &COLUMNS);
        assert_eq!(
            records,
            vec![
                NormalizedRecord::new("rs4680", EncodedPair(5)),
                NormalizedRecord::new("rs3798220", EncodedPair(10)),
            ]
        );
    }
}
