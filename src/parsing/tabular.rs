use csv::{ReaderBuilder, StringRecord, Trim};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::utils::validation::check_row_limit;

/// How to tokenize a delimited export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabularConfig {
    pub delimiter: u8,

    /// Whether the first non-comment line names the columns
    pub has_headers: bool,

    /// Lines starting with this byte are skipped
    pub comment: Option<u8>,

    /// Whether fields may be wrapped in double quotes
    pub quoting: bool,
}

impl TabularConfig {
    #[must_use]
    pub const fn csv() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            comment: None,
            quoting: true,
        }
    }

    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            has_headers: true,
            comment: None,
            quoting: false,
        }
    }

    #[must_use]
    pub const fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    #[must_use]
    pub const fn with_quoting(mut self, quoting: bool) -> Self {
        self.quoting = quoting;
        self
    }

    #[must_use]
    pub const fn with_comment(mut self, comment: u8) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// Where a field lives in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Header name, matched case-insensitively
    Named(&'static str),
    /// Zero-based position
    Index(usize),
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Index(idx) => write!(f, "column {}", idx + 1),
        }
    }
}

/// Where the genotype lives in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenotypeColumns {
    /// Both letters in one field, e.g. `AG`
    Single(Column),
    /// One letter per field
    Split(Column, Column),
}

/// Maps a vendor's columns onto the fields normalization needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub marker: Column,
    pub genotype: GenotypeColumns,
}

/// One tokenized row
#[derive(Debug, Clone)]
pub struct Row {
    headers: Option<Arc<StringRecord>>,
    record: StringRecord,
}

impl Row {
    #[must_use]
    pub fn new(headers: Option<Arc<StringRecord>>, record: StringRecord) -> Self {
        Self { headers, record }
    }

    /// Field at `column`, if the row has one
    #[must_use]
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::Index(idx) => self.record.get(idx),
            Column::Named(name) => {
                let headers = self.headers.as_ref()?;
                let idx = headers.iter().position(|h| h.eq_ignore_ascii_case(name))?;
                self.record.get(idx)
            }
        }
    }

    /// Genotype text, joining split allele columns
    #[must_use]
    pub fn genotype(&self, columns: GenotypeColumns) -> Option<Cow<'_, str>> {
        match columns {
            GenotypeColumns::Single(column) => self.get(column).map(Cow::Borrowed),
            GenotypeColumns::Split(first, second) => {
                let first = self.get(first)?;
                let second = self.get(second)?;
                Some(Cow::Owned(format!("{first}{second}")))
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.record.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}

/// Tokenize delimited text into rows.
///
/// Records the tokenizer cannot read are skipped rather than failing the
/// whole file, and reading stops at [`MAX_ROWS`](crate::utils::validation::MAX_ROWS).
#[must_use]
pub fn parse_rows(text: &str, config: &TabularConfig) -> Vec<Row> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .comment(config.comment)
        .quoting(config.quoting)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = if config.has_headers {
        match reader.headers() {
            Ok(headers) => Some(Arc::new(headers.clone())),
            Err(e) => {
                debug!("Unreadable header row: {e}");
                return Vec::new();
            }
        }
    } else {
        None
    };

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        if let Some(message) = check_row_limit(rows.len()) {
            warn!("{message}");
            break;
        }

        match result {
            Ok(record) => rows.push(Row::new(headers.clone(), record)),
            Err(e) => {
                skipped += 1;
                debug!("Skipping unreadable row: {e}");
            }
        }
    }

    debug!("Tokenized {} rows ({skipped} unreadable)", rows.len());
    rows
}
