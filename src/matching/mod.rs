//! Marker lookup.
//!
//! - [`LookupEngine`]: resolves a marker id and [`EncodedPair`](crate::core::nucleobase::EncodedPair)
//!   against any [`MarkerTable`](crate::catalog::MarkerTable)
//! - [`AnalysisResult`]: the matched marker and outcome, either of which may be absent
//!
//! Matching is exact: ids are compared case-sensitively and pairs by value.
//! There is no partial or fuzzy matching.
//!
//! | Marker known | Pair recorded | `marker` | `outcome` |
//! |--------------|---------------|----------|-----------|
//! | no           | -             | `None`   | `None`    |
//! | yes          | no            | `Some`   | `None`    |
//! | yes          | yes           | `Some`   | `Some`    |

pub mod engine;

pub use engine::{AnalysisResult, LookupEngine};
