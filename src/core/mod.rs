//! Core data types for marker annotation.
//!
//! - [`Nucleobase`] and [`EncodedPair`]: the packed genotype encoding
//! - [`MarkerEntry`]: a catalogued marker with its pair outcomes
//! - [`GroupName`], [`Orientation`]: marker metadata
//! - [`NormalizedRecord`]: one vendor export row after normalization
//!
//! ## Pair Encoding
//!
//! Each letter is weighted by a distinct power of two, so a genotype is
//! stored as the sum of its two letters' weights:
//!
//! | Letter | Weight |
//! |--------|--------|
//! | A      | 1      |
//! | C      | 2      |
//! | G      | 4      |
//! | T      | 8      |
//!
//! `AG` and `GA` both encode to 5; `GG` encodes to 8. Decoding writes
//! heterozygous pairs heaviest letter first, so 5 decodes to `"GA"`.

pub mod marker;
pub mod nucleobase;
pub mod record;

pub use marker::{GroupInfo, GroupName, MarkerEntry, MarkerId, Orientation, PairOutcome};
pub use nucleobase::{EncodedPair, Nucleobase};
pub use record::NormalizedRecord;
