use crate::core::marker::MarkerId;
use crate::core::nucleobase::EncodedPair;

/// A single export row reduced to the marker it reports and the pair called there
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedRecord {
    pub id: MarkerId,
    pub pair: EncodedPair,
}

impl NormalizedRecord {
    pub fn new(id: impl Into<String>, pair: EncodedPair) -> Self {
        Self {
            id: MarkerId::new(id),
            pair,
        }
    }

    /// Build a record from raw genotype text such as `"AG"`
    pub fn from_genotype(id: impl Into<String>, genotype: &str) -> Self {
        Self::new(id, EncodedPair::encode(genotype))
    }
}
