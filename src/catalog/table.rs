use std::collections::HashSet;

use crate::core::marker::MarkerEntry;

/// Read-only access to a set of catalogued markers.
///
/// Lookup and analysis only ever query markers through this trait; how the
/// markers were loaded is the implementor's concern.
pub trait MarkerTable {
    /// All markers, in catalog order
    fn markers(&self) -> &[MarkerEntry];

    /// The first marker whose id equals `id` exactly
    fn get(&self, id: &str) -> Option<&MarkerEntry> {
        self.markers().iter().find(|m| m.id.as_str() == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Set of all marker ids
    fn ids(&self) -> HashSet<&str> {
        self.markers().iter().map(|m| m.id.as_str()).collect()
    }
}

impl MarkerTable for [MarkerEntry] {
    fn markers(&self) -> &[MarkerEntry] {
        self
    }
}

impl MarkerTable for Vec<MarkerEntry> {
    fn markers(&self) -> &[MarkerEntry] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::marker::GroupName;

    #[test]
    fn test_slice_table_lookup_is_exact() {
        let table = vec![
            MarkerEntry::new("rs1815739", GroupName::PersonalCharacteristics, "ACTN3"),
            MarkerEntry::new("rs4680", GroupName::PersonalCharacteristics, "COMT"),
        ];

        assert!(table.contains("rs4680"));
        assert!(!table.contains("RS4680"));
        assert!(!table.contains("rs468"));
        assert_eq!(table.get("rs1815739").unwrap().description, "ACTN3");
        assert_eq!(table.ids().len(), 2);
    }
}
