use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::table::MarkerTable;
use crate::core::marker::{GroupName, MarkerEntry, MarkerId};
use crate::core::nucleobase::EncodedPair;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate marker id in catalog: {0}")]
    DuplicateMarker(MarkerId),

    #[error("Marker {id} lists pair {pair}, which no two-letter genotype encodes to")]
    InvalidPair { id: MarkerId, pair: u32 },

    #[error("Marker {id} lists pair {pair} more than once")]
    DuplicatePair { id: MarkerId, pair: u32 },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub markers: Vec<MarkerEntry>,
}

/// The marker catalog with an id index
#[derive(Debug)]
pub struct MarkerCatalog {
    /// All markers, in catalog order
    pub markers: Vec<MarkerEntry>,

    /// Index: marker id -> index in markers vec
    id_to_index: HashMap<MarkerId, usize>,
}

impl MarkerCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded JSON is malformed. `build.rs`
    /// validates it, so this only fails if the two disagree.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/snp_markers.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, or any
    /// error `from_json` returns.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for invalid JSON, or a validation
    /// error if a marker id repeats or an outcome pair is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        let mut catalog = Self::new();
        for marker in data.markers {
            catalog.add_marker(marker)?;
        }

        debug!("Loaded catalog with {} markers", catalog.len());
        Ok(catalog)
    }

    /// Add a marker to the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateMarker` if the id is already present,
    /// `CatalogError::InvalidPair` if an outcome pair has no two-letter form,
    /// or `CatalogError::DuplicatePair` if the marker repeats a pair.
    pub fn add_marker(&mut self, marker: MarkerEntry) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&marker.id) {
            return Err(CatalogError::DuplicateMarker(marker.id));
        }
        validate_outcomes(&marker)?;

        let index = self.markers.len();
        self.id_to_index.insert(marker.id.clone(), index);
        self.markers.push(marker);
        Ok(())
    }

    /// Get a marker by id
    pub fn get(&self, id: &str) -> Option<&MarkerEntry> {
        self.id_to_index.get(id).map(|&idx| &self.markers[idx])
    }

    /// Markers belonging to `group`, in catalog order
    pub fn by_group(&self, group: GroupName) -> impl Iterator<Item = &MarkerEntry> {
        self.markers.iter().filter(move |m| m.group == group)
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            markers: self.markers.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of markers in catalog
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for MarkerCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerTable for MarkerCatalog {
    fn markers(&self) -> &[MarkerEntry] {
        &self.markers
    }

    fn get(&self, id: &str) -> Option<&MarkerEntry> {
        MarkerCatalog::get(self, id)
    }
}

fn validate_outcomes(marker: &MarkerEntry) -> Result<(), CatalogError> {
    let mut seen: HashSet<EncodedPair> = HashSet::new();
    for outcome in &marker.outcomes {
        if !outcome.pair.is_valid() {
            return Err(CatalogError::InvalidPair {
                id: marker.id.clone(),
                pair: outcome.pair.value(),
            });
        }
        if !seen.insert(outcome.pair) {
            return Err(CatalogError::DuplicatePair {
                id: marker.id.clone(),
                pair: outcome.pair.value(),
            });
        }
    }
    Ok(())
}
