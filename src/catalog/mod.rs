//! SNP marker catalog storage and querying.
//!
//! The catalog holds the markers this crate knows how to annotate, each with
//! its group, description, strand orientation, pair outcomes and sources. An
//! embedded catalog is compiled into the binary, but custom catalogs can
//! also be loaded from JSON files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use snp_annotator::MarkerCatalog;
//! use snp_annotator::catalog::MarkerTable;
//!
//! let catalog = MarkerCatalog::load_embedded().unwrap();
//!
//! for marker in catalog.markers() {
//!     println!("{} ({})", marker.id, marker.group);
//! }
//!
//! let comt = catalog.get("rs4680");
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use snp_annotator::MarkerCatalog;
//! use std::path::Path;
//!
//! let json = MarkerCatalog::load_embedded().unwrap().to_json().unwrap();
//! let custom = MarkerCatalog::load_from_file(Path::new("my_markers.json")).unwrap();
//! ```

pub mod store;
pub mod table;

pub use store::{CatalogError, MarkerCatalog};
pub use table::MarkerTable;
