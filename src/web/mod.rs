//! JSON web API for annotating exports over HTTP.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! snp-annotator serve
//!
//! # Custom port and auto-open browser
//! snp-annotator serve --port 3000 --open
//!
//! # Bind to all interfaces
//! snp-annotator serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Service info
//! - `GET /api/markers` - List all markers in the catalog
//! - `GET /api/markers/{id}` - One marker with its outcomes
//! - `GET /api/groups` - Marker groups
//! - `GET /api/vendors` - Supported vendor selectors
//! - `POST /api/analyze` - Annotate an export (multipart: `file` or `text`, and `vendor`)

pub mod server;
