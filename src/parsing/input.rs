//! Loading export text from disk or stdin.
//!
//! Vendors ship exports as plain text or gzip; `.gz` files are decompressed
//! transparently.

use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::parsing::ParseError;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Read an export file, decompressing gzip if needed.
///
/// Invalid UTF-8 is replaced rather than rejected; the affected rows fail
/// the shape checks later and are dropped.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or decompressed.
pub fn read_export(path: &Path) -> Result<String, ParseError> {
    let file = std::fs::File::open(path)?;

    let mut bytes = Vec::new();
    if is_gzipped(path) {
        GzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        std::io::BufReader::new(file).read_to_end(&mut bytes)?;
    }

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decompress an in-memory gzip export, reading at most `limit` bytes of output
///
/// # Errors
///
/// Returns `ParseError::Io` if the data is not valid gzip or inflates past
/// `limit`.
pub fn gunzip(bytes: &[u8], limit: usize) -> Result<Vec<u8>, ParseError> {
    let mut out = Vec::new();
    let max = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    GzDecoder::new(bytes).take(max).read_to_end(&mut out)?;

    if out.len() > limit {
        return Err(ParseError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Decompressed export exceeds {limit} bytes"),
        )));
    }
    Ok(out)
}

/// Read an export from stdin
///
/// # Errors
///
/// Returns `ParseError::Io` if stdin cannot be read.
pub fn read_stdin() -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    std::io::stdin().lock().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
