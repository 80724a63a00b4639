//! Centralized validation and helper functions.

use lazy_static::lazy_static;
use regex::Regex;

/// Maximum number of rows read from a single export (DOS protection)
pub const MAX_ROWS: usize = 5_000_000;

/// Security-related constants for input validation
pub const MAX_FILENAME_LENGTH: usize = 255;
pub const MIN_FILE_CONTENT_SIZE: usize = 1;

lazy_static! {
    /// Two-letter prefix followed by 3 to 12 digits, e.g. `rs4680`.
    /// There is no formal standard for the shape; see
    /// <https://www.ncbi.nlm.nih.gov/snp/docs/RefSNP_about/>
    static ref MARKER_ID_REGEX: Regex = Regex::new(r"^[A-Za-z]{2}[0-9]{3,12}$").unwrap();

    /// Exactly two of the recognized letters, in either order
    static ref GENOTYPE_REGEX: Regex = Regex::new(r"^[ACGT]{2}$").unwrap();
}

/// Check that a string has the shape of a marker id.
///
/// # Examples
///
/// ```
/// use snp_annotator::utils::validation::is_valid_marker_id;
///
/// assert!(is_valid_marker_id("rs4680"));
/// assert!(!is_valid_marker_id("i5000001"));
/// assert!(!is_valid_marker_id("rs12")); // too few digits
/// ```
#[must_use]
pub fn is_valid_marker_id(s: &str) -> bool {
    MARKER_ID_REGEX.is_match(s)
}

/// Check that a string is a two-letter genotype such as `AG`.
///
/// No-calls (`--`), indels (`DI`, `II`) and lowercase letters are rejected.
#[must_use]
pub fn is_valid_genotype(s: &str) -> bool {
    GENOTYPE_REGEX.is_match(s)
}

/// Check if reading another row would exceed the maximum allowed.
///
/// Call this with the current count BEFORE reading a new row.
/// Returns an error message if adding would exceed the limit, None if safe.
#[must_use]
pub fn check_row_limit(count: usize) -> Option<String> {
    if count >= MAX_ROWS {
        Some(format!(
            "Too many rows: reading another would exceed maximum of {MAX_ROWS}"
        ))
    } else {
        None
    }
}

/// Security validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Filename too long: exceeds {MAX_FILENAME_LENGTH} characters")]
    FilenameTooLong,
    #[error("Invalid filename: contains path traversal or invalid characters")]
    InvalidFilename,
    #[error("Empty filename provided")]
    EmptyFilename,
    #[error("File content appears malformed or invalid")]
    InvalidFileContent,
}

/// Secure filename validation to prevent directory traversal and other attacks
///
/// # Errors
///
/// Returns `ValidationError::EmptyFilename` if the filename is empty,
/// `ValidationError::FilenameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidFilename` if it contains invalid characters.
pub fn validate_filename(filename: &str) -> Result<String, ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if filename.len() > MAX_FILENAME_LENGTH {
        return Err(ValidationError::FilenameTooLong);
    }

    // Prevent directory traversal attacks
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(ValidationError::InvalidFilename);
    }

    if filename.contains('\0') || filename.chars().any(|c| ('\x01'..='\x1F').contains(&c)) {
        return Err(ValidationError::InvalidFilename);
    }

    let sanitized = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-' || *c == '_' || *c == ' ')
        .collect::<String>();

    if sanitized.trim().is_empty() {
        return Err(ValidationError::InvalidFilename);
    }

    // Hidden files are only accepted with a known export extension
    if sanitized.starts_with('.') && !has_known_extension(&sanitized) {
        return Err(ValidationError::InvalidFilename);
    }

    Ok(sanitized)
}

/// Check if filename has an extension vendors export with
fn has_known_extension(filename: &str) -> bool {
    let safe_extensions = [".txt", ".tsv", ".csv", ".zip", ".gz"];

    safe_extensions
        .iter()
        .any(|ext| filename.to_lowercase().ends_with(ext))
}

/// Validate that uploaded content is plausible export text
///
/// # Errors
///
/// Returns `ValidationError::InvalidFileContent` if the content is empty,
/// mostly binary, or not UTF-8.
pub fn validate_file_content(content: &[u8]) -> Result<(), ValidationError> {
    if content.len() < MIN_FILE_CONTENT_SIZE {
        return Err(ValidationError::InvalidFileContent);
    }

    let non_printable_count = content
        .iter()
        .filter(|&&b| b < 9 || (b > 13 && b < 32) || b == 127)
        .count();

    // Allow up to 5% non-printable characters
    if content.len() > 100 && non_printable_count > content.len() / 20 {
        return Err(ValidationError::InvalidFileContent);
    }

    if std::str::from_utf8(content).is_err() {
        return Err(ValidationError::InvalidFileContent);
    }

    Ok(())
}

/// Input validation combining filename and content checks
///
/// # Errors
///
/// Returns a `ValidationError` if filename validation or content
/// validation fails.
pub fn validate_upload(
    filename: Option<&str>,
    content: &[u8],
) -> Result<Option<String>, ValidationError> {
    let validated_filename = filename.map(validate_filename).transpose()?;
    validate_file_content(content)?;
    Ok(validated_filename)
}
