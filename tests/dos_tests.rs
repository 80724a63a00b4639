//! `DoS` Prevention Tests
//!
//! Feeds oversized, noisy and adversarial input through the parsing layer
//! and the API to verify it degrades instead of exhausting resources.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use snp_annotator::parsing::input::gunzip;
use snp_annotator::parsing::vendor::parse_raw_text;
use snp_annotator::web::server::{api_router, AppState, MAX_TEXT_FIELD_SIZE};
use snp_annotator::{EncodedPair, MarkerCatalog, NormalizedRecord};

/// A large export of pure noise parses quickly to nothing
#[tokio::test]
async fn test_noise_heavy_export() {
    let mut raw = String::from("RSID,CHROMOSOME,POSITION,RESULT\n");
    for i in 0..200_000 {
        raw.push_str(&format!("junk{i},,,{}\n", "X".repeat(i % 7)));
    }

    let start = Instant::now();
    let records = parse_raw_text(&raw, "genera").await.unwrap();
    assert!(records.is_empty());
    assert!(
        start.elapsed() < Duration::from_secs(30),
        "Noise should not stall parsing"
    );
}

/// Ragged rows, stray quotes and very long fields never fail the batch
#[tokio::test]
async fn test_malformed_rows_are_survivable() {
    let long_field = "A".repeat(100_000);
    let raw = format!(
        "RSID,CHROMOSOME,POSITION,RESULT\n\
         rs4680,22,19951271,AG\n\
         \"unterminated,1,2,AG\n\
         rs1815739,{long_field},1,CC\n\
         ,,,,,,,,,,,,\n\
         rs7216389,17,38069949,TT\n"
    );

    let records = parse_raw_text(&raw, "genera").await.unwrap();
    assert_eq!(
        records,
        vec![
            NormalizedRecord::new("rs4680", EncodedPair(5)),
            NormalizedRecord::new("rs1815739", EncodedPair(4)),
            NormalizedRecord::new("rs7216389", EncodedPair(16)),
        ]
    );
}

/// Gzip bombs are cut off at the decompression limit
#[test]
fn test_decompression_limit() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&vec![b'A'; 4 * 1024 * 1024]).unwrap();
    let compressed = encoder.finish().unwrap();
    assert!(compressed.len() < 64 * 1024);

    assert!(gunzip(&compressed, 1024 * 1024).is_err());
    assert_eq!(gunzip(&compressed, 8 * 1024 * 1024).unwrap().len(), 4 * 1024 * 1024);
}

/// Text fields over the limit are rejected with 413
#[tokio::test]
async fn test_oversized_text_field() {
    let catalog = MarkerCatalog::load_embedded().unwrap();
    let app = api_router(Arc::new(AppState { catalog }));

    let boundary = "dos-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Disposition: form-data; name=\"vendor\"\r\n\r\ngenera\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Disposition: form-data; name=\"text\"\r\n\r\n").as_bytes(),
    );
    body.extend(std::iter::repeat(b'A').take(MAX_TEXT_FIELD_SIZE + 1));
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error_type"], "text_too_large");
}

#[test]
fn test_row_limit_check() {
    use snp_annotator::utils::validation::{check_row_limit, MAX_ROWS};

    assert!(check_row_limit(0).is_none());
    assert!(check_row_limit(MAX_ROWS).is_some());
    assert!(check_row_limit(usize::MAX).is_some());
}
