//! HTTP API tests driving the router directly, without binding a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use snp_annotator::web::server::{api_router, AppState};
use snp_annotator::MarkerCatalog;

const BOUNDARY: &str = "snp-annotator-test-boundary";

fn app() -> Router {
    let catalog = MarkerCatalog::load_embedded().unwrap();
    api_router(Arc::new(AppState { catalog }))
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, content) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_analyze(parts: &[Part<'_>]) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))).unwrap()
}

#[tokio::test]
async fn test_index() {
    let (status, json) = get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "snp-annotator");
    assert_eq!(json["marker_count"], 11);
}

#[tokio::test]
async fn test_markers_endpoints() {
    let (status, json) = get_json("/api/markers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 11);
    assert_eq!(json["markers"][0]["id"], "rs7216389");

    let (status, json) = get_json("/api/markers/rs4680").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["group"], "personal_characteristics");

    let (status, json) = get_json("/api/markers/rs0000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error_type"], "not_found");
}

#[tokio::test]
async fn test_groups_and_vendors() {
    let (_, json) = get_json("/api/groups").await;
    assert_eq!(json["groups"].as_array().unwrap().len(), 3);
    assert_eq!(json["groups"][1]["pretty_name"], "Medicine Interactions");

    let (_, json) = get_json("/api/vendors").await;
    let selectors: Vec<&str> = json["vendors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["selector"].as_str().unwrap())
        .collect();
    assert_eq!(selectors, ["genera", "23andme", "ancestrydna", "myheritage"]);
}

#[tokio::test]
async fn test_analyze_uploaded_file() {
    let content = fixture("valid_genera.csv");
    let (status, json) = post_analyze(&[
        Part::Text("vendor", "genera"),
        Part::File("file", "genome.csv", &content),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(
        json["summary"]["groups"][0]["results"][0]["marker"]["id"],
        "rs4680"
    );
    assert_eq!(json["processing_info"]["filename"], "genome.csv");
}

#[tokio::test]
async fn test_analyze_gzipped_upload() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&fixture("genome_23andme.txt")).unwrap();
    let compressed = encoder.finish().unwrap();

    let (status, json) = post_analyze(&[
        Part::Text("vendor", "23andme"),
        Part::File("file", "genome.txt.gz", &compressed),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["total"], 3);
}

#[tokio::test]
async fn test_analyze_pasted_text() {
    let (status, json) = post_analyze(&[
        Part::Text("text", "RSID,CHROMOSOME,POSITION,RESULT\nrs1815739,11,66328095,TC\n"),
        Part::Text("vendor", "Genera"),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["with_outcome"], 1);
}

#[tokio::test]
async fn test_analyze_unsupported_vendor() {
    let (status, json) = post_analyze(&[
        Part::Text("text", "rs4680,22,19951271,AG\n"),
        Part::Text("vendor", "nebula"),
    ])
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "unsupported_vendor");
    assert!(json["details"].is_null());
}

#[tokio::test]
async fn test_analyze_missing_fields() {
    let (status, json) = post_analyze(&[Part::Text("text", "rs4680,22,19951271,AG\n")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "missing_vendor");

    let (status, json) = post_analyze(&[Part::Text("vendor", "genera")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "missing_input");
}

#[tokio::test]
async fn test_analyze_rejects_dangerous_filename() {
    let (status, json) = post_analyze(&[
        Part::Text("vendor", "genera"),
        Part::File("file", "../../etc/passwd", b"rs4680,22,19951271,AG\n"),
    ])
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "invalid_filename");
}

#[tokio::test]
async fn test_analyze_rejects_binary_content() {
    let (status, json) = post_analyze(&[
        Part::Text("vendor", "genera"),
        Part::File("file", "genome.csv", &[0u8; 512]),
    ])
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "invalid_content");
}

#[tokio::test]
async fn test_too_many_fields() {
    let parts: Vec<Part<'_>> = (0..12).map(|_| Part::Text("extra", "x")).collect();
    let (status, json) = post_analyze(&parts).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "field_limit_exceeded");
}
