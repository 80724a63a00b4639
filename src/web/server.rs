use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::analysis::{AnalysisSummary, Analyzer};
use crate::catalog::store::MarkerCatalog;
use crate::cli::ServeArgs;
use crate::core::marker::GroupName;
use crate::parsing::input::gunzip;
use crate::parsing::vendor::Vendor;
use crate::parsing::ParseError;
use crate::utils::validation::{validate_upload, ValidationError};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_MULTIPART_FIELDS: usize = 10;
pub const MAX_FILE_FIELD_SIZE: usize = 16 * 1024 * 1024; // 16MB
pub const MAX_TEXT_FIELD_SIZE: usize = 1024 * 1024; // 1MB
pub const MAX_DECOMPRESSED_SIZE: usize = 64 * 1024 * 1024; // 64MB

/// Shared application state
pub struct AppState {
    pub catalog: MarkerCatalog,
}

/// Input extracted from the multipart form
#[derive(Debug)]
struct AnalyzeRequest {
    text: String,
    vendor: String,
    filename: Option<String>,
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

fn error_response(status: StatusCode, error_type: &str, user_message: &str) -> Response {
    (
        status,
        Json(create_safe_error_response(error_type, user_message, None)),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes without middleware, for serving a given catalog
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/markers", get(markers_handler))
        .route("/api/markers/{id}", get(marker_handler))
        .route("/api/groups", get(groups_handler))
        .route("/api/vendors", get(vendors_handler))
        .route("/api/analyze", post(analyze_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the rate limiter
/// configuration is rejected.
pub fn create_router() -> anyhow::Result<Router> {
    // Load catalog
    let catalog = MarkerCatalog::load_embedded()?;
    let state = Arc::new(AppState { catalog });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    // Build router with comprehensive security layers
    let app = api_router(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("strict-transport-security"),
                HeaderValue::from_static("max-age=31536000; includeSubDomains"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("no-referrer"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(100))
            // Limit request body size (accommodate largest file + multipart overhead)
            .layer(DefaultBodyLimit::max(20 * 1024 * 1024)), // 20MB limit
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router()?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting snp-annotator web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Service info
async fn index_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "marker_count": state.catalog.len(),
        "endpoints": [
            "GET /api/markers",
            "GET /api/markers/{id}",
            "GET /api/groups",
            "GET /api/vendors",
            "POST /api/analyze",
        ],
    }))
}

/// Return list of markers in catalog
async fn markers_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.catalog.len(),
        "markers": state.catalog.markers,
    }))
}

async fn marker_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.catalog.get(&id) {
        Some(marker) => Json(marker).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "not_found", "Marker not found"),
    }
}

async fn groups_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "groups": GroupName::all_info() }))
}

async fn vendors_handler() -> Json<serde_json::Value> {
    let vendors: Vec<serde_json::Value> = Vendor::ALL
        .iter()
        .map(|v| {
            serde_json::json!({
                "selector": v.selector(),
                "name": v.display_name(),
            })
        })
        .collect();
    Json(serde_json::json!({ "vendors": vendors }))
}

/// API endpoint for annotating an export
async fn analyze_handler(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let start_time = std::time::Instant::now();

    let request = match extract_request_data(&mut multipart).await {
        Ok(request) => request,
        Err(error_response) => return error_response,
    };

    let results = match Analyzer::new(&state.catalog)
        .analyze(&request.text, &request.vendor)
        .await
    {
        Ok(results) => results,
        Err(ParseError::UnsupportedVendor(_)) => {
            let supported: Vec<&str> = Vendor::ALL.iter().map(|v| v.selector()).collect();
            return error_response(
                StatusCode::BAD_REQUEST,
                "unsupported_vendor",
                &format!("Unsupported vendor. Supported: {}", supported.join(", ")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(create_safe_error_response(
                    "analysis_failed",
                    "Analysis failed",
                    Some(&e.to_string()),
                )),
            )
                .into_response();
        }
    };

    let summary = AnalysisSummary::from_results(&results);

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    Json(serde_json::json!({
        "summary": summary,
        "processing_info": {
            "filename": request.filename,
            "processing_time_ms": processing_time,
        }
    }))
    .into_response()
}

/// Extract input and vendor from multipart form
async fn extract_request_data(multipart: &mut Multipart) -> Result<AnalyzeRequest, Response> {
    let mut text: Option<String> = None;
    let mut vendor: Option<String> = None;
    let mut filename: Option<String> = None;

    let mut fields_received = 0usize;
    let mut had_parse_error = false;

    // Process multipart fields
    loop {
        // Check field count limit before processing
        if fields_received >= MAX_MULTIPART_FIELDS {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "field_limit_exceeded",
                "Too many form fields",
            ));
        }

        match multipart.next_field().await {
            Ok(Some(field)) => {
                fields_received += 1;
                let name = field.name().unwrap_or_default().to_string();

                match name.as_str() {
                    "file" => {
                        let original_name = field.file_name().map(ToString::to_string);
                        match field.bytes().await {
                            Ok(bytes) => {
                                if bytes.len() > MAX_FILE_FIELD_SIZE {
                                    return Err(error_response(
                                        StatusCode::PAYLOAD_TOO_LARGE,
                                        "file_too_large",
                                        "File size exceeds limit",
                                    ));
                                }
                                let (validated, content) =
                                    validate_file_field(original_name.as_deref(), &bytes)?;
                                filename = validated;
                                text = Some(content);
                            }
                            Err(_) => had_parse_error = true,
                        }
                    }
                    "text" => match field.text().await {
                        Ok(value) => {
                            // Validate text field size
                            if value.len() > MAX_TEXT_FIELD_SIZE {
                                return Err(error_response(
                                    StatusCode::PAYLOAD_TOO_LARGE,
                                    "text_too_large",
                                    "Text field size exceeds limit",
                                ));
                            }
                            if !value.trim().is_empty() {
                                text = Some(value);
                            }
                        }
                        Err(_) => had_parse_error = true,
                    },
                    "vendor" => {
                        if let Ok(value) = field.text().await {
                            vendor = Some(value.trim().to_string());
                        }
                    }
                    _ => {} // Ignore unknown fields
                }
            }
            Ok(None) => break, // No more fields
            Err(_) => {
                had_parse_error = true;
                break;
            }
        }
    }

    let Some(vendor) = vendor.filter(|v| !v.is_empty()) else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "missing_vendor",
            "No vendor given. Please select the company that produced the export.",
        ));
    };

    let Some(text) = text else {
        let error_msg = if had_parse_error {
            "Failed to parse upload. Please check the file."
        } else {
            "No data received. Please upload a file or paste export text."
        };
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "missing_input",
            error_msg,
        ));
    };

    Ok(AnalyzeRequest {
        text,
        vendor,
        filename,
    })
}

/// Validate an uploaded file, decompressing gzip uploads first
fn validate_file_field(
    filename: Option<&str>,
    bytes: &[u8],
) -> Result<(Option<String>, String), Response> {
    let is_gzip = filename.is_some_and(|name| name.to_lowercase().ends_with(".gz"));

    let inflated;
    let content: &[u8] = if is_gzip {
        inflated = gunzip(bytes, MAX_DECOMPRESSED_SIZE).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(create_safe_error_response(
                    "invalid_content",
                    "Compressed upload could not be read",
                    Some(&e.to_string()),
                )),
            )
                .into_response()
        })?;
        &inflated
    } else {
        bytes
    };

    let validated = validate_upload(filename, content).map_err(validation_error_response)?;
    Ok((validated, String::from_utf8_lossy(content).into_owned()))
}

fn validation_error_response(error: ValidationError) -> Response {
    let (error_type, message) = match error {
        ValidationError::FilenameTooLong => (
            "filename_too_long",
            "Filename exceeds maximum length limit",
        ),
        ValidationError::InvalidFilename | ValidationError::EmptyFilename => (
            "invalid_filename",
            "Filename contains invalid or dangerous characters",
        ),
        ValidationError::InvalidFileContent => (
            "invalid_content",
            "File content appears malformed or corrupted",
        ),
    };
    error_response(StatusCode::BAD_REQUEST, error_type, message)
}
