//! REST API server for the card form.
//!
//! Serves the same formatting, detection, preview and validation rules as
//! the library, for UIs that cannot link it directly.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardform-server
//!
//! # With custom address
//! cardform-server --host 127.0.0.1 --port 8080
//! CARDFORM_PORT=8080 cardform-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::Query,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use card_form::{
    all_networks, detect, format, network, preview, validate_form, CardNetwork, CardPreview,
    Field, FormState,
};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Parser)]
#[command(name = "cardform-server")]
#[command(author, version, about = "Credit card form REST API")]
struct Config {
    /// Address to bind
    #[arg(long, env = "CARDFORM_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CARDFORM_PORT", default_value_t = 3000)]
    port: u16,
}

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Form API",
        version = "0.1.0",
        description = "Credit card form REST API. Live field formatting, network detection, card preview and form validation. No payment processing.",
        license(name = "MIT"),
        contact(name = "API Support")
    ),
    tags(
        (name = "Formatting", description = "As-you-type field formatting"),
        (name = "Detection", description = "Card network detection from partial numbers"),
        (name = "Preview", description = "Card face projection"),
        (name = "Validation", description = "Submit-time form validation"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        format_field,
        detect_network_handler,
        list_networks,
        preview_card,
        validate_card_form,
        health,
    ),
    components(schemas(
        FormatRequest,
        FormatResponse,
        DetectQuery,
        DetectResponse,
        NetworkInfo,
        FormRequest,
        PreviewResponse,
        ValidateResponse,
        ErrorResponse,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"field": "card_number", "value": "4111-1111-1111-1111"}))]
struct FormatRequest {
    /// Field to format: card_number, holder_name, month, year, cvc
    field: String,
    /// Raw field value as typed
    value: String,
    /// Network id used to bound the CVC length (amex allows 4 digits). Ignored for other fields.
    #[serde(default)]
    network: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct FormatResponse {
    /// Formatted value to write back into the input
    formatted: String,
}

#[derive(Deserialize, ToSchema, IntoParams)]
struct DetectQuery {
    /// Card number or prefix to detect
    card: String,
}

#[derive(Serialize, ToSchema)]
struct DetectResponse {
    /// Detected network id, or "unknown"
    network: String,
    /// Human-readable network name
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Logo asset for the card preview
    asset_id: String,
    /// Number of CVC digits for this network
    cvc_length: usize,
}

#[derive(Serialize, ToSchema)]
struct NetworkInfo {
    /// Network id
    id: String,
    /// Human-readable network name
    name: String,
    /// Number prefixes, checked after every network listed before this one
    prefixes: Vec<String>,
    /// Logo asset
    asset_id: String,
    /// Number of CVC digits
    cvc_length: usize,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({
    "card_number": "4111 1111 1111 1111",
    "holder_name": "Jane Doe",
    "month": "05",
    "year": "27",
    "cvc": "123"
}))]
struct FormRequest {
    /// Card number, with or without spaces
    #[serde(default)]
    card_number: String,
    /// Cardholder name
    #[serde(default)]
    holder_name: String,
    /// Expiry month
    #[serde(default)]
    month: String,
    /// Expiry year (2 digits)
    #[serde(default)]
    year: String,
    /// Card verification code
    #[serde(default)]
    cvc: String,
}

impl From<FormRequest> for FormState {
    fn from(req: FormRequest) -> Self {
        FormState::new()
            .with_card_number(req.card_number)
            .with_holder_name(req.holder_name)
            .with_month(req.month)
            .with_year(req.year)
            .with_cvc(req.cvc)
    }
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "number_groups": ["4111", "1111", "0000", "0000"],
    "holder_name": "Cardholder Name",
    "expiry": "05/00",
    "cvc": "000",
    "network": "visa",
    "asset_id": "visa.svg"
}))]
struct PreviewResponse {
    /// The 4 digit groups of the card face
    number_groups: Vec<String>,
    /// Name line, or "Cardholder Name"
    holder_name: String,
    /// MM/YY line with "00" placeholders
    expiry: String,
    /// CVC, or "000"
    cvc: String,
    /// Detected network id, or "unknown"
    network: String,
    /// Logo asset
    asset_id: String,
}

impl From<CardPreview> for PreviewResponse {
    fn from(preview: CardPreview) -> Self {
        Self {
            number_groups: preview.number_groups.to_vec(),
            network: network::network_id(preview.network).to_string(),
            asset_id: preview.asset_id.to_string(),
            holder_name: preview.holder_name,
            expiry: preview.expiry,
            cvc: preview.cvc,
        }
    }
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    /// Field that failed: card_number, holder_name, month, year, cvc
    field: String,
    /// User-facing message
    message: String,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "valid": false,
    "errors": [{"field": "cvc", "message": "CVC must have 3 digits"}]
}))]
struct ValidateResponse {
    /// Whether every check passed
    valid: bool,
    /// Failed checks in form order
    errors: Vec<ErrorResponse>,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Format a single field value
#[utoipa::path(
    post,
    path = "/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Formatted value", body = FormatResponse),
        (status = 400, description = "Unknown field or network")
    ),
    tag = "Formatting"
)]
async fn format_field(
    Json(req): Json<FormatRequest>,
) -> Result<Json<FormatResponse>, (StatusCode, String)> {
    let field: Field = req
        .field
        .parse()
        .map_err(|e: String| (StatusCode::BAD_REQUEST, e))?;

    let network = match req.network.as_deref() {
        None | Some("") | Some(network::UNKNOWN_NETWORK_ID) => None,
        Some(id) => Some(
            id.parse::<CardNetwork>()
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        ),
    };

    let formatted = match field {
        Field::CardNumber => format::format_card_number(&req.value),
        Field::HolderName => format::format_holder_name(&req.value),
        Field::Month => format::format_month(&req.value),
        Field::Year => format::format_year(&req.value),
        Field::Cvc => format::format_cvc(&req.value, network),
    };

    Ok(Json(FormatResponse { formatted }))
}

/// Detect card network from number
#[utoipa::path(
    get,
    path = "/detect",
    params(DetectQuery),
    responses(
        (status = 200, description = "Detected network", body = DetectResponse)
    ),
    tag = "Detection"
)]
async fn detect_network_handler(Query(query): Query<DetectQuery>) -> Json<DetectResponse> {
    let detected = detect::detect_network(&query.card);

    Json(DetectResponse {
        network: network::network_id(detected).to_string(),
        name: detected.map(|n| n.name().to_string()),
        asset_id: preview::project_network_asset(detected).to_string(),
        cvc_length: network::cvc_length_for(detected),
    })
}

/// List supported networks in detection order
#[utoipa::path(
    get,
    path = "/networks",
    responses(
        (status = 200, description = "Network catalog", body = [NetworkInfo])
    ),
    tag = "Detection"
)]
async fn list_networks() -> Json<Vec<NetworkInfo>> {
    Json(
        all_networks()
            .iter()
            .map(|def| NetworkInfo {
                id: def.network.id().to_string(),
                name: def.network.name().to_string(),
                prefixes: def.prefixes.iter().map(|p| p.to_string()).collect(),
                asset_id: def.asset_id.to_string(),
                cvc_length: def.network.cvc_length(),
            })
            .collect(),
    )
}

/// Render the card preview for a form
#[utoipa::path(
    post,
    path = "/preview",
    request_body = FormRequest,
    responses(
        (status = 200, description = "Card face", body = PreviewResponse)
    ),
    tag = "Preview"
)]
async fn preview_card(Json(req): Json<FormRequest>) -> Json<PreviewResponse> {
    let state = FormState::from(req);
    Json(CardPreview::from_form(&state).into())
}

/// Validate a complete form
#[utoipa::path(
    post,
    path = "/validate",
    request_body = FormRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidateResponse)
    ),
    tag = "Validation"
)]
async fn validate_card_form(Json(req): Json<FormRequest>) -> Json<ValidateResponse> {
    let state = FormState::from(req);
    let report = validate_form(&state);

    if report.is_valid() {
        tracing::info!(network = detect::detect_network_id(state.card_number()), "form accepted");
    } else {
        tracing::info!(errors = report.errors().len(), "form rejected");
    }

    Json(ValidateResponse {
        valid: report.is_valid(),
        errors: report
            .errors()
            .iter()
            .map(|e| ErrorResponse {
                field: e.field().name().to_string(),
                message: e.message(),
            })
            .collect(),
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

fn router() -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/format", post(format_field))
        .route("/detect", get(detect_network_handler))
        .route("/networks", get(list_networks))
        .route("/preview", post(preview_card))
        .route("/validate", post(validate_card_form))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui/", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router()).await?;
    Ok(())
}
