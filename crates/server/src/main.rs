// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use clap::Parser;
use gudlft::Catalog;
use gudlft_api::{
    ApiError, BookingContextRequest, BookingContextResponse, ListClubsResponse,
    ListCompetitionsResponse, LoginRequest, LoginResponse, LogoutResponse, PurchasePlacesRequest,
    PurchasePlacesResponse, get_booking_context, list_clubs, list_competitions, load_catalog,
    local_now, login, logout, purchase_places,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// GUDLFT Server - HTTP server for club competition bookings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the clubs feed
    #[arg(long, default_value = "data/clubs.json")]
    clubs: PathBuf,

    /// Path to the competitions feed
    #[arg(long, default_value = "data/competitions.json")]
    competitions: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The catalog sits behind a single async mutex. A purchase holds the lock
/// across evaluation and allocation, so concurrent purchases are serialized.
#[derive(Clone)]
struct AppState {
    /// The clubs and competitions loaded at startup.
    catalog: Arc<Mutex<Catalog>>,
}

/// API request for logging in by email.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ShowSummaryApiRequest {
    /// The club's email.
    email: String,
}

/// A requested place count as sent by the client.
///
/// Forms submit text while JSON clients may send a number. Any JSON number
/// is accepted here, including fractions and values beyond 64 bits, and is
/// passed on as written so the booking rules decide whether it is valid.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum PlacesField {
    Number(serde_json::Number),
    Text(String),
}

impl PlacesField {
    fn into_text(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

/// API request for purchasing places.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PurchasePlacesApiRequest {
    /// The competition name.
    competition: String,
    /// The club name.
    club: String,
    /// The requested number of places.
    places: PlacesField,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// The rule that refused the request, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    /// The bound that triggered a booking rejection, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// The rule that refused the request, if any.
    rule: Option<String>,
    /// The bound that triggered a booking rejection, if any.
    limit: Option<u32>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            rule: self.rule,
            limit: self.limit,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::BookingRejected {
                rule,
                message,
                limit,
            } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message,
                rule: Some(rule),
                limit: Some(limit),
            },
            ApiError::DomainRuleViolation { rule, message } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message,
                rule: Some(rule),
                limit: None,
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
                rule: None,
                limit: None,
            },
            ApiError::ResourceNotFound { message, .. } => Self {
                status: StatusCode::NOT_FOUND,
                message,
                rule: None,
                limit: None,
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                    rule: None,
                    limit: None,
                }
            }
        }
    }
}

/// Handler for GET `/` and `/competitions` endpoints.
///
/// Lists every competition with its remaining places.
async fn handle_list_competitions(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListCompetitionsResponse> {
    debug!("Handling list_competitions request");

    let response: ListCompetitionsResponse = list_competitions(&*app_state.catalog.lock().await);

    Json(response)
}

/// Handler for POST `/show_summary` endpoint.
///
/// Logs a club in by email.
async fn handle_show_summary(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ShowSummaryApiRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!("Handling show_summary request");

    let request: LoginRequest = LoginRequest { email: req.email };

    let response: LoginResponse = login(&*app_state.catalog.lock().await, &request)?;

    Ok(Json(response))
}

/// Handler for GET `/book/{competition}/{club}` endpoint.
///
/// Resolves the club and competition for the booking page.
async fn handle_booking_context(
    AxumState(app_state): AxumState<AppState>,
    Path((competition, club)): Path<(String, String)>,
) -> Result<Json<BookingContextResponse>, HttpError> {
    debug!(competition = %competition, club = %club, "Handling booking_context request");

    let request: BookingContextRequest = BookingContextRequest { competition, club };

    let response: BookingContextResponse =
        get_booking_context(&*app_state.catalog.lock().await, &request)?;

    Ok(Json(response))
}

/// Handler for POST `/purchase_places` endpoint.
///
/// Books places for a club. The catalog lock is held for the whole call.
async fn handle_purchase_places(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<PurchasePlacesApiRequest>,
) -> Result<Json<PurchasePlacesResponse>, HttpError> {
    info!(
        competition = %req.competition,
        club = %req.club,
        "Handling purchase_places request"
    );

    let request: PurchasePlacesRequest = PurchasePlacesRequest {
        competition: req.competition,
        club: req.club,
        places: req.places.into_text(),
    };

    let mut catalog = app_state.catalog.lock().await;
    let response: PurchasePlacesResponse = purchase_places(&mut catalog, &request)?;
    drop(catalog);

    Ok(Json(response))
}

/// Handler for GET `/clubs` endpoint.
///
/// Lists every club with its current points.
async fn handle_list_clubs(AxumState(app_state): AxumState<AppState>) -> Json<ListClubsResponse> {
    debug!("Handling list_clubs request");

    let response: ListClubsResponse = list_clubs(&*app_state.catalog.lock().await);

    Json(response)
}

/// Handler for GET `/logout` endpoint.
///
/// Redirects back to the start page.
async fn handle_logout() -> Redirect {
    let response: LogoutResponse = logout();
    Redirect::to(&response.redirect)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_list_competitions))
        .route("/show_summary", post(handle_show_summary))
        .route("/book/{competition}/{club}", get(handle_booking_context))
        .route("/purchase_places", post(handle_purchase_places))
        .route("/clubs", get(handle_list_clubs))
        .route("/competitions", get(handle_list_competitions))
        .route("/logout", get(handle_logout))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing GUDLFT Server");
    info!(
        clubs = %args.clubs.display(),
        competitions = %args.competitions.display(),
        "Loading feeds"
    );

    let catalog: Catalog = load_catalog(&args.clubs, &args.competitions, local_now()?)?;

    let app_state: AppState = AppState {
        catalog: Arc::new(Mutex::new(catalog)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
