use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{error, warn};
use crate::controller::AppState;
use crate::models::review::{ErrorBody, ReviewsResponse};
use crate::repositories::google_places_repo::{fetch_place_reviews, PlacesConfig, PlacesError};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch reviews";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/reviews", get(retrieve_reviews))
        .route_layer(Extension(app_state))
}

#[derive(Debug, Error)]
pub enum ReviewsError {
    #[error("Google Places API key not configured")]
    MissingApiKey,
    #[error("Google Place ID not configured")]
    MissingPlaceId,
    #[error(transparent)]
    Places(#[from] PlacesError),
}

impl IntoResponse for ReviewsError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ReviewsError::MissingApiKey | ReviewsError::MissingPlaceId => {
                warn!("Unable to serve reviews: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ReviewsError::Places(PlacesError::Provider { status, .. }) => (
                StatusCode::BAD_REQUEST,
                format!("Google Places API error: {}", status),
            ),
            ReviewsError::Places(e) => {
                error!("Something went wrong fetching reviews due to: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub async fn retrieve_reviews(
    Extension(app_state): Extension<AppState>,
) -> Result<Json<ReviewsResponse>, ReviewsError> {
    let config = &app_state.config;
    let api_key = config.places_api_key().ok_or(ReviewsError::MissingApiKey)?;
    let place_id = config.place_id().ok_or(ReviewsError::MissingPlaceId)?;

    let places_config = PlacesConfig::new(api_key, &config.google_places_base_url);
    let place_reviews = fetch_place_reviews(
        &app_state.http_client,
        &places_config,
        place_id,
        OffsetDateTime::now_utc(),
    ).await?;

    Ok(Json(ReviewsResponse::from(place_reviews)))
}
