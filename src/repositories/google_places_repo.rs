use reqwest::Client;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{info, warn};
use crate::helpers::review_normalizer::{business_info_from, normalize_reviews};
use crate::models::places::{FindPlaceResponse, PlaceCandidate, PlaceDetailsResponse};
use crate::models::review::PlaceReviews;

pub const DETAILS_FIELDS: &str =
    "name,rating,reviews,user_ratings_total,formatted_address,formatted_phone_number";
pub const FIND_PLACE_FIELDS: &str = "place_id,name,formatted_address";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Google Places API returned status {status}")]
    Provider {
        status: String,
        message: Option<String>,
    },
    #[error("Request to Google Places API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Google Places API returned OK without a result")]
    MissingResult,
}

/// Credentials and endpoint used for every outbound lookup. Passed in
/// explicitly, nothing is read from the environment here.
#[derive(Clone, Debug)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: String,
}

impl PlacesConfig {
    pub fn new(
        api_key: &str,
        base_url: &str,
    ) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Single Place Details lookup. No retry and no caching: each call is one
/// request to Google.
pub async fn fetch_place_reviews(
    http_client: &Client,
    config: &PlacesConfig,
    place_id: &str,
    now: OffsetDateTime,
) -> Result<PlaceReviews, PlacesError> {
    let response: PlaceDetailsResponse = http_client
        .get(config.endpoint("details/json"))
        .query(&[
            ("place_id", place_id),
            ("fields", DETAILS_FIELDS),
            ("key", config.api_key.as_str()),
        ])
        .send()
        .await?
        .json()
        .await?;

    if response.status != STATUS_OK {
        warn!(
            "Place details lookup for {} failed with status {}: {}",
            place_id,
            response.status,
            response.error_message.as_deref().unwrap_or("no message"),
        );
        return Err(PlacesError::Provider {
            status: response.status,
            message: response.error_message,
        });
    }

    let details = response.result.ok_or(PlacesError::MissingResult)?;
    let reviews = normalize_reviews(&details.reviews, now);
    info!("Fetched {} reviews for {}", reviews.len(), details.name);

    Ok(PlaceReviews {
        business_info: business_info_from(&details),
        reviews,
    })
}

/// Looks a business up by name and address and returns the first candidate.
/// `Ok(None)` means Google found nothing.
pub async fn find_place_id(
    http_client: &Client,
    config: &PlacesConfig,
    business_name: &str,
    address: &str,
) -> Result<Option<PlaceCandidate>, PlacesError> {
    let input = format!("{} {}", business_name, address);
    let response: FindPlaceResponse = http_client
        .get(config.endpoint("findplacefromtext/json"))
        .query(&[
            ("input", input.trim()),
            ("inputtype", "textquery"),
            ("fields", FIND_PLACE_FIELDS),
            ("key", config.api_key.as_str()),
        ])
        .send()
        .await?
        .json()
        .await?;

    match response.status.as_str() {
        STATUS_OK => Ok(response.candidates.into_iter().next()),
        STATUS_ZERO_RESULTS => Ok(None),
        _ => {
            warn!(
                "Find place lookup for {:?} failed with status {}",
                input, response.status
            );
            Err(PlacesError::Provider {
                status: response.status,
                message: response.error_message,
            })
        }
    }
}
