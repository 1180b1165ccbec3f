use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub rating: f64,
    pub total_reviews: u32,
    pub address: String,
    pub phone: Option<String>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum ReviewSource {
    Google,
}

/// Display shape of a single review. `id` is positional and only unique
/// within one response, so it must not be used as a persistent key.
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author_name: String,
    pub rating: u8,
    pub text: String,
    pub avatar_url: Option<String>,
    pub relative_age: String,
    pub iso_date: String,
    pub source: ReviewSource,
    pub verified: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceReviews {
    pub business_info: BusinessInfo,
    pub reviews: Vec<Review>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub business_info: BusinessInfo,
    pub reviews: Vec<Review>,
    pub success: bool,
}

impl From<PlaceReviews> for ReviewsResponse {
    fn from(place_reviews: PlaceReviews) -> Self {
        Self {
            business_info: place_reviews.business_info,
            reviews: place_reviews.reviews,
            success: true,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
