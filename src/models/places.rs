use serde::{Deserialize, Serialize};

/// Envelope returned by the Place Details endpoint.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetails>,
    pub error_message: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub user_ratings_total: u32,
    #[serde(default)]
    pub formatted_address: String,
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub reviews: Vec<GoogleReview>,
}

/// A review exactly as Google hands it out.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleReview {
    #[serde(default)]
    pub author_name: String,
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    pub profile_photo_url: Option<String>,
    pub time: i64,
}

/// Envelope returned by the Find Place From Text endpoint.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FindPlaceResponse {
    pub status: String,
    #[serde(default)]
    pub candidates: Vec<PlaceCandidate>,
    pub error_message: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
}
