use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use crate::models::review::{BusinessInfo, Review};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load reviews";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewsPhase {
    Loading,
    Success,
    Error,
}

/// Whatever `/api/reviews` answered with, success or not.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct ReviewsPayload {
    #[serde(default)]
    success: bool,
    business_info: Option<BusinessInfo>,
    #[serde(default)]
    reviews: Vec<Review>,
    error: Option<String>,
}

/// Client-side view of the reviews endpoint as consumed by the UI.
///
/// Starts out loading. `mount` performs exactly one request and settles in
/// either the success or the error phase; every failure kind collapses into
/// a single message. Nothing is cached between mounts.
pub struct ReviewsHook {
    endpoint: String,
    http_client: Client,
    loading: bool,
    reviews: Vec<Review>,
    business_info: Option<BusinessInfo>,
    error: Option<String>,
}

impl ReviewsHook {
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(
        endpoint: &str,
        http_client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            http_client,
            loading: true,
            reviews: Vec::new(),
            business_info: None,
            error: None,
        }
    }

    pub async fn mount(&mut self) -> ReviewsPhase {
        self.loading = true;

        match self.fetch().await {
            Ok((business_info, reviews)) => {
                self.reviews = reviews;
                self.business_info = Some(business_info);
                self.error = None;
            }
            Err(message) => {
                self.reviews.clear();
                self.business_info = None;
                self.error = Some(message);
            }
        }

        self.loading = false;
        self.phase()
    }

    async fn fetch(&self) -> Result<(BusinessInfo, Vec<Review>), String> {
        let response = self.http_client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                warn!("Something went wrong requesting {} due to: {}", self.endpoint, e);
                LOAD_FAILED_MESSAGE.to_string()
            })?;

        let status = response.status();
        let payload = response.json::<ReviewsPayload>().await.unwrap_or_else(|e| {
            warn!("Unreadable reviews payload ({}) due to: {}", status, e);
            ReviewsPayload::default()
        });

        match payload {
            ReviewsPayload { success: true, business_info: Some(business_info), reviews, .. }
                if status.is_success() => Ok((business_info, reviews)),
            ReviewsPayload { error, .. } => {
                warn!("Reviews request answered {}", status);
                Err(error.unwrap_or_else(|| LOAD_FAILED_MESSAGE.to_string()))
            }
        }
    }

    pub fn phase(&self) -> ReviewsPhase {
        if self.loading {
            ReviewsPhase::Loading
        } else if self.error.is_some() {
            ReviewsPhase::Error
        } else {
            ReviewsPhase::Success
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn business_info(&self) -> Option<&BusinessInfo> {
        self.business_info.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }
}
