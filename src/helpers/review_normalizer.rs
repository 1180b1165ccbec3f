use time::OffsetDateTime;
use crate::helpers::time_format::{format_calendar_date, format_relative_age};
use crate::models::places::{GoogleReview, PlaceDetails};
use crate::models::review::{BusinessInfo, Review, ReviewSource};

pub const REVIEW_ID_PREFIX: &str = "google_";

pub fn normalize_review(
    raw: &GoogleReview,
    index: usize,
    now: OffsetDateTime,
) -> Review {
    Review {
        id: format!("{}{}", REVIEW_ID_PREFIX, index),
        author_name: raw.author_name.clone(),
        rating: raw.rating,
        text: raw.text.clone(),
        avatar_url: raw.profile_photo_url.clone(),
        relative_age: format_relative_age(raw.time, now),
        iso_date: format_calendar_date(raw.time),
        source: ReviewSource::Google,
        verified: true,
    }
}

/// Keeps Google's ordering; ids are assigned by position.
pub fn normalize_reviews(
    raws: &[GoogleReview],
    now: OffsetDateTime,
) -> Vec<Review> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| normalize_review(raw, index, now))
        .collect()
}

pub fn business_info_from(details: &PlaceDetails) -> BusinessInfo {
    BusinessInfo {
        name: details.name.clone(),
        rating: details.rating,
        total_reviews: details.user_ratings_total,
        address: details.formatted_address.clone(),
        phone: details.formatted_phone_number.clone(),
    }
}
