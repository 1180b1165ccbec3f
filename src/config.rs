use std::net::IpAddr;
use clap::Args;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Process-wide settings. Every flag can also be supplied through the
/// environment (or `.env`) under its upper-cased name.
#[derive(Args, Clone, Debug)]
pub struct Config {
    #[clap(env, long)]
    pub google_places_api_key: Option<String>,

    #[clap(env, long)]
    pub google_place_id: Option<String>,

    #[clap(env, long, default_value = DEFAULT_PLACES_BASE_URL)]
    pub google_places_base_url: String,

    #[clap(env, long, default_value = "127.0.0.1")]
    pub bind_address: IpAddr,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of origins allowed to call the API.
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,
}

impl Config {
    pub fn places_api_key(&self) -> Option<&str> {
        non_empty(&self.google_places_api_key)
    }

    pub fn place_id(&self) -> Option<&str> {
        non_empty(&self.google_place_id)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_places_api_key: None,
            google_place_id: None,
            google_places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            bind_address: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            origin_urls: "http://localhost:3000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_secrets_count_as_missing() {
        let config = Config {
            google_places_api_key: Some("   ".to_string()),
            google_place_id: Some(String::new()),
            ..Config::default()
        };

        assert_eq!(config.places_api_key(), None);
        assert_eq!(config.place_id(), None);
    }

    #[test]
    fn present_secrets_are_trimmed() {
        let config = Config {
            google_places_api_key: Some(" key-123\n".to_string()),
            google_place_id: Some("ChIJ-place".to_string()),
            ..Config::default()
        };

        assert_eq!(config.places_api_key(), Some("key-123"));
        assert_eq!(config.place_id(), Some("ChIJ-place"));
    }
}
