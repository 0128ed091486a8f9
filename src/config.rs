//! Runtime configuration

use crate::models::LatLng;

/// Application configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the room list API; the mock source is used when unset
    pub rooms_api_url: Option<String>,
    /// Map SDK app key (env: MAP_APP_KEY)
    pub map_app_key: Option<String>,
    /// Where the map opens before any room is known
    pub default_center: LatLng,
    pub zoom_level: u8,
    /// Request timeout for the room API; unset means wait indefinitely
    pub http_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rooms_api_url: None,
            map_app_key: None,
            default_center: LatLng::new(37.5563, 126.922),
            zoom_level: 5,
            http_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| get(name).filter(|s| !s.trim().is_empty());

        Self {
            rooms_api_url: non_empty("ROOMS_API_URL"),
            map_app_key: non_empty("MAP_APP_KEY"),
            default_center: LatLng::new(
                get("MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.default_center.lat),
                get("MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.default_center.lng),
            ),
            zoom_level: get("MAP_ZOOM_LEVEL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.zoom_level),
            http_timeout_secs: get("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .or(defaults.http_timeout_secs),
        }
    }
}
