//! Build-time Configuration
//!
//! The API base URL is baked in at build time from `API_BASE_URL`.
//! Everything else is fixed.

/// Relative location of the per-view HTML fragments
pub const VIEWS_BASE: &str = "views";

/// Delay before leaving the registration view after a successful sign-up
pub const REDIRECT_DELAY_MS: u32 = 1000;

/// Application configuration, passed explicitly to the client and router
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path (empty = same origin)
    pub api_base_url: String,
    pub views_base: String,
    pub redirect_delay_ms: u32,
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            views_base: VIEWS_BASE.to_string(),
            redirect_delay_ms: REDIRECT_DELAY_MS,
        }
    }

    /// Read the base URL captured from the build environment
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or_default())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new("")
    }
}
