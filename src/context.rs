//! Application Context
//!
//! Shared configuration and API client provided via Leptos Context API.

use crate::api::ApiClient;
use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub client: ApiClient,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let client = ApiClient::new(&config);
        Self { config, client }
    }
}
