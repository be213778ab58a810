//! Application Context
//!
//! Configuration and injected capabilities provided via Leptos Context API.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::geolocation::LocationProvider;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// Position source used to center the map
    pub location: Arc<dyn LocationProvider>,
}

impl AppContext {
    pub fn new(config: AppConfig, location: Arc<dyn LocationProvider>) -> Self {
        Self { config, location }
    }
}
