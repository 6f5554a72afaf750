//! Validated runtime configuration handed to the rest of the application.

use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ListSettings {
    pub sort_by: String,
}
