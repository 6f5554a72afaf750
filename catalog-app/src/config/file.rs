//! TOML file configuration structures.
//!
//! These structs directly map to the `catalog-config.toml` file format.
//! Every section is optional.

use serde::Deserialize;
use url::Url;

/// Resource URL used when neither the file nor the command line sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/api/products";

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Product API section.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// The products resource URL (e.g., "http://localhost:8081/api/products").
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Transport-level request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default url")
}

/// List view section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListConfig {
    /// Sort key for the initial load. Empty leaves ordering to the server.
    #[serde(default)]
    pub sort_by: String,
}
