//! Client configuration for the rental API.

/// Storage key that overrides the API origin at runtime.
pub const API_BASE_URL_KEY: &str = "cinerent.api_base_url";
/// Path prefix of every API endpoint.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
/// Page size for paged rental histories.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Page size for the home view's rental list.
pub const HOME_PAGE_SIZE: u32 = 20;

/// Where and how the client reaches the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, empty for same-origin requests.
    pub base_url: String,
    /// Path prefix joined in front of endpoint paths.
    pub api_prefix: String,
    /// Page size for paged rental histories.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Absolute URL for an endpoint path such as `users/self`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let prefix = self.api_prefix.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}{prefix}/{path}", self.base_url)
    }
}
