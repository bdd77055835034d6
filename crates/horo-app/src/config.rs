//! Configuration for the fortune controller.

/// Storage key holding the last-selected sign.
pub const DEFAULT_PREFERENCE_KEY: &str = "selectedZodiac";

/// Host of the QQ share widget.
pub const DEFAULT_QQ_ENDPOINT: &str = "connect.qq.com";

/// Page URL used in share text when none is configured.
pub const DEFAULT_PAGE_URL: &str = "https://horo.example/";

/// Configuration for a [`FortuneApp`](crate::FortuneApp).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the page being shared.
    pub page_url: String,
    /// Host of the QQ share widget.
    pub qq_endpoint: String,
    /// Key under which the selected sign is persisted.
    pub preference_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            qq_endpoint: DEFAULT_QQ_ENDPOINT.to_string(),
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Set the shared page URL.
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = url.into();
        self
    }

    /// Set the QQ share host. A scheme or trailing slash is stripped.
    pub fn with_qq_endpoint(mut self, endpoint: &str) -> Self {
        let host = endpoint
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        self.qq_endpoint = host.to_string();
        self
    }

    /// Set the preference storage key.
    pub fn with_preference_key(mut self, key: impl Into<String>) -> Self {
        self.preference_key = key.into();
        self
    }
}
