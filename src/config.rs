/// Base url of the shop API
pub const DEFAULT_API_URL: &str = "https://larek-api.nomoreparties.co/api/weblarek";
/// Base url product image paths are resolved against
pub const DEFAULT_CDN_URL: &str = "https://larek-api.nomoreparties.co/content/weblarek";

pub const API_URL_VAR: &str = "STOREFRONT_API_URL";
pub const CDN_URL_VAR: &str = "STOREFRONT_CDN_URL";

/// Where the storefront talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub api_url: String,
    pub cdn_url: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_CDN_URL)
    }
}

impl ShopConfig {
    pub fn new(api_url: impl Into<String>, cdn_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_base(api_url.into()),
            cdn_url: trim_base(cdn_url.into()),
        }
    }

    /// Read overrides from the environment. The web build has no environment
    /// and always uses the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        let config = Self::new(pick(API_URL_VAR, DEFAULT_API_URL), pick(CDN_URL_VAR, DEFAULT_CDN_URL));
        log::info!("api: {}, cdn: {}", config.api_url, config.cdn_url);
        config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_lookup(_key: &str) -> Option<String> {
    None
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
