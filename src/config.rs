use url::Url;

use crate::error::{PokeApiError, Result};

/// Root of the public PokeAPI REST service.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_OFFSET: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Use a different API root, e.g. a mirror or a local test server.
    ///
    /// The URL must be absolute and use http or https. A trailing slash is
    /// dropped so paths can be appended directly.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| PokeApiError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PokeApiError::Config(format!(
                "Unsupported scheme '{}' in base URL '{}'",
                parsed.scheme(),
                base_url
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Page window for the listing endpoint. Values are passed to the query string
/// as-is; the upstream service decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub limit: u32,
    pub offset: u32,
}

impl ListParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}
