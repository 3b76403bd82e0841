use tracing::{debug, error};

use crate::config::{ClientConfig, ListParams};
use crate::error::{PokeApiError, Result};
use crate::models::{PokemonDetails, PokemonListPage, Schema};
use crate::transport::Transport;

/// Client for the `pokemon` endpoints. Each call issues exactly one GET and
/// shares no state with other calls.
#[derive(Debug, Clone)]
pub struct PokeApiClient<T = reqwest::Client> {
    transport: T,
    config: ClientConfig,
}

impl PokeApiClient<reqwest::Client> {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(reqwest::Client::new(), config)
    }
}

impl Default for PokeApiClient<reqwest::Client> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> PokeApiClient<T> {
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn list_url(&self, params: ListParams) -> String {
        format!(
            "{}/pokemon?limit={}&offset={}",
            self.config.base_url(),
            params.limit,
            params.offset
        )
    }

    /// The name is inserted as given; the API expects lower-case identifiers.
    pub fn details_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.config.base_url(), name)
    }

    /// Fetch one page of the Pokémon index.
    pub async fn get_pokemon_list(&self, params: ListParams) -> Result<PokemonListPage> {
        let url = self.list_url(params);
        self.fetch_validated(&url, || "Failed to fetch Pokemon list".to_string())
            .await
            .inspect_err(|e| error!("Failed to fetch Pokemon list: {}", e))
    }

    /// Fetch and validate the full record for `name`.
    pub async fn get_pokemon_details(&self, name: &str) -> Result<PokemonDetails> {
        let url = self.details_url(name);
        self.fetch_validated(&url, || format!("Failed to fetch details for {name}"))
            .await
            .inspect_err(|e| error!("Failed to fetch Pokemon details: {}", e))
    }

    /// Best display image for `name`, or `None`.
    ///
    /// Never fails: HTTP, network and validation errors are logged and
    /// reported as `None`, same as a Pokémon that has no image at all.
    pub async fn get_pokemon_image_url(&self, name: &str) -> Option<String> {
        let url = self.details_url(name);
        let context = || format!("Failed to fetch details for {name}");
        match self.fetch_validated::<PokemonDetails>(&url, context).await {
            Ok(details) => details.image_url().map(str::to_string),
            Err(e) => {
                error!("Failed to fetch Pokemon data for '{}': {}", name, e);
                None
            }
        }
    }

    async fn fetch_validated<S: Schema>(
        &self,
        url: &str,
        context: impl FnOnce() -> String,
    ) -> Result<S> {
        debug!("GET {}", url);
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(PokeApiError::Http {
                status: response.status,
                context: context(),
            });
        }
        debug!("{} answered {} ({} bytes)", url, response.status, response.body.len());
        S::from_json_str(&response.body)
    }
}
