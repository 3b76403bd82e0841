//! Data-access layer for the PokeAPI `pokemon` endpoints.
//!
//! [`PokeApiClient`] fetches a page of the index, a full Pokémon record, or
//! just the best image URL for one. Response bodies are validated against the
//! typed shapes in [`models`] before anything is returned.

pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod summary;
pub mod transport;
pub mod utils;

pub use config::{ClientConfig, ListParams, DEFAULT_BASE_URL};
pub use error::{PokeApiError, Result, ValidationError};
pub use fetch::PokeApiClient;
pub use models::{
    validate_details, validate_list_page, AbsoluteUrl, NameRef, PokemonDetails, PokemonListPage,
    PokemonRef, Schema, Sprites, VersionSprite,
};
pub use summary::PokemonSummary;
pub use transport::{RawResponse, Transport};
