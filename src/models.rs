//! Typed shapes of the PokeAPI responses this crate consumes.
//!
//! Deserializing into these types is the validation step: every field listed
//! here must be present with the right type, sub-resource URLs must be absolute,
//! and the first mismatch rejects the whole body. Keys the upstream service adds
//! that are not declared here are ignored.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{Result, ValidationError};

/// Validate-and-narrow for a whole response body.
pub trait Schema: DeserializeOwned + Serialize {
    /// Check an already decoded JSON value against this shape.
    fn validate(value: &Value) -> std::result::Result<Self, ValidationError> {
        Self::deserialize(value).map_err(ValidationError::from)
    }

    /// Decode and validate raw response text. Text that is not JSON yields a
    /// JSON error; JSON of the wrong shape yields a validation error.
    fn from_json_str(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

pub fn validate_list_page(value: &Value) -> std::result::Result<PokemonListPage, ValidationError> {
    PokemonListPage::validate(value)
}

pub fn validate_details(value: &Value) -> std::result::Result<PokemonDetails, ValidationError> {
    PokemonDetails::validate(value)
}

/// An absolute URL, kept exactly as the API sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AbsoluteUrl(String);

impl AbsoluteUrl {
    pub fn parse(raw: &str) -> std::result::Result<Self, ValidationError> {
        Url::parse(raw)
            .map_err(|e| ValidationError::new(format!("invalid url '{raw}': {e}")))?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AbsoluteUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AbsoluteUrl::parse(&raw).map_err(D::Error::custom)
    }
}

// Optional keys may be absent, but `null` is not an accepted value for them.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
    pub url: AbsoluteUrl,
}

/// Entry of the paginated index. Unlike [`NameRef`], the link is kept as
/// plain text and not required to be absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListPage {
    pub count: u32,
    #[serde(deserialize_with = "Option::deserialize")]
    pub next: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub previous: Option<String>,
    pub results: Vec<PokemonRef>,
}

impl Schema for PokemonListPage {}

impl PokemonListPage {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Art style (`home`, `official-artwork`, ...) to slot to image URL.
pub type OtherSprites = BTreeMap<String, BTreeMap<String, Option<AbsoluteUrl>>>;

/// Generation to game to sprite key.
pub type VersionSprites = BTreeMap<String, BTreeMap<String, BTreeMap<String, VersionSprite>>>;

/// A per-game sprite entry is either a single image or a group of them
/// (e.g. the `animated` set of the Black/White games).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionSprite {
    Url(Option<AbsoluteUrl>),
    Group(BTreeMap<String, Option<AbsoluteUrl>>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(deserialize_with = "Option::deserialize")]
    pub front_default: Option<AbsoluteUrl>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub back_default: Option<AbsoluteUrl>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub front_shiny: Option<AbsoluteUrl>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub back_shiny: Option<AbsoluteUrl>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub front_female: Option<AbsoluteUrl>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub back_female: Option<AbsoluteUrl>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub front_shiny_female: Option<AbsoluteUrl>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub back_shiny_female: Option<AbsoluteUrl>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub other: Option<OtherSprites>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionSprites>,
}

impl Sprites {
    /// `front_default` of one of the alternate art styles under `other`.
    pub fn artwork(&self, style: &str) -> Option<&AbsoluteUrl> {
        self.other.as_ref()?.get(style)?.get("front_default")?.as_ref()
    }

    /// Best image for display: HOME render, then official artwork, then the
    /// plain front sprite.
    pub fn preferred_image_url(&self) -> Option<&str> {
        self.artwork("home")
            .or_else(|| self.artwork("official-artwork"))
            .or(self.front_default.as_ref())
            .map(AbsoluteUrl::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NameRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NameRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub ability: NameRef,
    pub is_hidden: bool,
    pub slot: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NameRef,
    pub version_group: NameRef,
    #[serde(deserialize_with = "Option::deserialize")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NameRef,
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIndex {
    pub game_index: u32,
    pub version: NameRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItemVersion {
    pub rarity: u32,
    pub version: NameRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    pub item: NameRef,
    pub version_details: Vec<HeldItemVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cries {
    pub latest: AbsoluteUrl,
    pub legacy: AbsoluteUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: u32,
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub is_default: bool,
    pub order: i32,

    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilityEntry>,
    pub moves: Vec<MoveEntry>,
    pub species: NameRef,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<NameRef>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub game_indices: Option<Vec<GameIndex>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub held_items: Option<Vec<HeldItem>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub location_area_encounters: Option<AbsoluteUrl>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub past_types: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub past_abilities: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cries: Option<Cries>,
}

impl Schema for PokemonDetails {}

impl PokemonDetails {
    pub fn image_url(&self) -> Option<&str> {
        self.sprites.preferred_image_url()
    }

    /// Type names ordered by slot.
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.type_ref.name.as_str()).collect()
    }
}
