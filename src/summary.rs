use serde::{Deserialize, Serialize};

use crate::models::PokemonDetails;
use crate::utils::format_name;

/// Flat view of a Pokémon for list and detail screens.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct PokemonSummary {
    pub name: String,
    pub display_name: String,
    pub pokedex: u32,
    pub types: Vec<String>,
    pub sprite: Option<String>,
    pub abilities: Vec<String>,
    pub height: u32,
    pub weight: u32,
    pub base_experience: u32,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

impl From<&PokemonDetails> for PokemonSummary {
    fn from(p: &PokemonDetails) -> Self {
        let mut abilities: Vec<_> = p.abilities.iter().collect();
        abilities.sort_by_key(|a| a.slot);

        Self {
            name: p.name.clone(),
            display_name: format_name(&p.name),
            pokedex: p.id,
            types: p.type_names().into_iter().map(str::to_string).collect(),
            sprite: p.image_url().map(str::to_string),
            abilities: abilities.into_iter().map(|a| a.ability.name.clone()).collect(),
            height: p.height,
            weight: p.weight,
            base_experience: p.base_experience,
            stats: p
                .stats
                .iter()
                .map(|s| Stat {
                    name: s.stat.name.clone(),
                    base: s.base_stat,
                })
                .collect(),
        }
    }
}

impl From<PokemonDetails> for PokemonSummary {
    fn from(p: PokemonDetails) -> Self {
        Self::from(&p)
    }
}

impl PokemonSummary {
    /// Sum of all base stats.
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base).sum()
    }
}
