//! PokeAPI response shapes and their conversion into wire records

use clash_protocol::{MoveData, PokemonData, StatBlock};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoveSlot {
    #[serde(rename = "move")]
    pub mv: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMove {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NamedResource,
    pub damage_class: Option<NamedResource>,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    pub meta: Option<MoveMeta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EffectEntry {
    pub short_effect: String,
    pub language: Option<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoveMeta {
    pub ailment: Option<NamedResource>,
    #[serde(default)]
    pub ailment_chance: u32,
}

impl ApiPokemon {
    /// Move detail URLs, in listing order, capped at `limit`
    pub fn move_urls(&self, limit: usize) -> Vec<String> {
        self.moves
            .iter()
            .take(limit)
            .map(|slot| slot.mv.url.clone())
            .filter(|url| !url.is_empty())
            .collect()
    }

    fn base_stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == name)
            .map(|entry| entry.base_stat)
            .unwrap_or(0)
    }

    pub fn into_record(self, moves: Vec<MoveData>) -> PokemonData {
        let stats = StatBlock {
            hp: self.base_stat("hp"),
            attack: self.base_stat("attack"),
            defense: self.base_stat("defense"),
            special_attack: self.base_stat("special-attack"),
            special_defense: self.base_stat("special-defense"),
            speed: self.base_stat("speed"),
        };

        let mut types: Vec<&TypeSlot> = self.types.iter().collect();
        types.sort_by_key(|slot| slot.slot);
        let types = types.into_iter().map(|slot| slot.kind.name.clone()).collect();

        PokemonData {
            id: self.id,
            name: self.name,
            types,
            stats,
            abilities: self.abilities.into_iter().map(|a| a.ability.name).collect(),
            moves,
            height: self.height,
            weight: self.weight,
            sprite_url: self.sprites.front_default,
        }
    }
}

impl ApiMove {
    pub fn into_record(self) -> MoveData {
        // Prefer the English entry, fall back to whatever comes first
        let effect = self
            .effect_entries
            .iter()
            .find(|e| e.language.as_ref().is_some_and(|l| l.name == "en"))
            .or_else(|| self.effect_entries.first())
            .map(|e| e.short_effect.clone());

        let (ailment, ailment_chance) = match self.meta {
            Some(MoveMeta {
                ailment: Some(ailment),
                ailment_chance,
            }) if ailment.name != "none" => (Some(ailment.name), ailment_chance),
            _ => (None, 0),
        };

        MoveData {
            name: self.name,
            move_type: self.kind.name,
            category: self
                .damage_class
                .map(|class| class.name)
                .unwrap_or_else(|| "status".to_string()),
            power: self.power,
            accuracy: self.accuracy,
            effect,
            ailment,
            ailment_chance,
        }
    }
}
