//! Combatant and move records as they travel over the wire
//!
//! These are the loosely-typed shapes produced by the data collaborator.
//! Validation into strongly-typed battle records happens in `clash-battle`.

use serde::{Deserialize, Serialize};

/// Base stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatBlock {
    /// Sum of all six base stats
    pub fn total(&self) -> u64 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }
}

/// A move as reported by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,

    /// Elemental type name ("fire", "water", ...)
    #[serde(rename = "type")]
    pub move_type: String,

    /// Damage class: "physical", "special" or "status"
    pub category: String,

    /// Base power (None for non-damaging moves)
    #[serde(default)]
    pub power: Option<u32>,

    /// Percent chance to hit (None means the move never misses)
    #[serde(default)]
    pub accuracy: Option<u32>,

    /// Short effect description
    #[serde(default)]
    pub effect: Option<String>,

    /// Status ailment the move can inflict ("burn", "paralysis", ...)
    #[serde(default)]
    pub ailment: Option<String>,

    /// Percent chance the ailment triggers (0 for guaranteed status moves)
    #[serde(default)]
    pub ailment_chance: u32,
}

impl MoveData {
    /// Power with the "no power" case folded to 0
    pub fn power_or_zero(&self) -> u32 {
        self.power.unwrap_or(0)
    }

    /// Accuracy with the "never misses" case folded to 100
    pub fn accuracy_or_full(&self) -> u32 {
        self.accuracy.unwrap_or(100)
    }
}

/// A combatant as reported by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonData {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub stats: StatBlock,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub moves: Vec<MoveData>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprite_url: Option<String>,
}

impl PokemonData {
    /// Name formatted for display ("mr-mime" -> "Mr Mime")
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }
}

/// Title-case a hyphenated identifier ("thunder-punch" -> "Thunder Punch")
pub fn title_case(s: &str) -> String {
    s.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_data_defaults() {
        let json = r#"{"name":"growl","type":"normal","category":"status"}"#;
        let data: MoveData = serde_json::from_str(json).unwrap();

        assert_eq!(data.move_type, "normal");
        assert_eq!(data.power_or_zero(), 0);
        assert_eq!(data.accuracy_or_full(), 100);
        assert!(data.ailment.is_none());
        assert_eq!(data.ailment_chance, 0);
    }

    #[test]
    fn test_pokemon_data_parse() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "types": ["electric"],
            "stats": {"hp": 35, "attack": 55, "defense": 40,
                      "special_attack": 50, "special_defense": 50, "speed": 90},
            "abilities": ["static"],
            "moves": [{"name": "thunder-shock", "type": "electric", "category": "special",
                       "power": 40, "accuracy": 100, "ailment": "paralysis", "ailment_chance": 10}]
        }"#;
        let data: PokemonData = serde_json::from_str(json).unwrap();

        assert_eq!(data.id, 25);
        assert_eq!(data.stats.total(), 320);
        assert_eq!(data.moves[0].ailment.as_deref(), Some("paralysis"));
        assert_eq!(data.height, 0);
    }

    #[test]
    fn test_stat_total_does_not_wrap() {
        let stats = StatBlock {
            hp: u32::MAX,
            speed: u32::MAX,
            ..StatBlock::default()
        };
        assert_eq!(stats.total(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("thunder-punch"), "Thunder Punch");
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case("mr-mime"), "Mr Mime");
        assert_eq!(title_case(""), "");
    }
}
