//! Tool and resource listings advertised to callers

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const RESOURCE_DATABASE: &str = "pokemon://database";
pub const RESOURCE_TYPES: &str = "pokemon://types";

/// A readable resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// A callable tool and the JSON schema of its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// All resources the server exposes
pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            uri: RESOURCE_DATABASE.to_string(),
            name: "Pokemon Database".to_string(),
            description: "Pokemon data including stats, types, abilities, and moves".to_string(),
            mime_type: "application/json".to_string(),
        },
        Resource {
            uri: RESOURCE_TYPES.to_string(),
            name: "Pokemon Type Chart".to_string(),
            description: "Type effectiveness chart for Pokemon battles".to_string(),
            mime_type: "application/json".to_string(),
        },
    ]
}

/// All tools the server exposes
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "get_pokemon".to_string(),
            description: "Fetch data for a Pokemon by name or ID: stats, types, abilities, moves."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Pokemon name or ID (e.g., 'pikachu', 'charizard', '25')"
                    }
                },
                "required": ["name"]
            }),
        },
        ToolDescriptor {
            name: "battle_simulate".to_string(),
            description: "Simulate a turn-based battle between two Pokemon with type \
                          effectiveness and status effects. Returns a turn-by-turn log."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pokemon1": {"type": "string", "description": "Name of the first Pokemon"},
                    "pokemon2": {"type": "string", "description": "Name of the second Pokemon"},
                    "seed": {"type": "integer", "description": "Random seed for a reproducible battle"},
                    "level": {"type": "integer", "description": "Battle level (default 50)"},
                    "max_turns": {"type": "integer", "description": "Turn cap (default 100)"}
                },
                "required": ["pokemon1", "pokemon2"]
            }),
        },
        ToolDescriptor {
            name: "get_type_effectiveness".to_string(),
            description: "Calculate the type effectiveness multiplier for an attack.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "attacking_type": {
                        "type": "string",
                        "description": "The type of the attacking move (e.g., 'fire', 'water')"
                    },
                    "defending_types": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "The types of the defending Pokemon (e.g., ['grass', 'poison'])"
                    }
                },
                "required": ["attacking_type", "defending_types"]
            }),
        },
    ]
}
