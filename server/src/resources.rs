//! Readable resources

use anyhow::{Result, bail};
use clash_battle::type_chart_rows;
use clash_protocol::{RESOURCE_DATABASE, RESOURCE_TYPES};
use serde_json::{Map, Value, json};

/// JSON body of a resource
pub fn read(uri: &str) -> Result<Value> {
    match uri {
        RESOURCE_DATABASE => Ok(database()),
        RESOURCE_TYPES => Ok(type_chart()),
        other => bail!("Unknown resource URI: {other}"),
    }
}

fn database() -> Value {
    json!({
        "description": "Pokemon Database Resource",
        "usage": "Use the get_pokemon tool to fetch specific Pokemon data",
        "available_data": [
            "Base stats (HP, Attack, Defense, Sp. Attack, Sp. Defense, Speed)",
            "Types (Fire, Water, Grass, etc.)",
            "Abilities",
            "Moves and their effects",
            "Height and weight",
            "Sprite images"
        ],
        "example_usage": {"tool": "get_pokemon", "arguments": {"name": "pikachu"}}
    })
}

fn type_chart() -> Value {
    let names = |types: &[clash_battle::Type]| -> Vec<&'static str> {
        types.iter().map(|t| t.to_protocol()).collect()
    };

    let chart: Map<String, Value> = type_chart_rows()
        .into_iter()
        .map(|row| {
            let entry = json!({
                "super_effective": names(&row.super_effective),
                "not_very_effective": names(&row.not_very_effective),
                "no_effect": names(&row.no_effect),
            });
            (row.attacking.to_protocol().to_string(), entry)
        })
        .collect();

    json!({
        "description": "Pokemon Type Effectiveness Chart",
        "type_chart": chart,
        "usage": "Use the get_type_effectiveness tool to calculate damage multipliers",
        "effectiveness_values": {
            "2.0": "Super effective",
            "1.0": "Normal damage",
            "0.5": "Not very effective",
            "0.0": "No effect"
        }
    })
}
