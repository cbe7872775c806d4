//! Tool call routing

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clash_battle::{BattleConfig, CombatantRecord, query_effectiveness_by_name, simulate};
use clash_client::{DexClient, FetchError};
use clash_protocol::{
    PokemonData, ToolCall, ToolRequest, ToolResponse, parse_tool_request, resources, tools,
};
use serde_json::{Value, json};

use crate::render;

/// Text and optional structured payload produced by a tool
struct Reply {
    text: String,
    data: Option<Value>,
}

impl Reply {
    fn new(text: impl Into<String>, data: Value) -> Self {
        Self {
            text: text.into(),
            data: Some(data),
        }
    }
}

/// Routes parsed tool calls to the data client and the battle engine
pub struct Dispatcher {
    client: DexClient,
    battle_config: BattleConfig,
    default_seed: Option<u64>,
}

impl Dispatcher {
    pub fn new(client: DexClient, battle_config: BattleConfig, default_seed: Option<u64>) -> Self {
        Self {
            client,
            battle_config,
            default_seed,
        }
    }

    /// Handle one raw request line; never fails, errors become failure responses
    pub async fn handle_line(&self, line: &str) -> ToolResponse {
        match parse_tool_request(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected malformed request");
                ToolResponse::failure(None, format!("Error: {e}"))
            }
        }
    }

    pub async fn handle(&self, request: ToolRequest) -> ToolResponse {
        let ToolRequest { id, call } = request;
        let tool = call.name();
        tracing::info!(tool, "Handling tool call");

        match self.call(call).await {
            Ok(reply) => {
                let response = ToolResponse::success(id, reply.text);
                match reply.data {
                    Some(data) => response.with_data(data),
                    None => response,
                }
            }
            Err(e) => {
                tracing::warn!(tool, error = %e, "Tool call failed");
                ToolResponse::failure(id, format!("Error: {e:#}"))
            }
        }
    }

    async fn call(&self, call: ToolCall) -> Result<Reply> {
        match call {
            ToolCall::GetPokemon { name } => {
                let data = self.fetch(&name).await?;
                Ok(Reply::new(render::pokemon_card(&data), serde_json::to_value(&*data)?))
            }
            ToolCall::BattleSimulate {
                pokemon1,
                pokemon2,
                seed,
                level,
                max_turns,
            } => {
                self.battle(&pokemon1, &pokemon2, seed, level, max_turns)
                    .await
            }
            ToolCall::GetTypeEffectiveness {
                attacking_type,
                defending_types,
            } => {
                let matchup = query_effectiveness_by_name(&attacking_type, &defending_types)?;
                Ok(Reply::new(
                    render::matchup_report(&matchup),
                    serde_json::to_value(&matchup)?,
                ))
            }
            ToolCall::ListTools => {
                let listing = serde_json::to_value(tools())?;
                Ok(Reply::new(serde_json::to_string_pretty(&listing)?, listing))
            }
            ToolCall::ListResources => {
                let listing = serde_json::to_value(resources())?;
                Ok(Reply::new(serde_json::to_string_pretty(&listing)?, listing))
            }
            ToolCall::ReadResource { uri } => {
                let body = crate::resources::read(&uri)?;
                Ok(Reply {
                    text: serde_json::to_string_pretty(&body)?,
                    data: Some(body),
                })
            }
        }
    }

    async fn fetch(&self, name: &str) -> Result<Arc<PokemonData>> {
        match self.client.get_pokemon(name).await {
            Ok(data) => Ok(data),
            Err(e) if matches!(e.downcast_ref::<FetchError>(), Some(FetchError::NotFound(_))) => {
                bail!(
                    "Could not find Pokemon '{}'. Please check the spelling or try a different name.",
                    name
                )
            }
            Err(e) => Err(e),
        }
    }

    async fn battle(
        &self,
        first: &str,
        second: &str,
        seed: Option<u64>,
        level: Option<u8>,
        max_turns: Option<u32>,
    ) -> Result<Reply> {
        let mut config = self.battle_config;
        if let Some(level) = level {
            config = config.with_level(level);
        }
        if let Some(max_turns) = max_turns {
            config = config.with_max_turns(max_turns);
        }
        config.validate()?;

        let seed = seed.or(self.default_seed).unwrap_or_else(seed_from_clock);

        let (first_data, second_data) = tokio::try_join!(self.fetch(first), self.fetch(second))?;

        let first_record = CombatantRecord::from_protocol(&first_data)
            .with_context(|| format!("Invalid data for '{first}'"))?;
        let second_record = CombatantRecord::from_protocol(&second_data)
            .with_context(|| format!("Invalid data for '{second}'"))?;

        tracing::info!(
            first = %first_record.name,
            second = %second_record.name,
            seed,
            "Starting battle"
        );

        let result = tokio::task::spawn_blocking(move || {
            simulate(first_record, second_record, config, seed)
        })
        .await
        .context("Battle task failed")??;

        tracing::info!(
            winner = ?result.winner(),
            turns = result.turns,
            "Battle finished"
        );

        let text = render::battle_report(&result, [&*first_data, &*second_data], &config, seed);
        let data = json!({ "seed": seed, "config": config, "result": result });
        Ok(Reply::new(text, data))
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clash_client::ClientConfig;
    use clash_protocol::{MoveData, StatBlock};

    fn mv(name: &str, ty: &str, category: &str, power: Option<u32>) -> MoveData {
        MoveData {
            name: name.to_string(),
            move_type: ty.to_string(),
            category: category.to_string(),
            power,
            accuracy: Some(100),
            effect: None,
            ailment: None,
            ailment_chance: 0,
        }
    }

    fn pokemon(id: u32, name: &str, ty: &str, speed: u32, moves: Vec<MoveData>) -> PokemonData {
        PokemonData {
            id,
            name: name.to_string(),
            types: vec![ty.to_string()],
            stats: StatBlock {
                hp: 80,
                attack: 80,
                defense: 80,
                special_attack: 80,
                special_defense: 80,
                speed,
            },
            abilities: Vec::new(),
            moves,
            height: 10,
            weight: 100,
            sprite_url: None,
        }
    }

    async fn dispatcher() -> Dispatcher {
        // Nothing listens on the discard port, so a cache miss fails fast
        let client = DexClient::new(ClientConfig::default().with_base_url("http://127.0.0.1:9")).unwrap();
        client
            .insert(pokemon(4, "charmander", "fire", 65, vec![mv("ember", "fire", "special", Some(40))]))
            .await;
        client
            .insert(pokemon(
                1,
                "bulbasaur",
                "grass",
                45,
                vec![
                    mv("vine-whip", "grass", "physical", Some(45)),
                    mv("growl", "normal", "status", None),
                ],
            ))
            .await;
        client.insert(pokemon(999, "broken", "laser", 50, Vec::new())).await;

        Dispatcher::new(client, BattleConfig::default(), None)
    }

    #[tokio::test]
    async fn test_get_pokemon_from_cache() {
        let dispatcher = dispatcher().await;
        let response = dispatcher
            .handle_line(r#"{"id": 1, "tool": "get_pokemon", "arguments": {"name": "Charmander"}}"#)
            .await;

        assert!(response.ok);
        assert_eq!(response.id, Some(json!(1)));
        assert!(response.text.starts_with("**Charmander** (#004)"));
        assert_eq!(response.data.unwrap()["id"], json!(4));
    }

    #[tokio::test]
    async fn test_battle_is_reproducible_with_seed() {
        let dispatcher = dispatcher().await;
        let line = r#"{"id": "b", "tool": "battle_simulate",
                       "arguments": {"pokemon1": "charmander", "pokemon2": "1", "seed": 42}}"#;

        let first = dispatcher.handle_line(line).await;
        let second = dispatcher.handle_line(line).await;

        assert!(first.ok, "{}", first.text);
        assert_eq!(first, second);

        let data = first.data.unwrap();
        assert_eq!(data["seed"], json!(42));
        assert!(data["result"]["turns"].as_u64().unwrap() >= 1);
        assert!(first.text.contains("**BATTLE CONCLUSION**"));
    }

    #[tokio::test]
    async fn test_battle_overrides_and_invalid_level() {
        let dispatcher = dispatcher().await;

        let capped = dispatcher
            .handle_line(r#"{"tool": "battle_simulate", "arguments": {"pokemon1": "charmander", "pokemon2": "bulbasaur", "seed": 3, "max_turns": 1}}"#)
            .await;
        assert!(capped.ok);
        assert_eq!(capped.data.unwrap()["result"]["turns"], json!(1));

        let invalid = dispatcher
            .handle_line(r#"{"tool": "battle_simulate", "arguments": {"pokemon1": "charmander", "pokemon2": "bulbasaur", "level": 0}}"#)
            .await;
        assert!(!invalid.ok);
        assert!(invalid.text.contains("level"));
    }

    #[tokio::test]
    async fn test_battle_with_invalid_record_fails() {
        let dispatcher = dispatcher().await;
        let response = dispatcher
            .handle_line(r#"{"id": 5, "tool": "battle_simulate", "arguments": {"pokemon1": "broken", "pokemon2": "bulbasaur"}}"#)
            .await;

        assert!(!response.ok);
        assert_eq!(response.id, Some(json!(5)));
        assert!(response.text.contains("Invalid data for 'broken'"));
    }

    #[tokio::test]
    async fn test_type_effectiveness() {
        let dispatcher = dispatcher().await;
        let response = dispatcher
            .handle_line(r#"{"tool": "get_type_effectiveness", "arguments": {"attacking_type": "Water", "defending_types": "fire"}}"#)
            .await;

        assert!(response.ok);
        assert!(response.text.contains("**Damage:** 200% of normal"));
        assert_eq!(response.data.unwrap()["multiplier"], json!(2.0));
    }

    #[tokio::test]
    async fn test_unknown_type_is_failure() {
        let dispatcher = dispatcher().await;
        let response = dispatcher
            .handle_line(r#"{"tool": "get_type_effectiveness", "arguments": {"attacking_type": "laser", "defending_types": ["fire"]}}"#)
            .await;

        assert!(!response.ok);
        assert!(response.text.contains("laser"));
    }

    #[tokio::test]
    async fn test_malformed_request_has_null_id() {
        let dispatcher = dispatcher().await;

        for line in ["not json", r#"{"id": 3, "tool": "teleport"}"#, r#"{"id": 4}"#] {
            let response = dispatcher.handle_line(line).await;
            assert!(!response.ok, "{line}");
            assert!(response.id.is_none(), "{line}");
        }
    }

    #[tokio::test]
    async fn test_listings_and_resources() {
        let dispatcher = dispatcher().await;

        let tools = dispatcher.handle_line(r#"{"tool": "list_tools"}"#).await;
        assert_eq!(tools.data.unwrap().as_array().unwrap().len(), 3);

        let listed = dispatcher.handle_line(r#"{"tool": "list_resources"}"#).await;
        assert_eq!(listed.data.unwrap()[0]["uri"], json!("pokemon://database"));

        let chart = dispatcher
            .handle_line(r#"{"tool": "read_resource", "arguments": {"uri": "pokemon://types"}}"#)
            .await;
        assert!(chart.ok);

        let missing = dispatcher
            .handle_line(r#"{"tool": "read_resource", "arguments": {"uri": "pokemon://nope"}}"#)
            .await;
        assert!(!missing.ok);
    }
}
