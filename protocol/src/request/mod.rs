
use crate::ParseError;
use anyhow::Result;
use serde_json::{Map, Value};

/// Tool invocations a caller can make
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    /// get_pokemon {name}
    GetPokemon { name: String },

    /// battle_simulate {pokemon1, pokemon2, seed?, level?, max_turns?}
    BattleSimulate {
        pokemon1: String,
        pokemon2: String,
        seed: Option<u64>,
        level: Option<u8>,
        max_turns: Option<u32>,
    },

    /// get_type_effectiveness {attacking_type, defending_types}
    GetTypeEffectiveness {
        attacking_type: String,
        defending_types: Vec<String>,
    },

    /// list_tools
    ListTools,

    /// list_resources
    ListResources,

    /// read_resource {uri}
    ReadResource { uri: String },
}

impl ToolCall {
    /// Tool name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetPokemon { .. } => "get_pokemon",
            Self::BattleSimulate { .. } => "battle_simulate",
            Self::GetTypeEffectiveness { .. } => "get_type_effectiveness",
            Self::ListTools => "list_tools",
            Self::ListResources => "list_resources",
            Self::ReadResource { .. } => "read_resource",
        }
    }
}

/// A tool call with its correlation id
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRequest {
    /// Caller-chosen id echoed back in the response
    pub id: Option<Value>,
    pub call: ToolCall,
}

/// Parse one request line: {"id": .., "tool": "..", "arguments": {..}}
pub fn parse_tool_request(line: &str) -> Result<ToolRequest> {
    let line = line.trim();

    if line.is_empty() {
        return Err(ParseError::EmptyRequest.into());
    }

    let value: Value =
        serde_json::from_str(line).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| ParseError::InvalidFormat("request must be a JSON object".to_string()))?;

    let id = object.get("id").filter(|v| !v.is_null()).cloned();

    let tool = object
        .get("tool")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::MissingField("tool".to_string()))?;

    let empty = Map::new();
    let args = match object.get("arguments") {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(
                ParseError::InvalidFormat("arguments must be a JSON object".to_string()).into(),
            );
        }
    };

    let call = match tool {
        "get_pokemon" => parse_get_pokemon(args)?,
        "battle_simulate" => parse_battle_simulate(args)?,
        "get_type_effectiveness" => parse_type_effectiveness(args)?,
        "list_tools" => ToolCall::ListTools,
        "list_resources" => ToolCall::ListResources,
        "read_resource" => ToolCall::ReadResource {
            uri: required_str(args, "uri")?,
        },
        other => return Err(ParseError::UnknownTool(other.to_string()).into()),
    };

    Ok(ToolRequest { id, call })
}

fn parse_get_pokemon(args: &Map<String, Value>) -> Result<ToolCall> {
    Ok(ToolCall::GetPokemon {
        name: required_str(args, "name")?,
    })
}

fn parse_battle_simulate(args: &Map<String, Value>) -> Result<ToolCall> {
    let pokemon1 = required_str(args, "pokemon1")?;
    let pokemon2 = required_str(args, "pokemon2")?;

    let level = optional_u64(args, "level")?
        .map(|n| {
            u8::try_from(n).map_err(|_| ParseError::InvalidFormat(format!("level out of range: {n}")))
        })
        .transpose()?;

    let max_turns = optional_u64(args, "max_turns")?
        .map(|n| {
            u32::try_from(n)
                .map_err(|_| ParseError::InvalidFormat(format!("max_turns out of range: {n}")))
        })
        .transpose()?;

    Ok(ToolCall::BattleSimulate {
        pokemon1,
        pokemon2,
        seed: optional_u64(args, "seed")?,
        level,
        max_turns,
    })
}

fn parse_type_effectiveness(args: &Map<String, Value>) -> Result<ToolCall> {
    let attacking_type = required_str(args, "attacking_type")?.to_lowercase();

    // A bare string is accepted as a single defending type
    let defending_types: Vec<String> = match args.get("defending_types") {
        Some(Value::String(s)) => vec![s.trim().to_lowercase()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|s| s.trim().to_lowercase())
                    .ok_or_else(|| {
                        ParseError::InvalidFormat("defending_types must hold strings".to_string())
                    })
            })
            .collect::<Result<_, _>>()?,
        _ => Vec::new(),
    };

    let defending_types: Vec<String> = defending_types.into_iter().filter(|t| !t.is_empty()).collect();

    if defending_types.is_empty() {
        return Err(ParseError::MissingField("defending_types".to_string()).into());
    }

    Ok(ToolCall::GetTypeEffectiveness {
        attacking_type,
        defending_types,
    })
}

/// Fetch a required, non-blank string argument
fn required_str(args: &Map<String, Value>, field: &str) -> Result<String> {
    let value = args
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");

    if value.is_empty() {
        return Err(ParseError::MissingField(field.to_string()).into());
    }

    Ok(value.to_string())
}

fn optional_u64(args: &Map<String, Value>, field: &str) -> Result<Option<u64>> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| ParseError::InvalidFormat(format!("{field} must be a non-negative integer")).into()),
    }
}
