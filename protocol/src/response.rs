//! Tool responses sent back to the caller

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a tool call: rendered text plus optional structured data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Id copied from the request (null when the request could not be parsed)
    pub id: Option<Value>,

    /// Whether the tool call succeeded
    pub ok: bool,

    /// Human-readable rendering
    pub text: String,

    /// Structured payload, if the tool produces one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ToolResponse {
    pub fn success(id: Option<Value>, text: impl Into<String>) -> Self {
        Self {
            id,
            ok: true,
            text: text.into(),
            data: None,
        }
    }

    pub fn failure(id: Option<Value>, message: impl Into<String>) -> Self {
        Self {
            id,
            ok: false,
            text: message.into(),
            data: None,
        }
    }

    /// Attach a structured payload
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Serialize to wire format: one JSON object on a single line
    pub fn to_wire_format(&self) -> String {
        let mut object = serde_json::Map::new();
        object.insert("id".to_string(), self.id.clone().unwrap_or(Value::Null));
        object.insert("ok".to_string(), Value::Bool(self.ok));
        object.insert("text".to_string(), Value::String(self.text.clone()));
        if let Some(data) = &self.data {
            object.insert("data".to_string(), data.clone());
        }
        Value::Object(object).to_string()
    }
}
