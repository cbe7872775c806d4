use thiserror::Error;

pub mod catalog;
pub mod records;
pub mod request;
pub mod response;
mod side;

pub use catalog::{RESOURCE_DATABASE, RESOURCE_TYPES, Resource, ToolDescriptor, resources, tools};
pub use records::{MoveData, PokemonData, StatBlock, title_case};
pub use request::{ToolCall, ToolRequest, parse_tool_request};
pub use response::ToolResponse;
pub use side::Side;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid request format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Empty request")]
    EmptyRequest,
}
