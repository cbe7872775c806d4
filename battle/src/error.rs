//! Error types for battle construction and execution

use clash_protocol::Side;
use thiserror::Error;

use crate::types::Type;

/// Malformed input rejected before any battle state exists
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{name}: max HP must be greater than 0")]
    ZeroHp { name: String },

    #[error("{name}: combatant has no types")]
    NoTypes { name: String },

    #[error("{name}: combatant has {count} types, at most 2 allowed")]
    TooManyTypes { name: String, count: usize },

    #[error("{name}: duplicate type {ty}")]
    DuplicateType { name: String, ty: Type },

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("expected 1 or 2 defending types, got {0}")]
    DefendingTypeCount(usize),

    #[error("defending type {0} listed twice")]
    DuplicateDefendingType(Type),

    #[error("move {name}: accuracy {accuracy} is outside 0-100")]
    AccuracyOutOfRange { name: String, accuracy: u32 },

    #[error("move {name}: status chance {chance} is outside 0-100")]
    ChanceOutOfRange { name: String, chance: u32 },

    #[error("move {name}: non-damaging move has power {power}")]
    StatusMoveWithPower { name: String, power: u32 },

    #[error("move {name}: unknown category {category}")]
    UnknownCategory { name: String, category: String },

    #[error("level {0} is outside 1-100")]
    InvalidLevel(u8),

    #[error("max_turns must be at least 1")]
    InvalidMaxTurns,

    #[error("random factor range [{min}, {max}] is invalid")]
    InvalidRandomFactor { min: f64, max: f64 },
}

/// Failures surfaced by a battle run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{name} ({side}) has no usable move")]
    NoUsableMove { side: Side, name: String },
}
