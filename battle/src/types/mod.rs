//! Domain types for battle simulation

mod moves;
mod pokemon;
mod pokemon_type;
mod stats;
mod status;

pub use moves::{MoveCategory, MoveRecord, StatusEffectChance};
pub use pokemon::{BattleCombatant, CombatantRecord};
pub use pokemon_type::{Effectiveness, TYPE_CHART, Type};
pub use stats::BaseStats;
pub use status::Status;
