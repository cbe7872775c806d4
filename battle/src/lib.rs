//! One-on-one battle simulation engine.
//!
//! Given two combatant records this crate resolves a reproducible sequence of
//! turns (move selection, hit checks, damage, status effects) until one side
//! faints or the turn cap is reached, producing a structured log.
//!
//! # Overview
//!
//! ```text
//! clash-protocol (wire records)
//!        │
//!        ▼
//! clash-battle (types + engine + simulator) ← THIS CRATE
//!        │
//!        └─> clash-server (tool server, presentation)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Elemental types with the effectiveness chart
//! - [`Status`] - Burn, Freeze, Paralysis, Poison, Sleep
//! - [`CombatantRecord`], [`MoveRecord`] - Validated, immutable battle inputs
//! - [`BattleCombatant`] - Mutable per-battle state
//!
//! ## Engine
//! - [`DamageCalculator`] - Hit check and damage formula
//! - [`StatusEngine`] - Status state machine ([`StandardStatusEngine`])
//! - [`TurnScheduler`] - Action order by effective speed
//! - [`MoveSelector`] - Pluggable move choice ([`TypeAwareSelector`])
//!
//! ## Simulation
//! - [`BattleSimulator`] / [`simulate`] - Turn loop producing a [`BattleResult`]
//! - [`query_effectiveness`] - Stand-alone type matchup query
//!
//! # Example Usage
//!
//! ```ignore
//! use clash_battle::{simulate, BattleConfig, CombatantRecord};
//!
//! let result = simulate(pikachu, squirtle, BattleConfig::default(), 42)?;
//! match result.winner() {
//!     Some(side) => println!("{} wins in {} turns", result.combatant(side).name(), result.turns),
//!     None => println!("No contest after {} turns", result.turns),
//! }
//! ```

pub mod engine;
pub mod error;
pub mod query;
pub mod sim;
pub mod types;

// Re-export main types at crate root for convenience
pub use engine::{
    ActionCheck, BattleEvent, DamageCalculator, DamageOutcome, Lockout, MoveSelector,
    ScriptedSelector, StandardStatusEngine, StatusEngine, TieBreak, TurnScheduler,
    TypeAwareSelector, WakePolicy,
};
pub use error::{BattleError, ValidationError};
pub use query::{
    Matchup, TypeChartRow, immunities, is_immune_to, is_weak_to_any, query_effectiveness,
    query_effectiveness_by_name, resistances, resists_all, type_chart_rows, weaknesses,
};
pub use sim::{
    Action, BattleConfig, BattleOutcome, BattleResult, BattleSimulator, NoMovePolicy, Phase,
    TurnLimitPolicy, TurnRecord, simulate,
};
pub use types::{
    BaseStats, BattleCombatant, CombatantRecord, Effectiveness, MoveCategory, MoveRecord, Status,
    StatusEffectChance, TYPE_CHART, Type,
};

// Re-export the slot identifier used throughout the API
pub use clash_protocol::Side;
