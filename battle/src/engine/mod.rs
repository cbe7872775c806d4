//! Battle mechanics used by the simulator

mod damage;
mod scheduler;
mod selector;
mod status;

pub use damage::{DamageCalculator, DamageOutcome};
pub use scheduler::{TieBreak, TurnScheduler};
pub use selector::{MoveSelector, ScriptedSelector, TypeAwareSelector};
pub use status::{
    ActionCheck, BattleEvent, Lockout, StandardStatusEngine, StatusEngine, WakePolicy,
};
