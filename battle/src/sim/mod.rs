//! Battle orchestration: turn loop, log and result

mod config;
mod log;
mod simulator;
mod turn;

pub use config::{BattleConfig, NoMovePolicy, TurnLimitPolicy};
pub use log::{Action, BattleOutcome, BattleResult, TurnRecord};
pub use simulator::{BattleSimulator, Phase, simulate};
