//! Turn log entries and battle results

use clash_protocol::Side;

use crate::engine::{BattleEvent, Lockout};
use crate::types::{BattleCombatant, Effectiveness};

/// What a combatant did in one log entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "detail", rename_all = "snake_case"))]
pub enum Action {
    /// Used the named move
    Move(String),
    /// Had no move and struggled without effect
    Struggle,
    /// Lost the action to a status
    CouldNotMove(Lockout),
    /// End-of-turn status effects
    EndOfTurn,
}

/// One immutable log entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub turn: u32,
    pub actor: Side,
    pub action: Action,
    pub target: Side,
    pub hit: bool,
    pub damage: u32,

    /// Set when a move was resolved
    pub effectiveness: Option<Effectiveness>,

    /// Target HP after this entry
    pub target_hp: u32,

    /// Events in the order they happened
    pub events: Vec<BattleEvent>,
}

impl TurnRecord {
    /// Whether this entry is a move that missed
    pub fn missed(&self) -> bool {
        matches!(self.action, Action::Move(_)) && !self.hit
    }
}

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "result", rename_all = "snake_case"))]
pub enum BattleOutcome {
    /// The other combatant fainted
    Knockout { winner: Side },
    /// Turn cap reached, decided on remaining HP
    Decision { winner: Side },
    /// Turn cap reached without a winner
    NoContest,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            BattleOutcome::Knockout { winner } | BattleOutcome::Decision { winner } => {
                Some(*winner)
            }
            BattleOutcome::NoContest => None,
        }
    }
}

/// Final result of a battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub outcome: BattleOutcome,

    /// Turns elapsed
    pub turns: u32,

    pub log: Vec<TurnRecord>,

    /// Final state, indexed by slot
    pub combatants: [BattleCombatant; 2],
}

impl BattleResult {
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }

    pub fn combatant(&self, side: Side) -> &BattleCombatant {
        &self.combatants[side.index()]
    }

    /// Total damage dealt by `side`'s moves
    pub fn damage_dealt(&self, side: Side) -> u32 {
        self.log
            .iter()
            .filter(|r| r.actor == side && matches!(r.action, Action::Move(_)))
            .map(|r| r.damage)
            .sum()
    }
}
