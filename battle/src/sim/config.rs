//! Battle configuration and named policies

use crate::engine::{DamageCalculator, TieBreak, WakePolicy};
use crate::error::ValidationError;

/// What happens when a combatant has no move to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NoMovePolicy {
    /// Record a no-op struggle and keep going
    #[default]
    Struggle,
    /// Fail the battle with `BattleError::NoUsableMove`
    Forfeit,
}

/// Outcome when the turn cap is reached with both combatants standing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TurnLimitPolicy {
    #[default]
    NoContest,
    /// Higher remaining HP fraction wins; equal fractions are no contest
    HpDecision,
}

/// Battle options
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Level used in the damage formula (1-100)
    pub level: u8,

    /// Turn cap (at least 1)
    pub max_turns: u32,

    /// Damage variance bounds, inclusive
    pub random_factor_min: f64,
    pub random_factor_max: f64,

    pub tie_break: TieBreak,
    pub wake_policy: WakePolicy,
    pub no_move_policy: NoMovePolicy,
    pub turn_limit_policy: TurnLimitPolicy,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            level: 50,
            max_turns: 100,
            random_factor_min: 0.85,
            random_factor_max: 1.0,
            tie_break: TieBreak::default(),
            wake_policy: WakePolicy::default(),
            no_move_policy: NoMovePolicy::default(),
            turn_limit_policy: TurnLimitPolicy::default(),
        }
    }
}

impl BattleConfig {
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_random_factor(mut self, min: f64, max: f64) -> Self {
        self.random_factor_min = min;
        self.random_factor_max = max;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_wake_policy(mut self, wake_policy: WakePolicy) -> Self {
        self.wake_policy = wake_policy;
        self
    }

    pub fn with_no_move_policy(mut self, no_move_policy: NoMovePolicy) -> Self {
        self.no_move_policy = no_move_policy;
        self
    }

    pub fn with_turn_limit_policy(mut self, turn_limit_policy: TurnLimitPolicy) -> Self {
        self.turn_limit_policy = turn_limit_policy;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level == 0 || self.level > 100 {
            return Err(ValidationError::InvalidLevel(self.level));
        }

        if self.max_turns == 0 {
            return Err(ValidationError::InvalidMaxTurns);
        }

        let (min, max) = (self.random_factor_min, self.random_factor_max);
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(ValidationError::InvalidRandomFactor { min, max });
        }

        Ok(())
    }

    /// Damage parameters for this configuration
    pub fn damage_calculator(&self) -> DamageCalculator {
        DamageCalculator::new(self.level, self.random_factor_min, self.random_factor_max)
    }
}
