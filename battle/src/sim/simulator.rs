//! BattleSimulator - owns both combatants and drives the battle

use clash_protocol::Side;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::{BattleConfig, TurnLimitPolicy};
use super::log::{BattleOutcome, BattleResult, TurnRecord};
use crate::engine::{
    DamageCalculator, MoveSelector, StandardStatusEngine, StatusEngine, TurnScheduler,
    TypeAwareSelector,
};
use crate::error::BattleError;
use crate::types::{BattleCombatant, CombatantRecord};

/// Lifecycle of a simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, no turn run yet
    Setup,
    InProgress,
    Complete,
}

/// One battle between two combatants
///
/// The simulator exclusively owns both [`BattleCombatant`]s and its random
/// stream; a fixed seed reproduces the whole battle.
pub struct BattleSimulator {
    pub(crate) config: BattleConfig,
    pub(crate) combatants: [BattleCombatant; 2],
    pub(crate) selector: Box<dyn MoveSelector + Send>,
    pub(crate) status: Box<dyn StatusEngine + Send>,
    pub(crate) scheduler: TurnScheduler,
    pub(crate) calculator: DamageCalculator,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) turn: u32,
    pub(crate) phase: Phase,
    pub(crate) log: Vec<TurnRecord>,
}

impl BattleSimulator {
    /// Validate inputs and set up a battle at full HP. Nothing is created on error
    pub fn new(
        first: CombatantRecord,
        second: CombatantRecord,
        config: BattleConfig,
        seed: u64,
    ) -> Result<Self, BattleError> {
        config.validate()?;
        first.validate()?;
        second.validate()?;

        Ok(Self {
            combatants: [
                BattleCombatant::new(Side::P1, first),
                BattleCombatant::new(Side::P2, second),
            ],
            selector: Box::new(TypeAwareSelector),
            status: Box::new(StandardStatusEngine::new(config.wake_policy)),
            scheduler: TurnScheduler::new(config.tie_break),
            calculator: config.damage_calculator(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            turn: 0,
            phase: Phase::Setup,
            log: Vec::new(),
            config,
        })
    }

    /// Replace the move selection strategy
    pub fn with_selector(mut self, selector: impl MoveSelector + Send + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    /// Replace the status engine
    pub fn with_status_engine(mut self, status: impl StatusEngine + Send + 'static) -> Self {
        self.status = Box::new(status);
        self
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turns completed so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn combatant(&self, side: Side) -> &BattleCombatant {
        &self.combatants[side.index()]
    }

    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    /// Whether a termination condition holds
    pub fn is_finished(&self) -> bool {
        self.combatants.iter().any(|c| !c.is_alive()) || self.turn >= self.config.max_turns
    }

    /// Run turns until the battle ends
    pub fn run(mut self) -> Result<BattleResult, BattleError> {
        tracing::debug!(
            p1 = %self.combatants[0].name(),
            p2 = %self.combatants[1].name(),
            max_turns = self.config.max_turns,
            "battle starting"
        );

        while self.step()? {}

        let result = self.into_result();
        tracing::debug!(turns = result.turns, outcome = ?result.outcome, "battle finished");
        Ok(result)
    }

    /// Outcome given the current state; `None` while the battle is undecided
    pub fn outcome(&self) -> Option<BattleOutcome> {
        let [p1, p2] = &self.combatants;

        match (p1.is_alive(), p2.is_alive()) {
            (true, false) => Some(BattleOutcome::Knockout { winner: Side::P1 }),
            (false, true) => Some(BattleOutcome::Knockout { winner: Side::P2 }),
            (false, false) => Some(BattleOutcome::NoContest),
            (true, true) if self.turn < self.config.max_turns => None,
            (true, true) => Some(match self.config.turn_limit_policy {
                TurnLimitPolicy::NoContest => BattleOutcome::NoContest,
                TurnLimitPolicy::HpDecision => hp_decision(p1, p2),
            }),
        }
    }

    /// Consume the simulator into its result
    pub fn into_result(self) -> BattleResult {
        let outcome = self.outcome().unwrap_or(BattleOutcome::NoContest);
        BattleResult {
            outcome,
            turns: self.turn,
            log: self.log,
            combatants: self.combatants,
        }
    }
}

/// Compare remaining HP fractions without floating point
fn hp_decision(p1: &BattleCombatant, p2: &BattleCombatant) -> BattleOutcome {
    let left = u64::from(p1.hp()) * u64::from(p2.max_hp);
    let right = u64::from(p2.hp()) * u64::from(p1.max_hp);

    match left.cmp(&right) {
        std::cmp::Ordering::Greater => BattleOutcome::Decision { winner: Side::P1 },
        std::cmp::Ordering::Less => BattleOutcome::Decision { winner: Side::P2 },
        std::cmp::Ordering::Equal => BattleOutcome::NoContest,
    }
}

/// Simulate a full battle between two combatants
pub fn simulate(
    first: CombatantRecord,
    second: CombatantRecord,
    config: BattleConfig,
    seed: u64,
) -> Result<BattleResult, BattleError> {
    BattleSimulator::new(first, second, config, seed)?.run()
}

/// Attacker and defender borrowed mutably at once
pub(crate) fn pair_mut(
    combatants: &mut [BattleCombatant; 2],
    actor: Side,
) -> (&mut BattleCombatant, &mut BattleCombatant) {
    let (left, right) = combatants.split_at_mut(1);
    match actor {
        Side::P1 => (&mut left[0], &mut right[0]),
        Side::P2 => (&mut right[0], &mut left[0]),
    }
}
