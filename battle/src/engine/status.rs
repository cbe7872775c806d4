//! Status condition state machine
//!
//! ```text
//! none ──infliction roll──▶ burn | poison | paralysis | sleep(1..=3) | freeze
//!   ▲                                                      │             │
//!   └────────────── wake (counter hits 0) / thaw (20%) / cure ◀──────────┘
//! ```

use clash_protocol::Side;
use rand::{Rng, RngCore};

use crate::types::{BattleCombatant, Status, StatusEffectChance};

/// Reason a combatant lost its action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Lockout {
    Paralyzed,
    Asleep,
    Frozen,
}

impl Lockout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lockout::Paralyzed => "fully paralyzed",
            Lockout::Asleep => "fast asleep",
            Lockout::Frozen => "frozen solid",
        }
    }
}

/// Whether a sleeper acts on the turn it wakes up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WakePolicy {
    /// Waking still costs the turn: sleep(n) locks out exactly n actions
    #[default]
    LoseTurn,
    /// Waking happens before the action and the combatant acts normally
    ActOnWake,
}

/// Something that happened to a combatant, in log order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum BattleEvent {
    Inflicted { side: Side, status: Status },
    Residual { side: Side, status: Status, damage: u32 },
    WokeUp { side: Side },
    Thawed { side: Side },
    Cured { side: Side, status: Status },
    Fainted { side: Side },
}

/// Outcome of the pre-action gate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCheck {
    /// Set when the combatant cannot act this turn
    pub lockout: Option<Lockout>,

    /// Transitions that happened during the check (waking, thawing)
    pub events: Vec<BattleEvent>,
}

impl ActionCheck {
    pub fn can_act(&self) -> bool {
        self.lockout.is_none()
    }
}

/// Status behavior the simulator depends on
pub trait StatusEngine {
    /// Roll a move's status effect against `target`; a no-op when already afflicted
    fn try_inflict(
        &self,
        target: &mut BattleCombatant,
        effect: &StatusEffectChance,
        rng: &mut dyn RngCore,
    ) -> Option<BattleEvent>;

    /// Gate a combatant before it selects a move
    fn can_act(&self, combatant: &mut BattleCombatant, rng: &mut dyn RngCore) -> ActionCheck;

    /// Periodic effects after both sides have acted
    fn apply_end_of_turn(&self, combatant: &mut BattleCombatant) -> Vec<BattleEvent>;

    /// Clear any status
    fn cure(&self, combatant: &mut BattleCombatant) -> Option<BattleEvent> {
        combatant.clear_status().map(|status| BattleEvent::Cured {
            side: combatant.side,
            status,
        })
    }
}

/// Burn, poison, paralysis, sleep and freeze with the classic rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardStatusEngine {
    pub wake_policy: WakePolicy,
}

/// Chance (percent) a paralyzed combatant loses its turn
const PARALYSIS_LOCKOUT_CHANCE: u32 = 25;
/// Chance (percent) a frozen combatant thaws before acting
const THAW_CHANCE: u32 = 20;

impl StandardStatusEngine {
    pub fn new(wake_policy: WakePolicy) -> Self {
        Self { wake_policy }
    }

    /// Residual damage for the end of turn, if the status deals any
    pub fn residual_damage(status: Status, max_hp: u32) -> Option<u32> {
        match status {
            Status::Burn => Some((max_hp / 16).max(1)),
            Status::Poison => Some((max_hp / 8).max(1)),
            Status::Paralysis | Status::Sleep | Status::Freeze => None,
        }
    }

    fn check_sleep(&self, combatant: &mut BattleCombatant) -> ActionCheck {
        let side = combatant.side;
        let remaining = combatant.status_turns().saturating_sub(1);
        combatant.set_status_turns(remaining);

        if remaining > 0 {
            return ActionCheck {
                lockout: Some(Lockout::Asleep),
                events: Vec::new(),
            };
        }

        combatant.clear_status();
        let lockout = match self.wake_policy {
            WakePolicy::LoseTurn => Some(Lockout::Asleep),
            WakePolicy::ActOnWake => None,
        };

        ActionCheck {
            lockout,
            events: vec![BattleEvent::WokeUp { side }],
        }
    }
}

impl StatusEngine for StandardStatusEngine {
    fn try_inflict(
        &self,
        target: &mut BattleCombatant,
        effect: &StatusEffectChance,
        rng: &mut dyn RngCore,
    ) -> Option<BattleEvent> {
        if target.status().is_some() {
            return None;
        }

        if rng.gen_range(0..100u32) >= u32::from(effect.chance) {
            return None;
        }

        let turns = match effect.status {
            Status::Sleep => rng.gen_range(1..=3u8),
            _ => 0,
        };

        target.inflict(effect.status, turns).then_some(BattleEvent::Inflicted {
            side: target.side,
            status: effect.status,
        })
    }

    fn can_act(&self, combatant: &mut BattleCombatant, rng: &mut dyn RngCore) -> ActionCheck {
        match combatant.status() {
            Some(Status::Paralysis) => {
                let lockout = (rng.gen_range(0..100u32) < PARALYSIS_LOCKOUT_CHANCE)
                    .then_some(Lockout::Paralyzed);
                ActionCheck {
                    lockout,
                    events: Vec::new(),
                }
            }
            Some(Status::Sleep) => self.check_sleep(combatant),
            Some(Status::Freeze) => {
                if rng.gen_range(0..100u32) < THAW_CHANCE {
                    combatant.clear_status();
                    ActionCheck {
                        lockout: None,
                        events: vec![BattleEvent::Thawed {
                            side: combatant.side,
                        }],
                    }
                } else {
                    ActionCheck {
                        lockout: Some(Lockout::Frozen),
                        events: Vec::new(),
                    }
                }
            }
            Some(Status::Burn) | Some(Status::Poison) | None => ActionCheck::default(),
        }
    }

    fn apply_end_of_turn(&self, combatant: &mut BattleCombatant) -> Vec<BattleEvent> {
        let Some(status) = combatant.status() else {
            return Vec::new();
        };
        let Some(damage) = Self::residual_damage(status, combatant.max_hp) else {
            return Vec::new();
        };

        let side = combatant.side;
        let damage = combatant.take_damage(damage);
        let mut events = vec![BattleEvent::Residual {
            side,
            status,
            damage,
        }];

        if !combatant.is_alive() {
            events.push(BattleEvent::Fainted { side });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, CombatantRecord, Type};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn combatant(hp: u32) -> BattleCombatant {
        BattleCombatant::new(
            Side::P1,
            CombatantRecord::new("test", vec![Type::Normal], BaseStats::new(hp, 50, 50, 50, 50, 50)),
        )
    }

    #[test]
    fn test_burn_residual_scenario() {
        let mut c = combatant(160);
        c.take_damage(80);
        c.inflict(Status::Burn, 0);

        let events = StandardStatusEngine::default().apply_end_of_turn(&mut c);
        assert_eq!(
            events,
            vec![BattleEvent::Residual {
                side: Side::P1,
                status: Status::Burn,
                damage: 10
            }]
        );
        assert_eq!(c.hp(), 70);
    }

    #[test]
    fn test_poison_residual_and_minimum() {
        let mut c = combatant(100);
        c.inflict(Status::Poison, 0);
        StandardStatusEngine::default().apply_end_of_turn(&mut c);
        assert_eq!(c.hp(), 88);

        let mut tiny = combatant(5);
        tiny.inflict(Status::Burn, 0);
        StandardStatusEngine::default().apply_end_of_turn(&mut tiny);
        assert_eq!(tiny.hp(), 4);
    }

    #[test]
    fn test_residual_can_faint() {
        let mut c = combatant(160);
        c.take_damage(155);
        c.inflict(Status::Burn, 0);

        let events = StandardStatusEngine::default().apply_end_of_turn(&mut c);
        assert_eq!(c.hp(), 0);
        assert_eq!(events.last(), Some(&BattleEvent::Fainted { side: Side::P1 }));
    }

    #[test]
    fn test_no_residual_for_other_statuses() {
        let engine = StandardStatusEngine::default();
        for status in [Status::Paralysis, Status::Sleep, Status::Freeze] {
            let mut c = combatant(100);
            c.inflict(status, 2);
            assert!(engine.apply_end_of_turn(&mut c).is_empty());
            assert_eq!(c.hp(), 100);
        }
    }

    #[test]
    fn test_infliction_rejected_when_afflicted() {
        let engine = StandardStatusEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut c = combatant(100);
        c.inflict(Status::Poison, 0);

        let effect = StatusEffectChance {
            status: Status::Burn,
            chance: 100,
        };
        assert!(engine.try_inflict(&mut c, &effect, &mut rng).is_none());
        assert_eq!(c.status(), Some(Status::Poison));
    }

    #[test]
    fn test_sleep_counter_drawn_in_range() {
        let engine = StandardStatusEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let effect = StatusEffectChance {
            status: Status::Sleep,
            chance: 100,
        };

        for _ in 0..50 {
            let mut c = combatant(100);
            let event = engine.try_inflict(&mut c, &effect, &mut rng);
            assert_eq!(
                event,
                Some(BattleEvent::Inflicted {
                    side: Side::P1,
                    status: Status::Sleep
                })
            );
            assert!((1..=3).contains(&c.status_turns()));
        }
    }

    #[test]
    fn test_sleep_lose_turn_policy() {
        let engine = StandardStatusEngine::new(WakePolicy::LoseTurn);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut c = combatant(100);
        c.inflict(Status::Sleep, 3);

        let first = engine.can_act(&mut c, &mut rng);
        assert_eq!(first.lockout, Some(Lockout::Asleep));
        assert_eq!(c.status_turns(), 2);

        let second = engine.can_act(&mut c, &mut rng);
        assert!(!second.can_act());
        assert_eq!(c.status_turns(), 1);

        let third = engine.can_act(&mut c, &mut rng);
        assert!(!third.can_act());
        assert_eq!(third.events, vec![BattleEvent::WokeUp { side: Side::P1 }]);
        assert_eq!(c.status(), None);

        assert!(engine.can_act(&mut c, &mut rng).can_act());
    }

    #[test]
    fn test_sleep_act_on_wake_policy() {
        let engine = StandardStatusEngine::new(WakePolicy::ActOnWake);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut c = combatant(100);
        c.inflict(Status::Sleep, 2);

        assert!(!engine.can_act(&mut c, &mut rng).can_act());
        let waking = engine.can_act(&mut c, &mut rng);
        assert!(waking.can_act());
        assert_eq!(waking.events, vec![BattleEvent::WokeUp { side: Side::P1 }]);
    }

    #[test]
    fn test_paralysis_persists_and_sometimes_locks() {
        let engine = StandardStatusEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut c = combatant(100);
        c.inflict(Status::Paralysis, 0);

        let locked = (0..400)
            .filter(|_| !engine.can_act(&mut c, &mut rng).can_act())
            .count();
        assert!(locked > 50 && locked < 150, "{locked}");
        assert_eq!(c.status(), Some(Status::Paralysis));
    }

    #[test]
    fn test_freeze_eventually_thaws_and_acts() {
        let engine = StandardStatusEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut c = combatant(100);
        c.inflict(Status::Freeze, 0);

        let mut checks = 0;
        loop {
            checks += 1;
            let check = engine.can_act(&mut c, &mut rng);
            if check.can_act() {
                assert_eq!(check.events, vec![BattleEvent::Thawed { side: Side::P1 }]);
                break;
            }
            assert_eq!(check.lockout, Some(Lockout::Frozen));
            assert!(checks < 200);
        }
        assert_eq!(c.status(), None);
    }

    #[test]
    fn test_cure() {
        let engine = StandardStatusEngine::default();
        let mut c = combatant(100);
        assert!(engine.cure(&mut c).is_none());

        c.inflict(Status::Sleep, 2);
        assert_eq!(
            engine.cure(&mut c),
            Some(BattleEvent::Cured {
                side: Side::P1,
                status: Status::Sleep
            })
        );
        assert_eq!(c.status_turns(), 0);
    }
}
