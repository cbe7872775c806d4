//! Turn order by effective speed

use clash_protocol::Side;
use rand::{Rng, RngCore};

use crate::types::BattleCombatant;

/// How equal effective speeds are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieBreak {
    /// Slot one always moves first
    #[default]
    SlotOrder,
    /// Seeded coin flip each turn
    CoinFlip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnScheduler {
    pub tie_break: TieBreak,
}

impl TurnScheduler {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Order in which the two slots act this turn
    pub fn order(&self, combatants: &[BattleCombatant; 2], rng: &mut dyn RngCore) -> [Side; 2] {
        let first = combatants[0].effective_speed();
        let second = combatants[1].effective_speed();

        if first > second {
            [Side::P1, Side::P2]
        } else if second > first {
            [Side::P2, Side::P1]
        } else {
            match self.tie_break {
                TieBreak::SlotOrder => [Side::P1, Side::P2],
                TieBreak::CoinFlip if rng.gen_bool(0.5) => [Side::P2, Side::P1],
                TieBreak::CoinFlip => [Side::P1, Side::P2],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, CombatantRecord, Status, Type};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pair(speed1: u32, speed2: u32) -> [BattleCombatant; 2] {
        let make = |side, speed| {
            BattleCombatant::new(
                side,
                CombatantRecord::new("test", vec![Type::Normal], BaseStats::new(100, 50, 50, 50, 50, speed)),
            )
        };
        [make(Side::P1, speed1), make(Side::P2, speed2)]
    }

    #[test]
    fn test_faster_moves_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let scheduler = TurnScheduler::default();
        assert_eq!(scheduler.order(&pair(100, 80), &mut rng), [Side::P1, Side::P2]);
        assert_eq!(scheduler.order(&pair(80, 100), &mut rng), [Side::P2, Side::P1]);
    }

    #[test]
    fn test_paralysis_changes_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut combatants = pair(100, 30);
        combatants[0].inflict(Status::Paralysis, 0);

        // 25 < 30
        assert_eq!(
            TurnScheduler::default().order(&combatants, &mut rng),
            [Side::P2, Side::P1]
        );
        assert_eq!(combatants[0].stats().speed, 100);
    }

    #[test]
    fn test_slot_order_tie_break() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let scheduler = TurnScheduler::new(TieBreak::SlotOrder);
        for _ in 0..20 {
            assert_eq!(scheduler.order(&pair(90, 90), &mut rng), [Side::P1, Side::P2]);
        }
    }

    #[test]
    fn test_coin_flip_is_reproducible() {
        let scheduler = TurnScheduler::new(TieBreak::CoinFlip);
        let combatants = pair(90, 90);
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..32)
                .map(|_| scheduler.order(&combatants, &mut rng)[0])
                .collect::<Vec<_>>()
        };

        let first = run(42);
        assert_eq!(first, run(42));
        assert!(first.contains(&Side::P1));
        assert!(first.contains(&Side::P2));
    }
}
