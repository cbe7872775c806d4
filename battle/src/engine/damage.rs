//! Hit and damage resolution for a single move use

use rand::{Rng, RngCore};

use crate::types::{BattleCombatant, Effectiveness, MoveCategory, MoveRecord, Status};

/// Result of resolving one move against a defender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    pub hit: bool,
    pub damage: u32,
    pub multiplier: f32,
    pub effectiveness: Effectiveness,

    /// Whether the same-type bonus applied
    pub stab: bool,
}

/// Damage formula parameters fixed for a whole battle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageCalculator {
    pub level: u8,
    pub random_factor_min: f64,
    pub random_factor_max: f64,
}

impl Default for DamageCalculator {
    fn default() -> Self {
        Self {
            level: 50,
            random_factor_min: 0.85,
            random_factor_max: 1.0,
        }
    }
}

impl DamageCalculator {
    pub fn new(level: u8, random_factor_min: f64, random_factor_max: f64) -> Self {
        Self {
            level,
            random_factor_min,
            random_factor_max,
        }
    }

    /// Resolve `mv` used by `attacker` on `defender`. Does not mutate either side
    pub fn resolve(
        &self,
        attacker: &BattleCombatant,
        defender: &BattleCombatant,
        mv: &MoveRecord,
        rng: &mut dyn RngCore,
    ) -> DamageOutcome {
        let multiplier = mv.move_type.effectiveness_multi(defender.types());
        let effectiveness = Effectiveness::from_multiplier(multiplier);
        let stab = attacker.has_type(mv.move_type);

        let hit = rng.gen_range(0..100u32) < u32::from(mv.accuracy);
        if !hit {
            return DamageOutcome {
                hit,
                damage: 0,
                multiplier,
                effectiveness,
                stab,
            };
        }

        let damage = if mv.is_damaging() && multiplier > 0.0 {
            self.damage(attacker, defender, mv, multiplier, stab, rng)
        } else {
            0
        };

        DamageOutcome {
            hit,
            damage,
            multiplier,
            effectiveness,
            stab,
        }
    }

    fn damage(
        &self,
        attacker: &BattleCombatant,
        defender: &BattleCombatant,
        mv: &MoveRecord,
        multiplier: f32,
        stab: bool,
        rng: &mut dyn RngCore,
    ) -> u32 {
        let (attack, defense) = match mv.category {
            MoveCategory::Physical => (attacker.stats().attack, defender.stats().defense),
            _ => (attacker.stats().special_attack, defender.stats().special_defense),
        };

        let level = f64::from(self.level);
        let attack = f64::from(attack);
        let defense = f64::from(defense.max(1));
        let power = f64::from(mv.power);

        let mut damage = ((2.0 * level / 5.0 + 2.0) * power * attack / defense) / 50.0 + 2.0;

        if stab {
            damage *= 1.5;
        }

        damage *= f64::from(multiplier);
        damage *= rng.gen_range(self.random_factor_min..=self.random_factor_max);

        if attacker.status() == Some(Status::Burn) && mv.category == MoveCategory::Physical {
            damage /= 2.0;
        }

        (damage.floor() as u32).max(1)
    }
}
