//! Move selection strategies

use clash_protocol::Side;

use crate::types::{BattleCombatant, MoveRecord};

/// Picks the move a combatant uses this turn
pub trait MoveSelector {
    /// `None` when the actor has no move to use
    fn select<'a>(
        &mut self,
        actor: &'a BattleCombatant,
        opponent: &BattleCombatant,
    ) -> Option<&'a MoveRecord>;
}

/// Prefer super-effective damaging moves, then the highest power.
/// Ties keep list order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeAwareSelector;

impl MoveSelector for TypeAwareSelector {
    fn select<'a>(
        &mut self,
        actor: &'a BattleCombatant,
        opponent: &BattleCombatant,
    ) -> Option<&'a MoveRecord> {
        let moves = actor.moves();
        let super_effective = |mv: &MoveRecord| {
            mv.is_damaging() && mv.move_type.effectiveness_multi(opponent.types()) > 1.0
        };

        let prefer_super_effective = moves.iter().any(super_effective);

        moves
            .iter()
            .filter(|mv| !prefer_super_effective || super_effective(*mv))
            .fold(None, |best: Option<&MoveRecord>, mv| match best {
                Some(b) if b.power >= mv.power => Some(b),
                _ => Some(mv),
            })
    }
}

/// Cycles through fixed move indices per side; for deterministic scenarios
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedSelector {
    scripts: [Vec<usize>; 2],
    cursors: [usize; 2],
}

impl ScriptedSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices into the side's move list, used in order and repeated
    pub fn with_script(mut self, side: Side, indices: Vec<usize>) -> Self {
        self.scripts[side.index()] = indices;
        self
    }
}

impl MoveSelector for ScriptedSelector {
    fn select<'a>(
        &mut self,
        actor: &'a BattleCombatant,
        _opponent: &BattleCombatant,
    ) -> Option<&'a MoveRecord> {
        let slot = actor.side.index();
        let script = &self.scripts[slot];

        // Without a script the first move is always used
        if script.is_empty() {
            return actor.moves().first();
        }

        let index = script[self.cursors[slot] % script.len()];
        self.cursors[slot] += 1;
        actor.moves().get(index)
    }
}
