//! Per-turn execution for BattleSimulator

use clash_protocol::Side;

use super::config::NoMovePolicy;
use super::log::{Action, TurnRecord};
use super::simulator::{BattleSimulator, Phase, pair_mut};
use crate::engine::{BattleEvent, Lockout};
use crate::error::BattleError;

impl BattleSimulator {
    /// Run one full turn. Returns false once the battle is over
    pub fn step(&mut self) -> Result<bool, BattleError> {
        if self.phase == Phase::Complete {
            return Ok(false);
        }
        if self.is_finished() {
            self.phase = Phase::Complete;
            return Ok(false);
        }
        self.phase = Phase::InProgress;

        let turn = self.turn + 1;
        let order = self.scheduler.order(&self.combatants, &mut self.rng);

        for actor in order {
            if !self.combatants[actor.index()].is_alive() {
                continue;
            }

            self.take_action(turn, actor)?;

            if !self.combatants[actor.opponent().index()].is_alive() {
                break;
            }
        }

        if self.combatants.iter().all(|c| c.is_alive()) {
            self.end_of_turn(turn);
        }

        self.turn = turn;

        if self.is_finished() {
            self.phase = Phase::Complete;
            return Ok(false);
        }
        Ok(true)
    }

    fn take_action(&mut self, turn: u32, actor: Side) -> Result<(), BattleError> {
        let target = actor.opponent();
        let (attacker, defender) = pair_mut(&mut self.combatants, actor);

        let check = self.status.can_act(attacker, &mut self.rng);
        let mut events = check.events;

        if let Some(lockout) = check.lockout {
            tracing::trace!(turn, side = %actor, reason = lockout.as_str(), "could not move");
            self.log
                .push(lockout_record(turn, actor, lockout, defender.hp(), events));
            return Ok(());
        }

        let Some(mv) = self.selector.select(attacker, defender).cloned() else {
            return match self.config.no_move_policy {
                NoMovePolicy::Struggle => {
                    tracing::trace!(turn, side = %actor, "no usable move, struggling");
                    self.log.push(TurnRecord {
                        turn,
                        actor,
                        action: Action::Struggle,
                        target,
                        hit: false,
                        damage: 0,
                        effectiveness: None,
                        target_hp: defender.hp(),
                        events,
                    });
                    Ok(())
                }
                NoMovePolicy::Forfeit => Err(BattleError::NoUsableMove {
                    side: actor,
                    name: attacker.name().to_string(),
                }),
            };
        };

        let outcome = self.calculator.resolve(attacker, defender, &mv, &mut self.rng);
        let damage = defender.take_damage(outcome.damage);

        if outcome.hit
            && outcome.multiplier > 0.0
            && defender.is_alive()
            && let Some(effect) = &mv.effect
            && let Some(event) = self.status.try_inflict(defender, effect, &mut self.rng)
        {
            events.push(event);
        }

        if !defender.is_alive() {
            tracing::debug!(turn, side = %target, name = %defender.name(), "fainted");
            events.push(BattleEvent::Fainted { side: target });
        }

        self.log.push(TurnRecord {
            turn,
            actor,
            action: Action::Move(mv.name),
            target,
            hit: outcome.hit,
            damage,
            effectiveness: Some(outcome.effectiveness),
            target_hp: defender.hp(),
            events,
        });

        Ok(())
    }

    /// Residual effects in slot order; stops at the first faint
    fn end_of_turn(&mut self, turn: u32) {
        for side in Side::BOTH {
            let combatant = &mut self.combatants[side.index()];
            let events = self.status.apply_end_of_turn(combatant);
            if events.is_empty() {
                continue;
            }

            let damage: u32 = events
                .iter()
                .map(|event| match event {
                    BattleEvent::Residual { damage, .. } => *damage,
                    _ => 0,
                })
                .sum();

            self.log.push(TurnRecord {
                turn,
                actor: side,
                action: Action::EndOfTurn,
                target: side,
                hit: false,
                damage,
                effectiveness: None,
                target_hp: combatant.hp(),
                events,
            });

            if !combatant.is_alive() {
                tracing::debug!(turn, side = %side, "fainted from status damage");
                break;
            }
        }
    }
}

fn lockout_record(
    turn: u32,
    actor: Side,
    lockout: Lockout,
    target_hp: u32,
    events: Vec<BattleEvent>,
) -> TurnRecord {
    TurnRecord {
        turn,
        actor,
        action: Action::CouldNotMove(lockout),
        target: actor.opponent(),
        hit: false,
        damage: 0,
        effectiveness: None,
        target_hp,
        events,
    }
}
