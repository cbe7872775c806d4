//! Base stat block

use clash_protocol::StatBlock;

/// Base stats of a combatant; used as-is in battle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    pub fn total(&self) -> u32 {
        self.hp
            + self.attack
            + self.defense
            + self.special_attack
            + self.special_defense
            + self.speed
    }
}

impl From<StatBlock> for BaseStats {
    fn from(block: StatBlock) -> Self {
        Self {
            hp: block.hp,
            attack: block.attack,
            defense: block.defense,
            special_attack: block.special_attack,
            special_defense: block.special_defense,
            speed: block.speed,
        }
    }
}
