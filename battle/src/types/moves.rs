//! Move records

use clash_protocol::MoveData;

use super::pokemon_type::Type;
use super::status::Status;
use crate::error::ValidationError;

/// Damage class of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoveCategory {
    /// Attack vs Defense
    Physical,
    /// Special Attack vs Special Defense
    Special,
    /// Non-damaging
    Status,
}

impl MoveCategory {
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "physical" => Some(MoveCategory::Physical),
            "special" => Some(MoveCategory::Special),
            "status" => Some(MoveCategory::Status),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
        }
    }
}

/// Status a move may inflict on a hit, with its trigger chance in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffectChance {
    pub status: Status,
    pub chance: u8,
}

/// A move a combatant knows
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub name: String,
    pub move_type: Type,

    /// Base power (0 = non-damaging)
    pub power: u32,

    /// Percent chance to hit (0-100)
    pub accuracy: u8,

    pub category: MoveCategory,
    pub effect: Option<StatusEffectChance>,
}

impl MoveRecord {
    pub fn new(
        name: impl Into<String>,
        move_type: Type,
        category: MoveCategory,
        power: u32,
        accuracy: u8,
    ) -> Self {
        Self {
            name: name.into(),
            move_type,
            power,
            accuracy,
            category,
            effect: None,
        }
    }

    /// Attach a status effect that triggers with `chance` percent on a hit
    pub fn with_effect(mut self, status: Status, chance: u8) -> Self {
        self.effect = Some(StatusEffectChance { status, chance });
        self
    }

    /// Whether resolving this move can deal damage
    pub fn is_damaging(&self) -> bool {
        self.power > 0 && self.category != MoveCategory::Status
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.accuracy > 100 {
            return Err(ValidationError::AccuracyOutOfRange {
                name: self.name.clone(),
                accuracy: u32::from(self.accuracy),
            });
        }

        if self.category == MoveCategory::Status && self.power > 0 {
            return Err(ValidationError::StatusMoveWithPower {
                name: self.name.clone(),
                power: self.power,
            });
        }

        if let Some(effect) = &self.effect
            && effect.chance > 100
        {
            return Err(ValidationError::ChanceOutOfRange {
                name: self.name.clone(),
                chance: u32::from(effect.chance),
            });
        }

        Ok(())
    }

    /// Convert and validate a wire move.
    ///
    /// Missing power is 0, missing accuracy is 100. An ailment on a
    /// status move with chance 0 always triggers; unknown ailments are ignored.
    pub fn from_protocol(data: &MoveData) -> Result<Self, ValidationError> {
        let move_type = Type::from_protocol(&data.move_type)
            .ok_or_else(|| ValidationError::UnknownType(data.move_type.clone()))?;

        let category = MoveCategory::from_protocol(&data.category).ok_or_else(|| {
            ValidationError::UnknownCategory {
                name: data.name.clone(),
                category: data.category.clone(),
            }
        })?;

        let accuracy = data.accuracy_or_full();
        let accuracy = u8::try_from(accuracy)
            .ok()
            .filter(|a| *a <= 100)
            .ok_or_else(|| ValidationError::AccuracyOutOfRange {
                name: data.name.clone(),
                accuracy,
            })?;

        let mut record = Self::new(
            data.name.clone(),
            move_type,
            category,
            data.power_or_zero(),
            accuracy,
        );

        if let Some(status) = data.ailment.as_deref().and_then(Status::from_ailment) {
            let chance = match (category, data.ailment_chance) {
                (MoveCategory::Status, 0) => 100,
                (_, chance) => chance,
            };
            let chance = u8::try_from(chance)
                .ok()
                .filter(|c| *c <= 100)
                .ok_or_else(|| ValidationError::ChanceOutOfRange {
                    name: data.name.clone(),
                    chance,
                })?;
            if chance > 0 {
                record = record.with_effect(status, chance);
            }
        }

        record.validate()?;
        Ok(record)
    }
}
