//! Combatant records and in-battle combatant state

use clash_protocol::{PokemonData, Side, title_case};

use super::moves::MoveRecord;
use super::pokemon_type::Type;
use super::stats::BaseStats;
use super::status::Status;
use crate::error::ValidationError;

/// Immutable combatant data supplied before a battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantRecord {
    pub id: u32,
    pub name: String,

    /// One or two distinct types
    pub types: Vec<Type>,

    pub stats: BaseStats,
    pub abilities: Vec<String>,
    pub moves: Vec<MoveRecord>,
}

impl CombatantRecord {
    pub fn new(name: impl Into<String>, types: Vec<Type>, stats: BaseStats) -> Self {
        Self {
            id: 0,
            name: name.into(),
            types,
            stats,
            abilities: Vec::new(),
            moves: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_move(mut self, mv: MoveRecord) -> Self {
        self.moves.push(mv);
        self
    }

    pub fn with_moves(mut self, moves: impl IntoIterator<Item = MoveRecord>) -> Self {
        self.moves.extend(moves);
        self
    }

    /// Name formatted for display
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stats.hp == 0 {
            return Err(ValidationError::ZeroHp {
                name: self.name.clone(),
            });
        }

        match self.types.as_slice() {
            [] => {
                return Err(ValidationError::NoTypes {
                    name: self.name.clone(),
                });
            }
            [first, second] if first == second => {
                return Err(ValidationError::DuplicateType {
                    name: self.name.clone(),
                    ty: *first,
                });
            }
            [_] | [_, _] => {}
            more => {
                return Err(ValidationError::TooManyTypes {
                    name: self.name.clone(),
                    count: more.len(),
                });
            }
        }

        self.moves.iter().try_for_each(MoveRecord::validate)
    }

    /// Convert and validate wire data.
    ///
    /// Moves that fail conversion are skipped; the combatant itself must be valid.
    pub fn from_protocol(data: &PokemonData) -> Result<Self, ValidationError> {
        let types = data
            .types
            .iter()
            .map(|t| Type::from_protocol(t).ok_or_else(|| ValidationError::UnknownType(t.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        let moves = data
            .moves
            .iter()
            .filter_map(|m| match MoveRecord::from_protocol(m) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(combatant = %data.name, error = %e, "skipping unusable move");
                    None
                }
            })
            .collect();

        let record = Self {
            id: data.id,
            name: data.name.clone(),
            types,
            stats: data.stats.into(),
            abilities: data.abilities.clone(),
            moves,
        };

        record.validate()?;
        Ok(record)
    }
}

/// Mutable state of one combatant for the length of a battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleCombatant {
    pub side: Side,
    pub record: CombatantRecord,
    pub max_hp: u32,
    hp: u32,
    status: Option<Status>,

    /// Remaining sleep turns
    status_turns: u8,
}

impl BattleCombatant {
    /// Enter battle at full HP with no status
    pub fn new(side: Side, record: CombatantRecord) -> Self {
        let max_hp = record.stats.hp;
        Self {
            side,
            record,
            max_hp,
            hp: max_hp,
            status: None,
            status_turns: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn types(&self) -> &[Type] {
        &self.record.types
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.record.moves
    }

    pub fn stats(&self) -> &BaseStats {
        &self.record.stats
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        (u64::from(self.hp) * 100 / u64::from(self.max_hp)) as u32
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.record.types.contains(&ty)
    }

    /// Speed used for turn order; paralysis quarters it
    pub fn effective_speed(&self) -> f64 {
        let speed = f64::from(self.record.stats.speed);
        if self.status == Some(Status::Paralysis) {
            speed * 0.25
        } else {
            speed
        }
    }

    /// Subtract damage, clamped at 0. Returns the HP actually lost
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn status_turns(&self) -> u8 {
        self.status_turns
    }

    pub fn set_status_turns(&mut self, turns: u8) {
        self.status_turns = turns;
    }

    /// Apply a status if none is active. Returns false when already afflicted
    pub fn inflict(&mut self, status: Status, turns: u8) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        self.status_turns = turns;
        true
    }

    /// Remove the active status, returning it
    pub fn clear_status(&mut self) -> Option<Status> {
        self.status_turns = 0;
        self.status.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoveCategory;
    use clash_protocol::{MoveData, StatBlock};

    fn record(types: Vec<Type>) -> CombatantRecord {
        CombatantRecord::new("pikachu", types, BaseStats::new(35, 55, 40, 50, 50, 90))
    }

    #[test]
    fn test_validate_type_counts() {
        assert!(record(vec![Type::Electric]).validate().is_ok());
        assert!(record(vec![Type::Electric, Type::Flying]).validate().is_ok());
        assert!(matches!(
            record(vec![]).validate(),
            Err(ValidationError::NoTypes { .. })
        ));
        assert!(matches!(
            record(vec![Type::Fire, Type::Fire]).validate(),
            Err(ValidationError::DuplicateType { ty: Type::Fire, .. })
        ));
        assert!(matches!(
            record(vec![Type::Fire, Type::Water, Type::Grass]).validate(),
            Err(ValidationError::TooManyTypes { count: 3, .. })
        ));
    }

    #[test]
    fn test_validate_zero_hp() {
        let mut r = record(vec![Type::Electric]);
        r.stats.hp = 0;
        assert!(matches!(r.validate(), Err(ValidationError::ZeroHp { .. })));
    }

    #[test]
    fn test_from_protocol_skips_bad_moves() {
        let data = PokemonData {
            id: 25,
            name: "pikachu".to_string(),
            types: vec!["Electric".to_string()],
            stats: StatBlock {
                hp: 35,
                attack: 55,
                defense: 40,
                special_attack: 50,
                special_defense: 50,
                speed: 90,
            },
            abilities: vec!["static".to_string()],
            moves: vec![
                MoveData {
                    name: "thunderbolt".to_string(),
                    move_type: "electric".to_string(),
                    category: "special".to_string(),
                    power: Some(90),
                    accuracy: Some(100),
                    effect: None,
                    ailment: Some("paralysis".to_string()),
                    ailment_chance: 10,
                },
                MoveData {
                    name: "shadow-rush".to_string(),
                    move_type: "shadow".to_string(),
                    category: "physical".to_string(),
                    power: Some(55),
                    accuracy: Some(100),
                    effect: None,
                    ailment: None,
                    ailment_chance: 0,
                },
            ],
            height: 4,
            weight: 60,
            sprite_url: None,
        };

        let record = CombatantRecord::from_protocol(&data).unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.types, vec![Type::Electric]);
        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.moves[0].category, MoveCategory::Special);
        assert_eq!(record.display_name(), "Pikachu");
    }

    #[test]
    fn test_from_protocol_unknown_type() {
        let data = PokemonData {
            id: 0,
            name: "missingno".to_string(),
            types: vec!["bird".to_string()],
            stats: StatBlock {
                hp: 33,
                ..StatBlock::default()
            },
            abilities: Vec::new(),
            moves: Vec::new(),
            height: 0,
            weight: 0,
            sprite_url: None,
        };

        assert_eq!(
            CombatantRecord::from_protocol(&data),
            Err(ValidationError::UnknownType("bird".to_string()))
        );
    }

    #[test]
    fn test_combatant_damage_clamps() {
        let mut c = BattleCombatant::new(Side::P1, record(vec![Type::Electric]));
        assert_eq!(c.hp(), 35);
        assert_eq!(c.take_damage(10), 10);
        assert_eq!(c.hp_percent(), 71);
        assert_eq!(c.take_damage(100), 25);
        assert_eq!(c.hp(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_hp_percent_with_huge_max_hp() {
        let huge = CombatantRecord::new(
            "blissey",
            vec![Type::Normal],
            BaseStats::new(u32::MAX, 10, 10, 10, 10, 10),
        );
        let mut c = BattleCombatant::new(Side::P2, huge);
        assert_eq!(c.hp_percent(), 100);

        c.take_damage(u32::MAX / 2);
        assert_eq!(c.hp_percent(), 50);
    }

    #[test]
    fn test_single_status_slot() {
        let mut c = BattleCombatant::new(Side::P1, record(vec![Type::Electric]));
        assert!(c.inflict(Status::Burn, 0));
        assert!(!c.inflict(Status::Sleep, 2));
        assert_eq!(c.status(), Some(Status::Burn));
        assert_eq!(c.clear_status(), Some(Status::Burn));
        assert_eq!(c.status(), None);
    }

    #[test]
    fn test_paralysis_quarters_speed() {
        let mut c = BattleCombatant::new(Side::P2, record(vec![Type::Electric]));
        assert_eq!(c.effective_speed(), 90.0);
        c.inflict(Status::Paralysis, 0);
        assert_eq!(c.effective_speed(), 22.5);
        assert_eq!(c.stats().speed, 90);
    }
}
