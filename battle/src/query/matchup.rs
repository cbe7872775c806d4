//! Type matchup queries

use crate::error::ValidationError;
use crate::types::{Effectiveness, Type};

/// Answer to an effectiveness query
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub attacking: Type,
    pub defending: Vec<Type>,
    pub multiplier: f32,
    pub effectiveness: Effectiveness,
}

impl Matchup {
    pub fn label(&self) -> &'static str {
        self.effectiveness.as_str()
    }

    /// Damage relative to a neutral hit, in percent
    pub fn percent_of_normal(&self) -> u32 {
        (self.multiplier * 100.0).round() as u32
    }
}

/// Multiplier and label for `attacking` against one or two defending types
pub fn query_effectiveness(attacking: Type, defending: &[Type]) -> Result<Matchup, ValidationError> {
    if defending.is_empty() || defending.len() > 2 {
        return Err(ValidationError::DefendingTypeCount(defending.len()));
    }
    if let [first, second] = defending
        && first == second
    {
        return Err(ValidationError::DuplicateDefendingType(*first));
    }

    let multiplier = attacking.effectiveness_multi(defending);
    Ok(Matchup {
        attacking,
        defending: defending.to_vec(),
        multiplier,
        effectiveness: Effectiveness::from_multiplier(multiplier),
    })
}

/// Same as [`query_effectiveness`], parsing type names first
pub fn query_effectiveness_by_name<S: AsRef<str>>(
    attacking: &str,
    defending: &[S],
) -> Result<Matchup, ValidationError> {
    let parse = |name: &str| {
        Type::from_protocol(name).ok_or_else(|| ValidationError::UnknownType(name.to_string()))
    };

    let attacking = parse(attacking)?;
    let defending = defending
        .iter()
        .map(|name| parse(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    query_effectiveness(attacking, &defending)
}

/// Check if defender is weak (>1x) to any of the attacking types
pub fn is_weak_to_any(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    attacking_types
        .iter()
        .any(|t| t.effectiveness_multi(defender_types) > 1.0)
}

/// Check if defender resists (<1x) every attacking type
pub fn resists_all(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    !attacking_types.is_empty()
        && attacking_types
            .iter()
            .all(|t| t.effectiveness_multi(defender_types) < 1.0)
}

pub fn is_immune_to(defender_types: &[Type], attacking_type: Type) -> bool {
    attacking_type.effectiveness_multi(defender_types) == 0.0
}

/// Attacking types that land in the given bucket against the defender
fn types_with(defender_types: &[Type], bucket: Effectiveness) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| Effectiveness::from_multiplier(t.effectiveness_multi(defender_types)) == bucket)
        .collect()
}

/// Types that are super effective against the defender
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    types_with(defender_types, Effectiveness::SuperEffective)
}

/// Types the defender resists (0 < effectiveness < 1)
pub fn resistances(defender_types: &[Type]) -> Vec<Type> {
    types_with(defender_types, Effectiveness::NotVeryEffective)
}

/// Types the defender is immune to
pub fn immunities(defender_types: &[Type]) -> Vec<Type> {
    types_with(defender_types, Effectiveness::NoEffect)
}
