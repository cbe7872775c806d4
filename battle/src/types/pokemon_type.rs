//! Elemental types and the effectiveness chart

/// Elemental types (the 18 canonical types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// All 18 types in chart order
    pub const ALL: [Type; 18] = {
        use Type::*;
        [
            Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground, Flying, Psychic,
            Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy,
        ]
    };

    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Multiplier against a single defending type
    pub fn effectiveness(&self, defender: Type) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Multiplier against every defending type, multiplied together
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f32 {
        defenders
            .iter()
            .map(|t| self.effectiveness(*t))
            .product()
    }

    /// Parse from a type name (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.to_protocol().eq_ignore_ascii_case(name))
    }

    /// Lowercase identifier, as used on the wire
    pub fn to_protocol(&self) -> &'static str {
        WIRE_NAMES[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        DISPLAY_NAMES[*self as usize]
    }
}

const WIRE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

const DISPLAY_NAMES: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bucketed effectiveness of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effectiveness {
    NoEffect,
    NotVeryEffective,
    Normal,
    SuperEffective,
}

impl Effectiveness {
    /// 0 -> no effect, (0, 1) -> not very effective, 1 -> normal, >1 -> super effective
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier <= 0.0 {
            Effectiveness::NoEffect
        } else if multiplier < 1.0 {
            Effectiveness::NotVeryEffective
        } else if multiplier > 1.0 {
            Effectiveness::SuperEffective
        } else {
            Effectiveness::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effectiveness::NoEffect => "no effect",
            Effectiveness::NotVeryEffective => "not very effective",
            Effectiveness::Normal => "normal",
            Effectiveness::SuperEffective => "super effective",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Non-neutral matchups of one attacking type:
/// (attacker, super effective against, not very effective against, no effect on)
type MatchupRow = (Type, &'static [Type], &'static [Type], &'static [Type]);

#[rustfmt::skip]
const MATCHUPS: [MatchupRow; 18] = {
    use Type::*;
    [
        (Normal, &[], &[Rock, Steel], &[Ghost]),
        (Fire, &[Grass, Ice, Bug, Steel], &[Fire, Water, Rock, Dragon], &[]),
        (Water, &[Fire, Ground, Rock], &[Water, Grass, Dragon], &[]),
        (Electric, &[Water, Flying], &[Electric, Grass, Dragon], &[Ground]),
        (Grass, &[Water, Ground, Rock], &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel], &[]),
        (Ice, &[Grass, Ground, Flying, Dragon], &[Fire, Water, Ice, Steel], &[]),
        (Fighting, &[Normal, Ice, Rock, Dark, Steel], &[Poison, Flying, Psychic, Bug, Fairy], &[Ghost]),
        (Poison, &[Grass, Fairy], &[Poison, Ground, Rock, Ghost], &[Steel]),
        (Ground, &[Fire, Electric, Poison, Rock, Steel], &[Grass, Bug], &[Flying]),
        (Flying, &[Grass, Fighting, Bug], &[Electric, Rock, Steel], &[]),
        (Psychic, &[Fighting, Poison], &[Psychic, Steel], &[Dark]),
        (Bug, &[Grass, Psychic, Dark], &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy], &[]),
        (Rock, &[Fire, Ice, Flying, Bug], &[Fighting, Ground, Steel], &[]),
        (Ghost, &[Psychic, Ghost], &[Dark], &[Normal]),
        (Dragon, &[Dragon], &[Steel], &[Fairy]),
        (Dark, &[Psychic, Ghost], &[Fighting, Dark, Fairy], &[]),
        (Steel, &[Ice, Rock, Fairy], &[Fire, Water, Electric, Steel], &[]),
        (Fairy, &[Fighting, Dragon, Dark], &[Fire, Poison, Steel], &[]),
    ]
};

/// Effectiveness multipliers, indexed `[attacking][defending]` in [`Type::ALL`] order
pub static TYPE_CHART: [[f32; 18]; 18] = expand_chart(&MATCHUPS);

const fn expand_chart(rows: &[MatchupRow; 18]) -> [[f32; 18]; 18] {
    let mut chart = [[1.0; 18]; 18];
    let mut i = 0;
    while i < rows.len() {
        let (attacker, strong, weak, immune) = rows[i];
        let row = &mut chart[attacker as usize];
        fill_row(row, strong, 2.0);
        fill_row(row, weak, 0.5);
        fill_row(row, immune, 0.0);
        i += 1;
    }
    chart
}

const fn fill_row(row: &mut [f32; 18], defenders: &[Type], multiplier: f32) {
    let mut j = 0;
    while j < defenders.len() {
        row[defenders[j] as usize] = multiplier;
        j += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_effectiveness_super_effective() {
        assert_eq!(Type::Fire.effectiveness(Type::Grass), 2.0);
        assert_eq!(Type::Water.effectiveness(Type::Fire), 2.0);
        assert_eq!(Type::Electric.effectiveness(Type::Water), 2.0);
        assert_eq!(Type::Fighting.effectiveness(Type::Normal), 2.0);
    }

    #[test]
    fn test_type_effectiveness_immune() {
        assert_eq!(Type::Normal.effectiveness(Type::Ghost), 0.0);
        assert_eq!(Type::Electric.effectiveness(Type::Ground), 0.0);
        assert_eq!(Type::Ground.effectiveness(Type::Flying), 0.0);
        assert_eq!(Type::Psychic.effectiveness(Type::Dark), 0.0);
        assert_eq!(Type::Dragon.effectiveness(Type::Fairy), 0.0);
    }

    #[test]
    fn test_type_effectiveness_multi() {
        assert_eq!(Type::Fire.effectiveness_multi(&[Type::Grass, Type::Steel]), 4.0);
        assert_eq!(Type::Fire.effectiveness_multi(&[Type::Water, Type::Rock]), 0.25);
        // Super effective against one, resisted by the other
        assert_eq!(Type::Fire.effectiveness_multi(&[Type::Grass, Type::Water]), 1.0);
        assert_eq!(Type::Ground.effectiveness_multi(&[Type::Flying, Type::Steel]), 0.0);
    }

    #[test]
    fn test_multipliers_stay_in_range() {
        let allowed = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];
        for attacker in Type::all() {
            for first in Type::all() {
                let single = attacker.effectiveness_multi(&[*first]);
                assert!(allowed.contains(&single));
                for second in Type::all().iter().filter(|t| *t != first) {
                    let dual = attacker.effectiveness_multi(&[*first, *second]);
                    assert!(allowed.contains(&dual), "{attacker} vs {first}/{second}");
                }
            }
        }
    }

    #[test]
    fn test_type_from_protocol() {
        assert_eq!(Type::from_protocol("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_protocol("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_protocol(" psychic "), Some(Type::Psychic));
        assert_eq!(Type::from_protocol("shadow"), None);
        assert_eq!(Type::Fairy.to_protocol(), "fairy");
    }

    #[test]
    fn test_effectiveness_labels() {
        assert_eq!(Effectiveness::from_multiplier(0.0).as_str(), "no effect");
        assert_eq!(Effectiveness::from_multiplier(0.25).as_str(), "not very effective");
        assert_eq!(Effectiveness::from_multiplier(0.5).as_str(), "not very effective");
        assert_eq!(Effectiveness::from_multiplier(1.0).as_str(), "normal");
        assert_eq!(Effectiveness::from_multiplier(2.0).as_str(), "super effective");
        assert_eq!(Effectiveness::from_multiplier(4.0).as_str(), "super effective");
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
    }
}
