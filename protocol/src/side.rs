//! Combatant slot identifiers

use serde::{Deserialize, Serialize};

/// Slot a combatant occupies in a one-on-one battle (p1, p2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Both slots in their fixed order
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Side::P1),
            "p2" => Some(Side::P2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::P1 => "p1",
            Side::P2 => "p2",
        }
    }

    /// The other slot
    pub fn opponent(&self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Array index for per-side storage
    pub fn index(&self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse() {
        assert_eq!(Side::parse("p1"), Some(Side::P1));
        assert_eq!(Side::parse("p2"), Some(Side::P2));
        assert_eq!(Side::parse("p3"), None);
    }

    #[test]
    fn test_side_opponent_and_index() {
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent(), Side::P1);
        assert_eq!(Side::P1.index(), 0);
        assert_eq!(Side::P2.index(), 1);
    }
}
