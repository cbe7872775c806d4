//! Non-volatile status conditions

/// Status conditions; a combatant carries at most one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    Sleep,
}

impl Status {
    /// Parse from short code ("brn", "frz", "par", "psn", "slp")
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "slp" => Some(Status::Sleep),
            _ => None,
        }
    }

    /// Convert to short code
    pub fn to_protocol(&self) -> &'static str {
        match self {
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Poison => "psn",
            Status::Sleep => "slp",
        }
    }

    /// Parse from a move ailment name ("burn", "paralysis", ...)
    pub fn from_ailment(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "burn" => Some(Status::Burn),
            "freeze" => Some(Status::Freeze),
            "paralysis" => Some(Status::Paralysis),
            "poison" => Some(Status::Poison),
            "sleep" => Some(Status::Sleep),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_protocol() {
        assert_eq!(Status::from_protocol("brn"), Some(Status::Burn));
        assert_eq!(Status::from_protocol("frz"), Some(Status::Freeze));
        assert_eq!(Status::from_protocol("par"), Some(Status::Paralysis));
        assert_eq!(Status::from_protocol("psn"), Some(Status::Poison));
        assert_eq!(Status::from_protocol("slp"), Some(Status::Sleep));
        assert_eq!(Status::from_protocol("tox"), None);
    }

    #[test]
    fn test_status_to_protocol() {
        assert_eq!(Status::Burn.to_protocol(), "brn");
        assert_eq!(Status::Sleep.to_protocol(), "slp");
    }

    #[test]
    fn test_status_from_ailment() {
        assert_eq!(Status::from_ailment("paralysis"), Some(Status::Paralysis));
        assert_eq!(Status::from_ailment("Burn"), Some(Status::Burn));
        assert_eq!(Status::from_ailment("confusion"), None);
        assert_eq!(Status::from_ailment("none"), None);
    }
}
