//! The nine grahas used as dasha lords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// Natural relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        }
    }

    /// Lenient lookup used by the string-keyed tables; unknown keys are `None`.
    pub fn lookup(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    /// Parashari natural friendship table.
    pub fn relationship_to(&self, other: Planet) -> Relationship {
        use Planet::*;
        let (friends, enemies): (&[Planet], &[Planet]) = match self {
            Sun => (&[Moon, Mars, Jupiter], &[Venus, Saturn, Rahu, Ketu]),
            Moon => (&[Sun, Mercury], &[Rahu, Ketu]),
            Mars => (&[Sun, Moon, Jupiter], &[Mercury]),
            Mercury => (&[Sun, Venus], &[Moon]),
            Jupiter => (&[Sun, Moon, Mars], &[Mercury, Venus]),
            Venus => (&[Mercury, Saturn], &[Sun, Moon]),
            Saturn => (&[Mercury, Venus], &[Sun, Moon, Mars]),
            Rahu => (&[Mercury, Venus, Saturn], &[Sun, Moon, Mars]),
            Ketu => (&[Mars, Venus, Saturn], &[Sun, Moon]),
        };
        if friends.contains(&other) {
            Relationship::Friend
        } else if enemies.contains(&other) {
            Relationship::Enemy
        } else {
            Relationship::Neutral
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown planet: {wanted}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Planet::lookup("jupiter"), Some(Planet::Jupiter));
        assert_eq!(Planet::lookup(" RAHU "), Some(Planet::Rahu));
        assert_eq!(Planet::lookup("Pluto"), None);
    }

    #[test]
    fn friendship_table_samples() {
        assert_eq!(Planet::Sun.relationship_to(Planet::Jupiter), Relationship::Friend);
        assert_eq!(Planet::Saturn.relationship_to(Planet::Sun), Relationship::Enemy);
        assert_eq!(Planet::Moon.relationship_to(Planet::Saturn), Relationship::Neutral);
    }
}
