//! Astrological basis for daily predictions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The reference point used to index daily predictions.
///
/// Closed set: anything else is rejected before a request is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    #[default]
    MoonSign,
    Lagna,
    SunSign,
}

impl Basis {
    pub const ALL: [Basis; 3] = [Basis::MoonSign, Basis::Lagna, Basis::SunSign];

    /// Wire form used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Basis::MoonSign => "moon_sign",
            Basis::Lagna => "lagna",
            Basis::SunSign => "sun_sign",
        }
    }

    /// Human label, e.g. "MOON SIGN".
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_ascii_uppercase()
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Basis {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moon_sign" => Ok(Basis::MoonSign),
            "lagna" => Ok(Basis::Lagna),
            "sun_sign" => Ok(Basis::SunSign),
            other => Err(DomainError::parse(format!("Unknown basis: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_bases() {
        for basis in Basis::ALL {
            assert_eq!(basis.as_str().parse::<Basis>().unwrap(), basis);
        }
    }

    #[test]
    fn parse_requires_exact_wire_form() {
        for raw in ["LAGNA", " Lagna ", "lagna ", "Moon_Sign", "sun-sign"] {
            assert!(raw.parse::<Basis>().is_err(), "{raw:?} accepted");
        }
    }

    #[test]
    fn rejects_unknown_basis() {
        assert!("weekly".parse::<Basis>().is_err());
        assert!("".parse::<Basis>().is_err());
    }

    #[test]
    fn default_is_moon_sign() {
        assert_eq!(Basis::default(), Basis::MoonSign);
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Basis::SunSign).unwrap(), "\"sun_sign\"");
        assert_eq!(Basis::MoonSign.label(), "MOON SIGN");
    }
}
