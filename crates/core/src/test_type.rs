//! Laboratory test type an objective belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::normalize_label;
use crate::error::CoreError;

/// Kind of laboratory test an objective measures.
///
/// Stored in `objetivo_tipo_prueba` as its Spanish label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestType {
    Efficacy,
    Residuality,
    Phytotoxicity,
    Other,
}

impl TestType {
    pub const ALL: [TestType; 4] =
        [TestType::Efficacy, TestType::Residuality, TestType::Phytotoxicity, TestType::Other];

    /// Label stored in the database and offered by the grid's select editor.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Efficacy => "Eficacia",
            Self::Residuality => "Residualidad",
            Self::Phytotoxicity => "Fitotoxicidad",
            Self::Other => "Otros",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "eficacia" | "efficacy" => Ok(Self::Efficacy),
            "residualidad" | "residuality" => Ok(Self::Residuality),
            "fitotoxicidad" | "phytotoxicity" => Ok(Self::Phytotoxicity),
            "otros" | "otro" | "other" => Ok(Self::Other),
            _ => Err(CoreError::UnknownTestType(s.to_owned())),
        }
    }
}

impl Serialize for TestType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TestType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_labels() {
        for t in TestType::ALL {
            assert_eq!(t.as_str().parse::<TestType>().unwrap(), t);
        }
    }

    #[test]
    fn parse_is_case_and_accent_insensitive() {
        assert_eq!("EFICACIA".parse::<TestType>().unwrap(), TestType::Efficacy);
        assert_eq!("fitotoxicidad".parse::<TestType>().unwrap(), TestType::Phytotoxicity);
        assert_eq!("Residuality".parse::<TestType>().unwrap(), TestType::Residuality);
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(matches!("Germinación".parse::<TestType>(), Err(CoreError::UnknownTestType(_))));
    }
}
