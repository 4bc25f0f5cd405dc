//! Release versions as published in the update manifest.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Dotted numeric version. A leading `v` and any pre-release or build
/// suffix (`-beta.1`, `+abc`) are accepted and ignored.
#[derive(Debug, Clone)]
pub struct AppVersion {
    parts: Vec<u64>,
}

impl AppVersion {
    #[must_use]
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// Whether `self` is strictly newer than `other`.
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

impl FromStr for AppVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unprefixed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
        let core = unprefixed.split(['-', '+']).next().unwrap_or_default();
        if core.is_empty() {
            return Err(CoreError::InvalidVersion(s.to_owned()));
        }
        let parts = core
            .split('.')
            .map(|p| p.parse::<u64>().map_err(|_| CoreError::InvalidVersion(s.to_owned())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

/// Missing trailing components compare as zero, so `1.2 == 1.2.0`.
impl Ord for AppVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| {
                let a = self.parts.get(i).copied().unwrap_or(0);
                let b = other.parts.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for AppVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AppVersion {}

impl PartialOrd for AppVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.parts.iter().map(u64::to_string).collect();
        f.write_str(&text.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> AppVersion {
        s.parse().unwrap()
    }

    #[test]
    fn parses_prefix_and_suffix() {
        assert_eq!(v("v1.4.2").parts(), &[1, 4, 2]);
        assert_eq!(v("2.0.0-beta.3").parts(), &[2, 0, 0]);
        assert_eq!(v(" 0.9+build7 ").to_string(), "0.9");
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<AppVersion>().is_err());
        assert!("v".parse::<AppVersion>().is_err());
        assert!("1.x.0".parse::<AppVersion>().is_err());
        assert!("1..0".parse::<AppVersion>().is_err());
    }

    #[test]
    fn compares_numerically() {
        assert!(v("0.10.0").is_newer_than(&v("0.9.9")));
        assert!(v("1.0.1").is_newer_than(&v("1.0")));
        assert!(!v("1.2").is_newer_than(&v("1.2.0")));
        assert!(!v("1.2.0-rc.1").is_newer_than(&v("1.2.0")));
        assert_eq!(v("1.2"), v("1.2.0"));
    }
}
