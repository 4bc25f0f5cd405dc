//! Product category classification for price entries.
//!
//! Price rows carry a free-text product type. Only two values are meaningful
//! ("Químico" and "Biológico"), but the stored text varies in case and accents,
//! so every comparison goes through [`normalize_label`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::CoreError;

/// Product category a price applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Chemical products ("Químico").
    Chemical,
    /// Biological products ("Biológico").
    Biological,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 2] = [ProductCategory::Chemical, ProductCategory::Biological];

    /// Label written to the store when a new price row is inserted.
    #[must_use]
    pub const fn canonical_label(&self) -> &'static str {
        match *self {
            Self::Chemical => "Químico",
            Self::Biological => "Biológico",
        }
    }

    /// Normalized form the stored label is compared against.
    #[must_use]
    pub const fn normalized_label(&self) -> &'static str {
        match *self {
            Self::Chemical => "quimico",
            Self::Biological => "biologico",
        }
    }

    /// Classify a stored label. Returns `None` for anything that is not one of
    /// the two categories, after case and accent folding.
    #[must_use]
    pub fn classify(label: &str) -> Option<Self> {
        let normalized = normalize_label(label);
        Self::ALL.into_iter().find(|c| c.normalized_label() == normalized)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_label())
    }
}

impl FromStr for ProductCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s).ok_or_else(|| CoreError::UnknownCategory(s.to_owned()))
    }
}

/// Trim, strip diacritics and lowercase a label.
///
/// `"  Biológico "` and `"BIOLOGICO"` both become `"biologico"`.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label.trim().nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize_label("Químico"), "quimico");
        assert_eq!(normalize_label("  BIOLÓGICO "), "biologico");
        assert_eq!(normalize_label("quimico"), "quimico");
    }

    #[test]
    fn classify_accepts_every_spelling() {
        for label in ["Químico", "químico", "Quimico", "QUIMICO", "QUÍMICO", " quimico"] {
            assert_eq!(ProductCategory::classify(label), Some(ProductCategory::Chemical), "{label}");
        }
        for label in ["Biológico", "biológico", "Biologico", "BIOLOGICO"] {
            assert_eq!(
                ProductCategory::classify(label),
                Some(ProductCategory::Biological),
                "{label}"
            );
        }
    }

    #[test]
    fn classify_rejects_other_labels() {
        assert_eq!(ProductCategory::classify(""), None);
        assert_eq!(ProductCategory::classify("Orgánico"), None);
        assert_eq!(ProductCategory::classify("quimicos"), None);
    }

    #[test]
    fn canonical_label_round_trips() {
        for category in ProductCategory::ALL {
            assert_eq!(ProductCategory::classify(category.canonical_label()), Some(category));
        }
    }

    #[test]
    fn from_str_reports_unknown_label() {
        let err = "Mineral".parse::<ProductCategory>().unwrap_err();
        assert_eq!(err, CoreError::UnknownCategory("Mineral".to_owned()));
    }
}
