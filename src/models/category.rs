//! Expense categories
//!
//! A record carries one of four fixed categories. Ledgers kept in open mode
//! may also use free-form labels, which travel as `Category::Custom`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How strictly category labels are checked when recording an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMode {
    /// Only the fixed categories are accepted
    #[default]
    Fixed,
    /// Any non-empty label is accepted
    Open,
}

/// The category an expense is filed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    #[default]
    Other,
    /// A label outside the fixed set
    Custom(String),
}

impl Category {
    /// The fixed categories, in menu order
    pub const FIXED: [Category; 4] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Other,
    ];

    /// The label stored on disk and used as the aggregation key
    pub fn label(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
            Self::Custom(label) => label,
        }
    }

    /// Whether this is one of the fixed categories
    pub fn is_fixed(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Parse a user-supplied label under the given mode
    ///
    /// Fixed labels match case-insensitively. Anything else is a
    /// `Custom` label in open mode and an error in fixed mode.
    pub fn parse(label: &str, mode: CategoryMode) -> Result<Self, UnknownCategory> {
        let label = label.trim();
        if let Some(fixed) = Self::FIXED
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
        {
            return Ok(fixed.clone());
        }
        match mode {
            CategoryMode::Open if !label.is_empty() => Ok(Self::Custom(label.to_string())),
            _ => Err(UnknownCategory(label.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Food" => Self::Food,
            "Transportation" => Self::Transportation,
            "Entertainment" => Self::Entertainment,
            "Other" => Self::Other,
            _ => Self::Custom(label),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(label) => label,
            fixed => fixed.label().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, CategoryMode::Fixed)
    }
}

/// A label that is not one of the fixed categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of Food, Transportation, Entertainment, Other)")]
pub struct UnknownCategory(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_is_case_insensitive() {
        assert_eq!(Category::parse("food", CategoryMode::Fixed), Ok(Category::Food));
        assert_eq!(
            Category::parse(" TRANSPORTATION ", CategoryMode::Fixed),
            Ok(Category::Transportation)
        );
    }

    #[test]
    fn test_fixed_mode_rejects_unknown() {
        let err = Category::parse("Rent", CategoryMode::Fixed).unwrap_err();
        assert_eq!(err, UnknownCategory("Rent".into()));
    }

    #[test]
    fn test_open_mode_accepts_custom() {
        let cat = Category::parse("Rent", CategoryMode::Open).unwrap();
        assert_eq!(cat, Category::Custom("Rent".into()));
        assert!(!cat.is_fixed());
        assert!(Category::parse("  ", CategoryMode::Open).is_err());
    }

    #[test]
    fn test_serde_as_plain_string() {
        assert_eq!(serde_json::to_string(&Category::Food).unwrap(), "\"Food\"");
        assert_eq!(
            serde_json::to_string(&Category::Custom("Rent".into())).unwrap(),
            "\"Rent\""
        );

        let other: Category = serde_json::from_str("\"Other\"").unwrap();
        assert_eq!(other, Category::Other);
        let custom: Category = serde_json::from_str("\"Gifts\"").unwrap();
        assert_eq!(custom, Category::Custom("Gifts".into()));
    }
}
