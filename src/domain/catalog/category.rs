//! Category filter value.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which products the catalog view shows.
///
/// Serialized as a plain string, with the synthetic value `"all"` standing
/// for no filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn only(category: impl Into<String>) -> Self {
        Self::from(category.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Returns true if a product in `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_string_maps_to_all_variant() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert!(CategoryFilter::only("all").is_all());
    }

    #[test]
    fn other_strings_are_specific_categories() {
        assert_eq!(
            CategoryFilter::from("electronics"),
            CategoryFilter::Only("electronics".to_string())
        );
    }

    #[test]
    fn all_matches_everything() {
        assert!(CategoryFilter::All.matches("jewelery"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn specific_category_matches_exactly() {
        let filter = CategoryFilter::only("jewelery");
        assert!(filter.matches("jewelery"));
        assert!(!filter.matches("Jewelery"));
        assert!(!filter.matches("electronics"));
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&CategoryFilter::All).unwrap(), "\"all\"");
        let filter: CategoryFilter = serde_json::from_str("\"women's clothing\"").unwrap();
        assert_eq!(filter, CategoryFilter::only("women's clothing"));
    }
}
