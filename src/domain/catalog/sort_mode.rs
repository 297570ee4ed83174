//! Sort mode for the derived product list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Ordering applied after the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Keep server order.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
}

/// Which sort button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
    Rating,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::None,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::RatingAsc,
        SortMode::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "priceAsc",
            SortMode::PriceDesc => "priceDesc",
            SortMode::RatingAsc => "ratingAsc",
            SortMode::RatingDesc => "ratingDesc",
        }
    }

    /// The key this mode sorts by, `None` for server order.
    pub fn key(&self) -> Option<SortKey> {
        match self {
            SortMode::None => None,
            SortMode::PriceAsc | SortMode::PriceDesc => Some(SortKey::Price),
            SortMode::RatingAsc | SortMode::RatingDesc => Some(SortKey::Rating),
        }
    }

    /// Mode after pressing the `key` sort button.
    ///
    /// Each button cycles ascending, descending, off. Pressing a button
    /// while the other key is active starts its cycle at ascending.
    pub fn next_for(self, key: SortKey) -> SortMode {
        match (key, self) {
            (SortKey::Price, SortMode::PriceAsc) => SortMode::PriceDesc,
            (SortKey::Price, SortMode::PriceDesc) => SortMode::None,
            (SortKey::Price, _) => SortMode::PriceAsc,
            (SortKey::Rating, SortMode::RatingAsc) => SortMode::RatingDesc,
            (SortKey::Rating, SortMode::RatingDesc) => SortMode::None,
            (SortKey::Rating, _) => SortMode::RatingAsc,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("sort_mode", format!("unknown value '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_mode_from_its_name() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("cheapest".parse::<SortMode>().is_err());
        assert!("PriceAsc".parse::<SortMode>().is_err());
    }

    #[test]
    fn serde_uses_the_same_names() {
        assert_eq!(serde_json::to_string(&SortMode::RatingDesc).unwrap(), "\"ratingDesc\"");
        let mode: SortMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(mode, SortMode::None);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(SortMode::default(), SortMode::None);
    }

    #[test]
    fn price_button_cycles_asc_desc_off() {
        let mut mode = SortMode::None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            mode = mode.next_for(SortKey::Price);
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![SortMode::PriceAsc, SortMode::PriceDesc, SortMode::None, SortMode::PriceAsc]
        );
    }

    #[test]
    fn rating_button_cycles_asc_desc_off() {
        let mut mode = SortMode::None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            mode = mode.next_for(SortKey::Rating);
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![SortMode::RatingAsc, SortMode::RatingDesc, SortMode::None, SortMode::RatingAsc]
        );
    }

    #[test]
    fn switching_key_starts_at_ascending() {
        assert_eq!(SortMode::RatingAsc.next_for(SortKey::Price), SortMode::PriceAsc);
        assert_eq!(SortMode::RatingDesc.next_for(SortKey::Price), SortMode::PriceAsc);
        assert_eq!(SortMode::PriceAsc.next_for(SortKey::Rating), SortMode::RatingAsc);
        assert_eq!(SortMode::PriceDesc.next_for(SortKey::Rating), SortMode::RatingAsc);
    }

    #[test]
    fn key_follows_mode() {
        assert_eq!(SortMode::None.key(), None);
        assert_eq!(SortMode::PriceDesc.key(), Some(SortKey::Price));
        assert_eq!(SortMode::RatingAsc.key(), Some(SortKey::Rating));
    }
}
