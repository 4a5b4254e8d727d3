//! Structured filter set for the mentor directory.

use serde::{Deserialize, Serialize};

/// Domain-wide hourly-rate bounds in KRW, used when no price filter is set.
pub const DEFAULT_PRICE_RANGE: (u32, u32) = (0, 200_000);

/// Filters to narrow directory results.
///
/// Every criterion is independently optional: an empty set, a zero rating,
/// or the full default price range places no restriction on the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Requested skills, OR-matched against mentor expertise entries
    /// (case-insensitive substring, any-any).
    #[serde(default)]
    pub expertise: Vec<String>,

    /// Experience criterion carried by the filter panel. Reserved: the
    /// engine does not apply it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    /// Inclusive minimum rating; `0.0` means unrestricted.
    #[serde(default)]
    pub rating: f32,

    /// Inclusive [min, max] hourly-rate range in KRW. Always present,
    /// defaulting to [`DEFAULT_PRICE_RANGE`].
    #[serde(default = "default_price_range")]
    pub price_range: (u32, u32),

    /// Requested availability slot labels, OR-matched via substring
    /// against mentor availability labels (any-any).
    #[serde(default)]
    pub availability: Vec<String>,
}

fn default_price_range() -> (u32, u32) {
    DEFAULT_PRICE_RANGE
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            expertise: Vec::new(),
            experience: None,
            rating: 0.0,
            price_range: DEFAULT_PRICE_RANGE,
            availability: Vec::new(),
        }
    }
}

impl SearchFilters {
    /// Creates an unrestricted filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active (restricting) criteria, as shown on the filter
    /// panel badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.expertise.is_empty() {
            count += 1;
        }
        if self.rating > 0.0 {
            count += 1;
        }
        if self.price_range != DEFAULT_PRICE_RANGE {
            count += 1;
        }
        if !self.availability.is_empty() {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_are_unrestricted() {
        let filters = SearchFilters::default();
        assert!(filters.expertise.is_empty());
        assert!(filters.experience.is_none());
        assert_eq!(filters.rating, 0.0);
        assert_eq!(filters.price_range, DEFAULT_PRICE_RANGE);
        assert!(filters.availability.is_empty());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_active_count() {
        let filters = SearchFilters {
            expertise: vec!["React".to_string()],
            rating: 4.5,
            ..SearchFilters::default()
        };
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_filters_deserialize_with_defaults() {
        let filters: SearchFilters = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, SearchFilters::default());

        let filters: SearchFilters =
            serde_json::from_str(r#"{"rating": 4.8, "priceRange": [0, 80000]}"#).unwrap();
        assert_eq!(filters.rating, 4.8);
        assert_eq!(filters.price_range, (0, 80_000));
    }
}
