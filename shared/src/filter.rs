//! Search filter criteria shared by the SPA and the camp query endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{lenient, CampCategory, SortField, SortOrder};

/// Active search criteria. Every field may be left empty.
///
/// Decoding is lenient: malformed numbers, dates, categories or sort keys
/// decode as absent so a half-typed form never fails the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub search_text: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub category: Option<CampCategory>,
    #[serde(deserialize_with = "lenient::whole", skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(deserialize_with = "lenient::whole", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sort_order: SortOrder,
    /// Set by quick filters only; the server does not match on it.
    #[serde(deserialize_with = "lenient::list", skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
}

impl FilterCriteria {
    /// Shallow-merge a patch: present fields overwrite, absent fields stay.
    pub fn merge(&mut self, patch: FilterPatch) {
        let FilterPatch {
            search_text,
            location,
            category,
            min_age,
            max_age,
            min_price,
            max_price,
            start_date,
            end_date,
            sort_by,
            sort_order,
            activities,
        } = patch;

        if let Some(value) = search_text {
            self.search_text = value;
        }
        if let Some(value) = location {
            self.location = value;
        }
        if let Some(value) = category {
            self.category = value;
        }
        if let Some(value) = min_age {
            self.min_age = value;
        }
        if let Some(value) = max_age {
            self.max_age = value;
        }
        if let Some(value) = min_price {
            self.min_price = value;
        }
        if let Some(value) = max_price {
            self.max_price = value;
        }
        if let Some(value) = start_date {
            self.start_date = value;
        }
        if let Some(value) = end_date {
            self.end_date = value;
        }
        if let Some(value) = sort_by {
            self.sort_by = value;
        }
        if let Some(value) = sort_order {
            self.sort_order = value;
        }
        if let Some(value) = activities {
            self.activities = value;
        }
    }

    /// Submit-time range checks. Age bounds are not cross-checked.
    pub fn validate(&self) -> Result<(), FilterValidationError> {
        check_price_range(self.min_price, self.max_price)?;
        check_date_range(self.start_date, self.end_date)
    }

    /// True when no field narrows or orders the result set.
    pub fn is_unfiltered(&self) -> bool {
        let defaults = FilterCriteria::default();
        FilterCriteria {
            activities: Vec::new(),
            ..self.clone()
        } == defaults
    }

    /// Query-string pairs for the search endpoint, skipping empty fields.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search_text.trim().is_empty() {
            pairs.push(("searchText", self.search_text.trim().to_string()));
        }
        if !self.location.trim().is_empty() {
            pairs.push(("location", self.location.trim().to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.label().to_string()));
        }
        if let Some(age) = self.min_age {
            pairs.push(("minAge", age.to_string()));
        }
        if let Some(age) = self.max_age {
            pairs.push(("maxAge", age.to_string()));
        }
        if let Some(price) = self.min_price {
            pairs.push(("minPrice", price.to_string()));
        }
        if let Some(price) = self.max_price {
            pairs.push(("maxPrice", price.to_string()));
        }
        if let Some(date) = self.start_date {
            pairs.push(("startDate", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("endDate", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(field) = self.sort_by {
            pairs.push(("sortBy", field.as_str().to_string()));
            pairs.push(("sortOrder", self.sort_order.as_str().to_string()));
        }
        pairs
    }
}

/// A partial [`FilterCriteria`]. `None` leaves a field alone; for fields that
/// are themselves optional, `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search_text: Option<String>,
    pub location: Option<String>,
    pub category: Option<Option<CampCategory>>,
    pub min_age: Option<Option<u32>>,
    pub max_age: Option<Option<u32>>,
    pub min_price: Option<Option<f64>>,
    pub max_price: Option<Option<f64>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub sort_by: Option<Option<SortField>>,
    pub sort_order: Option<SortOrder>,
    pub activities: Option<Vec<String>>,
}

impl FilterPatch {
    pub fn is_empty(&self) -> bool {
        *self == FilterPatch::default()
    }

    pub fn with_search_text(self, text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..self
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self
        }
    }

    pub fn with_category(self, category: Option<CampCategory>) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    pub fn with_min_age(self, age: Option<u32>) -> Self {
        Self {
            min_age: Some(age),
            ..self
        }
    }

    pub fn with_max_age(self, age: Option<u32>) -> Self {
        Self {
            max_age: Some(age),
            ..self
        }
    }

    pub fn with_age_range(self, min: u32, max: u32) -> Self {
        self.with_min_age(Some(min)).with_max_age(Some(max))
    }

    pub fn with_min_price(self, price: Option<f64>) -> Self {
        Self {
            min_price: Some(price),
            ..self
        }
    }

    pub fn with_max_price(self, price: Option<f64>) -> Self {
        Self {
            max_price: Some(price),
            ..self
        }
    }

    pub fn with_start_date(self, date: Option<NaiveDate>) -> Self {
        Self {
            start_date: Some(date),
            ..self
        }
    }

    pub fn with_end_date(self, date: Option<NaiveDate>) -> Self {
        Self {
            end_date: Some(date),
            ..self
        }
    }

    pub fn with_sort(self, field: Option<SortField>, order: SortOrder) -> Self {
        Self {
            sort_by: Some(field),
            sort_order: Some(order),
            ..self
        }
    }

    pub fn with_sort_order(self, order: SortOrder) -> Self {
        Self {
            sort_order: Some(order),
            ..self
        }
    }

    pub fn with_activities<I, S>(self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            activities: Some(activities.into_iter().map(Into::into).collect()),
            ..self
        }
    }
}

/// Range inversions caught before a search request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterValidationError {
    #[error("Minimum price cannot be greater than maximum price")]
    PriceRangeInverted,
    #[error("Start date cannot be after end date")]
    DateRangeInverted,
}

pub fn check_price_range(
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Result<(), FilterValidationError> {
    match (min_price, max_price) {
        (Some(min), Some(max)) if min > max => Err(FilterValidationError::PriceRangeInverted),
        _ => Ok(()),
    }
}

pub fn check_date_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), FilterValidationError> {
    match (start_date, end_date) {
        (Some(start), Some(end)) if start > end => Err(FilterValidationError::DateRangeInverted),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_criteria_is_unfiltered() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unfiltered());
        assert_eq!(criteria.sort_order, SortOrder::Asc);
        assert!(criteria.to_query_pairs().is_empty());
    }

    #[test]
    fn test_merge_overwrites_only_named_fields() {
        let mut criteria = FilterCriteria {
            search_text: "lake".to_string(),
            max_price: Some(500.0),
            ..Default::default()
        };

        criteria.merge(FilterPatch::default().with_category(Some(CampCategory::Arts)));

        assert_eq!(criteria.search_text, "lake");
        assert_eq!(criteria.max_price, Some(500.0));
        assert_eq!(criteria.category, Some(CampCategory::Arts));
    }

    #[test]
    fn test_merge_can_clear_optional_field() {
        let mut criteria = FilterCriteria {
            min_age: Some(5),
            ..Default::default()
        };
        criteria.merge(FilterPatch::default().with_min_age(None));
        assert_eq!(criteria.min_age, None);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut criteria = FilterCriteria {
            location: "Austin".to_string(),
            sort_by: Some(SortField::Name),
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let before = criteria.clone();
        let patch = FilterPatch::default();
        assert!(patch.is_empty());
        criteria.merge(patch);
        assert_eq!(criteria, before);
    }

    #[test]
    fn test_validate_price_range() {
        let mut criteria = FilterCriteria {
            min_price: Some(200.0),
            max_price: Some(100.0),
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert_eq!(err, FilterValidationError::PriceRangeInverted);
        assert_eq!(err.to_string(), "Minimum price cannot be greater than maximum price");

        criteria.max_price = Some(200.0);
        assert!(criteria.validate().is_ok());

        criteria.max_price = None;
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_validate_date_range() {
        let mut criteria = FilterCriteria {
            start_date: Some(date("2026-07-10")),
            end_date: Some(date("2026-07-01")),
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert_eq!(err.to_string(), "Start date cannot be after end date");

        criteria.end_date = Some(date("2026-07-10"));
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_inverted_age_range_is_not_rejected() {
        let criteria = FilterCriteria {
            min_age: Some(12),
            max_age: Some(6),
            ..Default::default()
        };
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_query_pairs_skip_blank_and_carry_sort_order_with_sort_key() {
        let criteria = FilterCriteria {
            search_text: "  robots ".to_string(),
            category: Some(CampCategory::Technology),
            min_price: Some(100.0),
            start_date: Some(date("2026-06-15")),
            sort_by: Some(SortField::Price),
            sort_order: SortOrder::Desc,
            activities: vec!["hiking".to_string()],
            ..Default::default()
        };

        assert_eq!(
            criteria.to_query_pairs(),
            vec![
                ("searchText", "robots".to_string()),
                ("category", "Technology".to_string()),
                ("minPrice", "100".to_string()),
                ("startDate", "2026-06-15".to_string()),
                ("sortBy", "price".to_string()),
                ("sortOrder", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_lenient_json_decoding() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{
                "category": "Science",
                "minPrice": "abc",
                "maxPrice": 200,
                "minAge": "-4",
                "startDate": "not-a-date",
                "sortBy": "",
                "sortOrder": "sideways",
                "unknownKey": true
            }"#,
        )
        .unwrap();

        assert_eq!(criteria.category, Some(CampCategory::Science));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, Some(200.0));
        assert_eq!(criteria.min_age, None);
        assert_eq!(criteria.start_date, None);
        assert_eq!(criteria.sort_by, None);
        assert_eq!(criteria.sort_order, SortOrder::Asc);
    }
}
