//! # Camp Query Builder
//!
//! Translates a [`FilterCriteria`] into a [`CampQuery`] for the camp store.
//!
//! Each criterion contributes an independent AND condition; a criterion that
//! is empty contributes nothing. The builder is pure and infallible, so
//! malformed client input (already decoded as absent) can never make it fail.

use chrono::NaiveDate;
use serde_json::Value;
use shared::{CampStatus, FilterCriteria, SortField};

use super::models::query::{fields, CampQuery, Criteria, FieldOp, SortSpec, Visibility};

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a public query: soft-deleted and inactive camps are excluded.
    pub fn build(&self, criteria: &FilterCriteria) -> CampQuery {
        self.build_with_visibility(criteria, Visibility::ActiveOnly)
    }

    pub fn build_with_visibility(
        &self,
        criteria: &FilterCriteria,
        visibility: Visibility,
    ) -> CampQuery {
        let mut conditions = Vec::new();

        if visibility == Visibility::ActiveOnly {
            conditions.push(Criteria::field(fields::IS_DELETED, FieldOp::Ne(Value::Bool(true))));
        }
        conditions.push(Criteria::field(
            fields::STATUS,
            FieldOp::Eq(Value::from(CampStatus::Active.as_str())),
        ));

        let search_text = criteria.search_text.trim();
        if !search_text.is_empty() {
            conditions.push(Criteria::Any(
                [fields::NAME, fields::DESCRIPTION, fields::LOCATION]
                    .into_iter()
                    .map(|path| {
                        Criteria::field(path, FieldOp::ContainsIgnoreCase(search_text.to_string()))
                    })
                    .collect(),
            ));
        }

        let location = criteria.location.trim();
        if !location.is_empty() {
            conditions.push(Criteria::field(
                fields::LOCATION,
                FieldOp::ContainsIgnoreCase(location.to_string()),
            ));
        }

        if let Some(category) = criteria.category {
            conditions.push(Criteria::field(
                fields::CATEGORY,
                FieldOp::Eq(Value::from(category.label())),
            ));
        }

        // Age ranges overlap: camp.min <= maxAge and camp.max >= minAge
        if let Some(max_age) = criteria.max_age {
            conditions.push(Criteria::field(fields::AGE_MIN, FieldOp::Lte(Value::from(max_age))));
        }
        if let Some(min_age) = criteria.min_age {
            conditions.push(Criteria::field(fields::AGE_MAX, FieldOp::Gte(Value::from(min_age))));
        }

        if let Some(min_price) = criteria.min_price.filter(|p| p.is_finite()) {
            conditions.push(Criteria::field(fields::PRICE, FieldOp::Gte(Value::from(min_price))));
        }
        if let Some(max_price) = criteria.max_price.filter(|p| p.is_finite()) {
            conditions.push(Criteria::field(fields::PRICE, FieldOp::Lte(Value::from(max_price))));
        }

        // Session overlaps the requested window
        if let Some(end_date) = criteria.end_date {
            conditions.push(Criteria::field(fields::START_DATE, FieldOp::Lte(date_value(end_date))));
        }
        if let Some(start_date) = criteria.start_date {
            conditions.push(Criteria::field(fields::END_DATE, FieldOp::Gte(date_value(start_date))));
        }

        let sort = criteria.sort_by.map(|field| SortSpec {
            field: sort_path(field),
            direction: criteria.sort_order.into(),
        });

        CampQuery {
            criteria: Criteria::All(conditions),
            sort,
        }
    }
}

fn sort_path(field: SortField) -> &'static str {
    match field {
        SortField::Price => fields::PRICE,
        SortField::StartDate => fields::START_DATE,
        SortField::Name => fields::NAME,
    }
}

fn date_value(date: NaiveDate) -> Value {
    Value::from(date.format("%Y-%m-%d").to_string())
}
