//! Client-side filter state: current criteria plus the last result set.
//!
//! The store is a plain value owned by whoever drives the UI (the yew hook
//! wraps it in a reducer). It never performs I/O itself; `submit_search`
//! takes the fetch function as an argument.

use std::future::Future;
use thiserror::Error;

use crate::filter::{FilterCriteria, FilterPatch, FilterValidationError};
use crate::quick_filter::QuickFilter;
use crate::CampRecord;

/// Why a search did not replace the result set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Rejected before any request was sent
    #[error(transparent)]
    Invalid(#[from] FilterValidationError),
    /// The request was sent but did not produce results
    #[error("Search failed. Please try again.")]
    Failed { detail: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterStore {
    criteria: FilterCriteria,
    results: Vec<CampRecord>,
    error: Option<String>,
    in_flight: u32,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn results(&self) -> &[CampRecord] {
        &self.results
    }

    /// Message of the last failed submission, if it has not been superseded
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while at least one prepared search has not finished
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Merge a partial update into the criteria. Does not search.
    pub fn update_filter(&mut self, patch: FilterPatch) {
        if patch.is_empty() {
            return;
        }
        self.criteria.merge(patch);
    }

    /// Same merge contract as [`FilterStore::update_filter`].
    pub fn apply_quick_filter(&mut self, quick_filter: &QuickFilter) {
        self.update_filter(quick_filter.patch.clone());
    }

    /// Reset every criterion to its default. Results are kept.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.error = None;
    }

    /// Validate and mark a search as in flight.
    ///
    /// Returns the criteria snapshot to send. On a range inversion the error
    /// is recorded, nothing is marked loading and results are untouched.
    pub fn prepare_search(&mut self) -> Result<FilterCriteria, SearchError> {
        if let Err(invalid) = self.criteria.validate() {
            let error = SearchError::from(invalid);
            self.error = Some(error.to_string());
            return Err(error);
        }
        self.error = None;
        self.in_flight += 1;
        Ok(self.criteria.clone())
    }

    /// Record the outcome of a request started by [`FilterStore::prepare_search`].
    ///
    /// Overlapping searches are not sequenced: whichever finishes last wins.
    /// Loading stays on until every prepared search has finished.
    pub fn finish_search(
        &mut self,
        outcome: Result<Vec<CampRecord>, String>,
    ) -> Result<Vec<CampRecord>, SearchError> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(records) => {
                self.results = records.clone();
                self.error = None;
                Ok(records)
            }
            Err(detail) => {
                let error = SearchError::Failed { detail };
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Validate, fetch with the given client, and store the outcome.
    pub async fn submit_search<F, Fut>(&mut self, fetch: F) -> Result<Vec<CampRecord>, SearchError>
    where
        F: FnOnce(FilterCriteria) -> Fut,
        Fut: Future<Output = Result<Vec<CampRecord>, String>>,
    {
        let criteria = self.prepare_search()?;
        let outcome = fetch(criteria).await;
        self.finish_search(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::fallback_camps;
    use crate::quick_filter::find_quick_filter;
    use crate::CampCategory;
    use chrono::NaiveDate;
    use std::cell::Cell;

    fn sample_results(count: usize) -> Vec<CampRecord> {
        fallback_camps()
            .iter()
            .take(count)
            .cloned()
            .map(|mut camp| {
                camp.id = format!("camp::{}", camp.name);
                camp
            })
            .collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = FilterStore::new();
        assert_eq!(store.criteria(), &FilterCriteria::default());
        assert!(store.results().is_empty());
        assert!(store.error().is_none());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_update_filter_with_empty_patch_is_noop() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().with_location("Denver"));
        let before = store.clone();

        store.update_filter(FilterPatch::default());

        assert_eq!(store, before);
    }

    #[test]
    fn test_quick_filter_then_update_keeps_both() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().with_search_text("swim"));

        let ages = find_quick_filter("ages-5-10").expect("quick filter exists");
        store.apply_quick_filter(ages);
        store.update_filter(FilterPatch::default().with_category(Some(CampCategory::Arts)));

        let criteria = store.criteria();
        assert_eq!(criteria.min_age, Some(5));
        assert_eq!(criteria.max_age, Some(10));
        assert_eq!(criteria.category, Some(CampCategory::Arts));
        assert_eq!(criteria.search_text, "swim");
        assert_eq!(criteria.max_price, None);
    }

    #[test]
    fn test_clear_filters_resets_criteria_but_keeps_results() {
        let mut store = FilterStore::new();
        store.finish_search(Ok(sample_results(2))).unwrap();
        store.update_filter(
            FilterPatch::default()
                .with_search_text("art")
                .with_sort(Some(crate::SortField::Price), crate::SortOrder::Desc),
        );

        store.clear_filters();

        assert_eq!(store.criteria(), &FilterCriteria::default());
        assert_eq!(store.criteria().sort_order, crate::SortOrder::Asc);
        assert_eq!(store.results().len(), 2);
    }

    #[tokio::test]
    async fn test_valid_price_range_issues_request() {
        let mut store = FilterStore::new();
        store.update_filter(
            FilterPatch::default()
                .with_min_price(Some(100.0))
                .with_max_price(Some(100.0)),
        );
        let calls = Cell::new(0);

        let results = store
            .submit_search(|criteria| {
                calls.set(calls.get() + 1);
                assert_eq!(criteria.min_price, Some(100.0));
                async { Ok(sample_results(3)) }
            })
            .await
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(results.len(), 3);
        assert_eq!(store.results().len(), 3);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_inverted_price_range_rejects_without_request() {
        let mut store = FilterStore::new();
        store.finish_search(Ok(sample_results(1))).unwrap();
        let previous = store.results().to_vec();
        store.update_filter(
            FilterPatch::default()
                .with_min_price(Some(300.0))
                .with_max_price(Some(100.0)),
        );
        let calls = Cell::new(0);

        let err = store
            .submit_search(|_| {
                calls.set(calls.get() + 1);
                async { Ok(Vec::new()) }
            })
            .await
            .unwrap_err();

        assert_eq!(calls.get(), 0);
        assert_eq!(err, SearchError::Invalid(FilterValidationError::PriceRangeInverted));
        assert_eq!(
            store.error(),
            Some("Minimum price cannot be greater than maximum price")
        );
        assert_eq!(store.results(), previous.as_slice());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_inverted_date_range_rejects_without_request() {
        let mut store = FilterStore::new();
        store.update_filter(
            FilterPatch::default()
                .with_start_date(NaiveDate::from_ymd_opt(2026, 8, 1))
                .with_end_date(NaiveDate::from_ymd_opt(2026, 7, 1)),
        );
        let calls = Cell::new(0);

        let result = store
            .submit_search(|_| {
                calls.set(calls.get() + 1);
                async { Ok(Vec::new()) }
            })
            .await;

        assert_eq!(calls.get(), 0);
        assert_eq!(store.error(), Some("Start date cannot be after end date"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_equal_dates_are_accepted() {
        let mut store = FilterStore::new();
        let day = NaiveDate::from_ymd_opt(2026, 7, 4);
        store.update_filter(FilterPatch::default().with_start_date(day).with_end_date(day));

        let result = store.submit_search(|_| async { Ok(Vec::new()) }).await;

        assert!(result.is_ok());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_previous_results() {
        let mut store = FilterStore::new();
        store.finish_search(Ok(sample_results(2))).unwrap();

        let err = store
            .submit_search(|_| async { Err("connection reset".to_string()) })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SearchError::Failed {
                detail: "connection reset".to_string()
            }
        );
        assert_eq!(store.error(), Some("Search failed. Please try again."));
        assert_eq!(store.results().len(), 2);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_last_finished_search_wins() {
        let mut store = FilterStore::new();
        store.prepare_search().unwrap();
        store.prepare_search().unwrap();

        store.finish_search(Ok(sample_results(1))).unwrap();
        store.finish_search(Ok(sample_results(4))).unwrap();

        assert_eq!(store.results().len(), 4);
    }

    #[test]
    fn test_loading_holds_until_every_overlapping_search_finishes() {
        let mut store = FilterStore::new();
        store.prepare_search().unwrap();
        store.prepare_search().unwrap();

        store.finish_search(Ok(sample_results(1))).unwrap();
        assert!(store.is_loading());

        let _ = store.finish_search(Err("timeout".to_string()));
        assert!(!store.is_loading());

        // A stray completion never drives the counter below zero
        store.finish_search(Ok(sample_results(2))).unwrap();
        assert!(!store.is_loading());
        store.prepare_search().unwrap();
        assert!(store.is_loading());
    }
}
