use std::rc::Rc;

use shared::{CampRecord, FilterPatch, FilterStore, QuickFilter};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Filter store plus whether a search has completed yet
#[derive(Clone, Default, PartialEq)]
pub struct SearchState {
    pub store: FilterStore,
    pub searched: bool,
}

pub enum SearchAction {
    Update(FilterPatch),
    Quick(&'static QuickFilter),
    Clear,
    Begin,
    Finish(Result<Vec<CampRecord>, String>),
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SearchAction::Update(patch) => next.store.update_filter(patch),
            SearchAction::Quick(quick_filter) => next.store.apply_quick_filter(quick_filter),
            SearchAction::Clear => next.store.clear_filters(),
            SearchAction::Begin => {
                let _ = next.store.prepare_search();
            }
            SearchAction::Finish(outcome) => {
                if next.store.finish_search(outcome).is_ok() {
                    next.searched = true;
                }
            }
        }
        Rc::new(next)
    }
}

pub struct UseCampSearchResult {
    pub state: Rc<SearchState>,
    pub actions: UseCampSearchActions,
}

#[derive(Clone)]
pub struct UseCampSearchActions {
    pub update_filter: Callback<FilterPatch>,
    pub apply_quick_filter: Callback<&'static QuickFilter>,
    pub clear_filters: Callback<()>,
    pub submit_search: Callback<()>,
}

#[hook]
pub fn use_camp_search(api_client: &ApiClient) -> UseCampSearchResult {
    let state = use_reducer(SearchState::default);

    let update_filter = {
        let state = state.clone();
        Callback::from(move |patch: FilterPatch| state.dispatch(SearchAction::Update(patch)))
    };

    let apply_quick_filter = {
        let state = state.clone();
        Callback::from(move |quick_filter: &'static QuickFilter| {
            gloo::console::log!("Applying quick filter:", quick_filter.id);
            state.dispatch(SearchAction::Quick(quick_filter));
        })
    };

    let clear_filters = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SearchAction::Clear))
    };

    let submit_search = {
        let api_client = api_client.clone();
        let state = state.clone();

        Callback::from(move |_| {
            // An inverted range is recorded as an error and never sent
            let mut snapshot = state.store.clone();
            let prepared = snapshot.prepare_search();
            state.dispatch(SearchAction::Begin);

            let criteria = match prepared {
                Ok(criteria) => criteria,
                Err(e) => {
                    gloo::console::warn!("Search not sent:", e.to_string());
                    return;
                }
            };

            let api_client = api_client.clone();
            let state = state.clone();
            spawn_local(async move {
                let outcome = api_client.search_camps(&criteria).await;
                if let Err(e) = &outcome {
                    gloo::console::error!("Camp search failed:", e);
                }
                state.dispatch(SearchAction::Finish(outcome));
            });
        })
    };

    UseCampSearchResult {
        state: Rc::new((*state).clone()),
        actions: UseCampSearchActions {
            update_filter,
            apply_quick_filter,
            clear_filters,
            submit_search,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{find_quick_filter, CampCategory, FilterCriteria};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reduce(state: SearchState, action: SearchAction) -> SearchState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[wasm_bindgen_test]
    fn test_quick_filter_then_category_keeps_both() {
        let quick = find_quick_filter("ages-5-10").unwrap();
        let state = reduce(SearchState::default(), SearchAction::Quick(quick));
        let state = reduce(
            state,
            SearchAction::Update(FilterPatch::default().with_category(Some(CampCategory::Arts))),
        );

        let criteria = state.store.criteria();
        assert_eq!(criteria.min_age, Some(5));
        assert_eq!(criteria.max_age, Some(10));
        assert_eq!(criteria.category, Some(CampCategory::Arts));
        assert_eq!(criteria.search_text, "");
    }

    #[wasm_bindgen_test]
    fn test_inverted_price_is_reported_without_loading() {
        let patch = FilterPatch::default()
            .with_min_price(Some(300.0))
            .with_max_price(Some(100.0));
        let state = reduce(SearchState::default(), SearchAction::Update(patch));
        let state = reduce(state, SearchAction::Begin);

        assert!(!state.store.is_loading());
        assert_eq!(
            state.store.error(),
            Some("Minimum price cannot be greater than maximum price")
        );
        assert!(!state.searched);
    }

    #[wasm_bindgen_test]
    fn test_failed_search_keeps_home_view() {
        let state = reduce(SearchState::default(), SearchAction::Begin);
        assert!(state.store.is_loading());

        let state = reduce(state, SearchAction::Finish(Err("offline".to_string())));
        assert!(!state.searched);
        assert_eq!(state.store.error(), Some("Search failed. Please try again."));

        let state = reduce(state, SearchAction::Clear);
        assert_eq!(state.store.criteria(), &FilterCriteria::default());
        assert_eq!(state.store.error(), None);
    }
}
