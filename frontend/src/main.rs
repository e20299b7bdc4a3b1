use shared::{CampRecord, DisplayContext};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{
    camp_results::CampResults, filter_panel::FilterPanel, quick_filter_bar::QuickFilterBar,
};
use hooks::use_camp_search::use_camp_search;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_state(ApiClient::new);
    let search = use_camp_search(&api_client);

    // Featured grid shown until the first successful search
    let home_records = use_state(Vec::<CampRecord>::new);
    {
        let api_client = (*api_client).clone();
        let home_records = home_records.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.list_camps().await {
                    Ok(camps) => home_records.set(camps),
                    Err(e) => gloo::console::error!("Failed to load featured camps:", e),
                }
            });
            || ()
        });
    }

    let state = &search.state;
    let (records, context) = if state.searched {
        (state.store.results().to_vec(), DisplayContext::SearchResults)
    } else {
        ((*home_records).clone(), DisplayContext::Home)
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Find a Summer Camp"}</h1>
            </header>
            <main>
                <QuickFilterBar on_select={search.actions.apply_quick_filter.clone()} />
                <FilterPanel
                    criteria={state.store.criteria().clone()}
                    on_change={search.actions.update_filter.clone()}
                    on_submit={search.actions.submit_search.clone()}
                    on_clear={search.actions.clear_filters.clone()}
                    error={state.store.error().map(str::to_string)}
                    loading={state.store.is_loading()}
                />
                <CampResults {records} {context} loading={state.store.is_loading()} />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
