use shared::{project_results, CampRecord, DisplayContext};
use yew::prelude::*;

use super::camp_card::CampCard;

#[derive(Properties, PartialEq)]
pub struct CampResultsProps {
    pub records: Vec<CampRecord>,
    pub context: DisplayContext,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(CampResults)]
pub fn camp_results(props: &CampResultsProps) -> Html {
    if props.loading {
        return html! { <div class="camp-results camp-results--loading">{"Searching camps..."}</div> };
    }

    let cards = project_results(&props.records, props.context);
    if cards.is_empty() {
        return html! {
            <div class="camp-results camp-results--empty">
                {"No camps match these filters. Try widening your search."}
            </div>
        };
    }

    let heading = match props.context {
        DisplayContext::Home => "Featured camps".to_string(),
        DisplayContext::SearchResults => format!("{} camps found", cards.len()),
    };

    html! {
        <section class="camp-results">
            <h2>{heading}</h2>
            <div class="camp-results__grid">
                { for cards.into_iter().map(|camp| {
                    let key = camp.id.clone();
                    html! { <CampCard key={key} {camp} /> }
                }) }
            </div>
        </section>
    }
}
