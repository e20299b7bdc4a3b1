use chrono::NaiveDate;
use shared::lenient::{parse_amount, parse_optional, parse_whole};
use shared::{CampCategory, FilterCriteria, FilterPatch, SortField, SortOrder};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub criteria: FilterCriteria,
    pub on_change: Callback<FilterPatch>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub loading: bool,
}

/// Input callback that turns the raw field text into a patch
fn on_input(on_change: &Callback<FilterPatch>, to_patch: fn(String) -> FilterPatch) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(to_patch(input.value()));
    })
}

fn on_select(on_change: &Callback<FilterPatch>, to_patch: fn(String) -> FilterPatch) -> Callback<Event> {
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_change.emit(to_patch(select.value()));
    })
}

fn show<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let criteria = &props.criteria;
    let on_change = &props.on_change;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let onclear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let category_options = CampCategory::ALL.iter().map(|category| {
        html! {
            <option value={category.label()} selected={criteria.category == Some(*category)}>
                {category.label()}
            </option>
        }
    });

    let sort_value = criteria.sort_by.map(|field| field.as_str()).unwrap_or("");

    html! {
        <form class="filter-panel" {onsubmit}>
            <div class="filter-panel__row">
                <input
                    type="search"
                    placeholder="Search camps"
                    value={criteria.search_text.clone()}
                    oninput={on_input(on_change, |v| FilterPatch::default().with_search_text(v))}
                />
                <input
                    type="text"
                    placeholder="Location"
                    value={criteria.location.clone()}
                    oninput={on_input(on_change, |v| FilterPatch::default().with_location(v))}
                />
                <select onchange={on_select(on_change, |v| FilterPatch::default().with_category(parse_optional(&v)))}>
                    <option value="" selected={criteria.category.is_none()}>{"All categories"}</option>
                    {for category_options}
                </select>
            </div>

            <div class="filter-panel__row">
                <label>{"Ages"}
                    <input
                        type="number" min="0" placeholder="min"
                        value={show(criteria.min_age)}
                        oninput={on_input(on_change, |v| FilterPatch::default().with_min_age(parse_whole(&v)))}
                    />
                    <input
                        type="number" min="0" placeholder="max"
                        value={show(criteria.max_age)}
                        oninput={on_input(on_change, |v| FilterPatch::default().with_max_age(parse_whole(&v)))}
                    />
                </label>
                <label>{"Price"}
                    <input
                        type="number" min="0" step="any" placeholder="min"
                        value={show(criteria.min_price)}
                        oninput={on_input(on_change, |v| FilterPatch::default().with_min_price(parse_amount(&v)))}
                    />
                    <input
                        type="number" min="0" step="any" placeholder="max"
                        value={show(criteria.max_price)}
                        oninput={on_input(on_change, |v| FilterPatch::default().with_max_price(parse_amount(&v)))}
                    />
                </label>
                <label>{"Dates"}
                    <input
                        type="date"
                        value={show(criteria.start_date)}
                        oninput={on_input(on_change, |v| FilterPatch::default().with_start_date(parse_optional::<NaiveDate>(&v)))}
                    />
                    <input
                        type="date"
                        value={show(criteria.end_date)}
                        oninput={on_input(on_change, |v| FilterPatch::default().with_end_date(parse_optional::<NaiveDate>(&v)))}
                    />
                </label>
            </div>

            <div class="filter-panel__row">
                <select onchange={on_select(on_change, |v| FilterPatch {
                    sort_by: Some(parse_optional::<SortField>(&v)),
                    ..FilterPatch::default()
                })}>
                    <option value="" selected={sort_value.is_empty()}>{"Best match"}</option>
                    <option value="price" selected={sort_value == "price"}>{"Price"}</option>
                    <option value="startDate" selected={sort_value == "startDate"}>{"Start date"}</option>
                    <option value="name" selected={sort_value == "name"}>{"Name"}</option>
                </select>
                <select onchange={on_select(on_change, |v| {
                    FilterPatch::default().with_sort_order(parse_optional(&v).unwrap_or_default())
                })}>
                    <option value="asc" selected={criteria.sort_order == SortOrder::Asc}>{"Ascending"}</option>
                    <option value="desc" selected={criteria.sort_order == SortOrder::Desc}>{"Descending"}</option>
                </select>
                <button type="submit" disabled={props.loading}>{"Search"}</button>
                <button type="button" onclick={onclear}>{"Clear filters"}</button>
            </div>

            if let Some(error) = &props.error {
                <p class="filter-panel__error">{error}</p>
            }
        </form>
    }
}
