use shared::{quick_filters, QuickFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuickFilterBarProps {
    pub on_select: Callback<&'static QuickFilter>,
}

/// One-click shortcuts. Selecting one merges it into the current criteria
/// without searching.
#[function_component(QuickFilterBar)]
pub fn quick_filter_bar(props: &QuickFilterBarProps) -> Html {
    let buttons = quick_filters().iter().map(|quick_filter| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(quick_filter));
        html! {
            <button key={quick_filter.id} class="quick-filter" {onclick}>
                {quick_filter.label}
            </button>
        }
    });

    html! {
        <div class="quick-filter-bar">
            {for buttons}
        </div>
    }
}
