use shared::DisplayCamp;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampCardProps {
    pub camp: DisplayCamp,
}

#[function_component(CampCard)]
pub fn camp_card(props: &CampCardProps) -> Html {
    let camp = &props.camp;
    let class = if camp.is_fallback {
        classes!("camp-card", "camp-card--featured")
    } else {
        classes!("camp-card")
    };

    html! {
        <div {class}>
            <img class="camp-card__image" src={camp.image_url.clone()} alt={camp.name.clone()} />
            <div class="camp-card__body">
                <span class="camp-card__category">{camp.category.clone()}</span>
                <h3 class="camp-card__name">{camp.name.clone()}</h3>
                <p class="camp-card__location">{camp.location.clone()}</p>
                <p class="camp-card__description">{camp.description.clone()}</p>
                <div class="camp-card__meta">
                    <span>{camp.age_label.clone()}</span>
                    <span class="camp-card__price">{camp.price_label.clone()}</span>
                </div>
            </div>
        </div>
    }
}
