use walks_lib::{
    details::{DetailsView, INFO_SEPARATOR, PLACEHOLDER},
    participants::{ParticipantSegment, NAME_SEPARATOR},
    Walk,
};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WalkDetailsProps {
    pub walk: Option<Walk>,
    pub on_click_name: Callback<String>,
}

#[function_component]
pub fn WalkDetails(props: &WalkDetailsProps) -> Html {
    let DetailsView::Walk(details) = DetailsView::new(props.walk.as_ref()) else {
        return html! {
            <div class="walk-details empty">
                <div class="title">{PLACEHOLDER}</div>
            </div>
        };
    };

    let participants = details
        .participants
        .iter()
        .map(|segment| match *segment {
            ParticipantSegment::Name(name) => {
                let on_click_name = props.on_click_name.clone();
                let owned = name.to_owned();
                let onclick = Callback::from(move |_: MouseEvent| on_click_name.emit(owned.clone()));
                html! { <a class="participant" {onclick}>{name}</a> }
            }
            ParticipantSegment::Separator => html! { {NAME_SEPARATOR} },
        })
        .collect::<Html>();

    html! {
        <div class="walk-details">
            <div class="title">{details.title}</div>
            <div class="info">
                <span class="date">{details.date.clone()}</span>
                {INFO_SEPARATOR}
                <span class="distance">{details.distance.clone()}</span>
                {INFO_SEPARATOR}
                <span class="participants">{details.walkers.clone()}</span>
            </div>
            <div class="details">
                {participants}
            </div>
        </div>
    }
}
