use std::rc::Rc;

use walks_lib::{summary::GlobalSummary, Walk};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct GlobalInfoProps {
    pub title: AttrValue,
    pub walks: Rc<Vec<Walk>>,
}

#[function_component]
pub fn GlobalInfo(props: &GlobalInfoProps) -> Html {
    let summary = GlobalSummary::new(&props.walks);

    html! {
        <div class="global-info">
            <div class="title">{props.title.clone()}</div>
            <div class="distance">{summary.line()}</div>
        </div>
    }
}
