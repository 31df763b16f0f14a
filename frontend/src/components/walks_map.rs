use std::rc::Rc;

use gloo_console::info;
use walks_lib::{
    config::MapConfig,
    selection::{Selection, SelectionAction},
    Walk,
};
use yew::prelude::*;

use super::{global_info::GlobalInfo, map_component::MapComponent, walk_details::WalkDetails};

pub enum Msg {
    SelectWalk(usize),
    SelectName(String),
}

/// The map with its route overlays and the two info panels. Owns the selection.
pub struct WalksMap {
    selection: Selection,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub walks: Rc<Vec<Walk>>,
    pub config: Rc<MapConfig>,
    /// Applied on creation and whenever it changes, e.g. from the browser history.
    /// `Clear` resets both walk and walker.
    #[prop_or_default]
    pub navigated: Option<SelectionAction>,
    #[prop_or_default]
    pub on_select_walk: Callback<usize>,
    #[prop_or_default]
    pub on_select_name: Callback<String>,
}

impl Component for WalksMap {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut selection = Selection::default();
        if let Some(action) = ctx.props().navigated.clone() {
            selection.apply(action);
        }
        Self { selection }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::SelectWalk(index) => {
                info!(format!("Selected walk #{}", index));
                let changed = self.selection.apply(SelectionAction::SelectWalk(index));
                if changed {
                    props.on_select_walk.emit(index);
                }
                changed
            }
            Msg::SelectName(name) => {
                info!(format!("Selected walker: {}", name));
                let changed = self.selection.apply(SelectionAction::SelectName(name.clone()));
                if changed {
                    props.on_select_name.emit(name);
                }
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.navigated != old_props.navigated {
            if let Some(action) = props.navigated.clone() {
                self.selection.apply(action);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        let selected_walk = self.selection.selected_walk(&props.walks).cloned();

        html! {
            <div class="walks-map">
                <MapComponent
                    walks={props.walks.clone()}
                    selection={self.selection.clone()}
                    config={props.config.clone()}
                    on_click={link.callback(Msg::SelectWalk)}
                />
                <div id="overlays">
                    <GlobalInfo title={props.config.title.clone()} walks={props.walks.clone()} />
                    <WalkDetails walk={selected_walk} on_click_name={link.callback(Msg::SelectName)} />
                </div>
            </div>
        }
    }
}
