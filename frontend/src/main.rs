use std::rc::Rc;

use components::walks_map::WalksMap;
use gloo_console::{error, info};
use walks_lib::{config::MapConfig, selection::SelectionAction, Walk};
use yew::prelude::*;
use yew_router::{
    history::{BrowserHistory, History},
    BrowserRouter, Routable, Switch,
};

mod components;
mod walks_data;

#[derive(Clone, Debug, PartialEq, Routable)]
enum Route {
    #[at("/")]
    Default,
    #[at("/walk/:index")]
    Walk { index: usize },
    #[at("/walker/:name")]
    Walker { name: String },
    #[not_found]
    #[at("/404")]
    Invalid,
}

impl Route {
    fn parse(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::Invalid)
    }

    /// The selection a deep link asks for.
    fn selection(&self) -> Option<SelectionAction> {
        match self {
            Route::Walk { index } => Some(SelectionAction::SelectWalk(*index)),
            Route::Walker { name } => Some(SelectionAction::SelectName(name.clone())),
            Route::Default => Some(SelectionAction::Clear),
            Route::Invalid => None,
        }
    }
}

enum MainMsg {
    Navigate(Route),
}

struct Model {
    walks: Rc<Vec<Walk>>,
    config: Rc<MapConfig>,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let history = BrowserHistory::new();
        let route = Route::parse(history.location().path());
        match &route {
            Route::Invalid => error!(format!("Invalid route: {}", history.location().path())),
            route => info!(format!("Start route: {:?}", route)),
        }

        Self {
            walks: walks_data::load_walks(),
            config: walks_data::map_config(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Navigate(route) => {
                BrowserHistory::new().push(route.to_path());
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link().clone();

        let on_select_walk = link.callback(|index: usize| MainMsg::Navigate(Route::Walk { index }));
        let on_select_name = link.callback(|name: String| MainMsg::Navigate(Route::Walker { name }));

        let walks = self.walks.clone();
        let config = self.config.clone();

        html! {
            <BrowserRouter>
                <Switch<Route> render={move |route: Route| match route {
                    Route::Invalid => html! { <NotFound /> },
                    route => html! {
                        <WalksMap
                            walks={walks.clone()}
                            config={config.clone()}
                            navigated={route.selection()}
                            on_select_walk={on_select_walk.clone()}
                            on_select_name={on_select_name.clone()}
                        />
                    },
                }} />
            </BrowserRouter>
        }
    }
}

#[function_component]
fn NotFound() -> Html {
    html! {
        <div class="not-found">
            <h1>{"No such walk"}</h1>
            <a href="/">{"Back to the map"}</a>
        </div>
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
