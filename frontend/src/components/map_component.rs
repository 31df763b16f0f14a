use std::rc::Rc;

use gloo_console::info;
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, TileLayer, TileLayerOptions};
use walks_lib::{config::MapConfig, selection::Selection, Walk};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};
use yew::prelude::*;

use super::route_overlay::RouteOverlay;

pub enum Msg {
    Hover(usize, bool),
    Click(usize),
}

pub struct MapComponent {
    map: Map,
    container: HtmlElement,
    overlays: Vec<RouteOverlay>,
    hovered: Vec<bool>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub walks: Rc<Vec<Walk>>,
    pub selection: Selection,
    pub config: Rc<MapConfig>,
    pub on_click: Callback<usize>,
}

impl MapComponent {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn build_overlays(&mut self, ctx: &Context<Self>) {
        let props = ctx.props();

        // Dropping the old overlays removes them from the map
        self.overlays.clear();
        self.hovered = vec![false; props.walks.len()];

        let on_hover = ctx.link().callback(|(index, hovered): (usize, bool)| Msg::Hover(index, hovered));
        let on_click = ctx.link().callback(Msg::Click);
        for (index, walk) in props.walks.iter().enumerate() {
            let state = props.selection.route_state(index, walk, false);
            self.overlays.push(RouteOverlay::new(
                &self.map,
                index,
                walk,
                state,
                on_hover.clone(),
                on_click.clone(),
            ));
        }

        info!(format!("Drew {} walks", self.overlays.len()));
    }

    fn restyle(&mut self, props: &Props) {
        let states = props.selection.route_states(&props.walks, &self.hovered);
        for (overlay, state) in self.overlays.iter_mut().zip(states) {
            overlay.set_state(state);
        }
    }
}

impl Component for MapComponent {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let container: HtmlElement = document()
            .create_element("div")
            .expect("div is a valid element name")
            .unchecked_into();
        container.set_class_name("map");
        container.set_id("mapid");

        let leaflet_map = Map::new_with_element(&container, &MapOptions::default());

        Self {
            map: leaflet_map,
            container,
            overlays: Vec::with_capacity(ctx.props().walks.len()),
            hovered: Vec::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let config = &ctx.props().config;
            self.map.set_max_zoom(config.max_zoom);
            self.map.set_view(&LatLng::new(config.center.lat(), config.center.lng()), config.zoom);
            add_tile_layer(&self.map, config);
            self.build_overlays(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hover(index, hovered) => {
                let props = ctx.props();
                if let (Some(flag), Some(overlay), Some(walk)) =
                    (self.hovered.get_mut(index), self.overlays.get_mut(index), props.walks.get(index))
                {
                    *flag = hovered;
                    overlay.set_state(props.selection.route_state(index, walk, hovered));
                }
            }
            Msg::Click(index) => ctx.props().on_click.emit(index),
        }
        // Leaflet draws the overlays, the yew tree is unchanged
        false
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.map.invalidate_size(false);
        let props = ctx.props();

        if !Rc::ptr_eq(&props.walks, &old_props.walks) {
            self.build_overlays(ctx);
        } else if props.selection != old_props.selection {
            self.restyle(props);
        }

        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map-wrapper">
                {self.render_map()}
            </div>
        }
    }
}

fn add_tile_layer(map: &Map, config: &MapConfig) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    opts.set_attribution(config.tile.attribution.clone());
    TileLayer::new_options(&config.tile.url(), &opts).add_to(map);
}
