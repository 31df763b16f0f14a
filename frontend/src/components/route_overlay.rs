use leaflet::{LatLng, Map, Polyline, PolylineOptions, Tooltip, TooltipOptions};
use walks_lib::{
    appearance::{RouteState, RouteStyle},
    Walk,
};
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::js_sys::Array;
use yew::Callback;

/// A walk drawn on the map: the visible line plus a wide invisible line on top
/// that receives the pointer events.
pub struct RouteOverlay {
    line: Polyline,
    hit_area: Polyline,
    state: RouteState,
    // Leaflet holds references to these; they must outlive the polylines.
    _listeners: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl RouteOverlay {
    pub fn new(
        map: &Map,
        index: usize,
        walk: &Walk,
        state: RouteState,
        on_hover: Callback<(usize, bool)>,
        on_click: Callback<usize>,
    ) -> Self {
        let line = make_polyline(walk, &style_options(&state.style()));
        let hit_area = make_polyline(walk, &style_options(&RouteStyle::hit_area()));

        let tooltip_opts = TooltipOptions::default();
        tooltip_opts.set_sticky(true);
        tooltip_opts.set_direction("bottom".into());
        let tooltip = Tooltip::new(&tooltip_opts, None);
        tooltip.set_content(&format!("{}<br>{}", &walk.title, walk.date.day_first()).into());
        hit_area.bind_tooltip(&tooltip);

        let mut listeners = Vec::new();

        let hover = on_hover.clone();
        listeners.push(listen(&hit_area, "mouseover", move |_| hover.emit((index, true))));
        listeners.push(listen(&hit_area, "mouseout", move |_| on_hover.emit((index, false))));
        listeners.push(listen(&hit_area, "click", move |_| on_click.emit(index)));

        line.add_to(map);
        hit_area.add_to(map);

        Self {
            line,
            hit_area,
            state,
            _listeners: listeners,
        }
    }

    pub fn set_state(&mut self, state: RouteState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.line.set_style(&style_options(&state.style()));
    }
}

impl Drop for RouteOverlay {
    fn drop(&mut self) {
        self.hit_area.remove();
        self.line.remove();
    }
}

fn listen(polyline: &Polyline, event: &str, handler: impl FnMut(JsValue) + 'static) -> Closure<dyn FnMut(JsValue)> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    polyline.on(event, closure.as_ref());
    closure
}

fn style_options(style: &RouteStyle) -> PolylineOptions {
    let opts = PolylineOptions::new();
    opts.set_color(style.color.into());
    opts.set_weight(style.weight);
    opts.set_opacity(style.opacity);
    opts.set_smooth_factor(1.5);
    opts
}

fn make_polyline(walk: &Walk, opts: &PolylineOptions) -> Polyline {
    let points = walk.path.iter().map(|p| LatLng::new(p.lat(), p.lng()));
    Polyline::new_with_options(&Array::from_iter(points), opts)
}
