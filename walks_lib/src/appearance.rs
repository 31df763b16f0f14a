/// Display state of one route overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteState {
    pub hovered: bool,
    /// The route contains the selected participant.
    pub selected: bool,
    /// The route is the one shown in the details panel.
    pub active: bool,
}

impl RouteState {
    pub fn style(&self) -> RouteStyle {
        let color = if self.selected {
            "rgb(230, 80, 30)"
        } else if self.active {
            "rgb(0, 96, 255)"
        } else {
            "rgb(0, 160, 255)"
        };

        RouteStyle {
            color,
            weight: if self.hovered || self.active { 6. } else { 3. },
            opacity: if self.hovered { 1. } else { 0.8 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
}

impl RouteStyle {
    /// Invisible wide line drawn above the visible one to catch pointer events.
    pub fn hit_area() -> Self {
        Self {
            color: "rgb(0, 0, 0)",
            weight: 20.,
            opacity: 0.,
        }
    }
}
