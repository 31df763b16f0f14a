use crate::Position;

pub const DEFAULT_TILE_URL: &str = "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}";
pub const DEFAULT_TILE_ID: &str = "mapbox.outdoors";
pub const DEFAULT_ATTRIBUTION: &str = "Map data &copy; <a href=\"http://openstreetmap.org\">OpenStreetMap</a> contributors, \
    <a href=\"http://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, \
    Imagery © <a href=\"http://mapbox.com\">Mapbox</a>";

#[derive(Debug, Clone, PartialEq)]
pub struct TileConfig {
    pub url_template: String,
    pub id: String,
    pub access_token: String,
    pub attribution: String,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.into(),
            id: DEFAULT_TILE_ID.into(),
            access_token: String::new(),
            attribution: DEFAULT_ATTRIBUTION.into(),
        }
    }
}

impl TileConfig {
    /// Fills in `{id}` and `{accessToken}`. `{z}`, `{x}` and `{y}` are left for Leaflet.
    pub fn url(&self) -> String {
        self.url_template
            .replace("{id}", &self.id)
            .replace("{accessToken}", &self.access_token)
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

/// Fixed view of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub title: String,
    pub center: Position,
    pub zoom: f64,
    pub max_zoom: f64,
    pub tile: TileConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "Berlin Walks".into(),
            center: Position(52.45, 13.30),
            zoom: 9.,
            max_zoom: 18.,
            tile: TileConfig::default(),
        }
    }
}

impl MapConfig {
    pub fn with_access_token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.tile.access_token = token.trim().to_owned();
        }
        self
    }
}
