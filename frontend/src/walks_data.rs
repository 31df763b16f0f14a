use std::rc::Rc;

use gloo_console::{error, info, warn};
use walks_lib::{config::MapConfig, walk::parse_walks, Walk};

const BUNDLED_WALKS: &str = include_str!("../walks.json");

/// The walk list shipped with the page. Broken records are skipped, a broken file
/// degrades to an empty map.
pub fn load_walks() -> Rc<Vec<Walk>> {
    match parse_walks(BUNDLED_WALKS) {
        Ok(list) => {
            for rejected in &list.rejected {
                warn!(format!("{}", rejected));
            }
            info!(format!("Loaded {} walks", list.walks.len()));
            Rc::new(list.walks)
        }
        Err(err) => {
            error!(format!("{}", err));
            Rc::new(Vec::new())
        }
    }
}

pub fn map_config() -> Rc<MapConfig> {
    let config = MapConfig::default().with_access_token(option_env!("MAPBOX_ACCESS_TOKEN"));
    if !config.tile.has_access_token() {
        warn!("MAPBOX_ACCESS_TOKEN was not set at build time, map tiles will not load");
    }
    Rc::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_walks_parse() {
        let list = parse_walks(BUNDLED_WALKS).unwrap();
        let walks = &list.walks;
        assert!(list.rejected.is_empty());
        assert!(!walks.is_empty());
        assert!(walks.iter().all(|walk| !walk.path.is_empty()));
    }
}
