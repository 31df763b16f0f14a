pub mod global_info;
pub mod map_component;
pub mod route_overlay;
pub mod walk_details;
pub mod walks_map;
