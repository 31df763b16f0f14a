pub mod appearance;
pub mod config;
pub mod details;
pub mod error;
pub mod participants;
pub mod selection;
pub mod summary;
pub mod walk;

pub use error::WalkError;
pub use walk::{Position, Walk, WalkDate};
