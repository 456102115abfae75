pub mod metadata;
pub mod predict;

pub use metadata::show_metadata;
pub use predict::{estimate, show_prediction};
