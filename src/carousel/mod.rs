pub mod commands;
pub mod controller;
pub mod state;

pub use controller::CarouselController;
pub use state::{CarouselState, VisibleLayer};
