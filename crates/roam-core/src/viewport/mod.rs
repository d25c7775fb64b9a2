mod controller;
mod region;

pub use controller::{AnimationId, ControllerState, ViewportController, ZoomPolicy};
pub use region::Region;
