pub use arrayvec;
pub use glam;

pub mod consts;
pub mod logging;
mod sim;

pub use sim::*;
