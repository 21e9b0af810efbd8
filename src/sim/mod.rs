mod ball_tracker;
pub mod frame;
mod pose;
mod resolver;
mod roster;
mod scene;
mod setup_poses;
mod sync_config;
mod synchronizer;
mod team;
mod world_state;

pub use ball_tracker::*;
pub use pose::*;
pub use resolver::*;
pub use roster::*;
pub use scene::*;
pub use setup_poses::*;
pub use sync_config::*;
pub use synchronizer::*;
pub use team::*;
pub use world_state::*;
