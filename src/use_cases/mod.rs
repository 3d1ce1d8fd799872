// Use cases layer: the fixed-cadence simulation loop.

pub mod game;
pub mod types;

pub use game::{World, world_task};
pub use types::{FrameUpdate, RunSummary};
