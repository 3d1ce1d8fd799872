// Use-case level outputs of the tick loop.

use crate::domain::{PlayerSnapshot, Vec2};

/// State published to the shell after each tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameUpdate {
    pub tick: u64,
    pub player: PlayerSnapshot,
    pub camera: Vec2,
}

/// Final state once the loop stops.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub ticks: u64,
    pub player: PlayerSnapshot,
    pub camera: Vec2,
}
