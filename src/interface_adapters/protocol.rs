// Wire DTOs for frames emitted to the shell as JSON lines.

use crate::domain::{Facing, MotionState, Vec2};
use crate::interface_adapters::render::sprite_origin;
use crate::use_cases::{FrameUpdate, RunSummary};
use serde::Serialize;

/// Lines written to the frame stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellMessage {
    Frame(FrameUpdateDto),
    Summary(RunSummaryDto),
}

/// Renderer-facing player fields.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateDto {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub state: MotionState,
}

/// One tick of output, including where to draw the sprite.
#[derive(Debug, Clone, Serialize)]
pub struct FrameUpdateDto {
    pub tick: u64,
    pub player: PlayerStateDto,
    pub camera: Vec2,
    pub sprite: Vec2,
}

impl From<FrameUpdate> for FrameUpdateDto {
    fn from(update: FrameUpdate) -> Self {
        Self {
            tick: update.tick,
            player: PlayerStateDto {
                x: update.player.position.x,
                y: update.player.position.y,
                facing: update.player.facing,
                state: update.player.motion_state,
            },
            camera: update.camera,
            sprite: sprite_origin(update.player.position, update.camera),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummaryDto {
    pub ticks: u64,
    pub player: PlayerStateDto,
    pub camera: Vec2,
}

impl From<RunSummary> for RunSummaryDto {
    fn from(summary: RunSummary) -> Self {
        Self {
            ticks: summary.ticks,
            player: PlayerStateDto {
                x: summary.player.position.x,
                y: summary.player.position.y,
                facing: summary.player.facing,
                state: summary.player.motion_state,
            },
            camera: summary.camera,
        }
    }
}
