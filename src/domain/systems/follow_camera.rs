use crate::domain::state::{Facing, PlayerSnapshot, Vec2};
use crate::domain::tuning::CameraTuning;

/// Camera offset that trails the player with a look-ahead bias.
///
/// Holds no reference to the player; it is fed a snapshot every tick.
#[derive(Debug, Clone, Default)]
pub struct FollowCamera {
    pub position: Vec2,
}

impl FollowCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset the camera is steering toward for the given player state.
    pub fn target(player: &PlayerSnapshot, cfg: &CameraTuning) -> Vec2 {
        let mut dest = Vec2 {
            x: player.position.x - cfg.half_width(),
            y: -player.position.y + cfg.half_height(),
        };
        match player.facing {
            Facing::Left => dest.x -= cfg.lookahead(),
            Facing::Right => dest.x += cfg.lookahead(),
        }
        dest
    }

    /// Steps both axes toward the target. Call once per tick, after the player advances.
    pub fn update(&mut self, player: &PlayerSnapshot, cfg: &CameraTuning) {
        let dest = Self::target(player, cfg);
        self.position.x = move_toward(self.position.x, dest.x, cfg.damping);
        self.position.y = move_toward(self.position.y, dest.y, cfg.damping);
    }
}

/// Closes `1 / damping` of the remaining distance without passing `target`.
pub fn move_toward(current: f32, target: f32, damping: f32) -> f32 {
    let step = (current - target).abs() / damping;
    if target > current {
        target.min(current + step)
    } else if target < current {
        target.max(current - step)
    } else {
        current
    }
}
