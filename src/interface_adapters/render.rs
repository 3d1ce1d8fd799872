// Render-space translation for the shell's sprite draw call.

use crate::domain::Vec2;

/// Screen position of the player sprite for a given camera offset.
///
/// The camera's vertical offset is stored negated, so it is added back here.
pub fn sprite_origin(player: Vec2, camera: Vec2) -> Vec2 {
    Vec2 {
        x: player.x - camera.x,
        y: player.y + camera.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FollowCamera, PlayerSnapshot, tuning::CameraTuning};

    #[test]
    fn when_camera_is_at_origin_then_sprite_is_drawn_at_world_position() {
        let origin = sprite_origin(Vec2::new(12.0, 40.0), Vec2::ZERO);

        assert_eq!(origin, Vec2::new(12.0, 40.0));
    }

    #[test]
    fn when_camera_sits_on_target_then_sprite_lands_at_fixed_screen_spot() {
        let cfg = CameraTuning::default();
        let player = PlayerSnapshot {
            position: Vec2::new(250.0, 90.0),
            ..PlayerSnapshot::default()
        };
        let camera = FollowCamera::target(&player, &cfg);

        let origin = sprite_origin(player.position, camera);

        // Facing right shifts the player left of center by the lookahead.
        assert!((origin.x - (cfg.half_width() - cfg.lookahead())).abs() < 1e-3);
        assert_eq!(origin.y, cfg.half_height());
    }
}
