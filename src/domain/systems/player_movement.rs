use crate::domain::state::{Facing, InputIntent, Key, MotionState, PlayerBody};
use crate::domain::tuning::PlayerTuning;

/// Applies one tick of held input to the body. Call once per tick, before `advance`.
///
/// Right is evaluated before left, so when both are held left wins the facing.
/// Jump is level-triggered: holding it re-triggers every tick the body is not airborne.
pub fn apply_input(body: &mut PlayerBody, keys: &InputIntent, cfg: &PlayerTuning) {
    if keys.contains(Key::MoveRight) {
        body.velocity.x = cfg.speed.min(body.velocity.x + cfg.speed);
        body.facing = Facing::Right;
    }
    if keys.contains(Key::MoveLeft) {
        body.velocity.x = (-cfg.speed).max(body.velocity.x - cfg.speed);
        body.facing = Facing::Left;
    }
    if body.motion_state != MotionState::Airborne && keys.contains(Key::Jump) {
        body.velocity.y = -cfg.jump_velocity;
        body.motion_state = MotionState::Airborne;
    }
}

/// Gravity, friction, ground test and integration for one tick.
pub fn advance(body: &mut PlayerBody, cfg: &PlayerTuning) {
    body.velocity.y += cfg.fall_velocity;

    // friction shares the gravity constant
    if body.velocity.x > 0.0 {
        body.velocity.x = (body.velocity.x - cfg.fall_velocity).max(0.0);
    }
    if body.velocity.x < 0.0 {
        body.velocity.x = (body.velocity.x + cfg.fall_velocity).min(0.0);
    }

    // One-sided plane test on the pre-integration position. Position is not clamped.
    if body.position.y + body.velocity.y >= cfg.ground_height {
        body.velocity.y = 0.0;
        body.motion_state = MotionState::Grounded;
    }

    body.position.x += body.velocity.x;
    body.position.y += body.velocity.y;
}
