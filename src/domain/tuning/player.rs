/// Gameplay tuning for the player body.
///
/// Keep this separate from runtime/shell configuration (tick rates, window size, etc.).
/// All values are per tick, in world units.

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Upward velocity applied when a jump triggers.
    pub jump_velocity: f32,

    /// Horizontal speed cap, also the per-tick acceleration from input.
    pub speed: f32,

    /// Gravity added every tick. Horizontal friction uses the same value.
    pub fall_velocity: f32,

    /// Height of the single collision plane.
    pub ground_height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            jump_velocity: 5.5,
            speed: 3.0,
            fall_velocity: 0.25,
            ground_height: 16.0 * 8.0,
        }
    }
}
