// Gameplay tuning values, kept apart from runtime configuration.

pub mod camera;
pub mod player;

pub use camera::CameraTuning;
pub use player::PlayerTuning;

/// All gameplay tuning the tick loop needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub camera: CameraTuning,
}
