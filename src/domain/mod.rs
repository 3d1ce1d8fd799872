// Domain layer: core simulation types and rules.

pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use ports::InputSource;
pub use state::{Facing, InputIntent, Key, MotionState, PlayerBody, PlayerSnapshot, Vec2};
pub use systems::follow_camera::FollowCamera;
pub use tuning::{CameraTuning, PlayerTuning, Tuning};
