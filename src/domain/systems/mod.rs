pub mod follow_camera;
pub mod player_movement;
