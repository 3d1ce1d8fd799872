// Domain-level simulation state and input/snapshot types.

use serde::Serialize;

/// World-space 2D vector. `y` grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Last horizontal direction the player pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Whether the body is resting on the ground plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MotionState {
    #[default]
    Airborne,
    Grounded,
}

/// Logical keys the shell can report as held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Set of keys held during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    move_left: bool,
    move_right: bool,
    jump: bool,
}

impl InputIntent {
    pub const NONE: InputIntent = InputIntent {
        move_left: false,
        move_right: false,
        jump: false,
    };

    pub fn contains(&self, key: Key) -> bool {
        match key {
            Key::MoveLeft => self.move_left,
            Key::MoveRight => self.move_right,
            Key::Jump => self.jump,
        }
    }

    pub fn insert(&mut self, key: Key) {
        match key {
            Key::MoveLeft => self.move_left = true,
            Key::MoveRight => self.move_right = true,
            Key::Jump => self.jump = true,
        }
    }
}

impl FromIterator<Key> for InputIntent {
    fn from_iter<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        let mut intent = InputIntent::NONE;
        for key in keys {
            intent.insert(key);
        }
        intent
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerBody {
    pub position: Vec2,
    pub facing: Facing,
    pub motion_state: MotionState,

    // Movement-only state (not part of the renderer-facing surface)
    pub(crate) velocity: Vec2,
}

impl PlayerBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// Read-only copy of the player fields the camera and renderer need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub facing: Facing,
    pub motion_state: MotionState,
}

impl From<&PlayerBody> for PlayerSnapshot {
    fn from(p: &PlayerBody) -> Self {
        Self {
            position: p.position,
            facing: p.facing,
            motion_state: p.motion_state,
        }
    }
}
