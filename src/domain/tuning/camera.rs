/// Gameplay tuning for the follow camera.

#[derive(Debug, Clone, Copy)]
pub struct CameraTuning {
    /// Visible width in world units.
    pub view_width: f32,

    /// Visible height in world units. Not used for centering, see `half_height`.
    pub view_height: f32,

    /// Divisor applied to the remaining distance each tick.
    pub damping: f32,
}

impl CameraTuning {
    pub fn half_width(&self) -> f32 {
        self.view_width / 2.0
    }

    /// Vertical centering offset.
    ///
    /// Derived from the view width, not the height. Existing level framing depends on it.
    pub fn half_height(&self) -> f32 {
        self.view_width / 2.0
    }

    /// Horizontal bias toward the facing direction.
    pub fn lookahead(&self) -> f32 {
        self.view_width / 6.0
    }
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            view_width: 400.0,
            view_height: 240.0,
            damping: 6.0,
        }
    }
}
