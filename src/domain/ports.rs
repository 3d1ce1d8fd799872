use crate::domain::state::InputIntent;

// Port for the per-tick input-intent query owned by the shell.
pub trait InputSource: Send {
    fn held_keys(&mut self) -> InputIntent;

    // Finite sources (replays) report when nothing is left to play back.
    fn is_exhausted(&self) -> bool {
        false
    }
}
