// Input adapters: key bindings, scripted replay and live shell input.

use crate::domain::{InputIntent, InputSource, Key};
use std::fmt;
use tokio::sync::watch;
use tracing::debug;

/// Maps a shell key name to a logical key. Names are case-insensitive.
pub fn bind_key(name: &str) -> Option<Key> {
    match name.to_ascii_lowercase().as_str() {
        "a" | "left" | "move_left" => Some(Key::MoveLeft),
        "d" | "right" | "move_right" => Some(Key::MoveRight),
        "space" | "up" | "jump" => Some(Key::Jump),
        _ => None,
    }
}

/// Errors produced while parsing an input script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ScriptErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    InvalidRepeat(String),
    ZeroRepeat,
    /// Total tick count no longer fits in a `u64`.
    TooLong,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScriptErrorKind::InvalidRepeat(raw) => {
                write!(f, "line {}: invalid repeat count `{raw}`", self.line)
            }
            ScriptErrorKind::ZeroRepeat => write!(f, "line {}: repeat count must be > 0", self.line),
            ScriptErrorKind::TooLong => write!(f, "line {}: script exceeds u64::MAX ticks", self.line),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Held keys per tick, stored as runs of identical intents.
///
/// One line per tick, keys separated by whitespace or `+`, an optional trailing `*N`
/// repeats the line. `#` starts a comment. A blank line is a tick with nothing held.
///
/// ```text
/// # walk right for half a second, then jump
/// d *30
/// d + space
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    runs: Vec<(InputIntent, u64)>,
    total: u64,
}

impl InputScript {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut runs = Vec::new();
        let mut total: u64 = 0;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let body = raw.split('#').next().unwrap_or("");
            // Comment-only lines carry no tick.
            if body.trim().is_empty() && raw.trim_start().starts_with('#') {
                continue;
            }

            let mut repeat = 1;
            let mut keys = InputIntent::NONE;
            for token in body.split(|c: char| c.is_whitespace() || c == '+') {
                if token.is_empty() {
                    continue;
                }
                if let Some(count) = token.strip_prefix('*') {
                    repeat = count.parse::<u64>().map_err(|_| ScriptError {
                        line,
                        kind: ScriptErrorKind::InvalidRepeat(count.to_string()),
                    })?;
                    if repeat == 0 {
                        return Err(ScriptError {
                            line,
                            kind: ScriptErrorKind::ZeroRepeat,
                        });
                    }
                    continue;
                }
                match bind_key(token) {
                    Some(key) => keys.insert(key),
                    None => debug!(line, key = token, "ignoring unbound key"),
                }
            }

            total = total.checked_add(repeat).ok_or(ScriptError {
                line,
                kind: ScriptErrorKind::TooLong,
            })?;
            runs.push((keys, repeat));
        }

        Ok(Self { runs, total })
    }

    /// Total ticks the script covers.
    pub fn len(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Replays an `InputScript` one tick at a time.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    script: InputScript,
    run: usize,
    used: u64,
}

impl ScriptedInput {
    pub fn new(script: InputScript) -> Self {
        Self {
            script,
            run: 0,
            used: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn held_keys(&mut self) -> InputIntent {
        let Some(&(keys, count)) = self.script.runs.get(self.run) else {
            return InputIntent::NONE;
        };
        self.used += 1;
        if self.used >= count {
            self.run += 1;
            self.used = 0;
        }
        keys
    }

    fn is_exhausted(&self) -> bool {
        self.run >= self.script.runs.len()
    }
}

/// Samples whatever the shell last published as held.
#[derive(Debug, Clone)]
pub struct LiveInput {
    rx: watch::Receiver<InputIntent>,
}

impl LiveInput {
    pub fn new(rx: watch::Receiver<InputIntent>) -> Self {
        Self { rx }
    }
}

impl InputSource for LiveInput {
    fn held_keys(&mut self) -> InputIntent {
        *self.rx.borrow_and_update()
    }
}
