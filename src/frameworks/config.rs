use std::{env, fmt, path::PathBuf, time::Duration};

// Shell/runtime constants (not gameplay tuning).

pub const FRAME_BROADCAST_CAPACITY: usize = 128;
pub const DEFAULT_TICK_HZ: u32 = 60;

// Window settings for a graphical shell. The headless runner only reports them.
pub const WINDOW_TITLE: &str = "Sky Story (PROTOTYPE 0001)";
pub const WINDOW_WIDTH: u32 = 400;
pub const WINDOW_HEIGHT: u32 = 240;
pub const BACKDROP_COLOR: [u8; 4] = [0, 150, 200, 255];

/// Which frames the runner writes to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameOutput {
    #[default]
    All,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTickRate(String),
    InvalidMaxTicks(String),
    InvalidFrameOutput(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTickRate(v) => {
                write!(f, "SKY_STORY_TICK_HZ must be a positive integer, got `{v}`")
            }
            ConfigError::InvalidMaxTicks(v) => {
                write!(f, "SKY_STORY_MAX_TICKS must be a non-negative integer, got `{v}`")
            }
            ConfigError::InvalidFrameOutput(v) => {
                write!(f, "SKY_STORY_FRAMES must be `all` or `summary`, got `{v}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings for one headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub tick_interval: Duration,
    /// Stop after this many ticks; `None` runs until input ends or Ctrl-C.
    pub max_ticks: Option<u64>,
    /// Input script path; `None` reads the script from stdin.
    pub input_path: Option<PathBuf>,
    pub frames: FrameOutput,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            tick_interval: tick_interval(DEFAULT_TICK_HZ),
            max_ticks: None,
            input_path: None,
            frames: FrameOutput::All,
        }
    }
}

impl RunSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup("SKY_STORY_TICK_HZ") {
            let hz = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|hz| *hz > 0)
                .ok_or(ConfigError::InvalidTickRate(raw.clone()))?;
            settings.tick_interval = tick_interval(hz);
        }

        if let Some(raw) = lookup("SKY_STORY_MAX_TICKS") {
            let ticks = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidMaxTicks(raw.clone()))?;
            settings.max_ticks = Some(ticks);
        }

        settings.input_path = lookup("SKY_STORY_INPUT")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup("SKY_STORY_FRAMES") {
            settings.frames = match raw.trim().to_ascii_lowercase().as_str() {
                "all" => FrameOutput::All,
                "summary" => FrameOutput::Summary,
                _ => return Err(ConfigError::InvalidFrameOutput(raw)),
            };
        }

        Ok(settings)
    }
}

fn tick_interval(hz: u32) -> Duration {
    Duration::from_secs(1) / hz
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn when_nothing_is_set_then_defaults_run_at_sixty_hz() {
        let settings = RunSettings::from_lookup(lookup(&[])).expect("defaults are valid");

        assert_eq!(settings, RunSettings::default());
        assert_eq!(settings.tick_interval, Duration::from_secs(1) / 60);
    }

    #[test]
    fn when_values_are_set_then_they_are_applied() {
        let settings = RunSettings::from_lookup(lookup(&[
            ("SKY_STORY_TICK_HZ", "120"),
            ("SKY_STORY_MAX_TICKS", "300"),
            ("SKY_STORY_INPUT", "runs/walk.txt"),
            ("SKY_STORY_FRAMES", "Summary"),
        ]))
        .expect("valid settings");

        assert_eq!(settings.tick_interval, Duration::from_secs(1) / 120);
        assert_eq!(settings.max_ticks, Some(300));
        assert_eq!(settings.input_path, Some(PathBuf::from("runs/walk.txt")));
        assert_eq!(settings.frames, FrameOutput::Summary);
    }

    #[test]
    fn when_tick_rate_is_zero_then_error_is_returned() {
        let err = RunSettings::from_lookup(lookup(&[("SKY_STORY_TICK_HZ", "0")])).expect_err("zero");

        assert_eq!(err, ConfigError::InvalidTickRate("0".to_string()));
    }

    #[test]
    fn when_frame_output_is_unknown_then_error_is_returned() {
        let err =
            RunSettings::from_lookup(lookup(&[("SKY_STORY_FRAMES", "some")])).expect_err("unknown");

        assert_eq!(err, ConfigError::InvalidFrameOutput("some".to_string()));
    }
}
