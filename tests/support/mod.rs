// Shared helpers for driving the headless runner from integration tests.
use serde_json::Value;
use sky_story::RunSettings;
use sky_story::domain::InputSource;
use sky_story::frameworks::config::FrameOutput;
use sky_story::use_cases::RunSummary;
use std::time::Duration;
use tokio::io::AsyncReadExt;

// Fast ticks keep the suite quick; cadence does not affect the simulated state.
pub fn settings(frames: FrameOutput, max_ticks: Option<u64>) -> RunSettings {
    RunSettings {
        tick_interval: Duration::from_millis(1),
        max_ticks,
        input_path: None,
        frames,
    }
}

// Run to completion and return the summary plus every JSON line written.
pub async fn run_collect<I>(settings: RunSettings, input: I) -> (RunSummary, Vec<Value>)
where
    I: InputSource + 'static,
{
    // Large enough to hold the whole output without a concurrent reader.
    let (writer, mut reader) = tokio::io::duplex(1 << 20);

    let summary = sky_story::run(settings, input, writer)
        .await
        .expect("run should succeed");

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .await
        .expect("output should be utf8");

    let lines = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be json"))
        .collect();
    (summary, lines)
}
