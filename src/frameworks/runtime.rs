// Framework bootstrap for the headless runner.

use crate::domain::{InputSource, Tuning};
use crate::frameworks::config::{self, FrameOutput, RunSettings};
use crate::interface_adapters::frame_writer::{frame_writer, write_summary};
use crate::interface_adapters::input::{InputScript, ScriptedInput};
use crate::use_cases::{FrameUpdate, RunSummary, world_task};

use std::io::{self, Result};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWrite};
use tokio::sync::{Notify, broadcast};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Frames go to stdout, so logs stay on stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs the tick loop against `input`, streaming frames to `sink`.
pub async fn run<I, W>(settings: RunSettings, input: I, sink: W) -> Result<RunSummary>
where
    I: InputSource + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (frame_tx, _frame_rx) = broadcast::channel::<FrameUpdate>(config::FRAME_BROADCAST_CAPACITY);

    let shutdown = Arc::new(Notify::new());

    // Subscribe before the loop starts so no frame is missed.
    let writer = match settings.frames {
        FrameOutput::All => {
            let frame_rx = frame_tx.subscribe();
            let shutdown = shutdown.clone();
            WriterState::Streaming(tokio::spawn(async move {
                // A dead sink ends the run.
                frame_writer(frame_rx, sink).await.inspect_err(|e| {
                    tracing::error!(error = %e, "frame writer failed; stopping");
                    shutdown.notify_one();
                })
            }))
        }
        FrameOutput::Summary => WriterState::Idle(sink),
    };

    // Ctrl-C cancels the whole run between ticks.
    let ctrl_c = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.notify_one();
            }
        }
    });

    let summary = world_task(
        input,
        frame_tx,
        Tuning::default(),
        settings.tick_interval,
        shutdown,
        settings.max_ticks,
    )
    .await;
    ctrl_c.abort();

    let mut sink = match writer {
        WriterState::Streaming(handle) => handle.await.map_err(io::Error::other)??,
        WriterState::Idle(sink) => sink,
    };
    write_summary(&mut sink, summary).await?;

    Ok(summary)
}

enum WriterState<W> {
    Streaming(tokio::task::JoinHandle<Result<W>>),
    Idle(W),
}

pub async fn run_with_config() -> Result<RunSummary> {
    init_runtime();

    let settings = RunSettings::from_env()
        .inspect_err(|e| {
            tracing::error!(error = %e, "invalid configuration");
        })
        .map_err(io::Error::other)?;

    tracing::info!(
        title = config::WINDOW_TITLE,
        width = config::WINDOW_WIDTH,
        height = config::WINDOW_HEIGHT,
        backdrop = ?config::BACKDROP_COLOR,
        "headless shell"
    );

    let text = match &settings.input_path {
        Some(path) => tokio::fs::read_to_string(path).await.inspect_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to read input script");
        })?,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    let script = InputScript::parse(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    tracing::debug!(ticks = script.len(), "input script loaded");

    run(settings, ScriptedInput::new(script), tokio::io::stdout()).await
}
