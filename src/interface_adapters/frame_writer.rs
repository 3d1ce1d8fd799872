use crate::interface_adapters::protocol::{FrameUpdateDto, RunSummaryDto, ShellMessage};
use crate::use_cases::{FrameUpdate, RunSummary};
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tracing::{error, warn};

/// Serializes each frame once and writes it as a JSON line.
///
/// Runs until the frame channel closes, then hands the sink back so the caller can
/// append the summary.
pub async fn frame_writer<W>(
    mut frame_rx: broadcast::Receiver<FrameUpdate>,
    mut sink: W,
) -> io::Result<W>
where
    W: AsyncWrite + Unpin,
{
    loop {
        match frame_rx.recv().await {
            Ok(update) => {
                let msg = ShellMessage::Frame(FrameUpdateDto::from(update));
                write_line(&mut sink, &msg).await?;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "frame writer lagged; skipping to latest frame");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    sink.flush().await?;
    Ok(sink)
}

pub async fn write_summary<W>(sink: &mut W, summary: RunSummary) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    write_line(sink, &ShellMessage::Summary(RunSummaryDto::from(summary))).await?;
    sink.flush().await
}

async fn write_line<W>(sink: &mut W, msg: &ShellMessage) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(msg).map_err(|e| {
        error!(error = ?e, "failed to serialize frame");
        io::Error::other(e)
    })?;
    line.push('\n');
    sink.write_all(line.as_bytes()).await
}
