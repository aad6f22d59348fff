use anyhow::Context;
use tokio::io::AsyncReadExt;

use crate::models::RadixError;

/// Both transforms need the whole stream in memory, so the buffer is capped
/// rather than unbounded.
pub(crate) const MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Buffers all of stdin. An interrupt while reading aborts the transform
/// instead of running it on a half-read stream.
pub(crate) async fn read_stdin() -> anyhow::Result<String> {
    let mut stdin = tokio::io::stdin().take(MAX_INPUT_BYTES as u64 + 1);
    let mut buffer = Vec::new();

    tokio::select! {
        read = stdin.read_to_end(&mut buffer) => {
            read.context("read stdin")?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::debug!("interrupted while reading stdin");
            return Err(RadixError::Interrupted.into());
        }
    }

    if buffer.len() > MAX_INPUT_BYTES {
        return Err(RadixError::InputTooLarge {
            limit: MAX_INPUT_BYTES,
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
