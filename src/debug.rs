// Opt-in diagnostic logging, enabled via the --debug flag
// The TUI owns the terminal, so diagnostics go to a file instead of stderr.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};

const LOG_FILE_PATH: &str = "/tmp/solopong-debug.log";

/// Install a file-backed tracing subscriber. Without the flag nothing is
/// installed and every `tracing` call in the game is a no-op.
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    let file =
        File::create(LOG_FILE_PATH).with_context(|| format!("creating {LOG_FILE_PATH}"))?;
    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("diagnostic logging started; tail -f {LOG_FILE_PATH}");
    Ok(())
}
