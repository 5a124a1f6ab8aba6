use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter directive.
const LOG_ENV: &str = "SCRIPTURE_READER_LOG";
const LOG_FILE_NAME: &str = "reader.log";

/// Route `tracing` output to a file in the data directory. The terminal is in
/// the alternate screen while the reader runs, so nothing may go to stdout.
pub fn init(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir).context("failed to create data directory")?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE_NAME))
        .context("failed to open log file")?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
