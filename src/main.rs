//! Binary entry point: bring up logging, configuration, and the SQLite store,
//! build the reading session, and drive the Ratatui event loop until the user
//! exits.
use std::io;
use std::sync::Arc;

use scripture_reader::services::{BibleApiClient, GeminiClient};
use scripture_reader::session::ThreadExecutor;
use scripture_reader::ui::TerminalShare;
use scripture_reader::{
    data_dir, ensure_schema, logging, run_app, App, Config, ReadingSession, SessionServices,
    SqliteStore,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let data_dir = data_dir()?;
    logging::init(&data_dir)?;

    let config = Config::load(&data_dir);
    let conn = ensure_schema()?;
    info!(data_dir = %data_dir.display(), "storage ready");

    let services = SessionServices {
        store: Box::new(SqliteStore::new(conn)),
        chapters: Arc::new(BibleApiClient::new(&config)?),
        oracle: Arc::new(GeminiClient::new(&config)?),
        executor: Box::new(ThreadExecutor),
        share: Box::new(TerminalShare::new(io::stdout())),
    };

    let mut app = App::new(ReadingSession::new(services, config.prefer_dark));
    run_app(&mut app)
}
