pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod draft;
pub mod error;
pub mod models;
pub mod session;
pub mod submission;
mod utils;
pub mod workflow;

use anyhow::Context;
use clap::Parser;

pub use api::ApiClient;
pub use config::{AppConfig, ConfigStore};
pub use draft::EventDraft;
pub use error::{ApiError, DraftError};
pub use session::{SessionContext, SessionKind};
pub use workflow::{EditPhase, EditSession, SubmitError};

pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("EVENT_HOST_LOG", "info"))
        .init();

    let cli = cli::Cli::parse();
    let store = ConfigStore::load();
    log::debug!("config at {}", store.path().display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(cli::dispatch(cli, store))
}
