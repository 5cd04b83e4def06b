pub mod build;
pub mod config;
pub mod edit;
pub mod fetch;
pub mod init;
pub mod load;
pub mod preview;
pub mod user;

use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::store::{AppState, StateStore};

/// Open the state store configured for this run.
pub(crate) fn open_store(cfg: &Config) -> StateStore {
    StateStore::new(&cfg.state_file)
}

/// Build a session from persisted state plus the configured defaults.
pub(crate) fn session_from_state(state: &AppState, cfg: &Config) -> Session {
    let mut session = Session::new(
        state.records.clone().unwrap_or_default(),
        state.user.clone().unwrap_or_default(),
    );
    session.set_font(cfg.font);
    session.set_layout(cfg.layout);
    session
}

/// Persist the session's record sequence back into the state.
pub(crate) fn persist_records(
    store: &StateStore,
    state: &mut AppState,
    session: &Session,
) -> AppResult<()> {
    state.records = Some(session.records().to_vec());
    store.save(state)
}
