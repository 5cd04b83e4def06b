use crate::cli::commands::{open_store, persist_records, session_from_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ingest::{fetch_csv_text, records_from_csv_text, validate_link};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fetch { url } = cmd {
        let store = open_store(cfg);
        let mut state = store.load()?;

        let link = match url {
            Some(u) => u.clone(),
            None => state.last_link.clone().ok_or_else(|| {
                AppError::InvalidLink("no link given and no previous link stored".to_string())
            })?,
        };

        // Reject malformed links before any network traffic
        validate_link(&link)?;
        info(format!("Fetching {link}"));

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::Fetch(format!("cannot start async runtime: {e}")))?;
        let text = runtime.block_on(fetch_csv_text(&link))?;
        let records = records_from_csv_text(&text)?;
        let count = records.len();

        let mut session = session_from_state(&state, cfg);
        let token = session.begin_ingest();
        if session.commit_records(token, records) {
            state.last_link = Some(link);
            persist_records(&store, &mut state, &session)?;
            success(format!("Fetched {count} records."));
        }
    }
    Ok(())
}
