use crate::cli::commands::{open_store, persist_records, session_from_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { page, task } = cmd {
        let store = open_store(cfg);
        let mut state = store.load()?;
        let mut session = session_from_state(&state, cfg);

        let content_index = page.checked_sub(1).ok_or(AppError::InvalidPage(0))?;
        let id = session.edit_task(content_index, task.clone())?;
        persist_records(&store, &mut state, &session)?;

        let cls = session.classification();
        success(format!(
            "Updated record #{} (content pages now: {}).",
            id.index() + 1,
            cls.content.len()
        ));
    }
    Ok(())
}
