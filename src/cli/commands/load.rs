use crate::cli::commands::{open_store, persist_records, session_from_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest::load_records;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { file } = cmd {
        let store = open_store(cfg);
        let mut state = store.load()?;
        let mut session = session_from_state(&state, cfg);

        // Nothing is committed unless the whole file ingests cleanly
        let records = load_records(Path::new(file))?;
        let count = records.len();

        let token = session.begin_ingest();
        session.commit_records(token, records);
        persist_records(&store, &mut state, &session)?;

        let cls = session.classification();
        success(format!(
            "Loaded {count} records ({} content, {} holidays, {} leaves).",
            cls.content.len(),
            cls.holiday.len(),
            cls.leave.len()
        ));
    }
    Ok(())
}
