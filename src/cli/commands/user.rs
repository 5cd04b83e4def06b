use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        name,
        id_no,
        ip_station,
        from,
        to,
        faculty_mentor,
        company_mentor,
    } = cmd
    {
        let store = open_store(cfg);
        let mut state = store.load()?;
        let mut user = state.user.take().unwrap_or_default();

        // Only the flags given on the command line are updated
        if let Some(v) = name {
            user.name = Some(v.clone());
        }
        if let Some(v) = id_no {
            user.id_no = Some(v.clone());
        }
        if let Some(v) = ip_station {
            user.ip_station = Some(v.clone());
        }
        if let Some(v) = from {
            user.duration.from = Some(v.clone());
        }
        if let Some(v) = to {
            user.duration.to = Some(v.clone());
        }
        if let Some(v) = faculty_mentor {
            user.faculty_mentor = Some(v.clone());
        }
        if let Some(v) = company_mentor {
            user.company_mentor = Some(v.clone());
        }

        state.user = Some(user);
        store.save(&state)?;
        success("User details saved.");
    }
    Ok(())
}
