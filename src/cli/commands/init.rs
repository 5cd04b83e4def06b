use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{AppState, StateStore};
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let config_file = Config::config_file();
    if config_file.exists() {
        info(format!(
            "Configuration already present: {}",
            config_file.display()
        ));
    } else {
        cfg.save()
            .map_err(|e| AppError::Config(format!("cannot write configuration: {e}")))?;
        success(format!("Configuration created: {}", config_file.display()));
    }

    let store = StateStore::new(&cfg.state_file);
    if store.path().exists() {
        info(format!("State store already present: {}", cfg.state_file));
    } else {
        store.save(&AppState::default())?;
        success(format!("State store created: {}", cfg.state_file));
    }

    Ok(())
}
