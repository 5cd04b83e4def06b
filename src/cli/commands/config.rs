use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            println!("{yaml}");
        }

        if *check {
            let missing = cfg.check();
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing or empty field: {field}"));
                }
            }
        }
    }
    Ok(())
}
