use crate::cli::commands::{open_store, session_from_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assemble::suggested_file_name;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Build {
        out,
        font,
        layout,
        force,
    } = cmd
    {
        let store = open_store(cfg);
        let state = store.load()?;
        let mut session = session_from_state(&state, cfg);

        if let Some(font) = font {
            session.set_font(*font);
        }
        if let Some(layout) = layout {
            session.set_layout(*layout);
        }

        let out_path = match out {
            Some(p) => p.clone(),
            None => suggested_file_name(session.user(), "json"),
        };

        if Path::new(&out_path).exists() && !force {
            return Err(AppError::Io(io::Error::other(format!(
                "{out_path} already exists (use --force to overwrite)"
            ))));
        }

        let doc = session.document();
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&out_path, json)?;

        success(format!(
            "Document model written: {out_path} ({} pages).",
            doc.page_count()
        ));
    }
    Ok(())
}
