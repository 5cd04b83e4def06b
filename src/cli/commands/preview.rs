use crate::cli::commands::{open_store, session_from_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::document::{DocumentModel, Page};
use crate::ui::messages::{header, warning};
use crate::utils::table::{Column, Table};

fn excerpt(text: &str, max: usize) -> String {
    let one_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if one_line.chars().count() <= max {
        one_line
    } else {
        let cut: String = one_line.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

fn inventory(doc: &DocumentModel) {
    let mut table = Table::new(vec![
        Column::new("Page", 5),
        Column::new("Kind", 8),
        Column::new("Day", 10),
        Column::new("Date", 20),
        Column::new("Preview", 42),
    ]);

    for (i, page) in doc.pages.iter().enumerate() {
        let (day, date, preview) = match page {
            Page::Cover(c) => (String::new(), String::new(), c.title.clone()),
            Page::Content(c) => {
                let text = c
                    .blocks
                    .first()
                    .map(|b| b.plain_text())
                    .unwrap_or_default();
                (c.day.clone(), c.date.clone(), excerpt(&text, 42))
            }
            Page::Summary(s) => (
                String::new(),
                String::new(),
                format!("{} ({} rows)", s.title, s.rows.len()),
            ),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            page.kind().to_string(),
            day,
            date,
            preview,
        ]);
    }

    print!("{}", table.render());
}

fn show_page(doc: &DocumentModel, number: usize) -> AppResult<()> {
    let page = doc
        .pages
        .get(number.checked_sub(1).ok_or(AppError::InvalidPage(0))?)
        .ok_or(AppError::InvalidPage(number))?;

    match page {
        Page::Cover(c) => {
            header(&c.title);
            println!("Name           : {}", c.name);
            println!("ID No.         : {}", c.id_no);
            println!("IP Station     : {}", c.ip_station);
            println!("Duration       : {} to {}", c.duration_from, c.duration_to);
            println!("Faculty Mentor : {}", c.faculty_mentor);
            println!("Company Mentor : {}", c.company_mentor);
        }
        Page::Content(c) => {
            println!("Day: {:<24} Date: {}", c.day, c.date);
            println!();
            for block in &c.blocks {
                println!("{}", block.plain_text());
            }
        }
        Page::Summary(s) => {
            header(&s.title);
            let mut table = Table::new(vec![
                Column::new("Date", 24),
                Column::new("Holidays", 20),
                Column::new("Leaves", 20),
            ]);
            for row in &s.rows {
                table.add_row(vec![row.date.clone(), row.holiday.clone(), row.leave.clone()]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { page } = cmd {
        let store = open_store(cfg);
        let state = store.load()?;
        let session = session_from_state(&state, cfg);

        if session.records().is_empty() {
            warning("No records loaded yet; showing cover page only.");
        }

        let doc = session.document();
        match page {
            Some(n) => show_page(&doc, *n)?,
            None => inventory(&doc),
        }
    }
    Ok(())
}
