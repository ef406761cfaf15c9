use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::export::model::entries_to_exports;
use crate::utils::date::in_period;
use crate::utils::table::Table;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut entries = load_entries(&pool.conn)?;

        if let Some(p) = period {
            entries.retain(|e| in_period(e.date, p));
        }

        if entries.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        // entries_to_exports applies the canonical display order
        let weekdays: std::collections::HashMap<String, String> = if cfg.show_weekday {
            entries
                .iter()
                .map(|e| (e.date_str(), e.date.weekday().to_string()))
                .collect()
        } else {
            Default::default()
        };

        let rows = entries_to_exports(&entries);

        let mut table = Table::new(&["ID", "Date", "Kind", "Location", "Start", "End", "Hours", "Note"]);
        for r in rows {
            let date = match weekdays.get(&r.date) {
                Some(wd) => format!("{} ({})", r.date, wd),
                None => r.date.clone(),
            };
            table.add_row(vec![
                r.id.to_string(),
                date,
                r.kind,
                r.location,
                r.start,
                r.end,
                r.hours,
                r.note,
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
