use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::build_report;
use crate::db::pool::DbPool;
use crate::db::queries::load_document;
use crate::errors::AppResult;
use crate::export::logic::resolve_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let month = resolve_month(month.as_ref())?;

        let pool = DbPool::new(&cfg.database)?;
        let doc = load_document(&pool.conn)?;

        let report = build_report(&doc, month);

        println!("\n{}", report.title);
        println!("{}", "=".repeat(report.title.chars().count()));
        for line in &report.summary_lines {
            println!("{line}");
        }
    }
    Ok(())
}
