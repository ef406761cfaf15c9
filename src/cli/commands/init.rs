use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)
        .map_err(|e| AppError::Config(format!("initialization failed: {e}")))?;

    let cfg = if let Some(db) = &cli.db {
        Config {
            database: db.clone(),
            ..Config::default()
        }
    } else {
        Config::load()
    };

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success("stundenzettel is ready.");
    Ok(())
}
