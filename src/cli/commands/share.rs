use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ShareLogic;
use crate::export::logic::resolve_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Share { dir, month, force } = cmd {
        let month = resolve_month(month.as_ref())?;
        let mut pool = DbPool::new(&cfg.database)?;
        ShareLogic::share(&mut pool, dir, month, *force)?;
    }
    Ok(())
}
