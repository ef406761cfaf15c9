use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry_edit::{AddLogic, parse_deployment_spec};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        location,
        start,
        end,
        child_sick,
        deployments,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let deployments = deployments
            .iter()
            .map(|s| parse_deployment_spec(s))
            .collect::<AppResult<Vec<_>>>()?;

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(
            &mut pool,
            d,
            location.clone(),
            start,
            end,
            *child_sick,
            deployments,
        )?;
    }
    Ok(())
}
