use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry_edit::{EditLogic, EntryPatch, parse_deployment_spec};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_str,
        location,
        start,
        end,
        child_sick,
        deployments,
        clear_deployments,
    } = cmd
    {
        let date = match date_str {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
            }
            None => None,
        };

        let deployments = if *clear_deployments {
            Some(Vec::new())
        } else if deployments.is_empty() {
            None
        } else {
            Some(
                deployments
                    .iter()
                    .map(|s| parse_deployment_spec(s))
                    .collect::<AppResult<Vec<_>>>()?,
            )
        };

        let patch = EntryPatch {
            date,
            location: location.clone(),
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            child_sick: *child_sick,
            deployments,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::apply(&mut pool, *id, patch)?;
    }
    Ok(())
}
