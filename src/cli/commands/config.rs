use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::time_calc::format_hours;
use crate::db::pool::DbPool;
use crate::db::queries::{
    SETTING_BASE_OVERTIME, SETTING_EMPLOYEE_NAME, base_overtime, employee_name,
    load_saved_locations, set_setting,
};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        name,
        base_overtime: base,
        locations,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(n) = name {
            set_setting(&pool.conn, SETTING_EMPLOYEE_NAME, n)?;
            success(format!("Employee name set to '{}'.", n));
        }

        if let Some(b) = base {
            set_setting(&pool.conn, SETTING_BASE_OVERTIME, &b.to_string())?;
            success(format!(
                "Baseline overtime correction set to {}.",
                format_hours(*b)
            ));
        }

        if *locations {
            let saved = load_saved_locations(&pool.conn)?;
            if saved.is_empty() {
                println!("No saved locations yet.");
            } else {
                println!("Saved locations:");
                for loc in saved {
                    println!("- {loc}");
                }
            }
        }

        let nothing_done = name.is_none() && base.is_none() && !*locations;
        if *print_config || nothing_done {
            println!("Config file: {:?}", Config::config_file());
            println!("Database:    {}", cfg.database);
            println!("Default location: {}", cfg.default_location);
            println!("Show weekday:     {}", cfg.show_weekday);
            println!();
            println!("Employee name:    {}", employee_name(&pool.conn)?);
            println!(
                "Base overtime:    {}",
                format_hours(base_overtime(&pool.conn)?)
            );
        }
    }
    Ok(())
}
