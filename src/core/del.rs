use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry by id. Owned deployments are removed by the
    /// cascade on the deployments table.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        delete_entry(&pool.conn, id)?;
        let _ = ttlog(&pool.conn, "del", &id.to_string(), "Entry deleted");
        Ok(())
    }
}
