pub mod backup;
pub mod del;
pub mod entry_edit;
pub mod import;
pub mod report;
pub mod store;
pub mod summary;
pub mod time_calc;
