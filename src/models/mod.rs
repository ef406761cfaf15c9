pub mod deployment;
pub mod document;
pub mod entry;
pub mod kind;
pub mod summary;
pub mod timefmt;
