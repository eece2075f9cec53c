pub mod offline;
pub mod scheduled;
