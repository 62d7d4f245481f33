pub mod config;
pub mod inventory;
pub mod logging;
pub mod report;
pub mod storage;
pub mod ui;
