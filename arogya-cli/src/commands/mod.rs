pub mod config;
pub mod export;
pub mod forms;
pub mod page;
pub mod timezones;
pub mod week;
