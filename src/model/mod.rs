pub mod comparison_mode;
pub mod config;
pub mod error;
pub mod locale;
pub mod log;
pub mod message_key;
pub mod report;
pub mod selection;
