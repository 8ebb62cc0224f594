pub mod app_config;
pub mod comparator;
pub mod gui_manager;
pub mod localizer;
pub mod report_formatter;
pub mod system;
