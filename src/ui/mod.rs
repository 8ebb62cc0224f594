pub mod common;
pub mod main_page;
