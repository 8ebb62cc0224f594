pub mod assets;
pub mod file_compare;
pub mod file_hash;
pub mod font;
pub mod logging;
