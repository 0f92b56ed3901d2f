pub mod cli;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod render;
pub mod share;
pub mod utils;
