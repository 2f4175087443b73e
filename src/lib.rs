pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod resource;
pub mod ui;
