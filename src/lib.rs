pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copy;
pub mod error;
pub mod logging;
pub mod secret;
pub mod ui;
pub mod utils;
