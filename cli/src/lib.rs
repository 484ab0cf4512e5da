pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{Args, Command};
pub use config::Config;
