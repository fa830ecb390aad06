pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::console::BufLineReader;
pub use config::{toml_config::TomlConfig, AppConfig, GuessConfig};
pub use crate::core::{
    enumerate::enumerate,
    greeting::{greet, GreetingSettings},
    guess_loop::{check_guess, GuessLoop},
};
pub use domain::model::{GuessReport, LoopState, Outcome, Termination};
pub use utils::error::{AppError, Result};
