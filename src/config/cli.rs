use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "first-steps", version)]
#[command(about = "Three small console programs: a guessing game, a greeting and a list")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Keep asking until the favorite color is guessed
    Guess {
        /// Value the guess must equal exactly
        #[arg(long)]
        target: Option<String>,

        #[arg(long)]
        prompt: Option<String>,
    },
    /// Ask for a name and say hello
    Greet {
        /// Name used in "I'm <signature>!"
        #[arg(long)]
        signature: Option<String>,
    },
    /// Print each item with its index
    List {
        #[arg(long, value_delimiter = ',')]
        items: Option<Vec<String>>,
    },
}

impl CliConfig {
    /// Defaults, then the config file if given, then command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut config = AppConfig::from_toml(file);
        self.apply_overrides(&mut config);
        config.validate()?;

        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        match &self.command {
            Command::Guess { target, prompt } => {
                if let Some(target) = target {
                    config.guess.target = target.clone();
                }
                if let Some(prompt) = prompt {
                    config.guess.prompt = prompt.clone();
                }
            }
            Command::Greet { signature } => {
                if let Some(signature) = signature {
                    config.greeting.signature = signature.clone();
                }
            }
            Command::List { items } => {
                if let Some(items) = items {
                    config.items = items.clone();
                }
            }
        }
    }
}
