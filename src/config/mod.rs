#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::enumerate::default_items;
use crate::core::greeting::GreetingSettings;
use crate::core::guess_loop::{DEFAULT_PROMPT, DEFAULT_TARGET};
use crate::core::GuessSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_single_line, Validate};
use toml_config::TomlConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessConfig {
    pub target: String,
    pub prompt: String,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl GuessSettings for GuessConfig {
    fn target(&self) -> &str {
        &self.target
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Settings for all three programs after defaults, file and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub guess: GuessConfig,
    pub greeting: GreetingSettings,
    pub items: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            guess: GuessConfig::default(),
            greeting: GreetingSettings::default(),
            items: default_items(),
        }
    }
}

impl AppConfig {
    /// Layers the values present in `file` over the defaults.
    pub fn from_toml(file: TomlConfig) -> Self {
        let mut config = Self::default();

        if let Some(guess) = file.guess {
            if let Some(target) = guess.target {
                config.guess.target = target;
            }
            if let Some(prompt) = guess.prompt {
                config.guess.prompt = prompt;
            }
        }

        if let Some(greeting) = file.greeting {
            if let Some(prompt) = greeting.prompt {
                config.greeting.prompt = prompt;
            }
            if let Some(signature) = greeting.signature {
                config.greeting.signature = signature;
            }
        }

        if let Some(items) = file.list.and_then(|list| list.items) {
            config.items = items;
        }

        config
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        // 目標值若含換行，永遠無法與單行輸入相等
        validate_non_empty_string("guess.target", &self.guess.target)?;
        validate_single_line("guess.target", &self.guess.target)?;
        Ok(())
    }
}
