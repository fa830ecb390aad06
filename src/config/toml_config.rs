use crate::utils::error::{AppError, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;

/// On-disk configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub guess: Option<GuessSection>,
    pub greeting: Option<GreetingSection>,
    pub list: Option<ListSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuessSection {
    pub target: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingSection {
    pub prompt: Option<String>,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSection {
    pub items: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileError {
                path: path.display().to_string(),
                source,
            })?;
        tracing::debug!("Loaded config file {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FAVORITE_COLOR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[guess]
target = "green"
prompt = "Pick a color"

[greeting]
signature = "Ferris"

[list]
items = ["mako", "tiger"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        let guess = config.guess.unwrap();
        assert_eq!(guess.target.as_deref(), Some("green"));
        assert_eq!(guess.prompt.as_deref(), Some("Pick a color"));
        let greeting = config.greeting.unwrap();
        assert_eq!(greeting.prompt, None);
        assert_eq!(greeting.signature.as_deref(), Some("Ferris"));
        assert_eq!(
            config.list.unwrap().items,
            Some(vec!["mako".to_string(), "tiger".to_string()])
        );
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.guess.is_none());
        assert!(config.greeting.is_none());
        assert!(config.list.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FIRST_STEPS_TEST_TARGET", "purple");

        let config = TomlConfig::from_toml_str(
            r#"
[guess]
target = "${FIRST_STEPS_TEST_TARGET}"
"#,
        )
        .unwrap();
        assert_eq!(config.guess.unwrap().target.as_deref(), Some("purple"));

        std::env::remove_var("FIRST_STEPS_TEST_TARGET");
    }

    #[test]
    fn test_unset_env_var_is_left_as_written() {
        let config = TomlConfig::from_toml_str(
            r#"
[guess]
target = "${FIRST_STEPS_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.guess.unwrap().target.as_deref(),
            Some("${FIRST_STEPS_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[guess\ntarget = ");
        assert!(matches!(result, Err(AppError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[list]\nitems = [\"nurse\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.list.unwrap().items, Some(vec!["nurse".to_string()]));
    }

    #[test]
    fn test_missing_file() {
        let result = TomlConfig::from_file("/definitely/not/here/first-steps.toml");
        assert!(matches!(result, Err(AppError::ConfigFileError { .. })));
    }
}
