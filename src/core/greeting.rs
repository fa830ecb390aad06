use crate::core::LineReader;
use crate::utils::error::{AppError, Result};
use std::io::Write;

pub const DEFAULT_GREETING_PROMPT: &str = "Please enter your name.";
pub const DEFAULT_SIGNATURE: &str = "Rust";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingSettings {
    pub prompt: String,
    pub signature: String,
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_GREETING_PROMPT.to_string(),
            signature: DEFAULT_SIGNATURE.to_string(),
        }
    }
}

/// Asks for a name and greets it, returning the trimmed name.
///
/// A closed stream greets an empty name. Other read errors are returned.
pub fn greet<R: LineReader, W: Write>(
    reader: &mut R,
    out: &mut W,
    settings: &GreetingSettings,
) -> Result<String> {
    writeln!(out, "{}", settings.prompt).map_err(AppError::Output)?;
    out.flush().map_err(AppError::Output)?;

    let raw = match reader.read_line() {
        Ok(line) => line,
        Err(AppError::EndOfInput) => {
            tracing::warn!("no name entered before end of input");
            String::new()
        }
        Err(e) => return Err(e),
    };

    let name = raw.trim().to_string();
    writeln!(out, "Hi, {}! I'm {}!", name, settings.signature).map_err(AppError::Output)?;

    Ok(name)
}
