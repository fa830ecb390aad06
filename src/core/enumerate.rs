use crate::utils::error::{AppError, Result};
use std::io::Write;

pub const DEFAULT_ITEMS: [&str; 3] = ["hammerhead", "great white", "dogfish"];

pub fn default_items() -> Vec<String> {
    DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
}

/// Writes `<index> <value>` per item, zero-based. Returns the number of lines written.
pub fn enumerate<S: AsRef<str>, W: Write>(items: &[S], out: &mut W) -> Result<usize> {
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{} {}", i, item.as_ref()).map_err(AppError::Output)?;
    }
    Ok(items.len())
}
