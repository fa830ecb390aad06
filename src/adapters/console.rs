use crate::domain::ports::LineReader;
use crate::utils::error::{AppError, Result};
use std::io::{BufRead, StdinLock};

/// Line reader over any buffered input, usually locked stdin.
pub struct BufLineReader<R: BufRead> {
    inner: R,
    buffer: String,
}

impl<R: BufRead> BufLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: String::new(),
        }
    }
}

impl BufLineReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineReader for BufLineReader<R> {
    fn read_line(&mut self) -> Result<String> {
        self.buffer.clear();
        let read = self
            .inner
            .read_line(&mut self.buffer)
            .map_err(AppError::InputRead)?;

        if read == 0 {
            return Err(AppError::EndOfInput);
        }

        Ok(strip_line_terminator(&self.buffer).to_string())
    }
}

/// Removes one trailing `\n` or `\r\n`, nothing else.
fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
