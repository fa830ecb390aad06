use crate::utils::error::Result;

/// Source of console lines.
///
/// `read_line` blocks until a full line is available and returns it without
/// its line terminator. A closed stream is reported as
/// [`AppError::EndOfInput`](crate::utils::error::AppError::EndOfInput).
pub trait LineReader {
    fn read_line(&mut self) -> Result<String>;
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }
}

pub trait GuessSettings {
    fn target(&self) -> &str;
    fn prompt(&self) -> &str;
}
