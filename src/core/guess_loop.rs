use crate::core::{GuessReport, GuessSettings, LineReader, LoopState, Outcome, Termination};
use crate::utils::error::{AppError, Result};
use std::io::Write;

pub const DEFAULT_TARGET: &str = "blue";
pub const DEFAULT_PROMPT: &str = "Guess my favorite color.";

/// Exact comparison: no trimming, no case folding.
pub fn check_guess(target: &str, input: &str) -> Outcome {
    if input == target {
        Outcome::Correct
    } else {
        Outcome::Rejected
    }
}

/// Prompts until the input equals the target or a line can't be read.
#[derive(Debug, Clone)]
pub struct GuessLoop {
    target: String,
    prompt: String,
    comparisons: usize,
    state: LoopState,
}

impl GuessLoop {
    pub fn new(target: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            prompt: prompt.into(),
            comparisons: 0,
            state: LoopState::AwaitingInput,
        }
    }

    pub fn from_settings<C: GuessSettings>(settings: &C) -> Self {
        Self::new(settings.target(), settings.prompt())
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Runs one prompt/read/compare cycle.
    ///
    /// Read failures are written to `out` and end the loop; they are not
    /// returned as errors. Only a failed write is. Once terminated, further
    /// calls do nothing.
    pub fn step<R: LineReader, W: Write>(
        &mut self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<LoopState> {
        if self.state.is_terminated() {
            return Ok(self.state);
        }

        writeln!(out, "{}", self.prompt).map_err(AppError::Output)?;
        out.flush().map_err(AppError::Output)?;

        let input = match reader.read_line() {
            Ok(line) => line,
            Err(e) if e.is_read_failure() => {
                tracing::debug!(error = %e, "stopping guess loop");
                writeln!(out, "{}", e).map_err(AppError::Output)?;
                self.state = LoopState::Terminated(Termination::ReadFailed);
                return Ok(self.state);
            }
            Err(e) => return Err(e),
        };

        self.comparisons += 1;
        match check_guess(&self.target, &input) {
            Outcome::Correct => {
                writeln!(out, "Correct! {:?} is my favorite color!", self.target)
                    .map_err(AppError::Output)?;
                self.state = LoopState::Terminated(Termination::Matched);
            }
            Outcome::Rejected => {
                tracing::debug!(attempt = self.comparisons, "guess rejected");
                writeln!(out, "Sorry, {:?} is not my favorite color. Guess again.", input)
                    .map_err(AppError::Output)?;
            }
        }

        Ok(self.state)
    }

    pub fn run<R: LineReader, W: Write>(
        &mut self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<GuessReport> {
        loop {
            if let LoopState::Terminated(termination) = self.step(reader, out)? {
                tracing::info!(comparisons = self.comparisons, ?termination, "guess loop finished");
                return Ok(GuessReport {
                    comparisons: self.comparisons,
                    termination,
                });
            }
        }
    }
}

impl Default for GuessLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET, DEFAULT_PROMPT)
    }
}
