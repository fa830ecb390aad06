/// Result of comparing one line of input against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Rejected,
}

/// Why a guess loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Matched,
    ReadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingInput,
    Terminated(Termination),
}

impl LoopState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, LoopState::Terminated(_))
    }
}

/// Summary of a finished guess loop. Rejected inputs are not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub comparisons: usize,
    pub termination: Termination,
}
