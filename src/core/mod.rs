pub mod enumerate;
pub mod greeting;
pub mod guess_loop;

pub use crate::domain::model::{GuessReport, LoopState, Outcome, Termination};
pub use crate::domain::ports::{GuessSettings, LineReader};
pub use crate::utils::error::Result;
