//! Shared building blocks: difficulty/mode configuration, session
//! bookkeeping, rejected-action signals and the deterministic RNG.

mod difficulty;
mod rejection;
mod rng;
mod session;

pub use difficulty::{Difficulty, Mode, Turn};
pub use rejection::{Rejection, RejectionKind};
pub use rng::{GameRng, GameRngState};
pub use session::{Session, Status};
