//! Difficulty and mode configuration shared by the engines.
//!
//! Both enums are plain configuration inputs: the presentation layer picks
//! them, the engines translate them into grid sizes and clue counts.

use serde::{Deserialize, Serialize};

/// Difficulty selector for the engines that support one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, in ascending order.
    #[must_use]
    pub const fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Opponent mode for the engines that support one.
///
/// `Friend` is local hot-seat play: two players share the device and the
/// engine toggles the active player on qualifying moves. There is no
/// concurrency involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Single player (against the computer where the game has an opponent).
    Computer,
    /// Two local players taking turns on the same device.
    Friend,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Computer
    }
}

/// The active player in hot-seat mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    PlayerOne,
    PlayerTwo,
}

impl Turn {
    /// The other player.
    #[must_use]
    pub const fn other(self) -> Turn {
        match self {
            Turn::PlayerOne => Turn::PlayerTwo,
            Turn::PlayerTwo => Turn::PlayerOne,
        }
    }

    /// 0-based index, for score arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Turn::PlayerOne => 0,
            Turn::PlayerTwo => 1,
        }
    }
}

impl Default for Turn {
    fn default() -> Self {
        Turn::PlayerOne
    }
}
