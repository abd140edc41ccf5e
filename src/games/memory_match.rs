//! Memory Match: find all pairs on a face-down grid of cards.
//!
//! The deck is two copies of `1..=pairs` shuffled with a uniform
//! Fisher-Yates permutation. Flipping the second card of an attempt counts
//! one move and leaves the pair pending; the caller shows both cards for
//! its reveal delay, then calls [`MemoryMatch::resolve`]. The comparison
//! itself is the pure [`resolve_pair`], callable immediately.
//!
//! In hot-seat mode a match scores a point for the active player and keeps
//! the turn; a mismatch passes it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Difficulty, GameRng, Mode, Rejection, Session, Status};
use crate::stats::GameKind;

use super::Engine;

/// One card on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Pair identifier; exactly two cards share each value.
    pub value: u32,
    pub flipped: bool,
    pub matched: bool,
}

/// Result of flipping a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of an attempt is face up.
    FirstUp,
    /// Both cards are face up; call `resolve` after the reveal delay.
    PairUp { first: usize, second: usize },
}

/// Result of resolving a pending pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairResolution {
    /// The cards matched and stay face up.
    Matched { won: bool },
    /// The cards differed and were turned back down.
    Mismatched,
}

/// Whether two cards form a pair. Pure and symmetric.
#[must_use]
pub fn resolve_pair(a: &Card, b: &Card) -> bool {
    a.value == b.value
}

/// Grid side length for a difficulty.
#[must_use]
pub const fn side_length(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 4,
        Difficulty::Medium => 6,
        Difficulty::Hard => 8,
    }
}

/// One Memory Match session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemoryMatch {
    cards: Vec<Card>,
    /// Indices of face-up cards awaiting resolution, at most two.
    pending: SmallVec<[usize; 2]>,
    matches: u32,
    /// Hot-seat points, indexed by `Turn::index`.
    player_points: [u32; 2],
    session: Session,
}

impl MemoryMatch {
    /// Deal a shuffled grid for the difficulty: 4x4, 6x6 or 8x8.
    #[must_use]
    pub fn new(difficulty: Difficulty, mode: Mode, rng: &mut GameRng) -> Self {
        let side = side_length(difficulty);
        let pairs = (side * side / 2) as u32;

        let mut values: Vec<u32> = (1..=pairs).chain(1..=pairs).collect();
        rng.shuffle(&mut values);

        let cards = values
            .into_iter()
            .map(|value| Card {
                value,
                flipped: false,
                matched: false,
            })
            .collect();

        Self {
            cards,
            pending: SmallVec::new(),
            matches: 0,
            player_points: [0, 0],
            session: Session::new(Some(difficulty), mode),
        }
    }

    /// All cards, row-major.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of pairs on the grid.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Hot-seat points as `(player one, player two)`.
    #[must_use]
    pub fn player_points(&self) -> (u32, u32) {
        (self.player_points[0], self.player_points[1])
    }

    /// Indices of face-up cards awaiting resolution.
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// Turn a card face up.
    ///
    /// Rejected while two cards await resolution, and for cards already
    /// face up or matched. The second card of an attempt counts one move.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, Rejection> {
        self.session.ensure_active()?;
        if index >= self.cards.len() {
            return Err(Rejection::OutOfBounds);
        }
        if self.pending.len() == 2 {
            return Err(Rejection::PairPending);
        }
        let card = self.cards[index];
        if card.flipped || card.matched {
            return Err(Rejection::AlreadyFaceUp);
        }

        self.cards[index].flipped = true;
        self.pending.push(index);

        if let [first, second] = self.pending[..] {
            self.session.record_move();
            Ok(FlipOutcome::PairUp { first, second })
        } else {
            Ok(FlipOutcome::FirstUp)
        }
    }

    /// Settle the pending pair.
    ///
    /// Synchronous and immediate; the caller invokes it after its reveal
    /// delay. The win condition is derived from the card list itself, not
    /// a counter, so it can never lag the state by one resolution.
    pub fn resolve(&mut self) -> Result<PairResolution, Rejection> {
        self.session.ensure_active()?;
        let [first, second] = self.pending[..] else {
            return Err(Rejection::NothingToResolve);
        };
        self.pending.clear();

        if resolve_pair(&self.cards[first], &self.cards[second]) {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.matches += 1;
            if self.session.mode() == Mode::Friend {
                self.player_points[self.session.turn().index()] += 1;
            }

            let won = self.cards.iter().all(|card| card.matched);
            if won {
                self.session.finish(Status::Won);
            }
            Ok(PairResolution::Matched { won })
        } else {
            self.cards[first].flipped = false;
            self.cards[second].flipped = false;
            self.session.pass_turn();
            Ok(PairResolution::Mismatched)
        }
    }
}

impl Engine for MemoryMatch {
    fn kind(&self) -> GameKind {
        GameKind::MemoryMatch
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// `pairs * 100 - moves * 10 - elapsed seconds`, deliberately not
    /// clamped at zero (a slow game can go negative).
    fn score(&self) -> Option<i64> {
        if self.session.status() != Status::Won {
            return None;
        }
        Some(
            i64::from(self.total_pairs()) * 100
                - i64::from(self.session.moves()) * 10
                - i64::from(self.session.elapsed_secs()),
        )
    }
}
