/// an immutable rank and suit pair.
///
/// equality, ordering, and hashing look at RANK ONLY. two physical
/// cards of the same rank compare equal, which is what hand ranking
/// wants everywhere except flush logic and deck bookkeeping. those
/// paths must compare suits explicitly through the accessor. this
/// also means a Vec<Card> comparison is a rank-sequence comparison.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}
impl Eq for Card {}
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}
impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

/// str isomorphism, compact two-character notation like "Qh" or "Tc"
impl TryFrom<&str> for Card {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Rank::try_from(rank)
                .and_then(|rank| Suit::try_from(suit).map(|suit| Self { rank, suit }))
                .map_err(|_| HandError::InvalidCard(s.to_string())),
            _ => Err(HandError::InvalidCard(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Self {
            rank: Rank::from(rng.random_range(0..13u8)),
            suit: Suit::from(rng.random_range(0..4u8)),
        }
    }
}

use super::hand::HandError;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
