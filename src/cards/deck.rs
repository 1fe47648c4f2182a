use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

/// a single 52-card deck. cards come off the top in deal order.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// full deck in enumeration order, suit-major
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|suit| Rank::all().into_iter().map(move |rank| Card::new(rank, suit)))
                .collect(),
        )
    }

    /// full deck in random order
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.0.shuffle(rng);
        deck
    }

    /// deal n cards off the top. panics when the deck runs dry.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(n <= self.0.len());
        self.0.drain(..n).collect()
    }

    /// remove one specific physical card. Card equality is rank-only,
    /// so this compares rank and suit explicitly.
    pub fn remove(&mut self, rank: Rank, suit: Suit) {
        if let Some(i) = self
            .0
            .iter()
            .position(|c| c.rank() == rank && c.suit() == suit)
        {
            self.0.remove(i);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
