use super::card::Card;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("invalid card rank or suit: {0}")]
    InvalidCard(String),
    #[error("at least 5 cards required to evaluate, got {0}")]
    InsufficientCards(usize),
}

/// an evaluation input: at least five cards, nine at most in practice
/// from two hole cards plus board and dealer cards. construction is
/// the only place hand size is checked, so category detectors never
/// see fewer than five cards. no ordering invariant is maintained and
/// duplicates are not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub const MIN: usize = 5;

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.len() < Self::MIN {
            Err(HandError::InsufficientCards(cards.len()))
        } else {
            Ok(Self(cards))
        }
    }
}

/// str isomorphism, whitespace separated compact cards
impl TryFrom<&str> for Hand {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, HandError>>()
            .and_then(Self::try_from)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

impl crate::Arbitrary for Hand {
    /// seven random cards, the river shape of one player's hand
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let mut deck = super::deck::Deck::shuffled(rng);
        Self(deck.deal(7))
    }
}
