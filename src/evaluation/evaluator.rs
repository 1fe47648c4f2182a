use super::tally::Tally;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// the ace doubles as rank value 1 during straight detection
const LOW_ACE: usize = 1;

/// searches a fixed set of cards for the five cards realizing each
/// category.
///
/// detectors work over physical cards so results can name the exact
/// cards involved, kickers included, rather than a rank signature.
/// every detector is total: on inputs where a category is absent it
/// answers None instead of panicking, including the contrived inputs
/// below Hand::MIN that only direct callers can produce.
pub struct Evaluator<'a> {
    cards: &'a [Card],
    tally: Tally,
}

impl<'a> From<&'a [Card]> for Evaluator<'a> {
    fn from(cards: &'a [Card]) -> Self {
        Self {
            tally: Tally::from(cards),
            cards,
        }
    }
}

impl<'a> Evaluator<'a> {
    pub fn find_straight_flush(&self) -> Option<Vec<Card>> {
        self.find_suit_of_flush().and_then(|suit| {
            let suited = self
                .cards
                .iter()
                .filter(|card| card.suit() == suit)
                .copied()
                .collect::<Vec<Card>>();
            Self::find_straight_in(&suited)
        })
    }

    pub fn find_4_oak(&self) -> Option<Vec<Card>> {
        let rank = self.tally.quads().first().copied()?;
        let mut cards = self.claim(rank, 4);
        cards.extend(self.kickers(&[rank], 1));
        Some(cards)
    }

    pub fn find_3_oak_2_oak(&self) -> Option<Vec<Card>> {
        let triple = self.tally.trips().first().copied()?;
        let paired = self
            .tally
            .pairs()
            .iter()
            .copied()
            .find(|rank| *rank != triple)?;
        let mut cards = self.claim(triple, 3);
        cards.extend(self.claim(paired, 2));
        Some(cards)
    }

    /// top five of the flush suit. when more than one suit could
    /// qualify the first in Suit::all() order wins, a fixed tie-break
    /// that a single 52-card deck can never actually exercise.
    pub fn find_flush(&self) -> Option<Vec<Card>> {
        self.find_suit_of_flush().map(|suit| {
            let mut suited = self
                .cards
                .iter()
                .filter(|card| card.suit() == suit)
                .copied()
                .collect::<Vec<Card>>();
            suited.sort_by(|a, b| b.cmp(a));
            suited.truncate(5);
            suited
        })
    }

    pub fn find_straight(&self) -> Option<Vec<Card>> {
        Self::find_straight_in(self.cards)
    }

    pub fn find_3_oak(&self) -> Option<Vec<Card>> {
        let rank = self.tally.trips().first().copied()?;
        let mut cards = self.claim(rank, 3);
        cards.extend(self.kickers(&[rank], 2));
        Some(cards)
    }

    /// the two highest pairs plus the best remaining card. a four-card
    /// input of exactly two pairs has no remaining card, in which case
    /// the four paired cards stand alone rather than double-counting.
    pub fn find_2_oak_2_oak(&self) -> Option<Vec<Card>> {
        let (hi, lo) = match self.tally.pairs() {
            [hi, lo, ..] => (*hi, *lo),
            _ => return None,
        };
        let mut cards = self.claim(hi, 2);
        cards.extend(self.claim(lo, 2));
        cards.extend(self.kickers(&[hi, lo], 1));
        Some(cards)
    }

    pub fn find_2_oak(&self) -> Option<Vec<Card>> {
        let rank = self.tally.pairs().first().copied()?;
        let mut cards = self.claim(rank, 2);
        cards.extend(self.kickers(&[rank], 3));
        Some(cards)
    }

    /// the five highest cards by rank, present in every evaluation
    pub fn find_high_cards(&self) -> Vec<Card> {
        let mut cards = self.descending();
        cards.truncate(5);
        cards
    }

    /// highest run of five consecutive rank values, high to low.
    /// one representative card is indexed per value, first occurrence
    /// winning when suits collide. the ace registers at value 14 and
    /// again at value 1, so the wheel window 5-4-3-2-A comes out with
    /// the ace last.
    fn find_straight_in(cards: &[Card]) -> Option<Vec<Card>> {
        let mut values: [Option<Card>; 15] = [None; 15];
        for card in cards {
            values[card.rank().value() as usize].get_or_insert(*card);
            if card.rank() == Rank::Ace {
                values[LOW_ACE].get_or_insert(*card);
            }
        }
        (5..=14)
            .rev()
            .find(|&hi| (hi - 4..=hi).all(|value| values[value].is_some()))
            .map(|hi| (hi - 4..=hi).rev().filter_map(|value| values[value]).collect())
    }

    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.cards.iter().filter(|card| card.suit() == *suit).count() >= 5)
    }

    /// up to n cards of the given rank, suits unconstrained
    fn claim(&self, rank: Rank, n: usize) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.rank() == rank)
            .take(n)
            .copied()
            .collect()
    }

    /// the n highest cards whose ranks are not already counted
    fn kickers(&self, counted: &[Rank], n: usize) -> Vec<Card> {
        self.descending()
            .into_iter()
            .filter(|card| !counted.contains(&card.rank()))
            .take(n)
            .collect()
    }

    fn descending(&self) -> Vec<Card> {
        let mut cards = self.cards.to_vec();
        cards.sort_by(|a, b| b.cmp(a));
        cards
    }
}
