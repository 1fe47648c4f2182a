use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// rank multiplicity buckets over a set of cards.
///
/// a rank with n copies is listed under every multiplicity 2..=n, so a
/// quad also answers consumers looking for a trip or a pair. this is
/// what lets a full house pair up with the second rank of a second
/// trip, and two pair form from a quad's "pairs". singles are never
/// recorded. buckets are sorted by rank descending, so the first entry
/// of any bucket is the highest qualifying rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pairs: Vec<Rank>,
    trips: Vec<Rank>,
    quads: Vec<Rank>,
}

impl From<&[Card]> for Tally {
    fn from(cards: &[Card]) -> Self {
        let mut counts = [0u8; 13];
        for card in cards {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        let mut tally = Self::default();
        for i in (0..13u8).rev() {
            let rank = Rank::from(i);
            let count = counts[i as usize];
            if count >= 4 {
                tally.quads.push(rank);
            }
            if count >= 3 {
                tally.trips.push(rank);
            }
            if count >= 2 {
                tally.pairs.push(rank);
            }
        }
        tally
    }
}

impl Tally {
    /// ranks with at least two copies, descending
    pub fn pairs(&self) -> &[Rank] {
        &self.pairs
    }
    /// ranks with at least three copies, descending
    pub fn trips(&self) -> &[Rank] {
        &self.trips
    }
    /// ranks with at least four copies, descending
    pub fn quads(&self) -> &[Rank] {
        &self.quads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn tally(s: &str) -> Tally {
        Tally::from(Hand::try_from(s).unwrap().cards())
    }

    #[test]
    fn singles_never_recorded() {
        let tally = tally("As Kh Qd Jc 9s");
        assert!(tally.pairs().is_empty());
        assert!(tally.trips().is_empty());
        assert!(tally.quads().is_empty());
    }

    #[test]
    fn quads_listed_in_every_bucket() {
        let tally = tally("2s 2h 2d 2c Ah 6s 5h");
        assert_eq!(tally.quads(), &[Rank::Two]);
        assert_eq!(tally.trips(), &[Rank::Two]);
        assert_eq!(tally.pairs(), &[Rank::Two]);
    }

    #[test]
    fn trips_also_count_as_pairs() {
        let tally = tally("6s 6h 6d 2s 2h 4h 5h");
        assert!(tally.quads().is_empty());
        assert_eq!(tally.trips(), &[Rank::Six]);
        assert_eq!(tally.pairs(), &[Rank::Six, Rank::Two]);
    }

    #[test]
    fn buckets_sorted_descending() {
        let tally = tally("2s 2h 9d 9c Ks Kh 5d");
        assert_eq!(tally.pairs(), &[Rank::King, Rank::Nine, Rank::Two]);
    }

    #[test]
    fn two_trips_both_listed() {
        let tally = tally("4s 4h 4d 9c 9s 9h 2d");
        assert_eq!(tally.trips(), &[Rank::Nine, Rank::Four]);
        assert_eq!(tally.pairs(), &[Rank::Nine, Rank::Four]);
    }
}
