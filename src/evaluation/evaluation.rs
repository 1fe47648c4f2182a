use super::category::Category;
use super::evaluator::Evaluator;
use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// the complete verdict on a hand.
///
/// every detector runs, not just the winning one, so the result holds
/// both the single best category and the cards realizing EVERY
/// category present in the hand. consumers that care about near
/// misses (a flush sitting under a full house, side bets paying on
/// specific categories) read the map; everyone else reads best().
/// high card is always populated, so a winner always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    best: Category,
    cards: [Vec<Card>; 9],
}

impl From<&Hand> for Evaluation {
    fn from(hand: &Hand) -> Self {
        Self::from(Evaluator::from(hand.cards()))
    }
}

impl<'a> From<Evaluator<'a>> for Evaluation {
    fn from(evaluator: Evaluator<'a>) -> Self {
        let mut cards: [Vec<Card>; 9] = Default::default();
        cards[Category::StraightFlush as usize] =
            evaluator.find_straight_flush().unwrap_or_default();
        cards[Category::FourOAK as usize] = evaluator.find_4_oak().unwrap_or_default();
        cards[Category::FullHouse as usize] = evaluator.find_3_oak_2_oak().unwrap_or_default();
        cards[Category::Flush as usize] = evaluator.find_flush().unwrap_or_default();
        cards[Category::Straight as usize] = evaluator.find_straight().unwrap_or_default();
        cards[Category::ThreeOAK as usize] = evaluator.find_3_oak().unwrap_or_default();
        cards[Category::TwoPair as usize] = evaluator.find_2_oak_2_oak().unwrap_or_default();
        cards[Category::OnePair as usize] = evaluator.find_2_oak().unwrap_or_default();
        cards[Category::HighCard as usize] = evaluator.find_high_cards();
        let best = Category::descending()
            .find(|category| !cards[*category as usize].is_empty())
            .expect("high card always populated");
        Self { best, cards }
    }
}

impl Evaluation {
    /// the strongest category present
    pub fn best(&self) -> Category {
        self.best
    }
    /// the cards realizing a category, empty when absent
    pub fn cards(&self, category: Category) -> &[Card] {
        &self.cards[category as usize]
    }
    pub fn contains(&self, category: Category) -> bool {
        !self.cards(category).is_empty()
    }
    /// all categories strongest first with their realizing cards
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Card])> + '_ {
        Category::descending().map(move |category| (category, self.cards(category)))
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (category, cards) in self.iter().filter(|(_, cards)| !cards.is_empty()) {
            writeln!(
                f,
                "{:<16} {}",
                category.to_string(),
                cards
                    .iter()
                    .map(|card| card.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    fn evaluate(s: &str) -> Evaluation {
        Evaluation::from(&Hand::try_from(s).unwrap())
    }

    fn ranks(cards: &[Card]) -> Vec<Rank> {
        cards.iter().map(|card| card.rank()).collect()
    }

    #[test]
    fn winner_is_highest_nonempty() {
        let evaluation = evaluate("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(evaluation.best(), Category::FourOAK);
        for category in Category::descending() {
            if category > evaluation.best() {
                assert!(!evaluation.contains(category));
            }
        }
    }

    #[test]
    fn high_card_always_five_cards() {
        for fixture in [
            "As Kh Qd Jc 9s",
            "2s 2h 2d 2c 3s",
            "Ts Js Qs Ks As 9h 8d",
            "As Kh Qd Jc 9s 8h 7d 6c 5s",
        ] {
            assert_eq!(evaluate(fixture).cards(Category::HighCard).len(), 5);
        }
    }

    #[test]
    fn all_categories_reported() {
        let evaluation = evaluate("Ts Js Qs Ks As 9h 9d");
        assert_eq!(evaluation.best(), Category::StraightFlush);
        assert!(evaluation.contains(Category::Flush));
        assert!(evaluation.contains(Category::Straight));
        assert!(evaluation.contains(Category::OnePair));
        assert!(evaluation.contains(Category::HighCard));
        assert!(!evaluation.contains(Category::FourOAK));
        assert!(!evaluation.contains(Category::FullHouse));
        assert!(!evaluation.contains(Category::ThreeOAK));
        assert!(!evaluation.contains(Category::TwoPair));
    }

    #[test]
    fn quads_populate_their_weaker_buckets() {
        let evaluation = evaluate("7s 7h 7d 7c 9s 9h 2d");
        assert_eq!(evaluation.best(), Category::FourOAK);
        assert!(evaluation.contains(Category::FullHouse));
        assert!(evaluation.contains(Category::ThreeOAK));
        assert!(evaluation.contains(Category::TwoPair));
        assert!(evaluation.contains(Category::OnePair));
        #[rustfmt::skip]
        assert_eq!(
            ranks(evaluation.cards(Category::FullHouse)),
            vec![Rank::Seven, Rank::Seven, Rank::Seven, Rank::Nine, Rank::Nine]
        );
    }

    #[test]
    fn flush_beats_coincidental_straight() {
        let evaluation = evaluate("6s Ah 2h 3h 4h 5s Kh");
        assert_eq!(evaluation.best(), Category::Flush);
        assert!(evaluation.contains(Category::Straight));
        assert!(!evaluation.contains(Category::StraightFlush));
    }

    #[test]
    fn wheel_wins_when_nothing_better() {
        let evaluation = evaluate("As 2h 3c 4d 5s 9c Kd");
        assert_eq!(evaluation.best(), Category::Straight);
        #[rustfmt::skip]
        assert_eq!(
            ranks(evaluation.cards(Category::Straight)),
            vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
        );
    }

    #[test]
    fn full_house_from_two_trips_is_five_cards() {
        let evaluation = evaluate("9s 9h 9d 4c 4s 4h 2d");
        assert_eq!(evaluation.best(), Category::FullHouse);
        let cards = evaluation.cards(Category::FullHouse);
        assert_eq!(cards.len(), 5);
        #[rustfmt::skip]
        assert_eq!(
            ranks(cards),
            vec![Rank::Nine, Rank::Nine, Rank::Nine, Rank::Four, Rank::Four]
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let hand = Hand::try_from("As Ah Kd Kc Qs Jh 9d").unwrap();
        assert_eq!(Evaluation::from(&hand), Evaluation::from(&hand));
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = evaluate("As Ah Kd Kc Qs Jh 9d");
        let reverse = evaluate("9d Jh Qs Kc Kd Ah As");
        assert_eq!(forward.best(), reverse.best());
        for category in Category::descending() {
            assert_eq!(
                ranks(forward.cards(category)),
                ranks(reverse.cards(category))
            );
        }
    }

    #[test]
    fn display_lists_made_categories_only() {
        let rendered = evaluate("As Ah Kd Kc Qs").to_string();
        assert!(rendered.contains("Two Pair"));
        assert!(rendered.contains("High Card"));
        assert!(!rendered.contains("Flush"));
        assert!(rendered.contains("Ace of Spades"));
    }
}
