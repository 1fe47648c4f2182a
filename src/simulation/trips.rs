use super::estimator::Estimator;
use crate::Payout;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::evaluation::category::Category;
use crate::evaluation::evaluation::Evaluation;
use rand::Rng;
use std::collections::BTreeMap;

/// the trips side bet. pays on the player's final seven card hand
/// whenever it makes three of a kind or better, dealer be damned.
#[derive(Debug, Clone, Default)]
pub struct Trips {
    counts: BTreeMap<Category, u64>,
    trials: u64,
}

impl Trips {
    /// payout schedule, strongest category first
    #[rustfmt::skip]
    pub const REWARDS: [(Category, Payout); 6] = [
        (Category::StraightFlush, 40.),
        (Category::FourOAK,       30.),
        (Category::FullHouse,      8.),
        (Category::Flush,          7.),
        (Category::Straight,       4.),
        (Category::ThreeOAK,       3.),
    ];

    pub fn reward(category: Category) -> Payout {
        Self::REWARDS
            .iter()
            .find(|(paying, _)| *paying == category)
            .map(|(_, payout)| *payout)
            .unwrap_or(0.)
    }

    /// the best paying category the hand realizes, if any
    pub fn qualifying(evaluation: &Evaluation) -> Option<Category> {
        Self::REWARDS
            .iter()
            .map(|(category, _)| *category)
            .find(|category| evaluation.contains(*category))
    }

    pub fn counts(&self) -> &BTreeMap<Category, u64> {
        &self.counts
    }
    pub fn trials(&self) -> u64 {
        self.trials
    }
}

impl Estimator for Trips {
    /// seven cards, two in the hole and five on the board
    fn sample<R: Rng>(&mut self, rng: &mut R) {
        let mut deck = Deck::shuffled(rng);
        let hand = Hand::try_from(deck.deal(7)).expect("seven cards off a full deck");
        let evaluation = Evaluation::from(&hand);
        if let Some(category) = Self::qualifying(&evaluation) {
            *self.counts.entry(category).or_insert(0) += 1;
        }
        self.trials += 1;
    }

    fn absorb(&mut self, other: Self) {
        for (category, count) in other.counts {
            *self.counts.entry(category).or_insert(0) += count;
        }
        self.trials += other.trials;
    }

    fn expectation(&self) -> Payout {
        if self.trials == 0 {
            return 0.;
        }
        self.counts
            .iter()
            .map(|(category, count)| Self::reward(*category) * *count as Payout)
            .sum::<Payout>()
            / self.trials as Payout
    }
}

impl std::fmt::Display for Trips {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (category, payout) in Self::REWARDS {
            let count = self.counts.get(&category).copied().unwrap_or(0);
            writeln!(
                f,
                "{:<16} {:>6} {:>10} {:>10.5}",
                category.to_string(),
                payout,
                count,
                count as Payout / self.trials.max(1) as Payout
            )?;
        }
        write!(f, "{:<16} {:>6.5}", "expectation", self.expectation())
    }
}
