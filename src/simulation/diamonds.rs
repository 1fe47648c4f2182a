use super::estimator::Estimator;
use crate::Payout;
use crate::cards::deck::Deck;
use crate::cards::suit::Suit;
use rand::Rng;

/// the diamonds side bet. pays on the number of diamonds showing
/// across all nine cards dealt, four or more to see any money.
#[derive(Debug, Clone, Default)]
pub struct Diamonds {
    counts: [u64; 10],
    trials: u64,
}

impl Diamonds {
    /// payout schedule by diamond count
    #[rustfmt::skip]
    pub const REWARDS: [(usize, Payout); 6] = [
        (4,    3.),
        (5,   10.),
        (6,   30.),
        (7,  100.),
        (8,  300.),
        (9, 1000.),
    ];

    pub fn reward(diamonds: usize) -> Payout {
        Self::REWARDS
            .iter()
            .find(|(paying, _)| *paying == diamonds)
            .map(|(_, payout)| *payout)
            .unwrap_or(0.)
    }

    /// full distribution over 0..=9 diamonds
    pub fn counts(&self) -> &[u64; 10] {
        &self.counts
    }
    pub fn trials(&self) -> u64 {
        self.trials
    }
}

impl Estimator for Diamonds {
    /// nine cards see the felt: two for the player, two for the
    /// dealer, five on the board
    fn sample<R: Rng>(&mut self, rng: &mut R) {
        let mut deck = Deck::shuffled(rng);
        let diamonds = deck
            .deal(9)
            .iter()
            .filter(|card| card.suit() == Suit::Diamond)
            .count();
        self.counts[diamonds] += 1;
        self.trials += 1;
    }

    fn absorb(&mut self, other: Self) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self.trials += other.trials;
    }

    fn expectation(&self) -> Payout {
        if self.trials == 0 {
            return 0.;
        }
        self.counts
            .iter()
            .enumerate()
            .map(|(diamonds, count)| Self::reward(diamonds) * *count as Payout)
            .sum::<Payout>()
            / self.trials as Payout
    }
}

impl std::fmt::Display for Diamonds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (diamonds, payout) in Self::REWARDS {
            let count = self.counts[diamonds];
            writeln!(
                f,
                "{:<16} {:>6} {:>10} {:>10.5}",
                format!("{} diamonds", diamonds),
                payout,
                count,
                count as Payout / self.trials.max(1) as Payout
            )?;
        }
        write!(f, "{:<16} {:>6.5}", "expectation", self.expectation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::estimator::seeded;

    #[test]
    fn rewards_pay_four_through_nine() {
        assert_eq!(Diamonds::reward(0), 0.);
        assert_eq!(Diamonds::reward(3), 0.);
        assert_eq!(Diamonds::reward(4), 3.);
        assert_eq!(Diamonds::reward(9), 1000.);
    }

    #[test]
    fn distribution_sums_to_trials() {
        let diamonds = seeded::<Diamonds>(5_000, 0);
        assert_eq!(diamonds.counts().iter().sum::<u64>(), 5_000);
        assert_eq!(diamonds.trials(), 5_000);
    }

    #[test]
    fn short_counts_never_pay() {
        let mut diamonds = Diamonds::default();
        diamonds.counts[0] = 400;
        diamonds.counts[3] = 600;
        diamonds.trials = 1_000;
        assert_eq!(diamonds.expectation(), 0.);
    }

    #[test]
    fn sampled_expectation_lands_near_truth() {
        // hypergeometric, 13 of 52 drawn 9 deep. truth is near 0.79
        let diamonds = seeded::<Diamonds>(20_000, 0);
        assert!((0.65..0.95).contains(&diamonds.expectation()));
    }

    #[test]
    fn most_deals_hold_few_diamonds() {
        let diamonds = seeded::<Diamonds>(5_000, 1);
        let few = diamonds.counts()[..4].iter().sum::<u64>();
        assert!(few > 4_000);
    }
}
