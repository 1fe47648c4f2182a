use serde::Serialize;

/// the nine hand categories, declared ascending so the derived Ord is
/// the strength order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "High Card")]
    HighCard = 0,
    #[serde(rename = "One Pair")]
    OnePair = 1,
    #[serde(rename = "Two Pair")]
    TwoPair = 2,
    #[serde(rename = "Three of a Kind")]
    ThreeOAK = 3,
    #[serde(rename = "Straight")]
    Straight = 4,
    #[serde(rename = "Flush")]
    Flush = 5,
    #[serde(rename = "Full House")]
    FullHouse = 6,
    #[serde(rename = "Four of a Kind")]
    FourOAK = 7,
    #[serde(rename = "Straight Flush")]
    StraightFlush = 8,
}

impl Category {
    #[rustfmt::skip]
    pub const fn all() -> &'static [Self; 9] {
        &[
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOAK,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOAK,
            Category::StraightFlush,
        ]
    }

    /// strongest first
    pub fn descending() -> impl Iterator<Item = Self> {
        Self::all().iter().rev().copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::HighCard => "High Card",
                Category::OnePair => "One Pair",
                Category::TwoPair => "Two Pair",
                Category::ThreeOAK => "Three of a Kind",
                Category::Straight => "Straight",
                Category::Flush => "Flush",
                Category::FullHouse => "Full House",
                Category::FourOAK => "Four of a Kind",
                Category::StraightFlush => "Straight Flush",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_order() {
        assert!(Category::StraightFlush > Category::FourOAK);
        assert!(Category::FourOAK > Category::FullHouse);
        assert!(Category::FullHouse > Category::Flush);
        assert!(Category::Flush > Category::Straight);
        assert!(Category::Straight > Category::ThreeOAK);
        assert!(Category::ThreeOAK > Category::TwoPair);
        assert!(Category::TwoPair > Category::OnePair);
        assert!(Category::OnePair > Category::HighCard);
    }

    #[test]
    fn descending_starts_strongest() {
        assert_eq!(Category::descending().next(), Some(Category::StraightFlush));
        assert_eq!(Category::descending().last(), Some(Category::HighCard));
        assert_eq!(Category::descending().count(), 9);
    }
}
