use super::street::Street;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hand::HandError;
use crate::evaluation::evaluation::Evaluation;
use rand::Rng;

/// one seat at the table, a name and their hole cards
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hole: Vec<Card>,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<12} {}",
            self.name,
            self.hole
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

/// a table running one deal from shuffle to showdown.
///
/// no betting rounds. streets only gate how much of the board is
/// visible, so the interesting part is the showdown where every
/// seat's hole cards join the board for evaluation.
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<Player>,
    board: Vec<Card>,
    deck: Deck,
    street: Street,
}

impl Table {
    pub fn sit<R: Rng>(names: Vec<String>, rng: &mut R) -> Self {
        Self {
            players: names
                .into_iter()
                .map(|name| Player {
                    name,
                    hole: Vec::new(),
                })
                .collect(),
            board: Vec::new(),
            deck: Deck::shuffled(rng),
            street: Street::Pref,
        }
    }

    //
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }

    /// pin a seat's hole cards ahead of the deal, pulling each from
    /// the deck by rank and suit
    pub fn rig(&mut self, seat: usize, hole: Vec<Card>) {
        assert!(self.street == Street::Pref);
        for card in hole.iter() {
            self.deck.remove(card.rank(), card.suit());
        }
        self.players[seat].hole = hole;
    }

    /// two cards to each seat, one at a time around the table.
    /// rigged seats already hold theirs and are passed over.
    pub fn deal_holes(&mut self) {
        assert!(self.street == Street::Pref);
        for _ in 0..2 {
            for player in self.players.iter_mut().filter(|p| p.hole.len() < 2) {
                player.hole.extend(self.deck.deal(1));
            }
        }
    }

    /// reveal the next street onto the board
    pub fn deal_street(&mut self) {
        let revealed = self.deck.deal(self.street.n_revealed());
        log::debug!(
            "{:<32}{:<32}",
            format!("dealing {}", self.street.next()),
            revealed
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        );
        self.board.extend(revealed);
        self.street = self.street.next();
    }

    /// reveal the remaining streets through the river
    pub fn run_out(&mut self) {
        while self.street != Street::Rive {
            self.deal_street();
        }
    }

    /// evaluate every seat's hole cards together with the board.
    /// before the flop there are too few cards and this fails.
    pub fn showdown(&self) -> Result<Vec<(String, Evaluation)>, HandError> {
        self.players
            .iter()
            .map(|player| {
                let mut cards = player.hole.clone();
                cards.extend_from_slice(&self.board);
                let hand = Hand::try_from(cards)?;
                Ok((player.name.clone(), Evaluation::from(&hand)))
            })
            .collect()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{:<12} {}",
            self.street.to_string(),
            self.board
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )?;
        for player in self.players.iter() {
            writeln!(f, "{}", player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;
    use crate::evaluation::category::Category;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn table(n: usize) -> Table {
        let names = (1..=n).map(|i| format!("Seat {}", i)).collect();
        Table::sit(names, &mut SmallRng::seed_from_u64(0))
    }

    #[test]
    fn sitting_deals_nothing() {
        let table = table(4);
        assert_eq!(table.street(), Street::Pref);
        assert!(table.board().is_empty());
        assert!(table.players().iter().all(|p| p.hole().is_empty()));
    }

    #[test]
    fn seats_keep_their_names() {
        let table = table(3);
        let names = table.players().iter().map(|p| p.name()).collect::<Vec<_>>();
        assert_eq!(names, ["Seat 1", "Seat 2", "Seat 3"]);
    }

    #[test]
    fn holes_come_in_pairs() {
        let mut table = table(6);
        table.deal_holes();
        assert!(table.players().iter().all(|p| p.hole().len() == 2));
    }

    #[test]
    fn run_out_reveals_five() {
        let mut table = table(4);
        table.deal_holes();
        table.run_out();
        assert_eq!(table.street(), Street::Rive);
        assert_eq!(table.board().len(), 5);
    }

    #[test]
    fn showdown_needs_a_board() {
        let mut table = table(4);
        table.deal_holes();
        assert_eq!(table.showdown(), Err(HandError::InsufficientCards(2)));
    }

    #[test]
    fn showdown_ranks_every_player() {
        let mut table = table(5);
        table.deal_holes();
        table.run_out();
        let results = table.showdown().unwrap();
        assert_eq!(results.len(), 5);
        for (_, evaluation) in results {
            assert_eq!(evaluation.cards(Category::HighCard).len(), 5);
        }
    }

    #[test]
    fn rigged_seat_keeps_its_cards() {
        let mut table = table(4);
        let hole = vec![
            Card::try_from("Ah").unwrap(),
            Card::try_from("Kh").unwrap(),
        ];
        table.rig(0, hole.clone());
        table.deal_holes();
        let rigged = table.players()[0].hole();
        assert_eq!(rigged.len(), 2);
        assert!(rigged.iter().zip(hole.iter()).all(|(a, b)| {
            a.rank() == b.rank() && a.suit() == b.suit()
        }));
        assert!(table.players()[1..].iter().all(|p| p.hole().len() == 2));
    }

    #[test]
    fn rigged_cards_leave_the_deck() {
        let mut table = table(4);
        table.rig(0, vec![Card::try_from("Ah").unwrap()]);
        table.deal_holes();
        table.run_out();
        let ace_of_hearts = |c: &&Card| c.rank() == Rank::Ace && c.suit() == Suit::Heart;
        let dealt = table.players()[1..]
            .iter()
            .flat_map(|p| p.hole().iter())
            .chain(table.board().iter())
            .filter(ace_of_hearts)
            .count();
        assert_eq!(dealt, 0);
    }

    #[test]
    fn cards_never_shared() {
        let mut table = table(9);
        table.deal_holes();
        table.run_out();
        let mut seen = HashSet::new();
        let dealt = table
            .players()
            .iter()
            .flat_map(|p| p.hole().iter())
            .chain(table.board().iter());
        for card in dealt {
            assert!(seen.insert((card.rank(), card.suit())));
        }
        assert_eq!(seen.len(), 9 * 2 + 5);
    }
}
