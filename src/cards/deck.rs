use super::card::Card;
use rand::seq::SliceRandom;
use rand::Rng;

/// The 52-card deck, shuffled once per simulated hand and then dealt from
/// front to back: two cards per seat, then the flop/turn/river stubs as the
/// trainer walks chance nodes.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = (0..52u8).map(Card::from).collect();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Pop `n` cards off the top of the deck.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        assert!(self.cards.len() >= n, "deck exhausted");
        self.cards.split_off(self.cards.len() - n)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
