use super::rank::Rank;
use super::suit::Suit;
use std::fmt::{Display, Formatter};

/// A single playing card: a (rank, suit) pair.
///
/// Cards are dense over `0..52`: `index = rank * 4 + suit`. This is the same
/// isomorphism the deck and hand bitmasks rely on, so converting between a
/// `Card` and its `u8`/bit position never needs a lookup table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn to_bit(&self) -> u64 {
        1u64 << u8::from(*self)
    }
}

impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.rank as u8) * 4 + (c.suit as u8)
    }
}

impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// Two-character text codec: rank char from `23456789TJQKA`, suit char from `cdhs`.
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        let rank = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty card string"))?;
        let suit = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing suit character in '{s}'"))?;
        if chars.next().is_some() {
            anyhow::bail!("card string '{s}' has trailing characters");
        }
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_u8() {
        for n in 0..52u8 {
            assert_eq!(u8::from(Card::from(n)), n);
        }
    }

    #[test]
    fn roundtrip_text() {
        let card = Card::new(Rank::Ace, Suit::Spade);
        let text = card.to_string();
        assert_eq!(text, "As");
        assert_eq!(Card::try_from(text.as_str()).unwrap(), card);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("Asx").is_err());
        assert!(Card::try_from("Xs").is_err());
    }
}
