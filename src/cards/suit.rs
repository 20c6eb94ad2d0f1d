use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        match n % 4 {
            0 => Self::Club,
            1 => Self::Diamond,
            2 => Self::Heart,
            3 => Self::Spade,
            _ => unreachable!(),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' => Ok(Self::Club),
            'd' => Ok(Self::Diamond),
            'h' => Ok(Self::Heart),
            's' => Ok(Self::Spade),
            _ => Err(anyhow::anyhow!("invalid suit character '{c}'")),
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Club => "c",
                Self::Diamond => "d",
                Self::Heart => "h",
                Self::Spade => "s",
            }
        )
    }
}
