use super::Chips;

/// The six ways a player can act on their turn. `Bet` and `Raise` carry the
/// new *total* current-street bet the actor is moving to, matching the sizing
/// math in the legal-action generator; `Call` and `AllIn` carry the amount
/// added to the actor's current-street bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    /// The single-letter/short code used by the history abstraction (§4.3).
    /// Bet and raise are distinguished from their sizing suffix, not here.
    pub fn code(&self) -> char {
        match self {
            Self::Fold => 'F',
            Self::Check => 'X',
            Self::Call => 'C',
            Self::AllIn => 'A',
            Self::Bet | Self::Raise => 'R',
        }
    }
}

/// A single action taken by one seat, with the pre-action bet snapshot the
/// sizing abstraction needs once the player's current-street bet has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub actor: usize,
    pub kind: ActionKind,
    pub amount: Chips,
    pub pre_action_bet: Chips,
}

impl Action {
    pub fn new(actor: usize, kind: ActionKind, amount: Chips, pre_action_bet: Chips) -> Self {
        Self {
            actor,
            kind,
            amount,
            pre_action_bet,
        }
    }

    /// The amount added to the actor's current-street bet by this action,
    /// used by the bet-sizing abstraction (§4.3 measures the *added* amount,
    /// not the new total). `Bet`/`Raise` carry the new total in `amount`, so
    /// the delta is computed against the pre-action snapshot; `Call`/`AllIn`
    /// already carry the added amount directly.
    pub fn added(&self) -> Chips {
        match self.kind {
            ActionKind::Bet | ActionKind::Raise => self.amount.saturating_sub(self.pre_action_bet),
            ActionKind::Call | ActionKind::AllIn => self.amount,
            ActionKind::Fold | ActionKind::Check => 0,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            ActionKind::Fold => write!(f, "{} FOLD", self.actor),
            ActionKind::Check => write!(f, "{} CHECK", self.actor),
            ActionKind::Call => write!(f, "{} CALL {}", self.actor, self.amount),
            ActionKind::Bet => write!(f, "{} BET {}", self.actor, self.amount),
            ActionKind::Raise => write!(f, "{} RAISE {}", self.actor, self.amount),
            ActionKind::AllIn => write!(f, "{} ALLIN {}", self.actor, self.amount),
        }
    }
}
