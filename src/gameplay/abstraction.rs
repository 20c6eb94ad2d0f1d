use super::action::{Action, ActionKind};
use super::Chips;

/// Stack depth, in big blinds, bucketed into five bands.
pub fn stack_bucket(stack: Chips, big_blind: Chips) -> u8 {
    let bb = stack as f64 / big_blind.max(1) as f64;
    if bb < 10.0 {
        0
    } else if bb < 25.0 {
        1
    } else if bb < 50.0 {
        2
    } else if bb < 100.0 {
        3
    } else {
        4
    }
}

/// Pot size, in big blinds, bucketed into five bands.
pub fn pot_bucket(pot: Chips, big_blind: Chips) -> u8 {
    let bb = pot as f64 / big_blind.max(1) as f64;
    if bb < 5.0 {
        0
    } else if bb < 15.0 {
        1
    } else if bb < 30.0 {
        2
    } else if bb < 60.0 {
        3
    } else {
        4
    }
}

/// Bet size as a fraction of pot, using the actor's *added* amount.
fn size_code(added: Chips, pot: Chips) -> char {
    let frac = added as f64 / (pot.max(1)) as f64;
    if frac < 0.4 {
        'S'
    } else if frac < 0.75 {
        'M'
    } else if frac < 1.5 {
        'P'
    } else if frac < 2.5 {
        'L'
    } else {
        'A'
    }
}

/// Encode the action history with relative seats so rotationally equivalent
/// hands (same play, different dealer position) collapse to the same key.
///
/// `pot_before` is the pot size immediately before each action, needed to
/// recompute the sizing bucket for bets/raises; the caller passes the
/// running pot total alongside the history.
pub fn encode_history(history: &[(Action, Chips)], dealer: usize, n_players: usize) -> String {
    if history.is_empty() {
        return "_".to_string();
    }
    let mut out = String::with_capacity(history.len() * 3);
    for (action, pot_before) in history {
        let relative = (action.actor + n_players - dealer) % n_players;
        out.push_str(&relative.to_string());
        match action.kind {
            ActionKind::Bet | ActionKind::Raise => {
                out.push('R');
                out.push(size_code(action.added(), *pot_before));
            }
            other => out.push(other.code()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::{Action, ActionKind};

    #[test]
    fn stack_buckets_match_bands() {
        assert_eq!(stack_bucket(5, 1), 0);
        assert_eq!(stack_bucket(20, 1), 1);
        assert_eq!(stack_bucket(40, 1), 2);
        assert_eq!(stack_bucket(80, 1), 3);
        assert_eq!(stack_bucket(500, 1), 4);
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert_eq!(encode_history(&[], 0, 2), "_");
    }

    #[test]
    fn rotation_shifts_relative_seat_not_code() {
        let fold = Action::new(1, ActionKind::Fold, 0, 0);
        let a = encode_history(&[(fold, 10)], 0, 2);
        let fold_rotated = Action::new(0, ActionKind::Fold, 0, 0);
        let b = encode_history(&[(fold_rotated, 10)], 1, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn raise_encodes_size_bucket() {
        let raise = Action::new(0, ActionKind::Raise, 15, 0);
        let encoded = encode_history(&[(raise, 20)], 0, 2);
        assert_eq!(encoded, "0RP");
    }
}
