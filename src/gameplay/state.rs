use super::abstraction;
use super::action::{Action, ActionKind};
use super::player::Player;
use super::Chips;
use crate::cards::board::Board;
use crate::cards::bucket;
use crate::cards::card::Card;
use crate::cards::evaluator;
use crate::cards::hole::Hole;
use crate::cards::street::Street;

pub const MAX_PLAYERS: usize = 6;
const MAX_HISTORY: usize = 32;
const RAISE_FRACTIONS: [f64; 4] = [0.33, 0.66, 1.00, 2.00];

/// What the trainer should do with this state next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Chance,
    Play,
    Terminal,
}

/// A single hand of play, from a dense fixed-capacity player array (no
/// player-count Vec) and a fixed 5-slot board, so cloning a state to explore
/// a sibling action is a plain `memcpy` rather than a heap allocation.
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    players: [Player; MAX_PLAYERS],
    n_players: usize,
    dealer: usize,
    small_blind: Chips,
    big_blind: Chips,
    street: Street,
    board: Board,
    pot: Chips,
    highest_bet: Chips,
    acting: usize,
    history: [(Action, Chips); MAX_HISTORY],
    history_len: usize,
}

impl GameState {
    /// Start a new hand: seat `n_players` players with the given stacks,
    /// post blinds at `(dealer+1) % n` / `(dealer+2) % n`, and position
    /// action on the first seat after the big blind. Hole cards are dealt
    /// separately by the caller (the trainer deals from a shared deck).
    pub fn new_hand(
        n_players: usize,
        dealer: usize,
        small_blind: Chips,
        big_blind: Chips,
        stacks: [Chips; MAX_PLAYERS],
    ) -> Self {
        assert!((2..=MAX_PLAYERS).contains(&n_players), "unsupported table size");
        let placeholder = Action::new(0, ActionKind::Fold, 0, 0);
        let mut players = [Player::new(0, 0); MAX_PLAYERS];
        for (seat, player) in players.iter_mut().enumerate().take(n_players) {
            *player = Player::new(seat, stacks[seat]);
        }
        let mut state = Self {
            players,
            n_players,
            dealer,
            small_blind,
            big_blind,
            street: Street::Preflop,
            board: Board::empty(),
            pot: 0,
            highest_bet: 0,
            acting: 0,
            history: [(placeholder, 0); MAX_HISTORY],
            history_len: 0,
        };
        let sb_seat = (dealer + 1) % n_players;
        let bb_seat = (dealer + 2) % n_players;
        state.players[sb_seat].commit(small_blind);
        state.players[bb_seat].commit(big_blind);
        state.pot = small_blind + big_blind;
        state.highest_bet = big_blind;
        state.acting = (dealer + 3) % n_players;
        state
    }

    pub fn deal_hole(&mut self, seat: usize, hole: Hole) {
        self.players[seat].set_hole(hole);
    }

    pub fn n_players(&self) -> usize {
        self.n_players
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn highest_bet(&self) -> Chips {
        self.highest_bet
    }
    pub fn acting_seat(&self) -> usize {
        self.acting
    }
    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }
    pub fn players(&self) -> &[Player] {
        &self.players[..self.n_players]
    }
    pub fn big_blind_amount(&self) -> Chips {
        self.big_blind
    }

    fn non_folded_count(&self) -> usize {
        self.players().iter().filter(|p| !p.is_folded()).count()
    }

    /// Every still-deciding player (not folded, not all-in) has acted this
    /// street and matches the highest bet. Vacuously true once no one is
    /// still deciding -- an all-in player never blocks round completion,
    /// even if they never got to act (e.g. posted the big blind all-in).
    fn round_complete(&self) -> bool {
        self.players()
            .iter()
            .filter(|p| p.is_active())
            .all(|p| p.has_acted_this_street() && p.current_bet() == self.highest_bet)
    }

    pub fn kind(&self) -> Kind {
        if self.non_folded_count() <= 1 {
            return Kind::Terminal;
        }
        if self.street == Street::River && self.round_complete() {
            return Kind::Terminal;
        }
        if self.round_complete() {
            return Kind::Chance;
        }
        Kind::Play
    }

    /// The amount-to-call for the acting player.
    fn to_call(&self) -> Chips {
        self.highest_bet
            .saturating_sub(self.players[self.acting].current_bet())
    }

    /// Legal actions for the current acting player, in a fixed deterministic
    /// order: fold, then check-or-call, then ascending bet/raise sizes, then
    /// all-in (§4.5). Pure function of the state.
    pub fn legal_actions(&self) -> Vec<Action> {
        let p = &self.players[self.acting];
        let c = self.to_call();
        let pre = p.current_bet();
        let mut actions = vec![Action::new(self.acting, ActionKind::Fold, 0, pre)];

        if c == 0 {
            actions.push(Action::new(self.acting, ActionKind::Check, 0, pre));
            let base = self.pot.max(self.big_blind);
            let mut last_total = pre;
            for frac in RAISE_FRACTIONS {
                let added = (frac * base as f64).round() as Chips;
                let total = pre + added;
                if added == 0 || added > p.stack() || total == last_total {
                    continue;
                }
                actions.push(Action::new(self.acting, ActionKind::Bet, total, pre));
                last_total = total;
            }
            if p.stack() > 0 {
                actions.push(Action::new(self.acting, ActionKind::AllIn, p.stack(), pre));
            }
        } else {
            let call_amount = c.min(p.stack());
            actions.push(Action::new(self.acting, ActionKind::Call, call_amount, pre));
            if p.stack() > c {
                let base = self.pot + c;
                let mut last_total = self.highest_bet;
                for frac in RAISE_FRACTIONS {
                    let total = self.highest_bet + (frac * base as f64).round() as Chips;
                    let added = total.saturating_sub(pre);
                    if total <= self.highest_bet || added > p.stack() || total == last_total {
                        continue;
                    }
                    actions.push(Action::new(self.acting, ActionKind::Raise, total, pre));
                    last_total = total;
                }
                actions.push(Action::new(self.acting, ActionKind::AllIn, p.stack(), pre));
            }
        }
        actions
    }

    /// Apply an action taken by the current acting seat: commit chips,
    /// record history, fold if applicable, then advance to the next active
    /// seat (the caller re-checks `kind()` afterward).
    pub fn apply(&mut self, action: Action) {
        assert_eq!(action.actor, self.acting, "action must come from the acting seat");
        let pot_before = self.pot;
        match action.kind {
            ActionKind::Fold => self.players[self.acting].fold(),
            ActionKind::Check => {}
            ActionKind::Call | ActionKind::AllIn | ActionKind::Bet | ActionKind::Raise => {
                let added = action.added();
                self.pot += added;
                self.players[self.acting].commit(added);
                self.highest_bet = self.highest_bet.max(self.players[self.acting].current_bet());
            }
        }
        self.players[self.acting].mark_acted();
        self.push_history(action, pot_before);

        if self.kind() == Kind::Play {
            self.advance_acting_seat();
        }
    }

    fn push_history(&mut self, action: Action, pot_before: Chips) {
        if self.history_len < MAX_HISTORY {
            self.history[self.history_len] = (action, pot_before);
            self.history_len += 1;
        }
        // Past the cap, further actions simply aren't recorded in the
        // abstraction history; realistic no-limit betting never gets close.
    }

    fn advance_acting_seat(&mut self) {
        let n = self.n_players;
        let mut next = (self.acting + 1) % n;
        while !self.players[next].is_active() && next != self.acting {
            next = (next + 1) % n;
        }
        self.acting = next;
    }

    /// Deal the community cards for the next street, reset per-street player
    /// state, and position action on the first active seat clockwise from
    /// the dealer. Driven externally by the trainer's chance-node handling.
    pub fn advance_street(&mut self, dealt: &[Card]) {
        self.board.extend(dealt);
        self.street = self.street.next();
        for p in self.players.iter_mut().take(self.n_players) {
            p.reset_for_new_street();
        }
        self.highest_bet = 0;
        let mut seat = (self.dealer + 1) % self.n_players;
        while !self.players[seat].is_active() {
            seat = (seat + 1) % self.n_players;
            if seat == (self.dealer + 1) % self.n_players {
                break;
            }
        }
        self.acting = seat;
    }

    pub fn cards_to_deal(&self) -> usize {
        self.street.next().n_revealed()
    }

    /// Information-set key for the current acting player: bucket from their
    /// own hole cards, street, relative-seat action history, legal-action
    /// arity (§4.4).
    pub fn infoset_key(&self) -> String {
        let p = &self.players[self.acting];
        let hole_cards: Vec<Card> = p.hole().cards().map(|c| c.to_vec()).unwrap_or_default();
        let b = bucket::bucket(&hole_cards, self.board.cards(), self.street);
        let history = abstraction::encode_history(
            &self.history[..self.history_len],
            self.dealer,
            self.n_players,
        );
        let arity = self.legal_actions().len();
        format!("{}|{}|{}|{}", b, self.street as u8, history, arity)
    }

    /// Signed payoff for `traverser`, read off the pot and wagers as they
    /// stand right now: the single-pot simplification from §9, ties
    /// splitting the pot evenly among winners and losers (including folds)
    /// simply losing what they wagered. Called at terminal states, and also
    /// as the depth-cap fallback (§7) on a state that never reached one.
    pub fn payoff(&self, traverser: usize) -> f64 {
        let wagered = self.players[traverser].wagered() as f64;
        if self.non_folded_count() <= 1 {
            let winner = self
                .players()
                .iter()
                .find(|p| !p.is_folded())
                .expect("fold-out terminal always has exactly one survivor");
            return if winner.seat() == traverser {
                self.pot as f64 - wagered
            } else {
                -wagered
            };
        }

        let board = self.board.cards();
        let scored: Vec<(usize, u32)> = self
            .players()
            .iter()
            .filter(|p| !p.is_folded())
            .map(|p| {
                let mut cards: Vec<Card> = p.hole().cards().map(|c| c.to_vec()).unwrap_or_default();
                cards.extend_from_slice(board);
                (p.seat(), evaluator::evaluate7(&cards))
            })
            .collect();
        let best = scored.iter().map(|&(_, s)| s).max().unwrap_or(0);
        let winners: Vec<usize> = scored
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(seat, _)| seat)
            .collect();
        if winners.contains(&traverser) {
            self.pot as f64 / winners.len() as f64 - wagered
        } else {
            -wagered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn two_player_state() -> GameState {
        GameState::new_hand(2, 0, 5, 10, [1000, 1000, 0, 0, 0, 0])
    }

    #[test]
    fn s1_heads_up_preflop_fold() {
        let mut state = two_player_state();
        assert_eq!(state.acting_seat(), 1);
        assert_eq!(state.pot(), 15);
        let actions = state.legal_actions();
        assert_eq!(actions[0].kind, ActionKind::Fold);
        assert!(actions.iter().any(|a| a.kind == ActionKind::Call && a.amount == 5));
        assert!(actions.iter().any(|a| a.kind == ActionKind::AllIn && a.amount == 995));

        state.apply(actions[0]);
        assert_eq!(state.kind(), Kind::Terminal);
        assert_eq!(state.payoff(0), 5.0);
        assert_eq!(state.payoff(1), -5.0);
    }

    #[test]
    fn pot_conservation_holds_after_a_call() {
        let mut state = two_player_state();
        let call = state
            .legal_actions()
            .into_iter()
            .find(|a| a.kind == ActionKind::Call)
            .unwrap();
        state.apply(call);
        let total_wagered: Chips = state.players().iter().map(|p| p.wagered()).sum();
        assert_eq!(state.pot(), total_wagered);
    }

    #[test]
    fn legal_actions_are_deterministic() {
        let state = two_player_state();
        assert_eq!(state.legal_actions(), state.legal_actions());
    }

    #[test]
    fn rotational_equivalence_of_infoset_key() {
        let mut a = GameState::new_hand(2, 0, 5, 10, [1000, 1000, 0, 0, 0, 0]);
        a.deal_hole(1, Hole::new(Card::new(Rank::Ace, Suit::Spade), Card::new(Rank::King, Suit::Spade)));
        let mut b = GameState::new_hand(2, 1, 5, 10, [1000, 1000, 0, 0, 0, 0]);
        b.deal_hole(0, Hole::new(Card::new(Rank::Ace, Suit::Spade), Card::new(Rank::King, Suit::Spade)));
        assert_eq!(a.acting_seat(), 1);
        assert_eq!(b.acting_seat(), 0);
        assert_eq!(a.infoset_key(), b.infoset_key());
    }
}
