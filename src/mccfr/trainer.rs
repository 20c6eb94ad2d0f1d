use super::table::StrategyTable;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::gameplay::state::{GameState, Kind, MAX_PLAYERS};
use crate::gameplay::Chips;
use rand::seq::SliceRandom;
use rand::Rng;

/// Table configuration sampled fresh at the top of every iteration (§4.8).
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub player_counts: Vec<usize>,
    pub stack_buckets_bb: Vec<Chips>,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Safety net only; a correct implementation never hits it (§4.8, §9).
    pub depth_cap: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            player_counts: (2..=6).collect(),
            stack_buckets_bb: vec![10, 25, 50, 100, 200],
            small_blind: 1,
            big_blind: 2,
            depth_cap: 200,
        }
    }
}

/// The 52-card shoe as a fixed-capacity array rather than `Deck`'s `Vec`:
/// every traverser-owned decision forks the recursion by copying the whole
/// state, and a shoe the trainer threads alongside it needs the same cheap,
/// allocation-free `Copy` (§9).
#[derive(Debug, Clone, Copy)]
struct Shoe {
    cards: [Card; 52],
    len: u8,
}

impl Shoe {
    fn new(rng: &mut impl Rng) -> Self {
        let mut cards = [Card::from(0u8); 52];
        for (n, slot) in cards.iter_mut().enumerate() {
            *slot = Card::from(n as u8);
        }
        cards.shuffle(rng);
        Self { cards, len: 52 }
    }

    fn draw(&mut self, n: usize) -> Vec<Card> {
        assert!(self.len as usize >= n, "shoe exhausted");
        let start = self.len as usize - n;
        let dealt = self.cards[start..self.len as usize].to_vec();
        self.len -= n as u8;
        dealt
    }
}

/// Drives external-sampling MCCFR iterations against a single shared
/// strategy table.
pub struct Trainer {
    table: StrategyTable,
    config: TrainerConfig,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self {
            table: StrategyTable::new(),
            config,
        }
    }

    /// Resume training against a table restored from persistence. Its
    /// regret vectors are already zeroed (§3, §6); this just adopts it.
    pub fn from_table(table: StrategyTable, config: TrainerConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &StrategyTable {
        &self.table
    }

    pub fn into_table(self) -> StrategyTable {
        self.table
    }

    pub fn run(&mut self, iterations: usize, rng: &mut impl Rng) {
        for _ in 0..iterations {
            self.iterate(rng);
        }
    }

    fn iterate(&mut self, rng: &mut impl Rng) {
        let n_players = *self
            .config
            .player_counts
            .get(rng.random_range(0..self.config.player_counts.len()))
            .expect("non-empty player_counts");
        let stack_bb = *self
            .config
            .stack_buckets_bb
            .get(rng.random_range(0..self.config.stack_buckets_bb.len()))
            .expect("non-empty stack_buckets_bb");
        let stack = stack_bb * self.config.big_blind;
        let dealer = rng.random_range(0..n_players);
        let mut stacks = [0 as Chips; MAX_PLAYERS];
        for s in stacks.iter_mut().take(n_players) {
            *s = stack;
        }

        // Each traverser in this iteration sees its own independent deal
        // (§4.8): a fresh shoe is shuffled straight off the shared RNG
        // stream for every `t`, rather than reusing one shoe across seats.
        for t in 0..n_players {
            let mut shoe = Shoe::new(rng);
            let mut state = GameState::new_hand(
                n_players,
                dealer,
                self.config.small_blind,
                self.config.big_blind,
                stacks,
            );
            for seat in 0..n_players {
                let pair = shoe.draw(2);
                state.deal_hole(seat, Hole::new(pair[0], pair[1]));
            }
            let mut reach = [1.0f64; MAX_PLAYERS];
            self.cfr(state, t, &mut reach, shoe, 0, rng);
        }
    }

    /// `shoe` is taken by value, not `&mut`: it's `Copy` so that every
    /// branch below a decision node forks its own deck the same way it
    /// forks `state`, rather than all siblings draining one shared deck
    /// across the whole subtree.
    fn cfr(
        &mut self,
        state: GameState,
        traverser: usize,
        reach: &mut [f64; MAX_PLAYERS],
        mut shoe: Shoe,
        depth: usize,
        rng: &mut impl Rng,
    ) -> f64 {
        if depth >= self.config.depth_cap {
            return state.payoff(traverser);
        }

        match state.kind() {
            Kind::Terminal => state.payoff(traverser),
            Kind::Chance => {
                let n = state.cards_to_deal();
                let dealt = shoe.draw(n);
                let mut next = state;
                next.advance_street(&dealt);
                self.cfr(next, traverser, reach, shoe, depth + 1, rng)
            }
            Kind::Play => self.cfr_decision(state, traverser, reach, shoe, depth, rng),
        }
    }

    fn cfr_decision(
        &mut self,
        state: GameState,
        traverser: usize,
        reach: &mut [f64; MAX_PLAYERS],
        shoe: Shoe,
        depth: usize,
        rng: &mut impl Rng,
    ) -> f64 {
        let actor = state.acting_seat();
        let actions = state.legal_actions();
        if actions.is_empty() {
            // §7: empty legal-action set at a non-terminal node is treated
            // as terminal with zero differential payoff for the traverser.
            return 0.0;
        }
        let key = state.infoset_key();
        let arity = actions.len();

        let sigma = match self.table.get_or_create(&key, arity) {
            Some(node) => node.current_strategy(reach[actor]),
            None => return 0.0,
        };

        if actor != traverser {
            let i = sample_index(&sigma, rng);
            let mut next = state;
            next.apply(actions[i]);
            let saved = reach[actor];
            reach[actor] *= sigma[i];
            let u = self.cfr(next, traverser, reach, shoe, depth + 1, rng);
            reach[actor] = saved;
            return u;
        }

        let saved = reach[traverser];
        let mut utilities = vec![0.0f64; arity];
        for (i, &action) in actions.iter().enumerate() {
            let mut next = state;
            next.apply(action);
            reach[traverser] = saved * sigma[i];
            utilities[i] = self.cfr(next, traverser, reach, shoe, depth + 1, rng);
        }
        reach[traverser] = saved;

        let u_hat: f64 = sigma.iter().zip(&utilities).map(|(s, u)| s * u).sum();
        let cf_weight: f64 = (0..state.n_players())
            .filter(|&s| s != traverser)
            .map(|s| reach[s])
            .product();

        if let Some(node) = self.table.get_or_create(&key, arity) {
            for (i, &u) in utilities.iter().enumerate() {
                node.update_regret(i, cf_weight * (u - u_hat));
            }
        }
        u_hat
    }
}

/// Sample an index proportional to `weights` (need not be pre-normalized).
fn sample_index(weights: &[f64], rng: &mut impl Rng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }
    let mut x = rng.random::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        if x < w {
            return i;
        }
        x -= w;
    }
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn training_runs_without_panicking_and_builds_a_table() {
        let mut trainer = Trainer::new(TrainerConfig {
            player_counts: vec![2],
            stack_buckets_bb: vec![10],
            small_blind: 1,
            big_blind: 2,
            depth_cap: 200,
        });
        let mut rng = SmallRng::seed_from_u64(42);
        trainer.run(25, &mut rng);
        assert!(!trainer.table().is_empty());
    }

    #[test]
    fn sample_index_prefers_heavier_weight() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut counts = [0u32; 2];
        for _ in 0..2000 {
            counts[sample_index(&[0.9, 0.1], &mut rng)] += 1;
        }
        assert!(counts[0] > counts[1]);
    }
}
