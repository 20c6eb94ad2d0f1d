//! Query-time use of a trained table: given a live state, recommend a
//! randomized action (§4.9).

use crate::gameplay::state::GameState;
use crate::gameplay::Action;
use crate::mccfr::StrategyTable;
use rand::Rng;

/// A recommendation: the legal actions in enumeration order, the
/// probability the trained strategy assigns to each, and the one sampled.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub actions: Vec<Action>,
    pub probabilities: Vec<f64>,
    pub sampled: Action,
}

/// Build the info-set key for the current acting player, look up the
/// average strategy (uniform over the live legal actions if the key was
/// never visited during training), and sample from it. The caller is free
/// to ignore `sampled` and take the argmax of `probabilities` instead.
pub fn advise(state: &GameState, table: &StrategyTable, rng: &mut impl Rng) -> Recommendation {
    let actions = state.legal_actions();
    let key = state.infoset_key();
    let probabilities = table
        .average_strategy(&key)
        .filter(|p| p.len() == actions.len())
        .unwrap_or_else(|| vec![1.0 / actions.len() as f64; actions.len()]);

    let i = sample(&probabilities, rng);
    Recommendation {
        sampled: actions[i],
        actions,
        probabilities,
    }
}

fn sample(weights: &[f64], rng: &mut impl Rng) -> usize {
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
