//! Regret-matching, the strategy table, the external-sampling trainer, and
//! the on-disk persistence format.

pub mod persistence;
pub mod regret;
pub mod table;
pub mod trainer;

pub use regret::RegretNode;
pub use table::StrategyTable;
pub use trainer::{Trainer, TrainerConfig};
