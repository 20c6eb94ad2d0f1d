//! The extensive-form game model: players, actions, the public/private state
//! machine, and the abstraction layer that turns a state into an
//! information-set key.

pub mod abstraction;
pub mod action;
pub mod player;
pub mod state;

/// Chip counts. `u32` rather than the smaller width a fixed two-handed table
/// could get away with: stacks up to 200 big blinds on a six-max table with
/// uncapped raises can exceed `u16` headroom well before any real hand ends.
pub type Chips = u32;

pub use action::{Action, ActionKind};
pub use player::Player;
pub use state::{GameState, Kind};
