mod corridor;
mod maze;

use std::fmt::Debug;

pub use crate::error::EnvError;
pub use corridor::{CorridorAction, CorridorEnv};
pub use maze::{MazeAction, MazeEnv, MazeLayout};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum State {
    Index(usize),
    Terminal,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Terminal)
    }
}

pub trait DiscreteAction: Copy + Debug + Eq + 'static {
    /// Every action, in table column order.
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn label(self) -> &'static str;

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.label().eq_ignore_ascii_case(label))
    }
}

pub trait DiscreteEnv<A: DiscreteAction> {
    fn n_states(&self) -> usize;
    fn reset(&mut self) -> State;
    fn step(&mut self, action: A) -> Result<(State, f64, bool), EnvError>;
}
