pub mod action_selection;
pub mod agent;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod report;
pub mod rng;
pub mod table;
pub mod utils;

pub use agent::{AgentPhase, QLearningAgent, TrainResults, Transition};
pub use config::AgentConfig;
pub use error::{Error, Result};
pub use table::QTable;
