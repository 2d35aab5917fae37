use thiserror::Error;

/// Rejected run parameters, caught before any episode starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be in {expected}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("the action space is empty")]
    EmptyActionSpace,

    #[error("the state space is empty")]
    EmptyStateSpace,

    #[error("max_steps_per_episode must be at least 1")]
    ZeroStepCap,

    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment is not ready to receive actions, call reset first")]
    NotReady,

    #[error("invalid environment layout: {0}")]
    InvalidLayout(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("environment returned state {index}, outside of the table's 0..{n_states} rows")]
    StateOutOfRange { index: usize, n_states: usize },

    #[error("environment returned terminal={terminal} together with done={done}")]
    TerminalMismatch { terminal: bool, done: bool },

    #[error("environment reset to the terminal state")]
    NonIndexStart,

    #[error("agent already finished its run")]
    AlreadyTrained,
}

pub type Result<T> = std::result::Result<T, Error>;
