use crate::error::ConfigError;

/// Scalar parameters of one Q-learning run.
///
/// `epsilon` is the probability of acting greedily: a uniform draw above it
/// triggers a random action.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub epsilon: f64,
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub n_episodes: u64,
    pub seed: u64,
    pub max_steps_per_episode: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.9,
            learning_rate: 0.1,
            discount_factor: 0.9,
            n_episodes: 13,
            seed: 2,
            max_steps_per_episode: None,
        }
    }
}

fn check_range(
    name: &'static str,
    value: f64,
    expected: &'static str,
    in_range: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name, value });
    }
    if !in_range(value) {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            expected,
        });
    }
    Ok(())
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("epsilon", self.epsilon, "[0, 1]", |v| (0.0..=1.0).contains(&v))?;
        check_range("learning_rate", self.learning_rate, "(0, 1]", |v| {
            v > 0.0 && v <= 1.0
        })?;
        check_range("discount_factor", self.discount_factor, "[0, 1)", |v| {
            (0.0..1.0).contains(&v)
        })?;
        if self.max_steps_per_episode == Some(0) {
            return Err(ConfigError::ZeroStepCap);
        }
        Ok(())
    }
}
