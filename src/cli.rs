use std::io;
use std::time::Duration;

use structopt::StructOpt;
use tracing::Level;

use crate::config::AgentConfig;
use crate::env::State;
use crate::error::ConfigError;
use crate::report::{ConsoleReporter, ProgressReporter, Reporter};

/// Training parameters shared by the demo binaries
#[derive(StructOpt, Debug, Clone)]
pub struct TrainingArgs {
    /// Number of episodes for the training
    #[structopt(long = "n_episodes", short = "n", default_value = "13")]
    pub n_episodes: u64,

    /// Probability of following the table on an explored state
    #[structopt(long = "epsilon", default_value = "0.9")]
    pub epsilon: f64,

    /// Learning rate of the RL agent
    #[structopt(long = "learning_rate", default_value = "0.1")]
    pub learning_rate: f64,

    /// Discount factor to be used on the temporal difference calculation
    #[structopt(long = "discount_factor", default_value = "0.9")]
    pub discount_factor: f64,

    /// Seed of the random number generator
    #[structopt(long = "seed", default_value = "2")]
    pub seed: u64,

    /// Maximum number of steps per episode, unlimited if absent
    #[structopt(long = "max_steps")]
    pub max_steps: Option<u64>,

    /// Seconds to wait after drawing each step
    #[structopt(long = "fresh_time", default_value = "0.3")]
    pub fresh_time: f64,

    /// Seconds to wait after each episode summary
    #[structopt(long = "episode_pause", default_value = "2.0")]
    pub episode_pause: f64,

    /// Show a progress bar instead of drawing every step
    #[structopt(long = "progress")]
    pub progress: bool,

    /// Log every finished episode
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,

    /// Moving average window to be used on the episode length summary
    #[structopt(long = "moving_average_window", default_value = "5")]
    pub moving_average_window: usize,
}

fn seconds(name: &'static str, value: f64) -> Result<Duration, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name, value });
    }
    Duration::try_from_secs_f64(value).map_err(|_| ConfigError::OutOfRange {
        name,
        value,
        expected: "[0, inf)",
    })
}

impl TrainingArgs {
    pub fn to_config(&self) -> Result<AgentConfig, ConfigError> {
        let config: AgentConfig = AgentConfig {
            epsilon: self.epsilon,
            learning_rate: self.learning_rate,
            discount_factor: self.discount_factor,
            n_episodes: self.n_episodes,
            seed: self.seed,
            max_steps_per_episode: self.max_steps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Progress bar with `--progress`, stdout frames drawn by `draw` otherwise.
    pub fn reporter(
        &self,
        draw: Box<dyn Fn(State) -> String>,
    ) -> Result<Box<dyn Reporter>, ConfigError> {
        if self.progress {
            return Ok(Box::new(ProgressReporter::new(self.n_episodes)));
        }
        let fresh_time: Duration = seconds("fresh_time", self.fresh_time)?;
        let episode_pause: Duration = seconds("episode_pause", self.episode_pause)?;
        Ok(Box::new(
            ConsoleReporter::new(io::stdout(), draw).with_pacing(fresh_time, episode_pause),
        ))
    }
}

pub fn init_tracing(verbose: bool) {
    let level: Level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
