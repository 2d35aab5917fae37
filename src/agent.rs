use std::marker::PhantomData;

use tracing::{debug, info, trace};

use crate::action_selection::{ActionSelection, EnumActionSelection, EpsilonGreedy};
use crate::config::AgentConfig;
use crate::env::{DiscreteAction, DiscreteEnv, State};
use crate::error::{ConfigError, Error, Result};
use crate::report::Reporter;
use crate::rng::{RandomSource, SeededRandom};
use crate::table::QTable;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AgentPhase {
    Idle,
    EpisodeRunning,
    EpisodeDone,
    Finished,
}

/// One observed environment step, consumed by [`QLearningAgent::update`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition<A> {
    pub state: usize,
    pub action: A,
    pub reward: f64,
    pub next_state: State,
    pub done: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainResults {
    pub rewards: Vec<f64>,
    pub lengths: Vec<u64>,
    pub errors: Vec<f64>,
}

pub struct QLearningAgent<A: DiscreteAction> {
    config: AgentConfig,
    table: QTable,
    action_selection: EnumActionSelection,
    rng: Box<dyn RandomSource>,
    phase: AgentPhase,
    _action: PhantomData<A>,
}

impl<A: DiscreteAction> QLearningAgent<A> {
    pub fn new(
        config: AgentConfig,
        n_states: usize,
        action_selection: EnumActionSelection,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self> {
        config.validate()?;
        let table: QTable = QTable::new(n_states, A::ALL.len())?;
        action_selection.check_action_space(A::ALL.len())?;
        Ok(Self {
            config,
            table,
            action_selection,
            rng,
            phase: AgentPhase::Idle,
            _action: PhantomData,
        })
    }

    /// Epsilon-greedy agent drawing from a generator seeded with `config.seed`.
    pub fn epsilon_greedy(config: AgentConfig, n_states: usize) -> Result<Self> {
        let selection: EnumActionSelection = EpsilonGreedy::new(config.epsilon).into();
        let rng: Box<dyn RandomSource> = Box::new(SeededRandom::new(config.seed));
        Self::new(config, n_states, selection, rng)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn into_table(self) -> QTable {
        self.table
    }

    fn check_row(&self, index: usize) -> Result<usize> {
        if index < self.table.n_states() {
            Ok(index)
        } else {
            Err(Error::StateOutOfRange {
                index,
                n_states: self.table.n_states(),
            })
        }
    }

    pub fn get_action(&mut self, state: usize) -> Result<A> {
        let row: usize = self.check_row(state)?;
        let index: usize = self
            .action_selection
            .get_action(self.table.row(row), self.rng.as_mut());
        A::from_index(index).ok_or_else(|| ConfigError::UnknownAction(index.to_string()).into())
    }

    /// Applies the one-step Q-learning rule and returns the TD error.
    ///
    /// The transition is checked against the table first; a rejected
    /// transition leaves every entry untouched.
    pub fn update(&mut self, transition: &Transition<A>) -> Result<f64> {
        let state: usize = self.check_row(transition.state)?;
        let target: f64 = match (transition.next_state, transition.done) {
            (State::Terminal, true) => transition.reward,
            (State::Index(next), false) => {
                let next: usize = self.check_row(next)?;
                transition.reward + self.config.discount_factor * self.table.max_value(next)
            }
            (next_state, done) => {
                return Err(Error::TerminalMismatch {
                    terminal: next_state.is_terminal(),
                    done,
                })
            }
        };
        Ok(self.table.update(
            state,
            transition.action.index(),
            target,
            self.config.learning_rate,
        ))
    }

    /// Runs `config.n_episodes` episodes against `env`.
    pub fn train(
        &mut self,
        env: &mut dyn DiscreteEnv<A>,
        reporter: &mut dyn Reporter,
    ) -> Result<TrainResults> {
        if self.phase != AgentPhase::Idle {
            return Err(Error::AlreadyTrained);
        }
        let mut results: TrainResults = TrainResults::default();

        for episode in 0..self.config.n_episodes {
            self.phase = AgentPhase::EpisodeRunning;
            let mut step_counter: u64 = 0;
            let mut epi_reward: f64 = 0.0;
            let start: State = env.reset();
            let mut curr_obs: usize = match start {
                State::Index(index) => self.check_row(index)?,
                State::Terminal => return Err(Error::NonIndexStart),
            };
            reporter.on_episode_start(episode, start);

            let last_obs: State = loop {
                let curr_action: A = self.get_action(curr_obs)?;
                let (next_obs, reward, done) = env.step(curr_action)?;
                let td: f64 = self.update(&Transition {
                    state: curr_obs,
                    action: curr_action,
                    reward,
                    next_state: next_obs,
                    done,
                })?;
                results.errors.push(td);
                step_counter += 1;
                epi_reward += reward;
                trace!(episode, step = step_counter, ?curr_action, ?next_obs, reward, td);
                reporter.on_step(episode, step_counter, next_obs);

                let State::Index(next) = next_obs else {
                    break next_obs;
                };
                curr_obs = next;
                if let Some(max_steps) = self.config.max_steps_per_episode {
                    if step_counter >= max_steps {
                        debug!(episode, max_steps, "episode truncated");
                        break next_obs;
                    }
                }
            };

            reporter.on_episode_end(episode, step_counter, last_obs);
            debug!(episode, steps = step_counter, reward = epi_reward, "episode finished");
            results.rewards.push(epi_reward);
            results.lengths.push(step_counter);
            self.phase = AgentPhase::EpisodeDone;
        }

        self.phase = AgentPhase::Finished;
        info!(
            episodes = self.config.n_episodes,
            steps = results.errors.len(),
            "training finished"
        );
        Ok(results)
    }
}
