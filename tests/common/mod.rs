use tabular_qlearning::env::{CorridorAction, CorridorEnv, DiscreteAction, DiscreteEnv, EnvError, State};
use tabular_qlearning::report::NullReporter;
use tabular_qlearning::{AgentConfig, QLearningAgent, QTable, TrainResults};

/// Wraps an environment and remembers every action it receives.
pub struct RecordingEnv<E> {
    pub inner: E,
    pub actions: Vec<usize>,
}

impl<E> RecordingEnv<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            actions: vec![],
        }
    }
}

impl<A: DiscreteAction, E: DiscreteEnv<A>> DiscreteEnv<A> for RecordingEnv<E> {
    fn n_states(&self) -> usize {
        self.inner.n_states()
    }

    fn reset(&mut self) -> State {
        self.inner.reset()
    }

    fn step(&mut self, action: A) -> Result<(State, f64, bool), EnvError> {
        self.actions.push(action.index());
        self.inner.step(action)
    }
}

#[allow(dead_code)]
pub fn classic_config(n_episodes: u64, seed: u64) -> AgentConfig {
    AgentConfig {
        epsilon: 0.9,
        learning_rate: 0.1,
        discount_factor: 0.9,
        n_episodes,
        seed,
        max_steps_per_episode: None,
    }
}

#[allow(dead_code)]
pub fn train_corridor(
    n_states: usize,
    config: AgentConfig,
) -> (QTable, TrainResults, Vec<usize>) {
    let mut env = RecordingEnv::new(CorridorEnv::new(n_states).unwrap());
    let mut agent: QLearningAgent<CorridorAction> =
        QLearningAgent::epsilon_greedy(config, n_states).unwrap();
    let results = agent.train(&mut env, &mut NullReporter).unwrap();
    (agent.into_table(), results, env.actions)
}
