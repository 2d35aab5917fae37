mod common;

use common::{classic_config, RecordingEnv};
use rstest::rstest;
use tabular_qlearning::action_selection::FixedAction;
use tabular_qlearning::env::{DiscreteAction, DiscreteEnv, MazeAction, MazeEnv, MazeLayout, State};
use tabular_qlearning::report::{ConsoleReporter, NullReporter};
use tabular_qlearning::rng::SeededRandom;
use tabular_qlearning::{AgentConfig, QLearningAgent, QTable, TrainResults};

fn train_maze(config: AgentConfig) -> (QTable, TrainResults) {
    let mut env = MazeEnv::new(MazeLayout::default()).unwrap();
    let n_states: usize = env.n_states();
    let mut agent: QLearningAgent<MazeAction> =
        QLearningAgent::epsilon_greedy(config, n_states).unwrap();
    let results = agent.train(&mut env, &mut NullReporter).unwrap();
    (agent.into_table(), results)
}

#[test]
fn fixed_down_policy_runs_into_the_cap() {
    let mut env = RecordingEnv::new(MazeEnv::new(MazeLayout::default()).unwrap());
    let config = AgentConfig {
        max_steps_per_episode: Some(100),
        ..classic_config(10, 2)
    };
    let mut agent: QLearningAgent<MazeAction> = QLearningAgent::new(
        config,
        16,
        FixedAction::new(MazeAction::Down).into(),
        Box::new(SeededRandom::new(2)),
    )
    .unwrap();
    let results = agent.train(&mut env, &mut NullReporter).unwrap();
    assert_eq!(results.lengths, vec![100; 10]);
    assert_eq!(results.rewards, vec![0.0; 10]);
    assert!(env.actions.iter().all(|a| *a == MazeAction::Down.index()));
    assert!(agent.table().values().iter().all(|v| *v == 0.0));
}

#[rstest]
#[case(2)]
#[case(17)]
fn every_episode_ends_in_a_trap_or_the_treasure(#[case] seed: u64) {
    let (table, results) = train_maze(classic_config(200, seed));
    assert_eq!(results.rewards.len(), 200);
    assert!(results.rewards.iter().all(|r| *r == 1.0 || *r == -1.0));
    assert!(table.values().iter().all(|v| (-1.0..=1.0).contains(v)));
}

#[test]
fn trained_greedy_walk_finds_the_treasure() {
    let (table, _) = train_maze(classic_config(500, 2));
    let mut env = MazeEnv::new(MazeLayout::default()).unwrap();
    let mut state: State = env.reset();
    let mut reward: f64 = 0.0;
    for _ in 0..20 {
        let State::Index(index) = state else {
            break;
        };
        let action = MazeAction::from_index(table.greedy_action(index)).unwrap();
        let (next, r, _) = env.step(action).unwrap();
        state = next;
        reward = r;
    }
    assert_eq!(state, State::Terminal);
    assert_eq!(reward, 1.0);
}

#[test]
fn console_reporter_stacks_maze_frames() {
    let layout: MazeLayout = MazeLayout::default();
    let mut env = MazeEnv::new(layout.clone()).unwrap();
    let config = AgentConfig {
        max_steps_per_episode: Some(2),
        ..classic_config(1, 2)
    };
    let mut agent: QLearningAgent<MazeAction> = QLearningAgent::new(
        config,
        16,
        FixedAction::new(MazeAction::Right).into(),
        Box::new(SeededRandom::new(2)),
    )
    .unwrap();
    let mut reporter = ConsoleReporter::new(
        Vec::new(),
        Box::new(move |state: State| MazeEnv::draw(&layout, state)),
    );
    agent.train(&mut env, &mut reporter).unwrap();
    let text: String = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        text,
        concat!(
            "o...\n..#.\n.#$.\n....\n\n",
            ".o..\n..#.\n.#$.\n....\n\n",
            "..o.\n..#.\n.#$.\n....\n\n",
            "\rEpisode 1: total steps = 2\n"
        )
    );
}
