use std::process::ExitCode;
use std::time::Instant;

use structopt::StructOpt;
use tracing::{error, info};

use tabular_qlearning::action_selection::{EnumActionSelection, EpsilonGreedy, FixedAction};
use tabular_qlearning::cli::{init_tracing, TrainingArgs};
use tabular_qlearning::env::{DiscreteAction, DiscreteEnv, MazeAction, MazeEnv, MazeLayout, State};
use tabular_qlearning::error::ConfigError;
use tabular_qlearning::report::Reporter;
use tabular_qlearning::rng::SeededRandom;
use tabular_qlearning::utils::moving_average;
use tabular_qlearning::{QLearningAgent, Result};

/// Explore a 4x4 maze with two traps and a treasure
#[derive(StructOpt, Debug)]
#[structopt(name = "RLRust - Maze")]
struct Cli {
    /// Always take this action (up, down, right or left) instead of learning one
    #[structopt(long = "fixed_action")]
    fixed_action: Option<String>,

    #[structopt(flatten)]
    training: TrainingArgs,
}

// a fixed action can walk into a wall forever
const FIXED_POLICY_MAX_STEPS: u64 = 100;

fn run(cli: &Cli) -> Result<()> {
    let mut config = cli.training.to_config()?;
    let selection: EnumActionSelection = match &cli.fixed_action {
        Some(label) => {
            let action: MazeAction = MazeAction::from_label(label)
                .ok_or_else(|| ConfigError::UnknownAction(label.clone()))?;
            config.max_steps_per_episode = config
                .max_steps_per_episode
                .or(Some(FIXED_POLICY_MAX_STEPS));
            FixedAction::new(action).into()
        }
        None => EpsilonGreedy::new(config.epsilon).into(),
    };

    let mut env = MazeEnv::new(MazeLayout::default())?;
    let layout: MazeLayout = env.layout().clone();
    let mut reporter: Box<dyn Reporter> = cli
        .training
        .reporter(Box::new(move |state: State| MazeEnv::draw(&layout, state)))?;
    let rng = Box::new(SeededRandom::new(config.seed));
    let mut agent: QLearningAgent<MazeAction> =
        QLearningAgent::new(config, env.n_states(), selection, rng)?;

    let now: Instant = Instant::now();
    let results = agent.train(&mut env, reporter.as_mut())?;
    info!("Time elapsed: {:.2?}", now.elapsed());

    let lengths: Vec<f64> = results.lengths.iter().map(|x| *x as f64).collect();
    println!(
        "\nEpisode length moving average: {:.2?}",
        moving_average(cli.training.moving_average_window, &lengths)
    );
    println!("Episode rewards: {:?}", results.rewards);
    println!("\nQ-table:\n");
    print!("{}", agent.table().render::<MazeAction>());
    Ok(())
}

fn main() -> ExitCode {
    let cli: Cli = Cli::from_args();
    init_tracing(cli.training.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
