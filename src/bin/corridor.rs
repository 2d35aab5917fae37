use std::process::ExitCode;
use std::time::Instant;

use structopt::StructOpt;
use tracing::{error, info};

use tabular_qlearning::cli::{init_tracing, TrainingArgs};
use tabular_qlearning::env::{CorridorAction, CorridorEnv, DiscreteEnv, State};
use tabular_qlearning::report::Reporter;
use tabular_qlearning::utils::moving_average;
use tabular_qlearning::{QLearningAgent, Result};

/// Train a tabular Q-learning agent to walk right along a corridor
#[derive(StructOpt, Debug)]
#[structopt(name = "RLRust - Corridor")]
struct Cli {
    /// Number of states of the corridor, the last one holds the treasure
    #[structopt(long = "n_states", default_value = "6")]
    n_states: usize,

    #[structopt(flatten)]
    training: TrainingArgs,
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.training.to_config()?;
    let mut env = CorridorEnv::new(cli.n_states)?;
    let n_states: usize = env.n_states();
    let mut reporter: Box<dyn Reporter> = cli
        .training
        .reporter(Box::new(move |state: State| CorridorEnv::draw(n_states, state)))?;
    let mut agent: QLearningAgent<CorridorAction> =
        QLearningAgent::epsilon_greedy(config, n_states)?;

    let now: Instant = Instant::now();
    let results = agent.train(&mut env, reporter.as_mut())?;
    info!("Time elapsed: {:.2?}", now.elapsed());

    let lengths: Vec<f64> = results.lengths.iter().map(|x| *x as f64).collect();
    println!(
        "\nEpisode length moving average: {:.2?}",
        moving_average(cli.training.moving_average_window, &lengths)
    );
    println!("\nQ-table:\n");
    print!("{}", agent.table().render::<CorridorAction>());
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
