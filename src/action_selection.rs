mod epsilon_greedy;
mod fixed_action;

use enum_dispatch::enum_dispatch;
use ndarray::ArrayView1;

use crate::error::ConfigError;
use crate::rng::RandomSource;

pub use epsilon_greedy::EpsilonGreedy;
pub use fixed_action::FixedAction;

#[enum_dispatch]
pub trait ActionSelection {
    /// Picks an action index for a state whose values are `values`.
    fn get_action(&mut self, values: ArrayView1<f64>, rng: &mut dyn RandomSource) -> usize;

    /// Rejects a strategy that could answer outside `0..n_actions`.
    fn check_action_space(&self, _n_actions: usize) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
#[enum_dispatch(ActionSelection)]
pub enum EnumActionSelection {
    EpsilonGreedy(EpsilonGreedy),
    FixedAction(FixedAction),
}
