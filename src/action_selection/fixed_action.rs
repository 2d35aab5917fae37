use ndarray::ArrayView1;

use crate::env::DiscreteAction;
use crate::error::ConfigError;
use crate::rng::RandomSource;

use super::ActionSelection;

/// Always the same action, whatever the table says.
#[derive(Debug, Clone)]
pub struct FixedAction {
    action: usize,
    label: &'static str,
}

impl FixedAction {
    pub fn new<A: DiscreteAction>(action: A) -> Self {
        Self {
            action: action.index(),
            label: action.label(),
        }
    }
}

impl ActionSelection for FixedAction {
    fn get_action(&mut self, _values: ArrayView1<f64>, _rng: &mut dyn RandomSource) -> usize {
        self.action
    }

    fn check_action_space(&self, n_actions: usize) -> Result<(), ConfigError> {
        if self.action < n_actions {
            Ok(())
        } else {
            Err(ConfigError::UnknownAction(self.label.to_string()))
        }
    }
}
