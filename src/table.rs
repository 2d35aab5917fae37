use ndarray::{Array2, ArrayView1};

use crate::env::DiscreteAction;
use crate::error::ConfigError;
use crate::utils::{argmax, max};

/// Dense state-action value table, zero at creation and never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Array2<f64>,
}

impl QTable {
    pub fn new(n_states: usize, n_actions: usize) -> Result<Self, ConfigError> {
        if n_states == 0 {
            return Err(ConfigError::EmptyStateSpace);
        }
        if n_actions == 0 {
            return Err(ConfigError::EmptyActionSpace);
        }
        Ok(Self {
            values: Array2::zeros((n_states, n_actions)),
        })
    }

    pub fn n_states(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_actions(&self) -> usize {
        self.values.ncols()
    }

    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.values[[state, action]]
    }

    pub fn row(&self, state: usize) -> ArrayView1<'_, f64> {
        self.values.row(state)
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn max_value(&self, state: usize) -> f64 {
        max(self.values.row(state))
    }

    /// Lowest action index among the maxima.
    pub fn greedy_action(&self, state: usize) -> usize {
        argmax(self.values.row(state))
    }

    /// True while every value of the row is still exactly zero.
    pub fn is_unexplored(&self, state: usize) -> bool {
        self.values.row(state).iter().all(|v| *v == 0.0)
    }

    /// Moves `table[state, action]` toward `target` and returns the TD error.
    pub fn update(&mut self, state: usize, action: usize, target: f64, learning_rate: f64) -> f64 {
        let predicted: f64 = self.values[[state, action]];
        let temporal_difference: f64 = target - predicted;
        self.values[[state, action]] = predicted + learning_rate * temporal_difference;
        temporal_difference
    }

    /// Column-aligned dump with the action labels as header.
    pub fn render<A: DiscreteAction>(&self) -> String {
        let header: String = A::ALL
            .iter()
            .take(self.n_actions())
            .map(|a| format!(" {:>10}", a.label()))
            .collect();
        let mut lines: Vec<String> = vec![format!("{:>5}{}", "", header)];
        for (state, row) in self.values.rows().into_iter().enumerate() {
            let cells: String = row.iter().map(|v| format!(" {:>10.6}", v)).collect();
            lines.push(format!("{:>5}{}", state, cells));
        }
        lines.join("\n") + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CorridorAction;
    use float_eq::assert_float_eq;

    #[test]
    fn starts_at_zero() {
        let table = QTable::new(6, 2).unwrap();
        assert_eq!(table.values().shape(), &[6, 2]);
        assert!(table.values().iter().all(|v| *v == 0.0));
        assert!((0..6).all(|s| table.is_unexplored(s)));
    }

    #[test]
    fn rejects_empty_spaces() {
        assert_eq!(QTable::new(0, 2), Err(ConfigError::EmptyStateSpace));
        assert_eq!(QTable::new(3, 0), Err(ConfigError::EmptyActionSpace));
    }

    #[test]
    fn update_moves_toward_target() {
        let mut table = QTable::new(2, 2).unwrap();
        let td: f64 = table.update(1, 0, 1.0, 0.1);
        assert_float_eq!(td, 1.0, abs <= 1e-12);
        assert_float_eq!(table.get(1, 0), 0.1, abs <= 1e-12);
        let td: f64 = table.update(1, 0, 1.0, 0.1);
        assert_float_eq!(td, 0.9, abs <= 1e-12);
        assert_float_eq!(table.get(1, 0), 0.19, abs <= 1e-12);
    }

    #[test]
    fn update_touches_a_single_entry() {
        let mut table = QTable::new(3, 2).unwrap();
        table.update(0, 1, 0.5, 0.5);
        table.update(2, 0, -1.0, 0.5);
        let before: Array2<f64> = table.values().clone();
        table.update(1, 1, 3.0, 0.2);
        for ((s, a), v) in table.values().indexed_iter() {
            if (s, a) == (1, 1) {
                assert_ne!(v.to_bits(), before[[s, a]].to_bits());
            } else {
                assert_eq!(v.to_bits(), before[[s, a]].to_bits());
            }
        }
    }

    #[test]
    fn greedy_breaks_ties_low() {
        let mut table = QTable::new(1, 3).unwrap();
        assert_eq!(table.greedy_action(0), 0);
        table.update(0, 1, 1.0, 1.0);
        table.update(0, 2, 1.0, 1.0);
        assert_eq!(table.greedy_action(0), 1);
        assert_float_eq!(table.max_value(0), 1.0, abs <= 1e-12);
        assert!(!table.is_unexplored(0));
    }

    #[test]
    fn renders_with_labels() {
        let mut table = QTable::new(2, 2).unwrap();
        table.update(0, 1, 0.5, 1.0);
        let text: String = table.render::<CorridorAction>();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("left") && lines[0].contains("right"));
        assert_eq!(lines[0], format!("{:>5} {:>10} {:>10}", "", "left", "right"));
        assert_eq!(lines[1], "    0   0.000000   0.500000");
        assert!(text.ends_with('\n'));
    }
}
