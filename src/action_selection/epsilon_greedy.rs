use ndarray::ArrayView1;

use crate::rng::RandomSource;
use crate::utils::argmax;

use super::ActionSelection;

/// Acts greedily when a uniform draw is at most `epsilon`, otherwise (or on a
/// row of zeros) picks uniformly among all actions.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn get_epsilon(&self) -> f64 {
        self.epsilon
    }

    fn should_explore(&self, values: &ArrayView1<f64>, rng: &mut dyn RandomSource) -> bool {
        // drawn first so the stream does not depend on the table
        let u: f64 = rng.next_uniform();
        u > self.epsilon || values.iter().all(|v| *v == 0.0)
    }
}

impl ActionSelection for EpsilonGreedy {
    fn get_action(&mut self, values: ArrayView1<f64>, rng: &mut dyn RandomSource) -> usize {
        if self.should_explore(&values, rng) {
            rng.next_action(values.len())
        } else {
            argmax(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Replays scripted draws.
    struct Scripted {
        uniforms: Vec<f64>,
        actions: Vec<usize>,
    }

    impl RandomSource for Scripted {
        fn next_uniform(&mut self) -> f64 {
            self.uniforms.remove(0)
        }

        fn next_action(&mut self, n_actions: usize) -> usize {
            let a: usize = self.actions.remove(0);
            assert!(a < n_actions);
            a
        }
    }

    #[test]
    fn exploits_below_epsilon() {
        let mut rng = Scripted {
            uniforms: vec![0.5],
            actions: vec![],
        };
        let values = array![0.1, 0.3];
        assert_eq!(EpsilonGreedy::new(0.9).get_action(values.view(), &mut rng), 1);
        assert!(rng.uniforms.is_empty());
    }

    #[test]
    fn explores_above_epsilon() {
        let mut rng = Scripted {
            uniforms: vec![0.95],
            actions: vec![0],
        };
        let values = array![0.1, 0.3];
        assert_eq!(EpsilonGreedy::new(0.9).get_action(values.view(), &mut rng), 0);
        assert!(rng.actions.is_empty());
    }

    #[test]
    fn explores_on_unexplored_row() {
        let mut rng = Scripted {
            uniforms: vec![0.0],
            actions: vec![1],
        };
        let values = array![0.0, 0.0];
        assert_eq!(EpsilonGreedy::new(1.0).get_action(values.view(), &mut rng), 1);
    }

    #[test]
    fn greedy_ties_go_to_lowest_index() {
        let mut rng = Scripted {
            uniforms: vec![0.1, 0.2],
            actions: vec![],
        };
        let values = array![-1.0, 0.4, 0.4];
        let mut selection = EpsilonGreedy::new(1.0);
        assert_eq!(selection.get_action(values.view(), &mut rng), 1);
        assert_eq!(selection.get_action(values.view(), &mut rng), 1);
    }
}
