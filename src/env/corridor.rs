use crate::env::{DiscreteAction, DiscreteEnv, EnvError, State};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CorridorAction {
    Left,
    Right,
}

impl DiscreteAction for CorridorAction {
    const ALL: &'static [Self] = &[CorridorAction::Left, CorridorAction::Right];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            CorridorAction::Left => "left",
            CorridorAction::Right => "right",
        }
    }
}

/// One-dimensional corridor: start at 0, treasure past the last free cell.
///
/// Moving right from `n_states - 2` reaches the treasure and ends the episode.
#[derive(Debug, Clone)]
pub struct CorridorEnv {
    ready: bool,
    obs: Vec<[(State, f64, bool); 2]>,
    player_pos: usize,
}

impl CorridorEnv {
    const START_POSITION: usize = 0;
    const GOAL_REWARD: f64 = 1.0;

    fn transition(n_states: usize, pos: usize, action: CorridorAction) -> (State, f64, bool) {
        match action {
            CorridorAction::Right if pos == n_states - 2 => {
                (State::Terminal, Self::GOAL_REWARD, true)
            }
            CorridorAction::Right => (State::Index(pos + 1), 0.0, false),
            CorridorAction::Left => (State::Index(pos.saturating_sub(1)), 0.0, false),
        }
    }

    pub fn new(n_states: usize) -> Result<Self, EnvError> {
        if n_states < 2 {
            return Err(EnvError::InvalidLayout(format!(
                "a corridor needs at least 2 states, got {}",
                n_states
            )));
        }
        // the last state is the treasure itself and is never stood on
        let obs: Vec<[(State, f64, bool); 2]> = (0..n_states - 1)
            .map(|pos| {
                [
                    Self::transition(n_states, pos, CorridorAction::Left),
                    Self::transition(n_states, pos, CorridorAction::Right),
                ]
            })
            .collect();
        Ok(Self {
            ready: false,
            obs,
            player_pos: Self::START_POSITION,
        })
    }

    pub fn position(&self) -> usize {
        self.player_pos
    }

    /// Text frame such as `--o--T`.
    pub fn draw(n_states: usize, state: State) -> String {
        let mut frame: Vec<char> = vec!['-'; n_states.saturating_sub(1)];
        frame.push('T');
        if let State::Index(pos) = state {
            if pos + 1 < n_states {
                frame[pos] = 'o';
            }
        }
        frame.into_iter().collect()
    }

    pub fn render(&self) -> String {
        Self::draw(self.n_states(), State::Index(self.player_pos))
    }
}

impl DiscreteEnv<CorridorAction> for CorridorEnv {
    fn n_states(&self) -> usize {
        self.obs.len() + 1
    }

    fn reset(&mut self) -> State {
        self.player_pos = Self::START_POSITION;
        self.ready = true;
        State::Index(self.player_pos)
    }

    fn step(&mut self, action: CorridorAction) -> Result<(State, f64, bool), EnvError> {
        if !self.ready {
            return Err(EnvError::NotReady);
        }
        let obs: (State, f64, bool) = self.obs[self.player_pos][action.index()];
        match obs.0 {
            State::Index(pos) => self.player_pos = pos,
            State::Terminal => self.ready = false,
        }
        Ok(obs)
    }
}
