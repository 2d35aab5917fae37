use crate::env::{DiscreteAction, DiscreteEnv, EnvError, State};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MazeAction {
    Up,
    Down,
    Right,
    Left,
}

impl DiscreteAction for MazeAction {
    const ALL: &'static [Self] = &[
        MazeAction::Up,
        MazeAction::Down,
        MazeAction::Right,
        MazeAction::Left,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            MazeAction::Up => "up",
            MazeAction::Down => "down",
            MazeAction::Right => "right",
            MazeAction::Left => "left",
        }
    }
}

/// Cells are `(col, row)` pairs, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeLayout {
    pub width: usize,
    pub height: usize,
    pub start: (usize, usize),
    pub goal: (usize, usize),
    pub traps: Vec<(usize, usize)>,
}

impl Default for MazeLayout {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            start: (0, 0),
            goal: (2, 2),
            traps: vec![(2, 1), (1, 2)],
        }
    }
}

impl MazeLayout {
    fn contains(&self, (col, row): (usize, usize)) -> bool {
        col < self.width && row < self.height
    }

    fn validate(&self) -> Result<(), EnvError> {
        if self.width == 0 || self.height == 0 {
            return Err(EnvError::InvalidLayout(format!(
                "maze must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, cell) in [("start", self.start), ("goal", self.goal)]
            .into_iter()
            .chain(self.traps.iter().map(|t| ("trap", *t)))
        {
            if !self.contains(cell) {
                return Err(EnvError::InvalidLayout(format!(
                    "{} {:?} lies outside the {}x{} grid",
                    name, cell, self.width, self.height
                )));
            }
        }
        if self.start == self.goal || self.traps.contains(&self.start) {
            return Err(EnvError::InvalidLayout(format!(
                "start {:?} must not be a terminal cell",
                self.start
            )));
        }
        Ok(())
    }
}

#[inline(always)]
fn from_2d_to_1d(ncol: usize, row: usize, col: usize) -> usize {
    row * ncol + col
}

#[inline(always)]
fn from_1d_to_2d(ncol: usize, pos: usize) -> (usize, usize) {
    (pos / ncol, pos % ncol)
}

#[inline(always)]
fn inc(nrow: usize, ncol: usize, row: usize, col: usize, action: MazeAction) -> (usize, usize) {
    match action {
        MazeAction::Up => (row.saturating_sub(1), col),
        MazeAction::Down => ((row + 1).min(nrow - 1), col),
        MazeAction::Right => (row, (col + 1).min(ncol - 1)),
        MazeAction::Left => (row, col.saturating_sub(1)),
    }
}

/// Grid maze with traps (reward -1) and one treasure (reward +1).
#[derive(Debug, Clone)]
pub struct MazeEnv {
    ready: bool,
    layout: MazeLayout,
    obs: Vec<[(State, f64, bool); 4]>,
    player_pos: usize,
}

impl MazeEnv {
    const GOAL_REWARD: f64 = 1.0;
    const TRAP_REWARD: f64 = -1.0;

    fn update_transition_matrix(
        layout: &MazeLayout,
        row: usize,
        col: usize,
        action: MazeAction,
    ) -> (State, f64, bool) {
        let (newrow, newcol) = inc(layout.height, layout.width, row, col, action);
        let win: bool = (newcol, newrow) == layout.goal;
        let lose: bool = layout.traps.contains(&(newcol, newrow));
        if win {
            (State::Terminal, Self::GOAL_REWARD, true)
        } else if lose {
            (State::Terminal, Self::TRAP_REWARD, true)
        } else {
            (State::Index(from_2d_to_1d(layout.width, newrow, newcol)), 0.0, false)
        }
    }

    pub fn new(layout: MazeLayout) -> Result<Self, EnvError> {
        layout.validate()?;
        let mut obs: Vec<[(State, f64, bool); 4]> =
            vec![[(State::Terminal, 0.0, true); 4]; layout.width * layout.height];
        for row in 0..layout.height {
            for col in 0..layout.width {
                let i: usize = from_2d_to_1d(layout.width, row, col);
                for action in MazeAction::ALL {
                    obs[i][action.index()] =
                        Self::update_transition_matrix(&layout, row, col, *action);
                }
            }
        }
        let player_pos: usize = from_2d_to_1d(layout.width, layout.start.1, layout.start.0);
        Ok(Self {
            ready: false,
            layout,
            obs,
            player_pos,
        })
    }

    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    /// `(col, row)` of the explorer.
    pub fn position(&self) -> (usize, usize) {
        let (row, col) = from_1d_to_2d(self.layout.width, self.player_pos);
        (col, row)
    }

    /// One line per row: `o` explorer, `#` trap, `$` treasure, `.` floor.
    pub fn draw(layout: &MazeLayout, state: State) -> String {
        let explorer: Option<(usize, usize)> = match state {
            State::Index(pos) => Some(from_1d_to_2d(layout.width, pos)),
            State::Terminal => None,
        };
        let mut lines: Vec<String> = Vec::with_capacity(layout.height);
        for row in 0..layout.height {
            let line: String = (0..layout.width)
                .map(|col| {
                    if explorer == Some((row, col)) {
                        'o'
                    } else if layout.goal == (col, row) {
                        '$'
                    } else if layout.traps.contains(&(col, row)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            lines.push(line);
        }
        lines.join("\n")
    }

    pub fn render(&self) -> String {
        Self::draw(&self.layout, State::Index(self.player_pos))
    }
}

impl DiscreteEnv<MazeAction> for MazeEnv {
    fn n_states(&self) -> usize {
        self.obs.len()
    }

    fn reset(&mut self) -> State {
        self.player_pos = from_2d_to_1d(self.layout.width, self.layout.start.1, self.layout.start.0);
        self.ready = true;
        State::Index(self.player_pos)
    }

    fn step(&mut self, action: MazeAction) -> Result<(State, f64, bool), EnvError> {
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
