use std::io::Write;
use std::thread;
use std::time::Duration;

use kdam::{tqdm, Bar, BarExt};
use tracing::warn;

use crate::env::State;

/// Receives progress from the episode loop. Nothing it does flows back.
pub trait Reporter {
    fn on_episode_start(&mut self, _episode: u64, _state: State) {}

    fn on_step(&mut self, episode: u64, step: u64, state: State);

    fn on_episode_end(&mut self, episode: u64, steps: u64, state: State);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_step(&mut self, _episode: u64, _step: u64, _state: State) {}

    fn on_episode_end(&mut self, _episode: u64, _steps: u64, _state: State) {}
}

/// Draws every visited state and a summary line per episode.
pub struct ConsoleReporter<W: Write> {
    out: W,
    draw: Box<dyn Fn(State) -> String>,
    fresh_time: Duration,
    episode_pause: Duration,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, draw: Box<dyn Fn(State) -> String>) -> Self {
        Self {
            out,
            draw,
            fresh_time: Duration::ZERO,
            episode_pause: Duration::ZERO,
        }
    }

    pub fn with_pacing(mut self, fresh_time: Duration, episode_pause: Duration) -> Self {
        self.fresh_time = fresh_time;
        self.episode_pause = episode_pause;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let written = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush());
        if let Err(e) = written {
            warn!("could not write progress: {}", e);
        }
    }

    fn draw_frame(&mut self, state: State) {
        let frame: String = (self.draw)(state);
        if frame.contains('\n') {
            self.emit(&format!("{}\n\n", frame));
        } else {
            self.emit(&format!("\r{}", frame));
        }
        if !self.fresh_time.is_zero() {
            thread::sleep(self.fresh_time);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_episode_start(&mut self, _episode: u64, state: State) {
        self.draw_frame(state);
    }

    fn on_step(&mut self, _episode: u64, _step: u64, state: State) {
        // the terminal state gets the episode summary instead of a frame
        if !state.is_terminal() {
            self.draw_frame(state);
        }
    }

    fn on_episode_end(&mut self, episode: u64, steps: u64, _state: State) {
        self.emit(&format!(
            "\rEpisode {}: total steps = {}\n",
            episode + 1,
            steps
        ));
        if !self.episode_pause.is_zero() {
            thread::sleep(self.episode_pause);
        }
    }
}

/// Progress bar over episodes.
pub struct ProgressReporter {
    pb: Bar,
}

impl ProgressReporter {
    pub fn new(n_episodes: u64) -> Self {
        let mut pb = tqdm!(total = n_episodes as usize);
        pb.set_description("episodes");
        pb.refresh();
        Self { pb }
    }
}

impl Reporter for ProgressReporter {
    fn on_step(&mut self, _episode: u64, _step: u64, _state: State) {}

    fn on_episode_end(&mut self, episode: u64, steps: u64, _state: State) {
        self.pb
            .set_postfix(format!("episode={}, steps={}", episode + 1, steps));
        // false only means the bar skipped a redraw
        self.pb.update(1);
    }
}
