use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

use sort_it_out::{Algorithm, History};

use crate::step_graph::StepGraph;

/// Keyboard-driven playback over a materialized history: play, pause, step
/// forward and backward, reset, and speed changes. The history is never
/// regenerated; seeking is just an index change.
pub struct Player {
    history: History,
    graph: StepGraph,
    current: usize,
    playing: bool,
    speed: u64,
}

impl Player {
    pub fn new(algorithm: Algorithm, values: &[u32], history: History, speed: u64) -> Self {
        let c = algorithm.complexity();
        let complexity_line = format!(
            "Time: best {} / avg {} / worst {}   Space: {}",
            c.best, c.average, c.worst, c.space
        );
        Player {
            graph: StepGraph::new(algorithm.name(), &complexity_line, values),
            history,
            current: 0,
            playing: false,
            speed: speed.clamp(10, 100),
        }
    }

    fn frame_delay(&self) -> Duration {
        // Same curve as the speed slider: 500 / (speed / 50) + 50 ms.
        Duration::from_millis(500 * 50 / self.speed + 50)
    }

    pub fn run(mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        let result = self.event_loop();
        stdout().execute(LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.graph
                .display_step(&self.history[self.current], self.current, self.history.len());

            let timeout = if self.playing {
                self.frame_delay()
            } else {
                Duration::from_millis(250)
            };

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && !self.handle_key(key) {
                        return Ok(());
                    }
                }
            } else if self.playing {
                if self.current + 1 < self.history.len() {
                    self.current += 1;
                } else {
                    self.playing = false;
                }
            }
        }
    }

    /// Returns false when the player should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char(' ') => {
                if !self.playing && self.current + 1 >= self.history.len() {
                    self.current = 0;
                }
                self.playing = !self.playing;
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.playing = false;
                if self.current + 1 < self.history.len() {
                    self.current += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.playing = false;
                self.current = self.current.saturating_sub(1);
            }
            KeyCode::Char('r') => {
                self.playing = false;
                self.current = 0;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.speed = (self.speed + 10).min(100),
            KeyCode::Char('-') => self.speed = self.speed.saturating_sub(10).max(10),
            _ => {}
        }
        true
    }
}
