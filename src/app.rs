use std::time::Instant;

use log::{error, info};

use crate::game::{GameEngine, GameStatus, TickOutcome};
use crate::input::GameInput;
use crate::schedule::{Countdown, tick_interval};
use crate::score::{HighScore, ScoreStore};

/// Terminal-shell session wrapped around one engine.
///
/// Owns the parts the engine leaves to its caller: the countdown before play,
/// the score-dependent tick timer, and the high score.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    high_score: HighScore,
    best_before_game: u32,
    store: Option<ScoreStore>,
    countdown: Option<Countdown>,
    last_tick: Instant,
    quit: bool,
}

impl App {
    /// Starts a session paused behind the configured countdown.
    #[must_use]
    pub fn new(
        mut engine: GameEngine,
        high_score: HighScore,
        store: Option<ScoreStore>,
        now: Instant,
    ) -> Self {
        engine.pause();
        let countdown = Some(Countdown::start(engine.state().countdown_time(), now));

        Self {
            engine,
            high_score,
            best_before_game: high_score.best(),
            store,
            countdown,
            last_tick: now,
            quit: false,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    /// True once the current game's score beats the best from before it
    /// started; a tie does not count.
    #[must_use]
    pub fn is_new_high_score(&self) -> bool {
        self.engine.state().score() > self.best_before_game
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Seconds left on an active countdown.
    #[must_use]
    pub fn countdown_remaining(&self, now: Instant) -> Option<u8> {
        self.countdown.map(|countdown| countdown.remaining_secs(now))
    }

    /// Applies one input event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        let status = self.engine.state().status();

        match input {
            GameInput::Quit => self.quit = true,
            GameInput::Direction(direction) if status != GameStatus::GameOver => {
                let _ = self.engine.set_direction(direction);
            }
            GameInput::TogglePause => match status {
                GameStatus::Running => self.engine.pause(),
                GameStatus::Paused if self.countdown.is_some() => self.countdown = None,
                GameStatus::Paused => self.start_countdown(now),
                GameStatus::GameOver => {}
            },
            GameInput::ToggleWallPass if self.is_settings_open() => {
                let enabled = !self.engine.state().wall_pass_enabled();
                self.engine.toggle_wall_pass(enabled);
                info!("wall pass {}", if enabled { "enabled" } else { "disabled" });
            }
            GameInput::CountdownUp if self.is_settings_open() => {
                let seconds = i64::from(self.engine.state().countdown_time()) + 1;
                self.engine.set_countdown_time(seconds);
            }
            GameInput::CountdownDown if self.is_settings_open() => {
                let seconds = i64::from(self.engine.state().countdown_time()) - 1;
                self.engine.set_countdown_time(seconds);
            }
            GameInput::Confirm if status == GameStatus::GameOver => {
                self.best_before_game = self.high_score.best();
                self.engine.reset();
                self.engine.pause();
                self.start_countdown(now);
            }
            _ => {}
        }
    }

    /// Runs the countdown and tick timer; returns the outcome when a tick ran.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        if let Some(countdown) = self.countdown {
            if !countdown.is_finished(now) {
                return None;
            }
            self.countdown = None;
            self.engine.resume();
            self.last_tick = now;
            return None;
        }

        if self.engine.state().status() != GameStatus::Running {
            return None;
        }

        let interval = tick_interval(self.engine.state().score());
        if now.saturating_duration_since(self.last_tick) < interval {
            return None;
        }

        self.last_tick = now;
        let outcome = self.engine.advance();
        if self.high_score.record(outcome.score) {
            self.persist_high_score();
        }
        Some(outcome)
    }

    /// Settings can be edited while paused with no countdown running.
    #[must_use]
    pub fn is_settings_open(&self) -> bool {
        self.engine.state().status() == GameStatus::Paused && self.countdown.is_none()
    }

    fn start_countdown(&mut self, now: Instant) {
        self.countdown = Some(Countdown::start(
            self.engine.state().countdown_time(),
            now,
        ));
    }

    fn persist_high_score(&self) {
        let Some(store) = &self.store else {
            return;
        };

        let best = self.high_score.best();
        match store.save(best) {
            Ok(()) => info!("new high score {best} saved to {}", store.path().display()),
            Err(e) => error!("failed to save high score: {e}"),
        }
    }
}
