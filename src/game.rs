//! Game-loop driver
//!
//! Owns the `GameState` and the presentation collaborators. The host calls
//! `frame()` from its display-refresh callback and `sample_input()` from an
//! independent fixed-interval timer; both run on the same thread, so the
//! driver is the single writer of all simulation state.

use crate::sim::{self, GameEvent, GamePhase, GameState, TurretInput};

/// Presentation adapter: draws state and mirrors events into the UI
pub trait Presenter {
    /// Draw the current state. Called every frame, running or not.
    fn draw(&mut self, state: &GameState);

    /// New score total for the HUD
    fn score_changed(&mut self, _score: u64) {}

    /// First move of the run: fade out the instructions
    fn hide_controls(&mut self) {}

    /// Run restarted: bring the instructions back
    fn show_controls(&mut self) {}

    /// Show the game-over overlay with the final score
    fn show_game_over(&mut self, _final_score: u64) {}

    fn hide_game_over(&mut self) {}
}

/// Sound output for shot effects. Failures are the sink's problem.
pub trait SoundSink {
    fn play_shot(&mut self);
}

/// Sink that plays nothing (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play_shot(&mut self) {}
}

/// Game instance holding all state
pub struct Game<P: Presenter, S: SoundSink> {
    state: GameState,
    presenter: P,
    sound: S,
    /// Host timestamp of the previous frame (ms)
    last_time: f64,
    /// Elapsed time between the last two frames (ms), informational only
    frame_delta: f64,
    frames: u64,
}

impl<P: Presenter, S: SoundSink> Game<P, S> {
    /// Build a running game on a `width` x `height` field
    pub fn new(seed: u64, width: f32, height: f32, presenter: P, sound: S) -> Self {
        let mut game = Self {
            state: GameState::new(seed, width, height),
            presenter,
            sound,
            last_time: 0.0,
            frame_delta: 0.0,
            frames: 0,
        };
        game.presenter.score_changed(0);
        log::info!("Game started! Canvas size: {} x {}", width, height);
        log::info!(
            "Turret position: {} {}",
            game.state.turret.pos.x,
            game.state.turret.pos.y
        );
        game
    }

    /// One display-refresh cycle: update if running, then always draw
    pub fn frame(&mut self, time_ms: f64) {
        self.frame_delta = time_ms - self.last_time;
        self.last_time = time_ms;
        self.frames += 1;

        if self.state.is_running() {
            sim::tick(&mut self.state);
        }
        self.dispatch_events();

        self.presenter.draw(&self.state);
    }

    /// One input-timer sample of the held intents
    pub fn sample_input(&mut self, input: &TurretInput) {
        sim::apply_input(&mut self.state, input);
        self.dispatch_events();
    }

    /// Discrete shoot request (mouse click)
    pub fn shoot(&mut self) {
        sim::shoot(&mut self.state);
        self.dispatch_events();
    }

    /// Host surface changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
        log::debug!("Resized to {} x {}", width, height);
    }

    /// End the run (external trigger; the simulation never does this itself)
    pub fn game_over(&mut self) {
        self.state.game_over();
        self.dispatch_events();
    }

    /// Reset everything and return to Running
    pub fn restart(&mut self) {
        self.state.restart();
        self.dispatch_events();
        log::info!("Game restarted");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    /// Milliseconds between the last two frames
    pub fn frame_delta(&self) -> f64 {
        self.frame_delta
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Forward queued simulation events to the presentation side
    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Shot => self.sound.play_shot(),
                GameEvent::FirstMove => self.presenter.hide_controls(),
                GameEvent::ScoreChanged(score) => self.presenter.score_changed(score),
                GameEvent::ObjectDestroyed { kind, center } => {
                    log::trace!("{} destroyed at {:?}", kind.as_str(), center);
                }
                GameEvent::GameOver(score) => {
                    log::info!("Game over, final score {}", score);
                    self.presenter.show_game_over(score);
                }
                GameEvent::Restarted => {
                    self.presenter.hide_game_over();
                    self.presenter.show_controls();
                }
            }
        }
    }
}
