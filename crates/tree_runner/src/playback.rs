//! Timed playback of a stepped search.
//!
//! The driver side of the resumable engines: it decides when the next
//! `step()` happens. Nothing here touches the tree directly.

use std::thread;
use std::time::Duration;

use tracing::debug;
use tree_core::SearchAlgorithm;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 5;

/// Play/pause state and pacing for stepping an engine.
#[derive(Debug, Clone)]
pub struct Playback {
    speed: u8,
    playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl Playback {
    /// Creates a paused playback. `speed` is clamped to 1..=10.
    pub fn new(speed: u8) -> Self {
        Self {
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            playing: false,
        }
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Delay between steps: one second halved for every two speed levels.
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / 2f64.powf(self.speed as f64 / 2.0))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts playing. An engine that is not mid-search (never started, or
    /// already finished) is initialized first.
    pub fn play(&mut self, engine: &mut dyn SearchAlgorithm) {
        if engine.current().is_none() {
            engine.initialize();
        }
        self.playing = true;
        debug!(engine = engine.name(), speed = self.speed, "playback started");
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self, engine: &mut dyn SearchAlgorithm) {
        if self.playing {
            self.pause();
        } else {
            self.play(engine);
        }
    }

    /// Advances the engine by one step if playing.
    ///
    /// Returns true when that step finished the search; playback pauses
    /// itself at that point.
    pub fn tick(&mut self, engine: &mut dyn SearchAlgorithm) -> bool {
        if !self.playing {
            return false;
        }
        if engine.step().is_none() {
            self.playing = false;
            return true;
        }
        false
    }

    /// Plays until the search finishes or `on_step` asks to stop by
    /// returning false, sleeping [`step_interval`](Self::step_interval)
    /// between steps.
    pub fn play_to_end<F>(&mut self, engine: &mut dyn SearchAlgorithm, mut on_step: F)
    where
        F: FnMut(&dyn SearchAlgorithm) -> bool,
    {
        self.play(engine);
        while self.playing {
            let done = self.tick(engine);
            let keep_going = on_step(&*engine);
            if done {
                break;
            }
            if !keep_going {
                self.pause();
                break;
            }
            thread::sleep(self.step_interval());
        }
    }
}

#[cfg(test)]
#[path = "playback_tests.rs"]
mod playback_tests;
