//! Platform abstraction layer
//!
//! The simulation never touches the host directly. Hosts plug in through:
//! - [`InputSource`]: held-direction queries
//! - [`Presenter`]: frame drawing and score/level/game-over notifications
//! - [`FrameClock`]: frame deltas for the scheduling callback

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::HeldKeys;

use crate::consts::{MAX_PLAY_WIDTH, PLAY_ASPECT, VIEWPORT_MARGIN};
use crate::sim::{PlayArea, RenderSnapshot};

/// Directional input as seen by the simulation
pub trait InputSource {
    fn is_left_held(&self) -> bool;
    fn is_right_held(&self) -> bool;
}

/// Sink for everything the player sees
pub trait Presenter {
    /// Draw the latest frame
    fn draw(&mut self, snapshot: &RenderSnapshot);
    fn on_score_changed(&mut self, score: u32);
    fn on_level_changed(&mut self, level: u32);
    fn on_game_over(&mut self, final_score: u32);
    /// A new run started; hide any game-over display
    fn on_restart(&mut self);
}

/// Play area for a viewport width: capped at 900px wide, 4:3
pub fn play_area_for_viewport(viewport_width: f32) -> PlayArea {
    let width = (viewport_width - VIEWPORT_MARGIN).clamp(0.0, MAX_PLAY_WIDTH);
    PlayArea::new(width, width * PLAY_ASPECT)
}

/// Presenter that reports events through the log and keeps the last frame
#[derive(Debug, Default)]
pub struct LogPresenter {
    pub last_snapshot: Option<RenderSnapshot>,
    pub frames_drawn: u64,
}

impl Presenter for LogPresenter {
    fn draw(&mut self, snapshot: &RenderSnapshot) {
        self.frames_drawn += 1;
        self.last_snapshot = Some(snapshot.clone());
    }

    fn on_score_changed(&mut self, score: u32) {
        log::debug!("Score: {score}");
    }

    fn on_level_changed(&mut self, level: u32) {
        log::info!("Level: {level}");
    }

    fn on_game_over(&mut self, final_score: u32) {
        log::info!("Game over! Final score: {final_score}");
    }

    fn on_restart(&mut self) {
        log::info!("New run started");
    }
}
