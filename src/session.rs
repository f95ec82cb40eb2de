//! Game session lifecycle
//!
//! [`GameSession`] owns one [`GameState`] and connects it to the host: input
//! is read once at the start of each frame, and every event the simulation
//! raises is forwarded to the [`Presenter`] after the frame's update.

use crate::platform::{InputSource, Presenter};
use crate::sim::{GameEvent, GamePhase, GameState, PlayArea, RenderSnapshot, TickInput, tick};
use crate::tuning::Tuning;

/// One game, from start through any number of restarts
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    /// Area to adopt at the next restart
    pending_area: Option<PlayArea>,
}

impl GameSession {
    pub fn new(seed: u64, area: PlayArea, tuning: Tuning) -> Self {
        log::info!(
            "Session created: seed {}, area {}x{}",
            seed,
            area.width,
            area.height
        );
        Self {
            state: GameState::new(seed, area, tuning),
            pending_area: None,
        }
    }

    /// Begin the first run
    pub fn start(&mut self, presenter: &mut dyn Presenter) {
        self.restart(presenter);
    }

    /// Reset to a fresh run from any phase
    pub fn restart(&mut self, presenter: &mut dyn Presenter) {
        if let Some(area) = self.pending_area.take() {
            self.state.area = area;
        }
        self.state.reset();
        log::info!(
            "Run started: platform {} at x={}",
            self.state.platform.color.as_str(),
            self.state.platform.x
        );
        self.flush_events(presenter);
    }

    /// Use a new play area from the next restart on
    pub fn resize(&mut self, area: PlayArea) {
        if area != self.state.area {
            log::debug!("Play area {}x{} pending restart", area.width, area.height);
            self.pending_area = Some(area);
        } else {
            self.pending_area = None;
        }
    }

    /// Advance one frame. No-op once the run is over.
    pub fn update(&mut self, dt: f32, input: &dyn InputSource, presenter: &mut dyn Presenter) {
        let input = TickInput {
            left: input.is_left_held(),
            right: input.is_right_held(),
        };
        tick(&mut self.state, &input, dt);
        self.flush_events(presenter);
    }

    /// Hand the current frame to the presenter
    pub fn draw(&self, presenter: &mut dyn Presenter) {
        presenter.draw(&self.snapshot());
    }

    /// One scheduler callback: update, then draw. Returns whether the
    /// scheduler should request another frame.
    pub fn frame(
        &mut self,
        dt: f32,
        input: &dyn InputSource,
        presenter: &mut dyn Presenter,
    ) -> bool {
        self.update(dt, input, presenter);
        self.draw(presenter);
        self.is_running()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn flush_events(&mut self, presenter: &mut dyn Presenter) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => presenter.on_score_changed(score),
                GameEvent::LevelChanged(level) => presenter.on_level_changed(level),
                GameEvent::GameOver { final_score } => presenter.on_game_over(final_score),
                GameEvent::Restarted => presenter.on_restart(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeldKeys;
    use crate::sim::BlockColor;

    /// Presenter that records every call
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        draws: usize,
    }

    impl Presenter for Recorder {
        fn draw(&mut self, _snapshot: &RenderSnapshot) {
            self.draws += 1;
        }
        fn on_score_changed(&mut self, score: u32) {
            self.calls.push(format!("score {score}"));
        }
        fn on_level_changed(&mut self, level: u32) {
            self.calls.push(format!("level {level}"));
        }
        fn on_game_over(&mut self, final_score: u32) {
            self.calls.push(format!("game over {final_score}"));
        }
        fn on_restart(&mut self) {
            self.calls.push("restart".to_string());
        }
    }

    fn quiet() -> Tuning {
        Tuning {
            base_spawn_chance: 0.0,
            spawn_chance_per_level: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_start_notifies_reset() {
        let mut session = GameSession::new(1, PlayArea::new(900.0, 675.0), quiet());
        let mut presenter = Recorder::default();
        session.start(&mut presenter);
        assert_eq!(presenter.calls, ["restart", "score 0", "level 1"]);
        assert!(session.is_running());
    }

    #[test]
    fn test_frame_reports_and_stops_on_game_over() {
        let mut session = GameSession::new(1, PlayArea::new(900.0, 675.0), quiet());
        let mut presenter = Recorder::default();
        session.start(&mut presenter);
        presenter.calls.clear();

        let state = session.state_mut();
        state.score = 6;
        state.platform.color = BlockColor::Blue;
        state.spawn_block_at(400.0, BlockColor::Red);

        let keys = HeldKeys::default();
        let mut frames = 0;
        while session.frame(1.0 / 60.0, &keys, &mut presenter) {
            frames += 1;
            assert!(frames < 1000);
        }

        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(presenter.calls, ["game over 6"]);
        assert_eq!(presenter.draws, frames + 1);
    }

    #[test]
    fn test_input_is_read_from_source() {
        let mut session = GameSession::new(1, PlayArea::new(900.0, 675.0), quiet());
        let mut presenter = Recorder::default();
        session.start(&mut presenter);

        let mut keys = HeldKeys::default();
        keys.key_down("ArrowRight");
        session.update(1.0 / 60.0, &keys, &mut presenter);
        assert_eq!(session.state().platform.x, 385.0);
    }

    #[test]
    fn test_resize_applies_on_restart() {
        let mut session = GameSession::new(1, PlayArea::new(900.0, 675.0), quiet());
        let mut presenter = Recorder::default();
        session.start(&mut presenter);

        session.resize(PlayArea::new(600.0, 450.0));
        assert_eq!(session.snapshot().area, PlayArea::new(900.0, 675.0));

        session.restart(&mut presenter);
        let snap = session.snapshot();
        assert_eq!(snap.area, PlayArea::new(600.0, 450.0));
        assert_eq!(snap.platform.x, 225.0);
        assert_eq!(snap.platform.y, 430.0);
    }
}
