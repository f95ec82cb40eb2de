//! Game state and core simulation types
//!
//! Everything the simulation reads or mutates in a frame lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Colors a block or the platform can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl BlockColor {
    /// The full palette, in display order
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Yellow,
        BlockColor::Purple,
        BlockColor::Orange,
    ];

    /// CSS color name
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Red => "red",
            BlockColor::Green => "green",
            BlockColor::Blue => "blue",
            BlockColor::Yellow => "yellow",
            BlockColor::Purple => "purple",
            BlockColor::Orange => "orange",
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Size of the play area in pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Notifications raised by the simulation for the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u32),
    LevelChanged(u32),
    GameOver { final_score: u32 },
    Restarted,
}

/// A falling block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub color: BlockColor,
}

impl Block {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }
}

/// The player's catcher, resting on the bottom edge of the play area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Blocks of this color may be caught
    pub color: BlockColor,
}

impl Platform {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Largest x that keeps the platform inside the play area
    #[inline]
    pub fn max_x(&self, area: &PlayArea) -> f32 {
        (area.width - self.width).max(0.0)
    }

    /// Top edge in play-area coordinates
    #[inline]
    pub fn top(&self, area: &PlayArea) -> f32 {
        area.height - self.height
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance table in effect for this run
    pub tuning: Tuning,
    /// Play area dimensions
    pub area: PlayArea,
    /// Score
    pub score: u32,
    /// Current level (1-based, derived from score)
    pub level: u32,
    /// Fall speed multiplier
    pub speed: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter (frames since last reset)
    pub time_ticks: u64,
    /// Player platform
    pub platform: Platform,
    /// Falling blocks (spawn order, ascending id)
    pub blocks: Vec<Block>,
    rng: Pcg32,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state, already in the Playing phase
    pub fn new(seed: u64, area: PlayArea, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({e}), falling back to defaults");
                Tuning::default()
            }
        };

        let mut state = Self {
            seed,
            area,
            score: 0,
            level: 1,
            speed: tuning.initial_speed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            platform: Platform {
                x: 0.0,
                width: tuning.platform_width,
                height: tuning.platform_height,
                color: tuning.palette[0],
            },
            blocks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
            tuning,
        };
        state.reset();
        // A fresh state has nothing for the presenter to catch up on
        state.events.clear();
        state
    }

    /// Reset to the start of a run: zero score, level 1, centered platform
    /// with a fresh color, no blocks, Playing.
    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 1;
        self.speed = self.tuning.initial_speed;
        self.blocks.clear();
        self.time_ticks = 0;
        self.platform.width = self.tuning.platform_width;
        self.platform.height = self.tuning.platform_height;
        self.platform.x = (self.area.width / 2.0 - self.platform.width / 2.0)
            .clamp(0.0, self.platform.max_x(&self.area));
        self.platform.color = self.random_color();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::LevelChanged(1));
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Pick a color uniformly from the palette
    pub fn random_color(&mut self) -> BlockColor {
        let index = self.rng.random_range(0..self.tuning.palette.len());
        self.tuning.palette[index]
    }

    /// Uniform sample in [0, 1)
    pub fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Spawn a block just above the visible area at the given x
    pub fn spawn_block_at(&mut self, x: f32, color: BlockColor) -> u32 {
        let size = self.tuning.block_size;
        self.push_block(Vec2::new(x, -size), color)
    }

    /// Spawn a block at a random x with a random color
    pub fn spawn_random_block(&mut self) -> u32 {
        let max_x = (self.area.width - self.tuning.block_size).max(0.0);
        let x = self.roll() * max_x;
        let color = self.random_color();
        self.spawn_block_at(x, color)
    }

    /// Insert a block at an arbitrary position
    pub fn push_block(&mut self, pos: Vec2, color: BlockColor) -> u32 {
        let id = self.next_entity_id();
        self.blocks.push(Block {
            id,
            pos,
            size: self.tuning.block_size,
            color,
        });
        id
    }

    /// Queue an event for the presenter
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Enter GameOver, reporting the score at this moment
    pub(crate) fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {}, level {}, {} frames",
            self.score,
            self.level,
            self.time_ticks
        );
        self.emit(GameEvent::GameOver {
            final_score: self.score,
        });
    }
}
