//! Color Catch - A falling-block color matching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, landing, scoring, spawning)
//! - `session`: Game lifecycle wired to the host collaborators
//! - `platform`: Input/presenter abstraction and host helpers
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::GameSession;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Side length of every falling block
    pub const BLOCK_SIZE: f32 = 50.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 150.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Pixels moved per scheduled frame while a direction is held
    pub const PLATFORM_STEP: f32 = 10.0;

    /// Block fall speed (pixels per reference frame)
    pub const INITIAL_SPEED: f32 = 2.0;
    pub const SPEED_PER_LEVEL: f32 = 0.5;

    /// Score needed per level
    pub const POINTS_PER_LEVEL: u32 = 10;

    /// Spawn chance per frame: base + level * per_level
    pub const BASE_SPAWN_CHANCE: f32 = 0.02;
    pub const SPAWN_CHANCE_PER_LEVEL: f32 = 0.002;

    /// Frame rate the fall speed is normalized against
    pub const REFERENCE_HZ: f32 = 60.0;

    /// Play area layout
    pub const MAX_PLAY_WIDTH: f32 = 900.0;
    pub const PLAY_ASPECT: f32 = 0.75;
    /// Horizontal margin kept free around the play area
    pub const VIEWPORT_MARGIN: f32 = 40.0;

    /// Largest frame delta the scheduler hands to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
