//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (blocks kept in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{
    Landing, is_missed, lands_on_platform, overlaps_platform, reached_platform_row,
};
pub use snapshot::{BlockView, PlatformView, RenderSnapshot};
pub use state::{Block, BlockColor, GameEvent, GamePhase, GameState, Platform, PlayArea};
pub use tick::{TickInput, tick};
