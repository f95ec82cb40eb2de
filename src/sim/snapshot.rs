//! Read-only view of a frame for the presenter

use serde::{Deserialize, Serialize};

use super::state::{BlockColor, GamePhase, GameState, PlayArea};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: BlockColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: BlockColor,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub platform: PlatformView,
    pub blocks: Vec<BlockView>,
    pub area: PlayArea,
    pub score: u32,
    pub level: u32,
    pub phase: GamePhase,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let platform = &state.platform;
        Self {
            platform: PlatformView {
                x: platform.x,
                y: platform.top(&state.area),
                width: platform.width,
                height: platform.height,
                color: platform.color,
            },
            blocks: state
                .blocks
                .iter()
                .map(|b| BlockView {
                    x: b.pos.x,
                    y: b.pos.y,
                    size: b.size,
                    color: b.color,
                })
                .collect(),
            area: state.area,
            score: state.score,
            level: state.level,
            phase: state.phase,
        }
    }
}
