//! Attract-mode steering
//!
//! Produces input for demo runs: dodge the lowest mismatched block that is
//! about to hit the platform, otherwise chase the lowest matching block.

use super::collision::overlaps_platform;
use super::state::{Block, GameState};
use super::tick::TickInput;

/// How far above the platform a mismatched block starts to count as a threat
const DANGER_ZONE: f32 = 160.0;

fn lowest<'a>(blocks: impl Iterator<Item = &'a Block>) -> Option<&'a Block> {
    blocks.max_by(|a, b| {
        a.pos
            .y
            .partial_cmp(&b.pos.y)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Pick the held directions for this frame
pub fn autopilot_input(state: &GameState) -> TickInput {
    let platform = &state.platform;
    let center = platform.x + platform.width / 2.0;
    let danger_line = platform.top(&state.area) - DANGER_ZONE;

    let threat = lowest(
        state
            .blocks
            .iter()
            .filter(|b| b.color != platform.color && overlaps_platform(b, platform)),
    );
    if let Some(block) = threat.filter(|b| b.bottom() >= danger_line) {
        let block_center = block.pos.x + block.size / 2.0;
        let room_left = platform.x > 0.0;
        let room_right = platform.right() < state.area.width;
        let go_left = (block_center >= center && room_left) || !room_right;
        return TickInput {
            left: go_left,
            right: !go_left,
        };
    }

    let target = lowest(state.blocks.iter().filter(|b| b.color == platform.color));
    match target {
        Some(block) => {
            let offset = block.pos.x + block.size / 2.0 - center;
            if offset.abs() <= state.tuning.platform_step / 2.0 {
                TickInput::default()
            } else {
                TickInput {
                    left: offset < 0.0,
                    right: offset > 0.0,
                }
            }
        }
        None => TickInput::default(),
    }
}
