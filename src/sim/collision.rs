//! Landing and miss detection for axis-aligned blocks
//!
//! Blocks and the platform are plain rectangles in screen space (y grows
//! downward), so every test here is an interval comparison.

use super::state::{Block, PlayArea, Platform};

/// Outcome of checking one block against the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Still falling, or beside the platform
    None,
    /// Touching the platform with the platform's color
    Caught,
    /// Touching the platform with a different color
    Mismatch,
}

/// Whether the block's bottom edge has reached the platform's top edge
#[inline]
pub fn reached_platform_row(block: &Block, platform: &Platform, area: &PlayArea) -> bool {
    block.bottom() >= platform.top(area)
}

/// Whether the block's horizontal extent overlaps the platform's
///
/// Edges that merely touch do not count.
#[inline]
pub fn overlaps_platform(block: &Block, platform: &Platform) -> bool {
    block.right() > platform.x && block.left() < platform.right()
}

/// Classify a block against the platform
pub fn lands_on_platform(block: &Block, platform: &Platform, area: &PlayArea) -> Landing {
    if !reached_platform_row(block, platform, area) || !overlaps_platform(block, platform) {
        Landing::None
    } else if block.color == platform.color {
        Landing::Caught
    } else {
        Landing::Mismatch
    }
}

/// Whether the block has fallen past the bottom of the play area
#[inline]
pub fn is_missed(block: &Block, area: &PlayArea) -> bool {
    block.pos.y > area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BlockColor;
    use glam::Vec2;

    const AREA: PlayArea = PlayArea {
        width: 900.0,
        height: 675.0,
    };

    fn platform(color: BlockColor) -> Platform {
        Platform {
            x: 375.0,
            width: 150.0,
            height: 20.0,
            color,
        }
    }

    fn block(x: f32, y: f32, color: BlockColor) -> Block {
        Block {
            id: 1,
            pos: Vec2::new(x, y),
            size: 50.0,
            color,
        }
    }

    #[test]
    fn test_platform_row_boundary_is_inclusive() {
        let p = platform(BlockColor::Red);
        // Platform top is 655; block bottom = y + 50
        assert!(!reached_platform_row(&block(400.0, 604.9, BlockColor::Red), &p, &AREA));
        assert!(reached_platform_row(&block(400.0, 605.0, BlockColor::Red), &p, &AREA));
    }

    #[test]
    fn test_horizontal_overlap_is_strict() {
        let p = platform(BlockColor::Red);
        // Touching the left edge
        assert!(!overlaps_platform(&block(325.0, 0.0, BlockColor::Red), &p));
        assert!(overlaps_platform(&block(325.5, 0.0, BlockColor::Red), &p));
        // Touching the right edge
        assert!(!overlaps_platform(&block(525.0, 0.0, BlockColor::Red), &p));
        assert!(overlaps_platform(&block(524.5, 0.0, BlockColor::Red), &p));
    }

    #[test]
    fn test_landing_classification() {
        let p = platform(BlockColor::Red);
        assert_eq!(
            lands_on_platform(&block(400.0, 610.0, BlockColor::Red), &p, &AREA),
            Landing::Caught
        );
        assert_eq!(
            lands_on_platform(&block(400.0, 610.0, BlockColor::Blue), &p, &AREA),
            Landing::Mismatch
        );
        assert_eq!(
            lands_on_platform(&block(400.0, 100.0, BlockColor::Blue), &p, &AREA),
            Landing::None
        );
        assert_eq!(
            lands_on_platform(&block(10.0, 640.0, BlockColor::Blue), &p, &AREA),
            Landing::None
        );
    }

    #[test]
    fn test_miss_requires_passing_bottom() {
        assert!(!is_missed(&block(0.0, 675.0, BlockColor::Red), &AREA));
        assert!(is_missed(&block(0.0, 675.1, BlockColor::Red), &AREA));
    }
}
