//! Card layout and behavior configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Layout calculations like `CARD_WIDTH - 2 * CARD_PADDING` are computed at
//! compile time as `const`, avoiding per-frame arithmetic. These constants are
//! used throughout the rendering code instead of recalculating positions every
//! frame.
//!
//! # Compile-Time Validation
//!
//! Constants with ordering or sizing requirements carry `const` assertions.
//! If they are configured incorrectly (e.g., a child strip taller than the
//! card), compilation fails with a clear error.

// =============================================================================
// Highlight Behavior
// =============================================================================

/// Distance to the maneuver (meters) below which the card enters the
/// highlighted state. 152.4 m is the customary 500 ft announcement point.
/// The comparison is strict: exactly at the threshold the card stays normal.
pub const HIGHLIGHT_DISTANCE_M: f32 = 152.4;

/// Duration of the highlight color fade in milliseconds. Both directions
/// (normal -> highlighted and back) use the same duration.
pub const HIGHLIGHT_FADE_MS: u64 = 1000;

const _: () = assert!(HIGHLIGHT_FADE_MS > 0);

// =============================================================================
// Card Geometry
// =============================================================================

/// Overall card width in pixels.
pub const CARD_WIDTH: u32 = 280;

/// Height of the maneuver section (icon, distance, instruction labels).
pub const MANEUVER_HEIGHT: u32 = 100;

/// Height of the lane guidance strip below the maneuver section.
pub const LANES_HEIGHT: u32 = 40;

/// Height of the next-maneuver banner at the bottom of the card.
pub const BANNER_HEIGHT: u32 = 32;

/// Total card height with every sub-view visible.
/// Hidden sub-views leave their strip blank rather than reflowing the card,
/// so the container bounds never change between updates.
pub const CARD_HEIGHT: u32 = MANEUVER_HEIGHT + LANES_HEIGHT + BANNER_HEIGHT;

/// Inner padding between the card edge and its content.
pub const CARD_PADDING: u32 = 8;

const _: () = assert!(CARD_WIDTH > 2 * CARD_PADDING);
const _: () = assert!(MANEUVER_HEIGHT > 2 * CARD_PADDING);

// =============================================================================
// Maneuver Section Layout
// =============================================================================

/// Side length of the square maneuver icon area.
pub const ICON_SIZE: u32 = 48;

/// Horizontal gap between the icon and the distance/instruction column.
pub const ICON_GAP: u32 = 10;

// =============================================================================
// Lane Strip Layout
// =============================================================================

/// Width reserved per lane arrow inside the lane strip.
pub const LANE_SLOT_WIDTH: u32 = 28;

/// Maximum number of lanes the strip renders. Instructions carrying more
/// lanes are truncated from the right.
pub const MAX_LANES: usize = 8;

const _: () = assert!(MAX_LANES as u32 * LANE_SLOT_WIDTH <= CARD_WIDTH);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_height_is_sum_of_strips() {
        assert_eq!(CARD_HEIGHT, MANEUVER_HEIGHT + LANES_HEIGHT + BANNER_HEIGHT);
    }

    #[test]
    fn test_highlight_distance_is_500_feet() {
        // 500 ft = 152.4 m exactly
        assert!((HIGHLIGHT_DISTANCE_M - 500.0 * 0.3048).abs() < f32::EPSILON);
    }

    #[test]
    fn test_lane_strip_fits_card() {
        assert!(MAX_LANES as u32 * LANE_SLOT_WIDTH <= CARD_WIDTH);
    }
}
