//! Explicit color transitions for the highlight fade.
//!
//! Instead of instant color changes when the proximity state flips, every
//! themed element interpolates from its current color to the new target over
//! [`HIGHLIGHT_FADE_MS`](crate::config::HIGHLIGHT_FADE_MS). Each element owns
//! one slot in a fixed table:
//! 1. A slot records the start color, the target color, and the start tick.
//! 2. Sampling is pure: `(slot, now_ms) -> Rgb565`, linear interpolation in
//!    RGB565 space, clamped to the target once the duration elapses.
//! 3. Retargeting an in-flight slot cancels it: the new transition starts
//!    from the color sampled at that instant, so overlapping requests never
//!    produce inconsistent jumps.
//!
//! **Tick independence**: the table never reads a clock. Callers pass a
//! monotonic millisecond tick, which keeps the math deterministic under test
//! and the crate free of time dependencies.
//!
//! # Performance Considerations
//!
//! - Color interpolation uses fixed-point integer math
//! - State is tracked per-slot with a fixed-size array (no heap allocation)

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;

use crate::colors::BLACK;
use crate::config::HIGHLIGHT_FADE_MS;

// =============================================================================
// Transition Slots
// =============================================================================

/// Number of themed elements driven by the highlight fade.
pub const SLOT_COUNT: usize = 15;

/// Slot indices for clearer code.
///
/// One slot per themed element the highlight state machine drives. Gradient
/// overlays take two slots each (top and bottom stop).
pub mod slot {
    /// Container gradient, top stop.
    pub const CONTAINER_TOP: usize = 0;
    /// Container gradient, bottom stop.
    pub const CONTAINER_BOTTOM: usize = 1;
    /// Maneuver card gradient, top stop.
    pub const CARD_TOP: usize = 2;
    /// Maneuver card gradient, bottom stop.
    pub const CARD_BOTTOM: usize = 3;
    /// Primary instruction label.
    pub const PRIMARY_TEXT: usize = 4;
    /// Secondary instruction label.
    pub const SECONDARY_TEXT: usize = 5;
    /// Distance value text.
    pub const DISTANCE_VALUE: usize = 6;
    /// Distance unit text.
    pub const DISTANCE_UNIT: usize = 7;
    /// Maneuver icon stroke.
    pub const ICON_PRIMARY: usize = 8;
    /// Maneuver icon accent.
    pub const ICON_SECONDARY: usize = 9;
    /// Lane arrows off the route.
    pub const LANE_DEFAULT: usize = 10;
    /// Lane arrows on the route.
    pub const LANE_HIGHLIGHTED: usize = 11;
    /// Next-banner background.
    pub const BANNER_PRIMARY: usize = 12;
    /// Next-banner icon stroke.
    pub const BANNER_SECONDARY: usize = 13;
    /// Next-banner text.
    pub const BANNER_TEXT: usize = 14;
}

/// One in-flight (or settled) transition.
#[derive(Debug, Clone, Copy)]
struct Slot {
    /// Color at the start of the transition.
    from: Rgb565,
    /// Color being transitioned toward.
    to: Rgb565,
    /// Tick at which the transition started.
    start_ms: u64,
}

impl Slot {
    const fn settled(color: Rgb565) -> Self {
        Self { from: color, to: color, start_ms: 0 }
    }
}

// =============================================================================
// Transition Table
// =============================================================================

/// Fixed table of color transitions, one slot per themed element.
pub struct TransitionTable {
    slots: [Slot; SLOT_COUNT],
}

impl TransitionTable {
    /// Table with every slot settled on black. The container snaps real
    /// colors in with [`set_immediate`](Self::set_immediate) during its
    /// first layout pass.
    pub const fn new() -> Self {
        Self { slots: [Slot::settled(BLACK); SLOT_COUNT] }
    }

    /// Snap a slot to a color, cancelling any in-flight transition.
    ///
    /// Used by style application: style swaps do not animate.
    pub fn set_immediate(&mut self, idx: usize, color: Rgb565) {
        self.slots[idx] = Slot::settled(color);
    }

    /// Start a transition toward `target`, cancelling any in-flight one by
    /// restarting from the color sampled at `now_ms`.
    ///
    /// Returns `true` if a new transition was started; retargeting to the
    /// current target is a no-op.
    pub fn retarget(&mut self, idx: usize, target: Rgb565, now_ms: u64) -> bool {
        if self.slots[idx].to == target {
            return false;
        }
        let current = self.sample(idx, now_ms);
        self.slots[idx] = Slot { from: current, to: target, start_ms: now_ms };
        true
    }

    /// Current color of a slot at `now_ms`.
    ///
    /// Pure: sampling never mutates the table, so a slot can be read any
    /// number of times per frame.
    pub fn sample(&self, idx: usize, now_ms: u64) -> Rgb565 {
        let s = &self.slots[idx];
        if s.from == s.to {
            return s.to;
        }
        let elapsed = now_ms.saturating_sub(s.start_ms);
        if elapsed >= HIGHLIGHT_FADE_MS {
            return s.to;
        }
        let t = elapsed as f32 / HIGHLIGHT_FADE_MS as f32;
        lerp_rgb565(s.from, s.to, t)
    }

    /// Target color of a slot (where it will settle).
    #[inline]
    pub const fn target(&self, idx: usize) -> Rgb565 {
        self.slots[idx].to
    }

    /// Whether every slot has reached its target at `now_ms`.
    pub fn settled(&self, now_ms: u64) -> bool {
        self.slots
            .iter()
            .all(|s| s.from == s.to || now_ms.saturating_sub(s.start_ms) >= HIGHLIGHT_FADE_MS)
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Color Interpolation
// =============================================================================

/// Linear interpolation between two Rgb565 colors.
///
/// Operates on the raw RGB components extracted from Rgb565 format.
/// Uses integer math with fixed-point for efficiency. `t` is clamped to
/// `[0, 1]`; at the endpoints the exact input colors are returned.
pub(crate) fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }

    // Extract RGB components from Rgb565
    // Rgb565: RRRRRGGGGGGBBBBB (5-6-5 bits)
    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let from_r = i32::from((from_raw >> 11) & 0x1F);
    let from_g = i32::from((from_raw >> 5) & 0x3F);
    let from_b = i32::from(from_raw & 0x1F);

    let to_r = i32::from((to_raw >> 11) & 0x1F);
    let to_g = i32::from((to_raw >> 5) & 0x3F);
    let to_b = i32::from(to_raw & 0x1F);

    // new = from + (to - from) * t, fixed-point with 8 fractional bits
    let t_fixed = (t * 256.0) as i32;

    let new_r = from_r + (((to_r - from_r) * t_fixed) >> 8);
    let new_g = from_g + (((to_g - from_g) * t_fixed) >> 8);
    let new_b = from_b + (((to_b - from_b) * t_fixed) >> 8);

    let r = new_r.clamp(0, 31) as u16;
    let g = new_g.clamp(0, 63) as u16;
    let b = new_b.clamp(0, 31) as u16;

    Rgb565::new(r as u8, g as u8, b as u8)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use embedded_graphics::pixelcolor::RgbColor;

    const RED: Rgb565 = Rgb565::RED;

    // -------------------------------------------------------------------------
    // Color Interpolation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lerp_rgb565_same_color() {
        assert_eq!(lerp_rgb565(RED, RED, 0.5), RED, "Lerping RED to RED should return RED");
    }

    #[test]
    fn test_lerp_rgb565_t_zero() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0.0), BLACK, "At t=0, should return 'from' color");
    }

    #[test]
    fn test_lerp_rgb565_t_one() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1.0), WHITE, "At t=1, should return 'to' color");
    }

    #[test]
    fn test_lerp_rgb565_midpoint() {
        let result = lerp_rgb565(BLACK, WHITE, 0.5);
        let raw = result.into_storage();
        let r = (raw >> 11) & 0x1F;
        let g = (raw >> 5) & 0x3F;
        let b = raw & 0x1F;

        // Midpoint of BLACK (0,0,0) and WHITE (31,63,31) should be around (15,31,15)
        assert!(r > 10 && r < 20, "Red component should be around midpoint");
        assert!(g > 25 && g < 40, "Green component should be around midpoint");
        assert!(b > 10 && b < 20, "Blue component should be around midpoint");
    }

    // -------------------------------------------------------------------------
    // Transition Table Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_table_settled_on_black() {
        let table = TransitionTable::new();
        for idx in 0..SLOT_COUNT {
            assert_eq!(table.sample(idx, 0), BLACK, "Slot {idx} should start settled on black");
        }
        assert!(table.settled(0));
    }

    #[test]
    fn test_retarget_reports_new_transitions() {
        let mut table = TransitionTable::new();
        assert!(table.retarget(slot::CARD_TOP, RED, 0), "New target should start a transition");
        assert_eq!(table.target(slot::CARD_TOP), RED, "Target reports where the slot will settle");
        assert!(!table.retarget(slot::CARD_TOP, RED, 10), "Same target should be a no-op");
        assert_eq!(table.target(slot::CARD_TOP), RED, "A no-op retarget leaves the target alone");
    }

    #[test]
    fn test_sample_reaches_target_after_duration() {
        let mut table = TransitionTable::new();
        table.retarget(slot::CARD_TOP, WHITE, 1000);

        assert_eq!(table.sample(slot::CARD_TOP, 1000), BLACK, "At the start tick, still the old color");
        assert_eq!(
            table.sample(slot::CARD_TOP, 1000 + HIGHLIGHT_FADE_MS),
            WHITE,
            "At the end of the fade, exactly the target"
        );
        assert_eq!(
            table.sample(slot::CARD_TOP, 1000 + 10 * HIGHLIGHT_FADE_MS),
            WHITE,
            "Long after the fade, still the target"
        );
    }

    #[test]
    fn test_sample_midway_is_between() {
        let mut table = TransitionTable::new();
        table.retarget(slot::CARD_TOP, WHITE, 0);

        let mid = table.sample(slot::CARD_TOP, HIGHLIGHT_FADE_MS / 2);
        assert_ne!(mid, BLACK, "Midway should have left the start color");
        assert_ne!(mid, WHITE, "Midway should not have reached the target");
    }

    #[test]
    fn test_sampling_is_pure() {
        let mut table = TransitionTable::new();
        table.retarget(slot::CARD_TOP, WHITE, 0);

        let a = table.sample(slot::CARD_TOP, 300);
        let b = table.sample(slot::CARD_TOP, 300);
        assert_eq!(a, b, "Sampling the same tick twice must agree");
    }

    #[test]
    fn test_retarget_cancels_in_flight_transition() {
        let mut table = TransitionTable::new();
        table.retarget(slot::CARD_TOP, WHITE, 0);

        // Halfway through, retarget back toward RED.
        let halfway = table.sample(slot::CARD_TOP, HIGHLIGHT_FADE_MS / 2);
        table.retarget(slot::CARD_TOP, RED, HIGHLIGHT_FADE_MS / 2);

        // The new transition starts from the sampled halfway color.
        assert_eq!(
            table.sample(slot::CARD_TOP, HIGHLIGHT_FADE_MS / 2),
            halfway,
            "Cancellation must not jump: new transition starts where the old one was"
        );
        assert_eq!(
            table.sample(slot::CARD_TOP, HIGHLIGHT_FADE_MS / 2 + HIGHLIGHT_FADE_MS),
            RED,
            "The replacement transition settles on its own target"
        );
    }

    #[test]
    fn test_set_immediate_snaps_and_settles() {
        let mut table = TransitionTable::new();
        table.retarget(slot::PRIMARY_TEXT, WHITE, 0);
        table.set_immediate(slot::PRIMARY_TEXT, RED);

        assert_eq!(table.sample(slot::PRIMARY_TEXT, 1), RED, "Snap applies instantly");
        assert!(table.settled(1), "Snapped slot counts as settled");
    }

    #[test]
    fn test_settled_tracks_all_slots() {
        let mut table = TransitionTable::new();
        table.retarget(slot::CARD_TOP, WHITE, 0);
        table.retarget(slot::LANE_DEFAULT, RED, 0);

        assert!(!table.settled(HIGHLIGHT_FADE_MS / 2), "In-flight slots keep the table unsettled");
        assert!(table.settled(HIGHLIGHT_FADE_MS), "All slots settle after the fade duration");
    }
}
