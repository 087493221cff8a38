//! Route data consumed by the instruction card.
//!
//! These types mirror what the routing layer supplies and are read-only from
//! the card's perspective: the card never computes distances, routes, or
//! maneuvers. A [`RouteStep`] carries the visual instructions published along
//! the step; the card consumes only the last one.
//!
//! # Heapless Text
//!
//! All instruction text uses `heapless::String` with `core::fmt::Write`,
//! keeping the crate `no_std` compatible with no allocator:
//!
//! ```ignore
//! let mut value: String<12> = String::new();
//! let _ = write!(value, "{:.1}", km);
//! ```

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::MAX_LANES;

/// Capacity of instruction text buffers.
pub const TEXT_CAP: usize = 64;

/// Maximum visual instructions carried per route step.
pub const STEP_INSTRUCTION_CAP: usize = 4;

// =============================================================================
// Maneuver Types
// =============================================================================

/// Turn categories at a maneuver point.
///
/// Drives the rotated arrow icon on the card and the per-lane arrows in the
/// lane guidance strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManeuverType {
    /// Continue straight through.
    #[default]
    Straight,
    /// Keep slightly left (~30 degrees).
    SlightLeft,
    /// Standard left turn (~90 degrees).
    Left,
    /// Sharp left turn (~135 degrees).
    SharpLeft,
    /// Keep slightly right (~30 degrees).
    SlightRight,
    /// Standard right turn (~90 degrees).
    Right,
    /// Sharp right turn (~135 degrees).
    SharpRight,
    /// Full reversal of direction.
    UTurn,
    /// Arrival at the destination.
    Arrive,
}

impl ManeuverType {
    /// Arrow heading in degrees, clockwise from straight-up.
    ///
    /// Used by the icon renderer to rotate the arrow shaft and head.
    /// `Arrive` reuses the straight-up heading (rendered with a distinct
    /// endpoint marker instead of a rotated shaft).
    pub const fn heading_degrees(self) -> f32 {
        match self {
            Self::Straight | Self::Arrive => 0.0,
            Self::SlightLeft => -30.0,
            Self::Left => -90.0,
            Self::SharpLeft => -135.0,
            Self::SlightRight => 30.0,
            Self::Right => 90.0,
            Self::SharpRight => 135.0,
            Self::UTurn => 180.0,
        }
    }
}

// =============================================================================
// Lane Guidance
// =============================================================================

/// A single lane at the upcoming intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneIndication {
    /// Direction this lane leads to.
    pub direction: ManeuverType,
    /// Whether taking this lane follows the route. Usable lanes render in
    /// the highlighted lane color, the rest in the default color.
    pub usable: bool,
}

// =============================================================================
// Visual Instructions
// =============================================================================

/// Text plus maneuver data for one instruction line.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionContent {
    /// Human-readable instruction text (e.g., "Turn left onto Pine St").
    pub text: String<TEXT_CAP>,
    /// Maneuver depicted by the icon.
    pub maneuver: ManeuverType,
}

impl InstructionContent {
    /// Build content from a text slice, truncating past the buffer capacity.
    pub fn new(text: &str, maneuver: ManeuverType) -> Self {
        Self { text: clipped(text), maneuver }
    }
}

/// The optional sub-instruction carrying lane guidance and/or a preview of
/// the maneuver after the upcoming one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TertiaryInstruction {
    /// Preview text for the following maneuver. Presence of this field (not
    /// of the tertiary itself) controls next-banner visibility.
    pub text: Option<String<TEXT_CAP>>,
    /// Maneuver previewed by the next-banner icon.
    pub maneuver: Option<ManeuverType>,
    /// Lane layout at the upcoming intersection. Presence of lane data
    /// controls lane-strip visibility.
    pub lanes: Vec<LaneIndication, MAX_LANES>,
}

impl TertiaryInstruction {
    /// Sub-instruction carrying banner text and an optional preview maneuver.
    pub fn with_text(text: &str, maneuver: Option<ManeuverType>) -> Self {
        Self { text: Some(clipped(text)), maneuver, lanes: Vec::new() }
    }

    /// Sub-instruction carrying lane indications only. Lanes past the slot
    /// capacity are dropped.
    pub fn with_lanes(lanes: &[LaneIndication]) -> Self {
        let mut out = Self::default();
        for lane in lanes.iter().take(MAX_LANES) {
            let _ = out.lanes.push(*lane);
        }
        out
    }
}

/// One visual instruction banner supplied by the routing layer.
///
/// Read-only for the card: primary content feeds the maneuver section,
/// secondary is an optional second line, and the tertiary sub-instruction is
/// used solely for visibility decisions of the lane strip and next banner.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualInstruction {
    /// Main instruction (always present).
    pub primary: InstructionContent,
    /// Optional second line (e.g., the road name after the turn).
    pub secondary: Option<InstructionContent>,
    /// Optional lane guidance / next-maneuver preview.
    pub tertiary: Option<TertiaryInstruction>,
}

impl VisualInstruction {
    /// Instruction with only a primary line.
    pub fn primary_only(text: &str, maneuver: ManeuverType) -> Self {
        Self {
            primary: InstructionContent::new(text, maneuver),
            secondary: None,
            tertiary: None,
        }
    }
}

/// A single step along the route, as supplied by the routing layer.
#[derive(Debug, Clone, Default)]
pub struct RouteStep {
    /// Visual instructions published for display along this step.
    /// The card consumes only the last one.
    pub instructions: Vec<VisualInstruction, STEP_INSTRUCTION_CAP>,
}

impl RouteStep {
    /// The latest instruction for this step, if any.
    #[inline]
    pub fn current_instruction(&self) -> Option<&VisualInstruction> {
        self.instructions.last()
    }
}

// =============================================================================
// Distance Formatting
// =============================================================================

/// Format a distance in meters as a `(value, unit)` pair.
///
/// Value and unit are separate because they render in different fonts and
/// carry independently themed colors:
/// - below 1 km: meters rounded down to a multiple of 5 (`"845"`, `"m"`)
/// - 1 km and above: one decimal (`"1.2"`, `"km"`)
///
/// Negative inputs clamp to zero; the routing layer supplies non-negative
/// distances.
pub fn format_distance(meters: f32) -> (String<8>, &'static str) {
    let meters = if meters < 0.0 { 0.0 } else { meters };
    let mut value: String<8> = String::new();

    if meters < 1000.0 {
        let rounded = (meters as u32 / 5) * 5;
        let _ = write!(value, "{rounded}");
        (value, "m")
    } else {
        let km = meters / 1000.0;
        let _ = write!(value, "{km:.1}");
        (value, "km")
    }
}

/// Copy a text slice into a bounded buffer, truncating at capacity.
pub(crate) fn clipped(text: &str) -> String<TEXT_CAP> {
    let mut out: String<TEXT_CAP> = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
