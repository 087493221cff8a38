//! Lane guidance strip: one arrow per approaching lane.
//!
//! Hidden by default; the container reveals it only while the upcoming
//! instruction actually carries lane data, and hides it again the moment
//! that data disappears. Usable lanes draw in the highlighted lane color,
//! the rest in the dimmed default.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::colors::{GRAY, WHITE};
use crate::config::{LANE_SLOT_WIDTH, MAX_LANES};
use crate::gradient::{GradientOverlay, OverlayHost};
use crate::model::LaneIndication;
use crate::widgets::primitives::draw_maneuver_icon;

/// Lane arrow colors, sampled from the active color transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneColors {
    /// Lanes the driver cannot use for this maneuver.
    pub dimmed: Rgb565,
    /// Lanes that serve the upcoming maneuver.
    pub usable: Rgb565,
}

impl Default for LaneColors {
    fn default() -> Self {
        Self { dimmed: GRAY, usable: WHITE }
    }
}

// =============================================================================
// Lane Guidance View
// =============================================================================

pub struct LaneGuidanceView {
    bounds: Rectangle,
    hidden: bool,
    overlay: Option<GradientOverlay>,
    lanes: Vec<LaneIndication, MAX_LANES>,
    colors: LaneColors,
}

impl LaneGuidanceView {
    /// A new lane strip starts hidden; it only appears once lane data does.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            hidden: true,
            overlay: None,
            lanes: Vec::new(),
            colors: LaneColors::default(),
        }
    }

    /// Reveal the strip with fresh lane data. Lanes beyond the slot capacity
    /// are dropped from the far end.
    pub fn show(&mut self, lanes: &[LaneIndication]) {
        self.lanes.clear();
        for lane in lanes.iter().take(MAX_LANES) {
            // Capacity is checked by the take() above.
            let _ = self.lanes.push(*lane);
        }
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn set_colors(&mut self, colors: LaneColors) {
        self.colors = colors;
    }

    pub fn lanes(&self) -> &[LaneIndication] {
        &self.lanes
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.hidden || self.lanes.is_empty() {
            return Ok(());
        }

        if let Some(overlay) = &self.overlay {
            overlay.draw(display)?;
        }

        // Center the lane row inside the strip.
        let total_width = self.lanes.len() as i32 * LANE_SLOT_WIDTH as i32;
        let center_y = self.bounds.top_left.y + (self.bounds.size.height / 2) as i32;
        let mut slot_x = self.bounds.top_left.x + (self.bounds.size.width as i32 - total_width) / 2
            + (LANE_SLOT_WIDTH / 2) as i32;

        for lane in &self.lanes {
            let color = if lane.usable { self.colors.usable } else { self.colors.dimmed };
            draw_maneuver_icon(
                display,
                Point::new(slot_x, center_y),
                (LANE_SLOT_WIDTH / 2) as i32 - 3,
                lane.direction,
                color,
                2,
            )?;
            slot_x += LANE_SLOT_WIDTH as i32;
        }

        Ok(())
    }
}

impl OverlayHost for LaneGuidanceView {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn overlay(&self) -> Option<&GradientOverlay> {
        self.overlay.as_ref()
    }

    fn overlay_mut(&mut self) -> &mut Option<GradientOverlay> {
        &mut self.overlay
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
