//! Card styling: per-state palettes, fonts, and metrics.
//!
//! A [`CardStyle`] is an immutable bundle of everything the card needs to
//! render in one visual mode (day or night). Both proximity states (normal
//! and highlighted) are fully populated at construction, so every render
//! pass resolves every color without fallbacks. Styles are swapped wholesale
//! via the container's `configure`; individual fields are never mutated in
//! place.
//!
//! # Fonts
//!
//! Font references follow the pattern of pre-computed style constants: the
//! style stores `&'static MonoFont` references and widgets build
//! `MonoTextStyle::new(font, dynamic_color)` with the current transition
//! color, so only the color varies per frame.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use profont::PROFONT_24_POINT;

use crate::colors::{BLACK, DARK_GRAY, GRAY, HIGHLIGHT_BLUE, HIGHLIGHT_BLUE_DARK, INK, LIGHT_GRAY, SLATE, WHITE};
use crate::config::HIGHLIGHT_DISTANCE_M;

// =============================================================================
// Per-State Palette
// =============================================================================

/// Complete color set for one proximity state.
///
/// Every themed element of the card has exactly one entry here; the
/// highlight state machine retargets each of them when the state flips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePalette {
    /// Card background (top gradient stop; the bottom stop is derived by
    /// fading toward black).
    pub background: Rgb565,
    /// Primary instruction label text.
    pub primary_text: Rgb565,
    /// Secondary instruction label text.
    pub secondary_text: Rgb565,
    /// Distance value text (large font).
    pub distance_value: Rgb565,
    /// Distance unit text (small font).
    pub distance_unit: Rgb565,
    /// Maneuver icon stroke.
    pub icon_primary: Rgb565,
    /// Maneuver icon accent ring and card border.
    pub icon_secondary: Rgb565,
    /// Lane arrows not on the route.
    pub lane_default: Rgb565,
    /// Lane arrows the route follows.
    pub lane_highlighted: Rgb565,
    /// Next-banner background (top gradient stop).
    pub banner_primary: Rgb565,
    /// Next-banner icon stroke.
    pub banner_secondary: Rgb565,
    /// Next-banner text.
    pub banner_text: Rgb565,
}

// =============================================================================
// Card Style
// =============================================================================

/// Immutable style bundle for one visual mode.
///
/// `MonoFont` carries a trait-object glyph mapping, so the style itself is
/// only `Copy`; equality checks go through the palettes.
#[derive(Clone, Copy)]
pub struct CardStyle {
    /// Corner radius of the card background, in pixels.
    pub corner_radius: u32,
    /// Distance threshold (meters) below which the card highlights.
    pub highlight_distance: f32,
    /// Colors for the far-from-maneuver state.
    pub normal: StatePalette,
    /// Colors for the near-maneuver state.
    pub highlighted: StatePalette,
    /// Primary instruction font.
    pub primary_font: &'static MonoFont<'static>,
    /// Secondary instruction font.
    pub secondary_font: &'static MonoFont<'static>,
    /// Distance value font (large).
    pub distance_value_font: &'static MonoFont<'static>,
    /// Distance unit font (small).
    pub distance_unit_font: &'static MonoFont<'static>,
    /// Next-banner text font.
    pub banner_font: &'static MonoFont<'static>,
}

impl Default for CardStyle {
    /// Returns the default style (day mode).
    fn default() -> Self {
        Self::day()
    }
}

impl CardStyle {
    /// Day style: light card, dark text, blue highlight.
    pub const fn day() -> Self {
        Self {
            corner_radius: 8,
            highlight_distance: HIGHLIGHT_DISTANCE_M,
            normal: StatePalette {
                background: WHITE,
                primary_text: INK,
                secondary_text: GRAY,
                distance_value: INK,
                distance_unit: DARK_GRAY,
                icon_primary: INK,
                icon_secondary: GRAY,
                lane_default: GRAY,
                lane_highlighted: INK,
                banner_primary: LIGHT_GRAY,
                banner_secondary: DARK_GRAY,
                banner_text: INK,
            },
            highlighted: StatePalette {
                background: HIGHLIGHT_BLUE,
                primary_text: WHITE,
                secondary_text: LIGHT_GRAY,
                distance_value: WHITE,
                distance_unit: LIGHT_GRAY,
                icon_primary: WHITE,
                icon_secondary: LIGHT_GRAY,
                lane_default: LIGHT_GRAY,
                lane_highlighted: WHITE,
                banner_primary: HIGHLIGHT_BLUE_DARK,
                banner_secondary: LIGHT_GRAY,
                banner_text: WHITE,
            },
            primary_font: &FONT_10X20,
            secondary_font: &FONT_6X10,
            distance_value_font: &PROFONT_24_POINT,
            distance_unit_font: &FONT_6X10,
            banner_font: &FONT_6X10,
        }
    }

    /// Night style: dark card, light text, darker blue highlight.
    pub const fn night() -> Self {
        Self {
            corner_radius: 8,
            highlight_distance: HIGHLIGHT_DISTANCE_M,
            normal: StatePalette {
                background: SLATE,
                primary_text: WHITE,
                secondary_text: LIGHT_GRAY,
                distance_value: WHITE,
                distance_unit: GRAY,
                icon_primary: WHITE,
                icon_secondary: GRAY,
                lane_default: GRAY,
                lane_highlighted: WHITE,
                banner_primary: BLACK,
                banner_secondary: GRAY,
                banner_text: LIGHT_GRAY,
            },
            highlighted: StatePalette {
                background: HIGHLIGHT_BLUE_DARK,
                primary_text: WHITE,
                secondary_text: LIGHT_GRAY,
                distance_value: WHITE,
                distance_unit: LIGHT_GRAY,
                icon_primary: WHITE,
                icon_secondary: LIGHT_GRAY,
                lane_default: LIGHT_GRAY,
                lane_highlighted: WHITE,
                banner_primary: SLATE,
                banner_secondary: LIGHT_GRAY,
                banner_text: WHITE,
            },
            primary_font: &FONT_10X20,
            secondary_font: &FONT_6X10,
            distance_value_font: &PROFONT_24_POINT,
            distance_unit_font: &FONT_6X10,
            banner_font: &FONT_6X10,
        }
    }

    /// Palette for a proximity state.
    #[inline]
    pub const fn palette(&self, highlighted: bool) -> &StatePalette {
        if highlighted { &self.highlighted } else { &self.normal }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_day() {
        let default = CardStyle::default();
        let day = CardStyle::day();
        assert_eq!(default.normal, day.normal);
        assert_eq!(default.highlighted, day.highlighted);
    }

    #[test]
    fn test_day_and_night_differ() {
        assert_ne!(CardStyle::day().normal.background, CardStyle::night().normal.background);
    }

    #[test]
    fn test_palette_selects_state() {
        let style = CardStyle::day();
        assert_eq!(style.palette(false), &style.normal);
        assert_eq!(style.palette(true), &style.highlighted);
    }

    #[test]
    fn test_states_visually_distinct() {
        // The whole point of the highlight state is a visible change.
        for style in [CardStyle::day(), CardStyle::night()] {
            assert_ne!(style.normal.background, style.highlighted.background);
        }
    }
}
