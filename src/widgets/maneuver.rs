//! The primary maneuver card: icon, remaining distance, and instruction labels.
//!
//! This view is always visible. Its text labels arrive pre-resolved as
//! [`AttributedText`] (the container runs the customization delegate before
//! handing them over), and its icon/distance colors are pushed in by the
//! container on every refresh so that highlight fades reach the glyphs.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Rectangle};
use embedded_graphics::text::{Alignment, Text};

use crate::colors::{GRAY, WHITE};
use crate::config::{CARD_PADDING, ICON_GAP, ICON_SIZE};
use crate::gradient::{GradientOverlay, OverlayHost};
use crate::model::{ManeuverType, format_distance};
use crate::style::CardStyle;
use crate::text::AttributedText;
use crate::widgets::primitives::draw_maneuver_icon;

use heapless::String;

/// Colors for the non-label elements of the maneuver card, sampled from the
/// active color transitions on each refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverColors {
    pub icon_primary: Rgb565,
    pub icon_secondary: Rgb565,
    pub distance_value: Rgb565,
    pub distance_unit: Rgb565,
}

impl Default for ManeuverColors {
    fn default() -> Self {
        Self {
            icon_primary: WHITE,
            icon_secondary: GRAY,
            distance_value: WHITE,
            distance_unit: GRAY,
        }
    }
}

// =============================================================================
// Maneuver Card View
// =============================================================================

pub struct ManeuverCardView {
    bounds: Rectangle,
    overlay: Option<GradientOverlay>,
    maneuver: ManeuverType,
    distance_value: String<8>,
    distance_unit: &'static str,
    primary: AttributedText,
    secondary: Option<AttributedText>,
    colors: ManeuverColors,
}

impl ManeuverCardView {
    pub fn new(bounds: Rectangle) -> Self {
        let (distance_value, distance_unit) = format_distance(0.0);
        Self {
            bounds,
            overlay: None,
            maneuver: ManeuverType::Straight,
            distance_value,
            distance_unit,
            primary: AttributedText::new("", WHITE),
            secondary: None,
            colors: ManeuverColors::default(),
        }
    }

    pub fn set_maneuver(&mut self, maneuver: ManeuverType) {
        self.maneuver = maneuver;
    }

    /// Update the remaining-distance readout from raw meters.
    pub fn set_distance(&mut self, meters: f32) {
        let (value, unit) = format_distance(meters);
        self.distance_value = value;
        self.distance_unit = unit;
    }

    /// Replace both labels with delegate-resolved text.
    pub fn set_labels(&mut self, primary: AttributedText, secondary: Option<AttributedText>) {
        self.primary = primary;
        self.secondary = secondary;
    }

    pub fn set_colors(&mut self, colors: ManeuverColors) {
        self.colors = colors;
    }

    #[cfg(test)]
    pub(crate) fn colors(&self) -> ManeuverColors {
        self.colors
    }

    #[cfg(test)]
    pub(crate) fn primary_label(&self) -> &AttributedText {
        &self.primary
    }

    #[cfg(test)]
    pub(crate) fn secondary_label(&self) -> Option<&AttributedText> {
        self.secondary.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn distance_readout(&self) -> (&str, &'static str) {
        (&self.distance_value, self.distance_unit)
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        style: &CardStyle,
    ) -> Result<(), D::Error> {
        if let Some(overlay) = &self.overlay {
            overlay.draw(display)?;
        }

        let origin = self.bounds.top_left;
        let icon_center = Point::new(
            origin.x + (CARD_PADDING + ICON_SIZE / 2) as i32,
            origin.y + (self.bounds.size.height / 2) as i32,
        );

        // Ring first so the arrow overdraws it where they meet.
        let ring_diameter = ICON_SIZE;
        Circle::with_center(icon_center, ring_diameter)
            .into_styled(embedded_graphics::primitives::PrimitiveStyle::with_stroke(
                self.colors.icon_secondary,
                1,
            ))
            .draw(display)?;
        draw_maneuver_icon(
            display,
            icon_center,
            (ICON_SIZE / 2) as i32 - 6,
            self.maneuver,
            self.colors.icon_primary,
            3,
        )?;

        let text_x = origin.x + (CARD_PADDING + ICON_SIZE + ICON_GAP) as i32;

        // Distance readout: large value, small unit trailing on the same baseline.
        let value_y = origin.y + CARD_PADDING as i32 + style.distance_value_font.character_size.height as i32;
        let value_style = MonoTextStyle::new(style.distance_value_font, self.colors.distance_value);
        Text::with_alignment(&self.distance_value, Point::new(text_x, value_y), value_style, Alignment::Left)
            .draw(display)?;

        let unit_x = text_x
            + (self.distance_value.len() as i32 + 1)
                * style.distance_value_font.character_size.width as i32;
        let unit_style = MonoTextStyle::new(style.distance_unit_font, self.colors.distance_unit);
        Text::with_alignment(self.distance_unit, Point::new(unit_x, value_y), unit_style, Alignment::Left)
            .draw(display)?;

        // Instruction labels under the distance readout.
        let primary_y = value_y + 6 + style.primary_font.character_size.height as i32;
        let primary_style = MonoTextStyle::new(style.primary_font, self.primary.color);
        Text::with_alignment(&self.primary.text, Point::new(text_x, primary_y), primary_style, Alignment::Left)
            .draw(display)?;

        if let Some(secondary) = &self.secondary {
            let secondary_y = primary_y + 4 + style.secondary_font.character_size.height as i32;
            let secondary_style = MonoTextStyle::new(style.secondary_font, secondary.color);
            Text::with_alignment(
                &secondary.text,
                Point::new(text_x, secondary_y),
                secondary_style,
                Alignment::Left,
            )
            .draw(display)?;
        }

        Ok(())
    }
}

impl OverlayHost for ManeuverCardView {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    // The maneuver card never hides.
    fn is_hidden(&self) -> bool {
        false
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CARD_WIDTH, MANEUVER_HEIGHT};
    use embedded_graphics_simulator::SimulatorDisplay;

    fn view() -> ManeuverCardView {
        ManeuverCardView::new(Rectangle::new(Point::zero(), Size::new(CARD_WIDTH, MANEUVER_HEIGHT)))
    }

    #[test]
    fn test_distance_readout_updates() {
        let mut card = view();
        card.set_distance(847.0);
        assert_eq!(card.distance_readout(), ("845", "m"));

        card.set_distance(2500.0);
        assert_eq!(card.distance_readout(), ("2.5", "km"));
    }

    #[test]
    fn test_never_hidden() {
        let card = view();
        assert!(!card.is_hidden(), "The maneuver card is always visible");
    }

    #[test]
    fn test_draw_with_and_without_secondary() {
        let mut card = view();
        let style = CardStyle::day();
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(CARD_WIDTH, MANEUVER_HEIGHT));

        card.set_labels(AttributedText::new("Turn right", WHITE), None);
        card.draw(&mut display, &style).expect("Draw without secondary label");

        card.set_labels(
            AttributedText::new("Turn right", WHITE),
            Some(AttributedText::new("onto Main St", GRAY)),
        );
        card.draw(&mut display, &style).expect("Draw with secondary label");
    }
}
