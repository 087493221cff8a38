//! "Then" banner previewing the instruction after the current one.
//!
//! Hidden by default; the container reveals it only while the upcoming
//! instruction carries tertiary banner text. The banner stores its text as
//! resolved [`AttributedText`]; when a delegate supplied it, the customized
//! color and wording survive into the draw unchanged.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Text};

use crate::colors::{GRAY, WHITE};
use crate::config::CARD_PADDING;
use crate::gradient::{GradientOverlay, OverlayHost};
use crate::model::ManeuverType;
use crate::style::CardStyle;
use crate::text::AttributedText;
use crate::widgets::primitives::draw_maneuver_icon;

/// Arrow radius for the small banner maneuver icon.
const BANNER_ICON_RADIUS: i32 = 9;

pub struct NextBannerView {
    bounds: Rectangle,
    hidden: bool,
    overlay: Option<GradientOverlay>,
    text: AttributedText,
    /// Set when the delegate supplied the text; the container then leaves
    /// the text color alone on refresh instead of driving it.
    text_overridden: bool,
    maneuver: Option<ManeuverType>,
    icon_color: Rgb565,
}

impl NextBannerView {
    /// A new banner starts hidden; it only appears once banner text does.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            hidden: true,
            overlay: None,
            text: AttributedText::new("", WHITE),
            text_overridden: false,
            maneuver: None,
            icon_color: GRAY,
        }
    }

    /// Reveal the banner with resolved text and an optional maneuver icon.
    /// `overridden` records whether a delegate supplied the text.
    pub fn show(&mut self, text: AttributedText, maneuver: Option<ManeuverType>, overridden: bool) {
        self.text = text;
        self.text_overridden = overridden;
        self.maneuver = maneuver;
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn set_icon_color(&mut self, color: Rgb565) {
        self.icon_color = color;
    }

    /// Recolor the banner text without touching its content.
    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text.color = color;
    }

    pub fn text(&self) -> &AttributedText {
        &self.text
    }

    pub fn text_overridden(&self) -> bool {
        self.text_overridden
    }

    #[cfg(test)]
    pub(crate) fn icon_color(&self) -> Rgb565 {
        self.icon_color
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        style: &CardStyle,
    ) -> Result<(), D::Error> {
        if self.hidden {
            return Ok(());
        }

        if let Some(overlay) = &self.overlay {
            overlay.draw(display)?;
        }

        let center_y = self.bounds.top_left.y + (self.bounds.size.height / 2) as i32;
        let mut text_x = self.bounds.top_left.x + CARD_PADDING as i32;

        if let Some(maneuver) = self.maneuver {
            draw_maneuver_icon(
                display,
                Point::new(text_x + BANNER_ICON_RADIUS, center_y),
                BANNER_ICON_RADIUS,
                maneuver,
                self.icon_color,
                2,
            )?;
            text_x += BANNER_ICON_RADIUS * 2 + CARD_PADDING as i32;
        }

        let baseline_y = center_y + (style.banner_font.character_size.height / 2) as i32 - 2;
        let text_style = MonoTextStyle::new(style.banner_font, self.text.color);
        Text::with_alignment(&self.text.text, Point::new(text_x, baseline_y), text_style, Alignment::Left)
            .draw(display)?;

        Ok(())
    }
}

impl OverlayHost for NextBannerView {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BANNER_HEIGHT, CARD_WIDTH};
    use embedded_graphics_simulator::SimulatorDisplay;

    fn view() -> NextBannerView {
        NextBannerView::new(Rectangle::new(Point::zero(), Size::new(CARD_WIDTH, BANNER_HEIGHT)))
    }

    #[test]
    fn test_starts_hidden() {
        assert!(view().is_hidden(), "Banner must start hidden");
    }

    #[test]
    fn test_show_stores_resolved_text() {
        let mut banner = view();
        banner.show(AttributedText::new("Then turn left", GRAY), Some(ManeuverType::Left), false);
        assert!(!banner.is_hidden());
        assert_eq!(banner.text().text.as_str(), "Then turn left");
        assert_eq!(banner.text().color, GRAY);
        assert!(!banner.text_overridden());
    }

    #[test]
    fn test_show_records_delegate_override() {
        let mut banner = view();
        banner.show(AttributedText::new("THEN LEFT", WHITE), None, true);
        assert!(banner.text_overridden(), "Delegate-supplied text is flagged as overridden");
    }

    #[test]
    fn test_draw_hidden_and_visible() {
        let mut banner = view();
        let style = CardStyle::day();
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(CARD_WIDTH, BANNER_HEIGHT));

        banner.draw(&mut display, &style).expect("Hidden banner draws nothing");

        banner.show(AttributedText::new("Then merge right", WHITE), Some(ManeuverType::SlightRight), false);
        banner.draw(&mut display, &style).expect("Visible banner draws");
    }
}
