//! Attributed text and the label presentation delegate.
//!
//! An external observer may override the rendered text for the primary and
//! secondary instruction labels. The delegate is a pair of independently
//! optional plain function pointers: non-owning, nullable, and absent by
//! default. When no override applies, a style-driven default recolors the
//! presented text wholesale so custom labels still render legibly under the
//! active theme — the resolution never produces "no text".
//!
//! The delegate follows the crate's pattern of passing behavior as plain
//! functions (the cell renderers take their color and critical classifiers
//! the same way).

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::model::{InstructionContent, TEXT_CAP, clipped};
use crate::style::CardStyle;

// =============================================================================
// Attributed Text
// =============================================================================

/// Text with a single foreground color covering its entire range.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedText {
    /// The rendered characters.
    pub text: String<TEXT_CAP>,
    /// Foreground color applied to the whole range.
    pub color: Rgb565,
}

impl AttributedText {
    /// Attributed text from a slice, truncated at capacity.
    pub fn new(text: &str, color: Rgb565) -> Self {
        Self { text: clipped(text), color }
    }

    /// Same text, different color.
    pub fn recolored(&self, color: Rgb565) -> Self {
        Self { text: self.text.clone(), color }
    }
}

// =============================================================================
// Label Kinds and Delegate
// =============================================================================

/// Which instruction label is being presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Main instruction line.
    Primary,
    /// Optional second line.
    Secondary,
}

/// Override callback: receives the instruction and the text about to be
/// presented; returns a replacement, or `None` to keep the default.
pub type PresentFn = fn(&InstructionContent, &AttributedText) -> Option<AttributedText>;

/// Presentation delegate with two independently optional callback slots.
///
/// Returning `None` from a callback is normal and falls through to the
/// default coloring; it is never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDelegate {
    /// Called before presenting the primary label.
    pub primary: Option<PresentFn>,
    /// Called before presenting the secondary label.
    pub secondary: Option<PresentFn>,
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve the text to present for a label.
///
/// Order:
/// 1. primary label + primary callback supplies an override: use it;
/// 2. secondary label + secondary callback supplies an override: use it;
/// 3. default: recolor `presented` wholesale with the primary-label color of
///    the current proximity state.
///
/// The default branch always fires when no override matches, so the result
/// is never absent.
pub fn resolve_presented_text(
    kind: LabelKind,
    delegate: &TextDelegate,
    instruction: &InstructionContent,
    presented: &AttributedText,
    style: &CardStyle,
    highlighted: bool,
) -> AttributedText {
    let slot = match kind {
        LabelKind::Primary => delegate.primary,
        LabelKind::Secondary => delegate.secondary,
    };

    if let Some(present) = slot
        && let Some(text) = present(instruction, presented)
    {
        return text;
    }

    presented.recolored(style.palette(highlighted).primary_text)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::model::ManeuverType;

    fn sample_instruction() -> InstructionContent {
        InstructionContent::new("Turn left onto Pine St", ManeuverType::Left)
    }

    // -------------------------------------------------------------------------
    // Fallback Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_delegate_falls_back_to_theme_color() {
        let style = CardStyle::day();
        let presented = AttributedText::new("Turn left onto Pine St", BLACK);

        let resolved = resolve_presented_text(
            LabelKind::Primary,
            &TextDelegate::default(),
            &sample_instruction(),
            &presented,
            &style,
            false,
        );

        assert_eq!(resolved.text, presented.text, "Fallback keeps the presented text");
        assert_eq!(resolved.color, style.normal.primary_text, "Fallback uses the normal primary color");
    }

    #[test]
    fn test_fallback_uses_highlighted_color_when_highlighted() {
        let style = CardStyle::day();
        let presented = AttributedText::new("Turn left", BLACK);

        let resolved = resolve_presented_text(
            LabelKind::Primary,
            &TextDelegate::default(),
            &sample_instruction(),
            &presented,
            &style,
            true,
        );

        assert_eq!(
            resolved.color,
            style.highlighted.primary_text,
            "Highlighted state recolors with the highlighted primary color"
        );
    }

    #[test]
    fn test_secondary_without_callback_also_falls_back() {
        let style = CardStyle::night();
        let presented = AttributedText::new("Pine St", WHITE);

        let resolved = resolve_presented_text(
            LabelKind::Secondary,
            &TextDelegate::default(),
            &sample_instruction(),
            &presented,
            &style,
            false,
        );

        // There is no silent no-override outcome: the default always applies.
        assert_eq!(resolved.color, style.normal.primary_text);
    }

    // -------------------------------------------------------------------------
    // Override Tests
    // -------------------------------------------------------------------------

    fn shout(_: &InstructionContent, _: &AttributedText) -> Option<AttributedText> {
        Some(AttributedText::new("LEFT!", WHITE))
    }

    fn decline(_: &InstructionContent, _: &AttributedText) -> Option<AttributedText> {
        None
    }

    #[test]
    fn test_primary_override_wins() {
        let style = CardStyle::day();
        let delegate = TextDelegate { primary: Some(shout), secondary: None };
        let presented = AttributedText::new("Turn left", BLACK);

        let resolved =
            resolve_presented_text(LabelKind::Primary, &delegate, &sample_instruction(), &presented, &style, false);

        assert_eq!(resolved.text.as_str(), "LEFT!");
        assert_eq!(resolved.color, WHITE);
    }

    #[test]
    fn test_primary_override_does_not_apply_to_secondary() {
        let style = CardStyle::day();
        let delegate = TextDelegate { primary: Some(shout), secondary: None };
        let presented = AttributedText::new("Pine St", BLACK);

        let resolved =
            resolve_presented_text(LabelKind::Secondary, &delegate, &sample_instruction(), &presented, &style, false);

        assert_eq!(resolved.text.as_str(), "Pine St", "Secondary label ignores the primary callback");
        assert_eq!(resolved.color, style.normal.primary_text);
    }

    #[test]
    fn test_declined_override_falls_through() {
        let style = CardStyle::day();
        let delegate = TextDelegate { primary: Some(decline), secondary: None };
        let presented = AttributedText::new("Turn left", BLACK);

        let resolved =
            resolve_presented_text(LabelKind::Primary, &delegate, &sample_instruction(), &presented, &style, false);

        assert_eq!(resolved.text, presented.text, "A declining callback falls through to the default");
        assert_eq!(resolved.color, style.normal.primary_text);
    }
}
