//! Gradient overlays owned by the card's sub-views.
//!
//! Each sub-view owns at most one overlay: a color pair plus bounds that
//! mirror the host view. The overlay is created on first application and
//! mutated in place ever after — [`apply_gradient`] looks the existing
//! overlay up before creating, and treats "matches the requested colors" as
//! already applied. Applying the same pair twice is observably identical to
//! applying it once.
//!
//! The overlay renders as a vertical top-to-bottom interpolation of its
//! color pair, one row at a time, using the same fixed-point RGB565 lerp as
//! the highlight fade. It is drawn before the view's content (bottom-most).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::transition::lerp_rgb565;

/// A top/bottom gradient stop pair.
pub type ColorPair = (Rgb565, Rgb565);

/// Fraction by which the bottom stop fades toward black.
/// Models the alpha-faded second stop of the source design; RGB565 carries
/// no alpha channel.
const FADE_FRACTION: f32 = 0.35;

/// Derive the bottom gradient stop from a background color.
pub fn faded_stop(background: Rgb565) -> Rgb565 {
    lerp_rgb565(background, Rgb565::new(0, 0, 0), FADE_FRACTION)
}

// =============================================================================
// Overlay Resource
// =============================================================================

/// The gradient overlay decorating one view.
///
/// Owned by the view it decorates; recreated never, only mutated in place
/// after first creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientOverlay {
    colors: ColorPair,
    bounds: Rectangle,
}

impl GradientOverlay {
    /// Current color pair (top stop, bottom stop).
    #[inline]
    pub const fn colors(&self) -> ColorPair {
        self.colors
    }

    /// Current bounds (mirrors the host view).
    #[inline]
    pub const fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Whether this overlay is usable for a requested pair.
    ///
    /// With no request, any existing overlay matches. Otherwise the overlay
    /// matches when its current colors intersect the requested set.
    pub fn matches(&self, requested: Option<ColorPair>) -> bool {
        match requested {
            None => true,
            Some((a, b)) => {
                let (top, bottom) = self.colors;
                top == a || top == b || bottom == a || bottom == b
            }
        }
    }

    /// Render the gradient: one row per scanline, interpolating top to
    /// bottom. Degenerate (empty) bounds draw nothing.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let height = self.bounds.size.height;
        if height == 0 || self.bounds.size.width == 0 {
            return Ok(());
        }

        let (top, bottom) = self.colors;
        let origin = self.bounds.top_left;
        let row_size = Size::new(self.bounds.size.width, 1);

        for row in 0..height {
            let t = if height > 1 { row as f32 / (height - 1) as f32 } else { 0.0 };
            let color = lerp_rgb565(top, bottom, t);
            Rectangle::new(Point::new(origin.x, origin.y + row as i32), row_size)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)?;
        }

        Ok(())
    }
}

// =============================================================================
// Host Seam
// =============================================================================

/// Seam between the overlay manager and the views it decorates.
///
/// Every card sub-view stores its overlay in an `Option` slot, which is what
/// enforces the one-overlay-per-view guarantee structurally.
pub trait OverlayHost {
    /// Current view bounds.
    fn bounds(&self) -> Rectangle;
    /// Whether the view is currently hidden.
    fn is_hidden(&self) -> bool;
    /// The overlay slot.
    fn overlay(&self) -> Option<&GradientOverlay>;
    /// The overlay slot, mutable.
    fn overlay_mut(&mut self) -> &mut Option<GradientOverlay>;
}

/// Apply a gradient to a view.
///
/// No-op when the view is hidden. Creates the overlay if the view has none;
/// afterwards always updates its bounds to the view's current bounds and its
/// colors to `pair`. Idempotent: at most one overlay per view, and repeated
/// application with the same pair changes nothing.
///
/// Returns `true` if the view now carries the gradient (i.e., it was not
/// hidden).
pub fn apply_gradient<V: OverlayHost>(view: &mut V, pair: ColorPair) -> bool {
    if view.is_hidden() {
        return false;
    }

    let bounds = view.bounds();
    let slot = view.overlay_mut();
    match slot {
        Some(overlay) => {
            overlay.bounds = bounds;
            overlay.colors = pair;
        }
        None => *slot = Some(GradientOverlay { colors: pair, bounds }),
    }
    true
}

/// Look up the view's existing overlay.
///
/// Returns it only if either no target colors were requested, or the
/// overlay's current colors intersect the requested set; otherwise reports
/// no usable overlay.
pub fn find_matching_gradient<V: OverlayHost>(
    view: &mut V,
    requested: Option<ColorPair>,
) -> Option<&mut GradientOverlay> {
    view.overlay_mut().as_mut().filter(|overlay| overlay.matches(requested))
}

// =============================================================================
// Unit Tests
// =============================================================================
