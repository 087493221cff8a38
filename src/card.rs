//! The instruction card container.
//!
//! [`InstructionsCard`] owns the three sub-views (maneuver card, lane strip,
//! next-instruction banner), the active [`CardStyle`], the color transition
//! table and the text delegate. Callers feed it `(instruction, distance)`
//! pairs each tick; it derives visibility and highlight state, steers the
//! color transitions, and hands back a fully-resolved [`DisplayState`].
//!
//! # Update Flow
//!
//! 1. `update_instruction` stores the new content and runs the secondary
//!    widget rules (reveal-if-hidden / hide-if-now-absent).
//! 2. The highlight machine compares distance against the style threshold
//!    (strict less-than; preview mode pins it to `Normal`) and retargets the
//!    transition slots on a state flip.
//! 3. `refresh` samples every slot at the current tick and pushes the colors
//!    into overlays and widget elements. It is the single apply checkpoint;
//!    `draw` is a pure render of whatever the last refresh applied.
//!
//! There is no background timer: colors only move when the caller ticks the
//! card with a fresh `now_ms`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::config::{BANNER_HEIGHT, CARD_HEIGHT, CARD_WIDTH, LANES_HEIGHT, MANEUVER_HEIGHT};
use crate::gradient::{ColorPair, GradientOverlay, OverlayHost, apply_gradient, faded_stop};
use crate::model::{InstructionContent, RouteStep, VisualInstruction};
use crate::style::{CardStyle, StatePalette};
use crate::text::{AttributedText, LabelKind, TextDelegate, resolve_presented_text};
use crate::transition::{SLOT_COUNT, TransitionTable, slot};
use crate::widgets::{LaneColors, LaneGuidanceView, ManeuverCardView, ManeuverColors, NextBannerView};

// =============================================================================
// Derived State
// =============================================================================

/// Visibility and highlight state derived by one update call.
///
/// Recomputed wholesale on every update and returned to the caller; never
/// partially applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub lanes_visible: bool,
    pub banner_visible: bool,
    pub highlight_active: bool,
}

/// Proximity state of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    #[default]
    Normal,
    Highlighted,
}

/// Slots owned by the lane strip.
const LANE_SLOTS: [usize; 2] = [slot::LANE_DEFAULT, slot::LANE_HIGHLIGHTED];
/// Slots owned by the next banner.
const BANNER_SLOTS: [usize; 3] = [slot::BANNER_PRIMARY, slot::BANNER_SECONDARY, slot::BANNER_TEXT];

/// Per-slot target colors for one palette.
fn slot_targets(palette: &StatePalette) -> [(usize, Rgb565); SLOT_COUNT] {
    let faded = faded_stop(palette.background);
    [
        (slot::CONTAINER_TOP, palette.background),
        (slot::CONTAINER_BOTTOM, faded),
        (slot::CARD_TOP, palette.background),
        (slot::CARD_BOTTOM, faded),
        (slot::PRIMARY_TEXT, palette.primary_text),
        (slot::SECONDARY_TEXT, palette.secondary_text),
        (slot::DISTANCE_VALUE, palette.distance_value),
        (slot::DISTANCE_UNIT, palette.distance_unit),
        (slot::ICON_PRIMARY, palette.icon_primary),
        (slot::ICON_SECONDARY, palette.icon_secondary),
        (slot::LANE_DEFAULT, palette.lane_default),
        (slot::LANE_HIGHLIGHTED, palette.lane_highlighted),
        (slot::BANNER_PRIMARY, palette.banner_primary),
        (slot::BANNER_SECONDARY, palette.banner_secondary),
        (slot::BANNER_TEXT, palette.banner_text),
    ]
}

// =============================================================================
// Backdrop
// =============================================================================

/// The container's own background layer, behind all sub-views.
struct Backdrop {
    bounds: Rectangle,
    overlay: Option<GradientOverlay>,
}

impl OverlayHost for Backdrop {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }
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
// Secondary Widget Controller
// =============================================================================

/// Visibility controller for the lane strip and the next banner.
///
/// The rules are deliberately asymmetric: a hidden widget is offered fresh
/// content and reveals itself only when its keying data exists; a visible
/// widget is never force-refreshed, only hidden once its keying data is
/// gone. Lanes key on the presence of the tertiary sub-instruction, the
/// banner on the presence of the tertiary *text*.
struct SecondaryWidgets {
    lanes: LaneGuidanceView,
    banner: NextBannerView,
}

impl SecondaryWidgets {
    fn update(&mut self, instruction: &VisualInstruction, banner_text: Option<(AttributedText, bool)>) {
        if self.lanes.is_hidden() {
            if let Some(tertiary) = &instruction.tertiary
                && !tertiary.lanes.is_empty()
            {
                self.lanes.show(&tertiary.lanes);
            }
        } else if instruction.tertiary.is_none() {
            self.lanes.hide();
        }

        if self.banner.is_hidden() {
            if let Some((text, overridden)) = banner_text {
                let maneuver = instruction.tertiary.as_ref().and_then(|t| t.maneuver);
                self.banner.show(text, maneuver, overridden);
            }
        } else if banner_text.is_none() {
            self.banner.hide();
        }
    }
}

// =============================================================================
// Container
// =============================================================================

pub struct InstructionsCard {
    bounds: Rectangle,
    backdrop: Backdrop,
    maneuver: ManeuverCardView,
    secondary: SecondaryWidgets,
    style: CardStyle,
    state: HighlightState,
    transitions: TransitionTable,
    delegate: TextDelegate,
    instruction: Option<VisualInstruction>,
    border_color: Rgb565,
}

impl InstructionsCard {
    /// Build a card at `origin` with an injected style.
    pub fn new(origin: Point, style: CardStyle) -> Self {
        let bounds = Rectangle::new(origin, Size::new(CARD_WIDTH, CARD_HEIGHT));
        let maneuver_bounds = Rectangle::new(origin, Size::new(CARD_WIDTH, MANEUVER_HEIGHT));
        let lanes_bounds = Rectangle::new(
            Point::new(origin.x, origin.y + MANEUVER_HEIGHT as i32),
            Size::new(CARD_WIDTH, LANES_HEIGHT),
        );
        let banner_bounds = Rectangle::new(
            Point::new(origin.x, origin.y + (MANEUVER_HEIGHT + LANES_HEIGHT) as i32),
            Size::new(CARD_WIDTH, BANNER_HEIGHT),
        );

        let mut card = Self {
            bounds,
            backdrop: Backdrop { bounds, overlay: None },
            maneuver: ManeuverCardView::new(maneuver_bounds),
            secondary: SecondaryWidgets {
                lanes: LaneGuidanceView::new(lanes_bounds),
                banner: NextBannerView::new(banner_bounds),
            },
            style,
            state: HighlightState::Normal,
            transitions: TransitionTable::new(),
            delegate: TextDelegate::default(),
            instruction: None,
            border_color: style.normal.icon_secondary,
        };
        card.configure(style);
        card
    }

    /// Replace the style wholesale and re-apply the layout.
    ///
    /// Style swaps never animate: every transition slot snaps straight to
    /// the new palette of the current proximity state. Calling this twice
    /// with the same style is observably identical to calling it once.
    pub fn configure(&mut self, style: CardStyle) {
        self.style = style;
        let highlighted = self.state == HighlightState::Highlighted;
        for (idx, color) in slot_targets(self.style.palette(highlighted)) {
            self.transitions.set_immediate(idx, color);
        }
        // Every slot is settled, so the sample tick is irrelevant here.
        self.refresh(0);
    }

    /// Install the text customization delegate. Either callback may be
    /// absent; changes take effect on the next update.
    pub fn set_delegate(&mut self, delegate: TextDelegate) {
        self.delegate = delegate;
    }

    /// Per-tick entry point taking a whole route step.
    ///
    /// Only the step's last instruction is consumed; a step without
    /// instructions hides both secondary widgets.
    pub fn update_for_step(
        &mut self,
        step: &RouteStep,
        distance_m: f32,
        preview: bool,
        now_ms: u64,
    ) -> DisplayState {
        match step.current_instruction() {
            Some(instruction) => self.update_instruction(instruction, distance_m, preview, now_ms),
            None => {
                self.secondary.lanes.hide();
                self.secondary.banner.hide();
                self.instruction = None;
                self.apply_highlight(self.highlight_active(distance_m, preview), now_ms);
                self.refresh(now_ms);
                DisplayState {
                    lanes_visible: false,
                    banner_visible: false,
                    highlight_active: self.state == HighlightState::Highlighted,
                }
            }
        }
    }

    /// Per-tick entry point for a single instruction.
    pub fn update_instruction(
        &mut self,
        instruction: &VisualInstruction,
        distance_m: f32,
        preview: bool,
        now_ms: u64,
    ) -> DisplayState {
        self.maneuver.set_maneuver(instruction.primary.maneuver);
        self.maneuver.set_distance(distance_m);

        let lanes_were_hidden = self.secondary.lanes.is_hidden();
        let banner_was_hidden = self.secondary.banner.is_hidden();
        let banner_text = self.resolve_banner_text(instruction, now_ms);
        self.secondary.update(instruction, banner_text);
        self.instruction = Some(instruction.clone());

        // Slots of hidden widgets are left out of highlight retargets, so a
        // reveal snaps them onto the current palette before any new fade.
        if lanes_were_hidden && !self.secondary.lanes.is_hidden() {
            self.snap_slots(&LANE_SLOTS);
        }
        if banner_was_hidden && !self.secondary.banner.is_hidden() {
            self.snap_slots(&BANNER_SLOTS);
        }

        self.apply_highlight(self.highlight_active(distance_m, preview), now_ms);
        self.refresh(now_ms);

        DisplayState {
            lanes_visible: !self.secondary.lanes.is_hidden(),
            banner_visible: !self.secondary.banner.is_hidden(),
            highlight_active: self.state == HighlightState::Highlighted,
        }
    }

    /// Sample all in-flight transitions at `now_ms` and push the colors into
    /// overlays and widget elements. The single apply checkpoint.
    pub fn refresh(&mut self, now_ms: u64) {
        let t = &self.transitions;
        let backdrop_pair: ColorPair =
            (t.sample(slot::CONTAINER_TOP, now_ms), t.sample(slot::CONTAINER_BOTTOM, now_ms));
        let card_pair: ColorPair = (t.sample(slot::CARD_TOP, now_ms), t.sample(slot::CARD_BOTTOM, now_ms));
        let banner_top = t.sample(slot::BANNER_PRIMARY, now_ms);
        let banner_pair: ColorPair = (banner_top, faded_stop(banner_top));
        let maneuver_colors = ManeuverColors {
            icon_primary: t.sample(slot::ICON_PRIMARY, now_ms),
            icon_secondary: t.sample(slot::ICON_SECONDARY, now_ms),
            distance_value: t.sample(slot::DISTANCE_VALUE, now_ms),
            distance_unit: t.sample(slot::DISTANCE_UNIT, now_ms),
        };
        let lane_colors = LaneColors {
            dimmed: t.sample(slot::LANE_DEFAULT, now_ms),
            usable: t.sample(slot::LANE_HIGHLIGHTED, now_ms),
        };
        let banner_icon_color = t.sample(slot::BANNER_SECONDARY, now_ms);
        let banner_text_color = t.sample(slot::BANNER_TEXT, now_ms);

        apply_gradient(&mut self.backdrop, backdrop_pair);
        apply_gradient(&mut self.maneuver, card_pair);
        apply_gradient(&mut self.secondary.lanes, card_pair);
        apply_gradient(&mut self.secondary.banner, banner_pair);

        self.maneuver.set_colors(maneuver_colors);
        self.secondary.lanes.set_colors(lane_colors);
        self.secondary.banner.set_icon_color(banner_icon_color);
        // Delegate-supplied banner text keeps the color the delegate chose;
        // otherwise the text follows its transition slot.
        if !self.secondary.banner.text_overridden() {
            self.secondary.banner.set_text_color(banner_text_color);
        }
        self.border_color = maneuver_colors.icon_secondary;

        let highlighted = self.state == HighlightState::Highlighted;
        if let Some(instruction) = &self.instruction {
            let primary = resolve_label(
                &self.delegate,
                &self.style,
                &self.transitions,
                LabelKind::Primary,
                &instruction.primary,
                slot::PRIMARY_TEXT,
                highlighted,
                now_ms,
            );
            let secondary = instruction.secondary.as_ref().map(|content| {
                resolve_label(
                    &self.delegate,
                    &self.style,
                    &self.transitions,
                    LabelKind::Secondary,
                    content,
                    slot::SECONDARY_TEXT,
                    highlighted,
                    now_ms,
                )
            });
            self.maneuver.set_labels(primary, secondary);
        }
    }

    /// Pure render of the state applied by the last refresh.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if let Some(overlay) = self.backdrop.overlay() {
            overlay.draw(display)?;
        }
        self.maneuver.draw(display, &self.style)?;
        self.secondary.lanes.draw(display)?;
        self.secondary.banner.draw(display, &self.style)?;

        let radius = self.style.corner_radius;
        RoundedRectangle::with_equal_corners(self.bounds, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_stroke(self.border_color, 1))
            .draw(display)?;

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    pub fn highlight_state(&self) -> HighlightState {
        self.state
    }

    pub fn maneuver_card(&self) -> &ManeuverCardView {
        &self.maneuver
    }

    pub fn lanes(&self) -> &LaneGuidanceView {
        &self.secondary.lanes
    }

    pub fn banner(&self) -> &NextBannerView {
        &self.secondary.banner
    }

    pub fn backdrop_overlay(&self) -> Option<&GradientOverlay> {
        self.backdrop.overlay()
    }

    /// Whether all color transitions have finished at `now_ms`.
    pub fn settled(&self, now_ms: u64) -> bool {
        self.transitions.settled(now_ms)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn highlight_active(&self, distance_m: f32, preview: bool) -> bool {
        !preview && distance_m < self.style.highlight_distance
    }

    fn apply_highlight(&mut self, active: bool, now_ms: u64) {
        let next = if active { HighlightState::Highlighted } else { HighlightState::Normal };
        if next == self.state {
            return;
        }
        self.state = next;

        match next {
            HighlightState::Highlighted => {
                // Hidden widgets keep their normal-palette targets; they pick
                // the highlighted colors up on their next reveal.
                let skip_lanes = self.secondary.lanes.is_hidden();
                let skip_banner = self.secondary.banner.is_hidden();
                for (idx, color) in slot_targets(&self.style.highlighted) {
                    if skip_lanes && LANE_SLOTS.contains(&idx) {
                        continue;
                    }
                    if skip_banner && BANNER_SLOTS.contains(&idx) {
                        continue;
                    }
                    self.transitions.retarget(idx, color, now_ms);
                }
            }
            HighlightState::Normal => self.prepare_layout(now_ms),
        }
    }

    /// Snap a subset of slots straight onto the current-state palette.
    fn snap_slots(&mut self, indices: &[usize]) {
        let highlighted = self.state == HighlightState::Highlighted;
        for (idx, color) in slot_targets(self.style.palette(highlighted)) {
            if indices.contains(&idx) {
                self.transitions.set_immediate(idx, color);
            }
        }
    }

    /// Drive every slot back toward the current-state palette. Idempotent:
    /// retargeting an already-correct slot is a no-op.
    fn prepare_layout(&mut self, now_ms: u64) {
        let highlighted = self.state == HighlightState::Highlighted;
        for (idx, color) in slot_targets(self.style.palette(highlighted)) {
            self.transitions.retarget(idx, color, now_ms);
        }
    }

    /// Resolve the banner text through the delegate, if the upcoming
    /// instruction carries any. The flag records whether the delegate
    /// actually supplied the text; a declining delegate leaves the banner
    /// on the transition-driven color like the no-delegate case.
    fn resolve_banner_text(
        &self,
        instruction: &VisualInstruction,
        now_ms: u64,
    ) -> Option<(AttributedText, bool)> {
        let tertiary = instruction.tertiary.as_ref()?;
        let text = tertiary.text.as_ref()?;
        let content = InstructionContent::new(text, tertiary.maneuver.unwrap_or_default());
        let presented = AttributedText::new(text, self.transitions.sample(slot::BANNER_TEXT, now_ms));

        if let Some(present) = self.delegate.secondary
            && let Some(supplied) = present(&content, &presented)
        {
            return Some((supplied, true));
        }
        Some((presented, false))
    }
}

/// Resolve one maneuver card label.
///
/// Without a delegate callback for the label's kind, the label follows its
/// transition slot directly so highlight fades reach the text. With one
/// installed, the resolution policy decides (override, or the themed
/// fallback).
#[allow(clippy::too_many_arguments)]
fn resolve_label(
    delegate: &TextDelegate,
    style: &CardStyle,
    transitions: &TransitionTable,
    kind: LabelKind,
    content: &InstructionContent,
    slot_idx: usize,
    highlighted: bool,
    now_ms: u64,
) -> AttributedText {
    let presented = AttributedText::new(&content.text, transitions.sample(slot_idx, now_ms));
    let installed = match kind {
        LabelKind::Primary => delegate.primary.is_some(),
        LabelKind::Secondary => delegate.secondary.is_some(),
    };
    if installed {
        resolve_presented_text(kind, delegate, content, &presented, style, highlighted)
    } else {
        presented
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
