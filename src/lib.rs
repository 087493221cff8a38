//! Turn-by-turn navigation instruction card for `embedded-graphics` displays.
//!
//! The card shows the upcoming maneuver (icon + distance + instruction text),
//! an optional lane guidance strip, and an optional "then" banner previewing
//! the following instruction. A highlight state machine fades the whole card
//! to a highlighted palette once the maneuver is closer than the style's
//! threshold, and back again when it is not.
//!
//! # Usage
//!
//! ```ignore
//! let mut card = InstructionsCard::new(Point::new(20, 20), CardStyle::day());
//! // every tick:
//! let state = card.update_instruction(&instruction, distance_m, false, now_ms);
//! card.draw(&mut display)?;
//! ```
//!
//! All animation is tick-driven: the crate never reads a clock. Callers pass
//! a monotonic `now_ms` into the update entry points and colors interpolate
//! over [`config::HIGHLIGHT_FADE_MS`].
//!
//! # Testing
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while downstream firmware builds as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints: allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

pub mod card;
pub mod colors;
pub mod config;
pub mod gradient;
pub mod model;
pub mod style;
pub mod text;
pub mod transition;
pub mod widgets;

pub use card::{DisplayState, HighlightState, InstructionsCard};
pub use gradient::{GradientOverlay, OverlayHost};
pub use model::{
    InstructionContent, LaneIndication, ManeuverType, RouteStep, TertiaryInstruction,
    VisualInstruction,
};
pub use style::{CardStyle, StatePalette};
pub use text::{AttributedText, LabelKind, PresentFn, TextDelegate};
