//! Color constants for the instruction card.
//!
//! # Optimization: Using Built-in `RgbColor` Trait Constants
//!
//! The `embedded_graphics` crate provides pre-defined color constants through the
//! `RgbColor` trait. Using these instead of manually constructing `Rgb565::new(r, g, b)`
//! ensures optimal values and improves code clarity.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to many embedded displays and requires no conversion
//! when writing to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Gradient fade target and night card background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Day card background and night text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors (card-specific)
// =============================================================================

/// Highlight blue used for the near-maneuver emphasis state.
/// RGB565: (6, 30, 28) - a saturated navigation blue.
pub const HIGHLIGHT_BLUE: Rgb565 = Rgb565::new(6, 30, 28);

/// Darker highlight blue for the night highlighted background.
/// RGB565: (3, 15, 16) - readable under white text at night.
pub const HIGHLIGHT_BLUE_DARK: Rgb565 = Rgb565::new(3, 15, 16);

/// Dark slate used for the night card background.
/// RGB565: (4, 9, 7) - near-black with a blue cast.
pub const SLATE: Rgb565 = Rgb565::new(4, 9, 7);

/// Primary dark text on light backgrounds.
/// RGB565: (4, 10, 6) - softer than pure black.
pub const INK: Rgb565 = Rgb565::new(4, 10, 6);

/// Secondary gray text. Works on both day and night backgrounds.
/// RGB565: (16, 32, 16) - mid gray.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Light gray for de-emphasized lane arrows and units on dark backgrounds.
/// RGB565: (21, 42, 21) - roughly 66% brightness.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray for de-emphasized elements on light backgrounds.
/// RGB565: (10, 20, 10) - roughly 33% brightness.
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);
