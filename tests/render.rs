//! Simulator-backed render tests for the composed card.
//!
//! These draw the full card into a headless `SimulatorDisplay` and sample
//! pixels at overlay top rows, where the vertical gradient parameter is
//! exactly zero and the pixel must equal the palette color verbatim.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

use nav_card::colors::{BLACK, HIGHLIGHT_BLUE, LIGHT_GRAY, WHITE};
use nav_card::config::{CARD_HEIGHT, CARD_WIDTH, HIGHLIGHT_FADE_MS, LANES_HEIGHT, MANEUVER_HEIGHT};
use nav_card::{
    CardStyle, InstructionsCard, LaneIndication, ManeuverType, TertiaryInstruction,
    VisualInstruction,
};

const T0: u64 = 5_000;

/// First row of the lane strip (top of its overlay).
const LANES_TOP: i32 = MANEUVER_HEIGHT as i32;
/// First row of the next banner (top of its overlay).
const BANNER_TOP: i32 = (MANEUVER_HEIGHT + LANES_HEIGHT) as i32;

fn display() -> SimulatorDisplay<Rgb565> {
    SimulatorDisplay::new(Size::new(CARD_WIDTH, CARD_HEIGHT))
}

fn instruction_with_lanes() -> VisualInstruction {
    let mut instruction = VisualInstruction::primary_only("Turn right onto Oak Ave", ManeuverType::Right);
    instruction.tertiary = Some(TertiaryInstruction::with_lanes(&[
        LaneIndication { direction: ManeuverType::Straight, usable: false },
        LaneIndication { direction: ManeuverType::Right, usable: true },
        LaneIndication { direction: ManeuverType::Right, usable: true },
    ]));
    instruction
}

fn instruction_with_banner() -> VisualInstruction {
    let mut instruction = VisualInstruction::primary_only("Turn right onto Oak Ave", ManeuverType::Right);
    instruction.tertiary =
        Some(TertiaryInstruction::with_text("Then turn left", Some(ManeuverType::Left)));
    instruction
}

#[test]
fn test_card_covers_backdrop() {
    let mut card = InstructionsCard::new(Point::zero(), CardStyle::day());
    let mut display = display();

    card.update_instruction(&instruction_with_lanes(), 400.0, false, T0);
    card.draw(&mut display).expect("Simulator draw is infallible");

    // The backdrop gradient never reaches black, so any covered pixel must
    // have left the simulator's initial clear color behind.
    assert_ne!(display.get_pixel(Point::new(20, LANES_TOP)), BLACK);
}

#[test]
fn test_lane_overlay_top_row_carries_background_color() {
    let mut card = InstructionsCard::new(Point::zero(), CardStyle::day());
    let mut display = display();

    card.update_instruction(&instruction_with_lanes(), 400.0, false, T0);
    card.draw(&mut display).expect("Simulator draw is infallible");

    // x=20 is left of the centered lane arrows; the overlay top row shows
    // the palette background verbatim.
    assert_eq!(display.get_pixel(Point::new(20, LANES_TOP)), WHITE);
}

#[test]
fn test_banner_overlay_top_row_carries_banner_color() {
    let mut card = InstructionsCard::new(Point::zero(), CardStyle::day());
    let mut display = display();

    card.update_instruction(&instruction_with_banner(), 400.0, false, T0);
    card.draw(&mut display).expect("Simulator draw is infallible");

    // x=200 is right of the banner icon and text.
    assert_eq!(display.get_pixel(Point::new(200, BANNER_TOP)), LIGHT_GRAY);
}

#[test]
fn test_highlight_fade_reaches_the_pixels() {
    let mut card = InstructionsCard::new(Point::zero(), CardStyle::day());
    let mut display = display();

    card.update_instruction(&instruction_with_lanes(), 50.0, false, T0);

    let done = T0 + HIGHLIGHT_FADE_MS + 100;
    card.refresh(done);
    assert!(card.settled(done));
    card.draw(&mut display).expect("Simulator draw is infallible");

    assert_eq!(
        display.get_pixel(Point::new(20, LANES_TOP)),
        HIGHLIGHT_BLUE,
        "Settled highlight paints the highlighted background"
    );
}

#[test]
fn test_preview_keeps_the_normal_palette() {
    let mut card = InstructionsCard::new(Point::zero(), CardStyle::day());
    let mut display = display();

    let state = card.update_instruction(&instruction_with_lanes(), 50.0, true, T0);
    assert!(!state.highlight_active);

    card.refresh(T0 + HIGHLIGHT_FADE_MS + 100);
    card.draw(&mut display).expect("Simulator draw is infallible");

    assert_eq!(display.get_pixel(Point::new(20, LANES_TOP)), WHITE);
}
