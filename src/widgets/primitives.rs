//! Low-level drawing primitives shared across widgets.
//!
//! The maneuver arrow is drawn from three line segments (shaft plus two
//! arrowhead strokes) rotated to the maneuver's heading. Headings follow
//! screen convention: 0 degrees points up, positive rotates clockwise, so a
//! right turn at 90 degrees points toward the right edge.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use micromath::F32Ext;

use crate::model::ManeuverType;

/// Angle between the shaft and each arrowhead stroke, in degrees.
const HEAD_SWEEP_DEG: f32 = 150.0;

/// Arrowhead stroke length as a fraction of the arrow radius.
const HEAD_SCALE: f32 = 0.45;

/// Unit direction vector for a heading in degrees (0 = up, clockwise).
fn heading_dir(deg: f32) -> (f32, f32) {
    let rad = deg * (core::f32::consts::PI / 180.0);
    (rad.sin(), -rad.cos())
}

fn offset(center: Point, dir: (f32, f32), len: f32) -> Point {
    Point::new(center.x + (dir.0 * len) as i32, center.y + (dir.1 * len) as i32)
}

/// Draw a maneuver arrow rotated to its heading.
///
/// # Parameters
/// - `center`: Center point of the arrow
/// - `radius`: Half-length of the shaft in pixels
/// - `stroke`: Stroke width for all three segments
///
/// An `Arrive` maneuver additionally draws a horizontal destination bar
/// under the arrow base.
pub fn draw_maneuver_icon<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    center: Point,
    radius: i32,
    maneuver: ManeuverType,
    color: Rgb565,
    stroke: u32,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_stroke(color, stroke);
    let heading = maneuver.heading_degrees();
    let r = radius as f32;

    let shaft = heading_dir(heading);
    let tip = offset(center, shaft, r);
    let base = offset(center, shaft, -r);

    Line::new(base, tip).into_styled(style).draw(display)?;

    let head_len = r * HEAD_SCALE;
    let left = offset(tip, heading_dir(heading + HEAD_SWEEP_DEG), head_len);
    let right = offset(tip, heading_dir(heading - HEAD_SWEEP_DEG), head_len);
    Line::new(tip, left).into_styled(style).draw(display)?;
    Line::new(tip, right).into_styled(style).draw(display)?;

    if maneuver == ManeuverType::Arrive {
        let bar_y = base.y + 3;
        Line::new(Point::new(center.x - radius / 2, bar_y), Point::new(center.x + radius / 2, bar_y))
            .into_styled(style)
            .draw(display)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_dir_cardinal_directions() {
        let (dx, dy) = heading_dir(0.0);
        assert!(dx.abs() < 0.01 && dy < -0.99, "0 degrees points up");

        let (dx, dy) = heading_dir(90.0);
        assert!(dx > 0.99 && dy.abs() < 0.01, "90 degrees points right");

        let (dx, dy) = heading_dir(-90.0);
        assert!(dx < -0.99 && dy.abs() < 0.01, "-90 degrees points left");

        let (dx, dy) = heading_dir(180.0);
        assert!(dx.abs() < 0.01 && dy > 0.99, "180 degrees points down");
    }

    #[test]
    fn test_draw_all_maneuvers() {
        use embedded_graphics_simulator::SimulatorDisplay;

        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(64, 64));
        let maneuvers = [
            ManeuverType::Straight,
            ManeuverType::SlightLeft,
            ManeuverType::Left,
            ManeuverType::SharpLeft,
            ManeuverType::SlightRight,
            ManeuverType::Right,
            ManeuverType::SharpRight,
            ManeuverType::UTurn,
            ManeuverType::Arrive,
        ];
        for maneuver in maneuvers {
            draw_maneuver_icon(&mut display, Point::new(32, 32), 20, maneuver, Rgb565::WHITE, 3)
                .expect("Icon drawing is infallible on the simulator");
        }
    }
}
