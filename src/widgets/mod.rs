//! Widget components for the instruction card.
//!
//! This module organizes the card's visual components into submodules:
//!
//! - [`maneuver`]: The always-visible primary card (icon, distance, labels)
//! - [`lanes`]: Lane guidance strip, hidden until lane data arrives
//! - [`next_banner`]: "Then" banner previewing the following instruction
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! # Architecture
//!
//! Each sub-view owns its gradient overlay slot (see [`crate::gradient`]) and
//! draws bottom-up: overlay first, then icons, then text. The views hold no
//! colors of their own beyond what the container pushes in on refresh, which
//! keeps every color on screen a sample of the active transitions.

mod lanes;
mod maneuver;
mod next_banner;
mod primitives;

pub use lanes::{LaneColors, LaneGuidanceView};
pub use maneuver::{ManeuverCardView, ManeuverColors};
pub use next_banner::NextBannerView;
pub use primitives::draw_maneuver_icon;
