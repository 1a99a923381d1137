//! Rotated 2D ellipses with closed-form queries.
//!
//! Purpose
//! - One immutable value type, `Ellipse` (center, semi-axis radii, rotation),
//!   validated at construction so every query is total.
//! - Parametric evaluation, closed membership, and a closed-form axis-aligned
//!   bounding box, plus a few derived measures (area, perimeter, tangents).
//!
//! Conventions
//! - Angles are radians, counterclockwise. `rotation` is applied about the center.
//! - Membership is closed (`level <= 1`); use the `_eps` variants for slack.
//! - Invalid parameters (non-positive radius, non-finite field) are rejected
//!   with `EllipseError` rather than propagated as NaN.
//!
//! Code cross-refs: `Ellipse`, `EllipseParams`, `Bounds2`, `GeomCfg`

mod cfg;
mod queries;
pub mod rand;
mod types;

pub use cfg::GeomCfg;
pub use types::{Axis, Bounds2, Ellipse, EllipseError, EllipseParams};
