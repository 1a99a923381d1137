//! Analytic geometry for translated and rotated ellipses in the plane.
//!
//! All queries are closed-form (no numeric search) and side-effect free.
//! Invalid constructions are reported through `tracing` at debug level; the
//! crate never installs a subscriber.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Axis, Bounds2, Ellipse, EllipseError, EllipseParams, GeomCfg};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_ellipse, draw_ellipses, EllipseCfg, ReplayToken};
    pub use crate::geom2::{Axis, Bounds2, Ellipse, EllipseError, EllipseParams, GeomCfg};
    pub use nalgebra::Vector2 as Vec2;
}
