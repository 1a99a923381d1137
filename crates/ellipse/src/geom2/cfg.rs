//! Tolerance defaults for ellipse queries.
//!
//! Policy
//! - The exact predicates (`Ellipse::contains`) use no tolerance at all.
//! - Tolerances only enter through the explicit `_eps` / `_cfg` variants, so
//!   callers always see where slack is applied.

/// Default slack on the level value for `Ellipse::contains_cfg`.
pub(crate) const CONTAINS_EPS: f64 = 1e-9;
/// Default absolute radius difference below which an ellipse counts as a circle.
pub(crate) const CIRCLE_EPS: f64 = 1e-12;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Added to the right-hand side of the level test `level(p) <= 1 + eps`.
    pub eps_contains: f64,
    /// Radius difference threshold for `Ellipse::is_circle`.
    pub eps_circle: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_contains: CONTAINS_EPS,
            eps_circle: CIRCLE_EPS,
        }
    }
}
