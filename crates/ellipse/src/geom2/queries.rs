//! Closed-form queries on `Ellipse`.
//!
//! - Parametric evaluation and tangents via the local frame map `from_local`.
//! - Point membership by undoing translation and rotation (`to_local`), which
//!   reduces every test to the axis-aligned ellipse at the origin.
//! - Axis-aligned bounding box from the projected extents of the parametric
//!   curve; no sampling.
//!
//! Code cross-refs: `types::{Ellipse, Bounds2}`, `cfg::GeomCfg`

use std::f64::consts::{PI, TAU};

use nalgebra::{Rotation2, Vector2};

use super::cfg::GeomCfg;
use super::types::{Bounds2, Ellipse, EllipseError, EllipseParams};

impl Ellipse {
    #[inline]
    fn rot(&self) -> Rotation2<f64> {
        Rotation2::new(self.rotation())
    }

    /// Global point → centered, unrotated local frame.
    #[inline]
    pub fn to_local(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.rot().inverse_transform_vector(&(p - self.center()))
    }

    /// Centered, unrotated local frame → global point.
    #[inline]
    pub fn from_local(&self, q: Vector2<f64>) -> Vector2<f64> {
        self.rot() * q + self.center()
    }

    /// Point on the boundary at local parameter `t`, as a vector.
    ///
    /// `t` is measured counterclockwise from the local point `(radius_x, 0)`
    /// before rotation; it equals the polar angle about the center only for
    /// circles (and only when unrotated).
    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        let (s, c) = t.sin_cos();
        self.from_local(Vector2::new(self.radius_x() * c, self.radius_y() * s))
    }

    /// Point on the boundary at local parameter `t`.
    ///
    /// ```text
    /// x = cx + rx·cos(t)·cos(r) − ry·sin(t)·sin(r)
    /// y = cy + rx·cos(t)·sin(r) + ry·sin(t)·cos(r)
    /// ```
    #[inline]
    pub fn evaluate_parametric(&self, t: f64) -> (f64, f64) {
        let p = self.point_at(t);
        (p.x, p.y)
    }

    /// Derivative of `point_at` with respect to `t`.
    #[inline]
    pub fn tangent_at(&self, t: f64) -> Vector2<f64> {
        let (s, c) = t.sin_cos();
        self.rot() * Vector2::new(-self.radius_x() * s, self.radius_y() * c)
    }

    /// Left-hand side of the canonical equation at `p`:
    /// `< 1` inside, `= 1` on the boundary, `> 1` outside.
    #[inline]
    pub fn level_at(&self, p: Vector2<f64>) -> f64 {
        let q = self.to_local(p);
        (q.x / self.radius_x()).powi(2) + (q.y / self.radius_y()).powi(2)
    }

    /// Scalar form of `level_at`.
    #[inline]
    pub fn level(&self, x: f64, y: f64) -> f64 {
        self.level_at(Vector2::new(x, y))
    }

    /// Closed membership: interior and boundary both count.
    ///
    /// Points within rounding distance of the boundary may classify either way.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_point(Vector2::new(x, y))
    }

    /// Vector form of `contains`.
    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        self.level_at(p) <= 1.0
    }

    /// Membership in the level set `level <= 1 + eps`.
    /// Positive `eps` enlarges, negative shrinks.
    #[inline]
    pub fn contains_eps(&self, x: f64, y: f64, eps: f64) -> bool {
        self.contains_point_eps(Vector2::new(x, y), eps)
    }

    /// Vector form of `contains_eps`.
    #[inline]
    pub fn contains_point_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.level_at(p) <= 1.0 + eps
    }

    /// `contains_point_eps` with `GeomCfg::eps_contains`.
    #[inline]
    pub fn contains_cfg(&self, p: Vector2<f64>, cfg: &GeomCfg) -> bool {
        self.contains_point_eps(p, cfg.eps_contains)
    }

    /// Tightest axis-aligned box around the ellipse (closed form).
    ///
    /// Half extents are the maxima of the parametric curve projected on each axis:
    /// `sqrt(rx²cos²r + ry²sin²r)` along x and `sqrt(rx²sin²r + ry²cos²r)` along y.
    pub fn bounding_box(&self) -> Bounds2 {
        let (s, c) = self.rotation().sin_cos();
        let (rx, ry) = (self.radius_x(), self.radius_y());
        // hypot keeps radii near f64::MAX from overflowing when squared
        let x_half = (rx * c).hypot(ry * s);
        let y_half = (rx * s).hypot(ry * c);
        Bounds2 {
            x_min: self.center_x() - x_half,
            x_max: self.center_x() + x_half,
            y_min: self.center_y() - y_half,
            y_max: self.center_y() + y_half,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius_x() * self.radius_y()
    }

    /// Perimeter via Ramanujan's second approximation (exact for circles).
    pub fn circumference(&self) -> f64 {
        let (a, b) = (self.radius_x(), self.radius_y());
        let h = ((a - b) / (a + b)).powi(2);
        PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    /// `sqrt(1 − b²/a²)` with `a`, `b` the semi-major and semi-minor radii.
    pub fn eccentricity(&self) -> f64 {
        let a = self.radius_x().max(self.radius_y());
        let b = self.radius_x().min(self.radius_y());
        (1.0 - (b * b) / (a * a)).max(0.0).sqrt()
    }

    #[inline]
    pub fn is_circle(&self, eps: f64) -> bool {
        (self.radius_x() - self.radius_y()).abs() <= eps
    }

    #[inline]
    pub fn is_circle_cfg(&self, cfg: &GeomCfg) -> bool {
        self.is_circle(cfg.eps_circle)
    }

    /// `n` boundary points at `t = 2πk/n`, `k = 0..n`, counterclockwise in `t`.
    pub fn to_polygon(&self, n: usize) -> Vec<Vector2<f64>> {
        let dt = TAU / n.max(1) as f64;
        (0..n).map(|k| self.point_at(k as f64 * dt)).collect()
    }

    /// Box around `to_polygon(n)`; approaches `bounding_box()` from inside as `n` grows.
    pub fn sampled_bounds(&self, n: usize) -> Option<Bounds2> {
        Bounds2::from_points(&self.to_polygon(n))
    }

    /// Same shape shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Result<Self, EllipseError> {
        EllipseParams {
            center_x: self.center_x() + dx,
            center_y: self.center_y() + dy,
            ..self.params()
        }
        .build()
    }

    /// Same shape rotated counterclockwise by `angle` about its center.
    pub fn rotated(&self, angle: f64) -> Result<Self, EllipseError> {
        EllipseParams {
            rotation: self.rotation() + angle,
            ..self.params()
        }
        .build()
    }

    /// Radii multiplied by `factor` about the (fixed) center.
    pub fn scaled(&self, factor: f64) -> Result<Self, EllipseError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(EllipseError::NonPositiveScale { factor });
        }
        EllipseParams {
            radius_x: self.radius_x() * factor,
            radius_y: self.radius_y() * factor,
            ..self.params()
        }
        .build()
    }
}
