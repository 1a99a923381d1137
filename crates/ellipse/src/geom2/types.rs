//! Value types for rotated 2D ellipses.
//!
//! - `Ellipse`: immutable (center, radii, rotation) with validated construction.
//! - `EllipseParams`: named, defaulted construction parameters.
//! - `Bounds2`: closed axis-aligned rectangle.
//! - `EllipseError`: why a construction was rejected.
//!
//! Code cross-refs: `queries` (all geometric operations on `Ellipse`), `cfg::GeomCfg`

use std::fmt;

use nalgebra::Vector2;

/// Local ellipse axis (before rotation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("radius_x"),
            Axis::Y => f.write_str("radius_y"),
        }
    }
}

/// Errors surfaced when building or rescaling an ellipse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EllipseError {
    /// A semi-axis radius is zero or negative.
    NonPositiveRadius { axis: Axis, value: f64 },
    /// A field is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// `Ellipse::scaled` was given a factor that is not a positive finite number.
    NonPositiveScale { factor: f64 },
}

impl fmt::Display for EllipseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EllipseError::NonPositiveRadius { axis, value } => {
                write!(f, "{} must be positive, got {}", axis, value)
            }
            EllipseError::NonFinite { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            EllipseError::NonPositiveScale { factor } => {
                write!(f, "scale factor must be positive and finite, got {}", factor)
            }
        }
    }
}

impl std::error::Error for EllipseError {}

/// Named construction parameters; `Default` is the unit circle at the origin.
///
/// ```
/// use ellipse::EllipseParams;
///
/// let e = EllipseParams {
///     center_x: 10.0,
///     center_y: 5.0,
///     radius_x: 3.0,
///     radius_y: 2.0,
///     rotation: std::f64::consts::FRAC_PI_4,
/// }
/// .build()
/// .unwrap();
/// assert!(e.contains(10.0, 5.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseParams {
    pub center_x: f64,
    pub center_y: f64,
    /// Semi-axis along the local x-axis (before rotating).
    pub radius_x: f64,
    /// Semi-axis along the local y-axis (before rotating).
    pub radius_y: f64,
    /// Counterclockwise rotation about the center, in radians.
    pub rotation: f64,
}

impl Default for EllipseParams {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            radius_x: 1.0,
            radius_y: 1.0,
            rotation: 0.0,
        }
    }
}

impl EllipseParams {
    /// Validate and construct.
    pub fn build(self) -> Result<Ellipse, EllipseError> {
        if let Err(err) = self.validate() {
            tracing::debug!(params = ?self, %err, "rejected ellipse");
            return Err(err);
        }
        Ok(Ellipse::from_params_unchecked(self))
    }

    fn validate(&self) -> Result<(), EllipseError> {
        let fields = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("radius_x", self.radius_x),
            ("radius_y", self.radius_y),
            ("rotation", self.rotation),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EllipseError::NonFinite { field, value });
            }
        }
        if self.radius_x <= 0.0 {
            return Err(EllipseError::NonPositiveRadius {
                axis: Axis::X,
                value: self.radius_x,
            });
        }
        if self.radius_y <= 0.0 {
            return Err(EllipseError::NonPositiveRadius {
                axis: Axis::Y,
                value: self.radius_y,
            });
        }
        Ok(())
    }
}

/// An ellipse, possibly shifted and rotated about its center.
///
/// Canonical equation in global coordinates `(x, y)`:
///
/// ```text
/// ((x-cx)cos(r) - (y-cy)sin(r))^2 / rx^2 + ((x-cx)sin(r) + (y-cy)cos(r))^2 / ry^2 = 1
/// ```
///
/// Invariants:
/// - `radius_x > 0`, `radius_y > 0`.
/// - All fields are finite. `rotation` is not reduced modulo 2π.
///
/// Fields are private; build through `EllipseParams::build`, `Ellipse::new`,
/// or `Ellipse::default()` (unit circle at the origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    center_x: f64,
    center_y: f64,
    radius_x: f64,
    radius_y: f64,
    rotation: f64,
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::from_params_unchecked(EllipseParams::default())
    }
}

impl TryFrom<EllipseParams> for Ellipse {
    type Error = EllipseError;

    fn try_from(params: EllipseParams) -> Result<Self, Self::Error> {
        params.build()
    }
}

impl Ellipse {
    /// Callers must have validated `params`.
    #[inline]
    fn from_params_unchecked(params: EllipseParams) -> Self {
        Self {
            center_x: params.center_x,
            center_y: params.center_y,
            radius_x: params.radius_x,
            radius_y: params.radius_y,
            rotation: params.rotation,
        }
    }

    /// Positional shorthand for `EllipseParams { .. }.build()`.
    pub fn new(
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
    ) -> Result<Self, EllipseError> {
        EllipseParams {
            center_x,
            center_y,
            radius_x,
            radius_y,
            rotation,
        }
        .build()
    }

    /// Circle of radius `r` centered at `(cx, cy)`.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Result<Self, EllipseError> {
        Self::new(cx, cy, r, r, 0.0)
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }
    #[inline]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }
    #[inline]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.center_x, self.center_y)
    }

    /// Current fields as parameters, e.g. to derive a modified copy.
    #[inline]
    pub fn params(&self) -> EllipseParams {
        EllipseParams {
            center_x: self.center_x,
            center_y: self.center_y,
            radius_x: self.radius_x,
            radius_y: self.radius_y,
            rotation: self.rotation,
        }
    }
}

/// Closed axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds2 {
    #[inline]
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }
    #[inline]
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }
    /// `((x_min, x_max), (y_min, y_max))`.
    #[inline]
    pub fn as_ranges(&self) -> ((f64, f64), (f64, f64)) {
        (self.x_range(), self.y_range())
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
        )
    }
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Smallest box containing all `points`; `None` if empty.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        Some(points[1..].iter().fold(init, |b, p| Self {
            x_min: b.x_min.min(p.x),
            x_max: b.x_max.max(p.x),
            y_min: b.y_min.min(p.y),
            y_max: b.y_max.max(p.y),
        }))
    }
}
