//! Random ellipses (uniform field ranges + replay tokens).
//!
//! Purpose
//! - Deterministic, indexable sampler used by property checks and benchmarks.
//! - Every draw satisfies the `Ellipse` invariants, so construction cannot fail.
//!
//! Model
//! - Each field is drawn uniformly from its configured half-open range.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Ellipse;

/// Smallest radius a draw may produce.
const MIN_RADIUS: f64 = 1e-6;

/// Field ranges for `draw_ellipse`.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipseCfg {
    /// Range for both center coordinates.
    pub center_range: Range<f64>,
    /// Range for both radii. The lower end is clamped to a small positive value.
    pub radius_range: Range<f64>,
    pub rotation_range: Range<f64>,
}

impl Default for EllipseCfg {
    fn default() -> Self {
        Self {
            center_range: -10.0..10.0,
            radius_range: 0.1..5.0,
            rotation_range: 0.0..TAU,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Uniform sample in `r`; degenerate or inverted ranges collapse to `r.start`.
/// Ranges with a non-finite bound or width yield NaN, which `Ellipse::new` rejects.
fn sample_range<R: Rng>(rng: &mut R, r: &Range<f64>) -> f64 {
    if !(r.start.is_finite() && r.end.is_finite() && (r.end - r.start).is_finite()) {
        return f64::NAN;
    }
    if r.end > r.start {
        rng.gen_range(r.clone())
    } else {
        r.start
    }
}

/// Draw one ellipse for `tok`. Same `(cfg, tok)` always yields the same ellipse.
pub fn draw_ellipse(cfg: &EllipseCfg, tok: ReplayToken) -> Ellipse {
    let mut rng = tok.to_std_rng();
    let radii = cfg.radius_range.start.max(MIN_RADIUS)..cfg.radius_range.end;
    let center_x = sample_range(&mut rng, &cfg.center_range);
    let center_y = sample_range(&mut rng, &cfg.center_range);
    let radius_x = sample_range(&mut rng, &radii);
    let radius_y = sample_range(&mut rng, &radii);
    let rotation = sample_range(&mut rng, &cfg.rotation_range);
    match Ellipse::new(center_x, center_y, radius_x, radius_y, rotation) {
        Ok(e) => e,
        Err(err) => {
            // Only reachable with non-finite ranges in `cfg`.
            tracing::warn!(%err, ?tok, "invalid draw; falling back to unit circle");
            Ellipse::default()
        }
    }
}

/// `count` consecutive draws starting at `tok`.
pub fn draw_ellipses(cfg: &EllipseCfg, tok: ReplayToken, count: usize) -> Vec<Ellipse> {
    std::iter::successors(Some(tok), |t| Some(t.next()))
        .take(count)
        .map(|t| draw_ellipse(cfg, t))
        .collect()
}
