//! Transition curves
//!
//! Curves map linear progress `t` in `0..=1` to eased progress. Hosts use them
//! to drive the visual commit of an animated theme switch.

use serde::{Deserialize, Serialize};

/// Timing curve for an animated theme transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the curve to a progress value; input is clamped to `0..=1`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => solve_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Find the bezier parameter whose x equals `t` by bisection, then sample y.
fn solve_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);
    let target = t as f64;
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut p = target;
    for _ in 0..32 {
        let x = sample(p, x1, x2);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) / 2.0;
    }
    sample(p, y1, y2) as f32
}

/// One axis of a cubic bezier anchored at 0 and 1
#[inline]
fn sample(p: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - p;
    3.0 * inv * inv * p * c1 + 3.0 * inv * p * p * c2 + p * p * p
}
