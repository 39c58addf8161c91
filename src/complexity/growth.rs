//! Growth-curve samples for charting a complexity class.
//!
//! Samples cover `n = 1..=10`. Exponential and factorial growth cap their
//! argument at 6 before evaluation, and every value is clamped to 1000 so
//! the chart axis stays fixed at `[1, 10] x [0, 1000]`.

use serde::{Deserialize, Serialize};

use super::class::ComplexityClass;

/// First sampled input size.
pub const CURVE_MIN_N: u32 = 1;
/// Last sampled input size.
pub const CURVE_MAX_N: u32 = 10;
/// Upper bound for any sampled operation count.
pub const OPERATION_CEILING: f64 = 1000.0;
/// Argument cap applied to `2^n` and `n!` before evaluation.
pub const GROWTH_ARGUMENT_CAP: u32 = 6;

/// One `(n, operations)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurvePoint {
    pub n: u32,
    pub operations: f64,
}

/// Estimated operation count for `class` at input size `n`, clamped.
#[must_use]
pub fn operations(class: ComplexityClass, n: u32) -> f64 {
    let x = f64::from(n);
    let raw = match class {
        ComplexityClass::Constant => 1.0,
        ComplexityClass::Logarithmic => x.log2(),
        ComplexityClass::Linear | ComplexityClass::Unknown => x,
        ComplexityClass::Linearithmic => x * x.log2(),
        ComplexityClass::Quadratic => x.powi(2),
        ComplexityClass::Cubic => x.powi(3),
        ComplexityClass::Exponential => 2f64.powi(n.min(GROWTH_ARGUMENT_CAP) as i32),
        ComplexityClass::Factorial => factorial(n.min(GROWTH_ARGUMENT_CAP)),
    };
    raw.clamp(0.0, OPERATION_CEILING)
}

fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// Restartable iterator over the samples of one class.
///
/// Cloning it, or calling [`growth_curve`] again, yields the same sequence.
#[derive(Debug, Clone)]
pub struct GrowthCurve {
    class: ComplexityClass,
    next_n: u32,
}

impl GrowthCurve {
    #[must_use]
    pub fn new(class: ComplexityClass) -> Self {
        Self {
            class,
            next_n: CURVE_MIN_N,
        }
    }
}

impl Iterator for GrowthCurve {
    type Item = GrowthCurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_n > CURVE_MAX_N {
            return None;
        }
        let n = self.next_n;
        self.next_n += 1;
        Some(GrowthCurvePoint {
            n,
            operations: operations(self.class, n),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (CURVE_MAX_N + 1).saturating_sub(self.next_n) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GrowthCurve {}

/// All ten samples for `class`.
#[must_use]
pub fn growth_curve(class: ComplexityClass) -> Vec<GrowthCurvePoint> {
    GrowthCurve::new(class).collect()
}
