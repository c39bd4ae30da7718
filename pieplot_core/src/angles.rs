// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle allocation: dividing the full turn between dataset values.
//!
//! Angles are degrees measured clockwise (in y-down screen space) from the rightmost point of
//! the ellipse, the convention shared by [`path`](crate::path) and [`wall`](crate::wall).

extern crate alloc;

use alloc::vec::Vec;

use crate::PieError;

/// The angular span of one wedge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeAngles {
    /// Leading edge, in `[0, 360)`.
    pub start: f64,
    /// Angular width; `value / total * 360`.
    pub sweep: f64,
    /// Trailing edge, `(start + sweep) mod 360`.
    pub end: f64,
}

/// Folds an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let mut a = angle % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    // Tiny negative remainders round up to exactly 360.
    if a >= 360.0 { 0.0 } else { a + 0.0 }
}

/// Checks that every value is finite and non-negative.
pub fn validate_values(values: impl IntoIterator<Item = f64>) -> Result<(), PieError> {
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(PieError::NonFiniteValue { index });
        }
        if value < 0.0 {
            return Err(PieError::NegativeValue { index, value });
        }
    }
    Ok(())
}

/// Allocates start/sweep/end angles for `values`, in order, beginning at `start_degrees`.
///
/// Returns [`PieError::ZeroTotal`] (and no angles) when the values sum to zero; the check happens
/// before any division.
pub fn allocate(values: &[f64], start_degrees: f64) -> Result<Vec<WedgeAngles>, PieError> {
    validate_values(values.iter().copied())?;

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(PieError::ZeroTotal);
    }

    let mut angle = start_degrees;
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        angle = normalize_degrees(angle);
        let sweep = value / total * 360.0;
        out.push(WedgeAngles {
            start: angle,
            sweep,
            end: normalize_degrees(angle + sweep),
        });
        angle += sweep;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_negative_and_wrapped_angles() {
        assert_eq!(normalize_degrees(-110.0), 250.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
        assert_eq!(normalize_degrees(179.5), 179.5);
        assert!(normalize_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn sweeps_sum_to_a_full_turn() {
        let values = [3.0, 1.0, 7.25, 0.5, 11.0];
        let angles = allocate(&values, -110.0).unwrap();
        let sum: f64 = angles.iter().map(|a| a.sweep).sum();
        assert!((sum - 360.0).abs() < 1e-3, "sum was {sum}");
    }

    #[test]
    fn wedges_are_contiguous_and_normalized() {
        let angles = allocate(&[1.0, 2.0, 3.0], -110.0).unwrap();
        assert_eq!(angles[0].start, 250.0);
        for pair in angles.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-9);
        }
        for a in &angles {
            assert!((0.0..360.0).contains(&a.start));
            assert!((0.0..360.0).contains(&a.end));
        }
    }

    #[test]
    fn zero_value_gets_zero_sweep() {
        let angles = allocate(&[2.0, 0.0, 2.0], 0.0).unwrap();
        assert_eq!(angles.len(), 3);
        assert_eq!(angles[1].sweep, 0.0);
        assert_eq!(angles[1].start, angles[1].end);
    }

    #[test]
    fn zero_total_is_reported_before_dividing() {
        assert_eq!(allocate(&[0.0, 0.0], 0.0), Err(PieError::ZeroTotal));
        assert_eq!(allocate(&[], 0.0), Err(PieError::ZeroTotal));
    }

    #[test]
    fn negative_and_non_finite_values_are_rejected() {
        assert_eq!(
            allocate(&[1.0, -2.0], 0.0),
            Err(PieError::NegativeValue {
                index: 1,
                value: -2.0
            })
        );
        assert_eq!(
            allocate(&[f64::NAN], 0.0),
            Err(PieError::NonFiniteValue { index: 0 })
        );
        assert_eq!(
            validate_values([1.0, f64::INFINITY]),
            Err(PieError::NonFiniteValue { index: 1 })
        );
    }

    #[test]
    fn quarter_quarter_half_from_zero() {
        let angles = allocate(&[1.0, 1.0, 2.0], 0.0).unwrap();
        let spans: Vec<(f64, f64)> = angles.iter().map(|a| (a.start, a.end)).collect();
        assert_eq!(spans, [(0.0, 90.0), (90.0, 180.0), (180.0, 0.0)]);
    }
}
