// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall classification: which part of a wedge's extruded edge faces the viewer.
//!
//! The ellipse is split into a front half, `[0, 180)`, which faces the viewer, and a back half,
//! `[180, 360)`, hidden behind the cap. Each wedge picks one of four templates from the
//! visibility of its two edges, and the template decides which rim spans get a wall strip.

use smallvec::SmallVec;

/// Rim spans `(angle1, angle2)` in degrees that need a wall strip.
pub type WallSpans = SmallVec<[(f64, f64); 2]>;

/// Returns `true` if `angle` lies on the half of the rim facing the viewer.
pub fn is_front_visible(angle: f64) -> bool {
    (0.0..180.0).contains(&angle)
}

/// Folds the front half onto `(180, 360]`, leaving the back half unchanged.
pub fn coz(angle: f64) -> f64 {
    if angle < 180.0 { 360.0 - angle } else { angle }
}

/// Reflects the right quadrants about the vertical axis so both sides order the same way.
pub fn zin(angle: f64) -> f64 {
    if angle < 90.0 {
        180.0 - angle
    } else if angle > 270.0 {
        540.0 - angle
    } else {
        angle
    }
}

/// The wall template of a wedge, chosen by which of its edges are front-visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallCase {
    /// Both edges on the front half.
    Front,
    /// Both edges on the back half.
    Back,
    /// Starts on the back half, ends on the front.
    Right,
    /// Starts on the front half, ends on the back.
    Left,
}

impl WallCase {
    /// Picks the template for a wedge spanning `start..end` (both in `[0, 360)`).
    pub fn classify(start: f64, end: f64) -> Self {
        match (is_front_visible(start), is_front_visible(end)) {
            (true, true) => Self::Front,
            (false, false) => Self::Back,
            (false, true) => Self::Right,
            (true, false) => Self::Left,
        }
    }

    /// Rim spans needing a strip for a wedge spanning `start..end`.
    pub fn spans(self, start: f64, end: f64) -> WallSpans {
        let mut out = WallSpans::new();
        match self {
            Self::Front => {
                if coz(start) < coz(end) {
                    // Wraps behind the cap and back out past 0.
                    out.push((start, 180.0));
                    out.push((0.0, end));
                } else {
                    out.push((start, end));
                }
            }
            Self::Back => {
                if coz(end) < coz(start) {
                    out.push((0.0, 180.0));
                }
            }
            Self::Right => {
                if zin(end) < zin(start) {
                    out.push((0.0, end));
                } else {
                    out.push((start, 180.0));
                }
            }
            Self::Left => {
                if zin(start) < zin(end) {
                    out.push((start, 180.0));
                } else {
                    out.push((0.0, end));
                }
            }
        }
        out
    }
}

/// Sweeps within this many degrees of 360 count as a full turn.
pub const FULL_TURN_EPSILON: f64 = 1e-9;

/// Classifies a wedge and returns its template plus the rim spans to extrude.
///
/// A wedge covering the whole turn (a single non-zero dataset) has coinciding edges, which the
/// templates read as an empty span: taken literally, [`WallCase::spans`] gives it no wall, or a
/// zero-width one. Such a wedge gets the full front wall `(0, 180)` instead. Spans of zero width
/// are dropped.
pub fn wall_spans(start: f64, sweep: f64, end: f64) -> (WallCase, WallSpans) {
    let case = WallCase::classify(start, end);
    if sweep <= 0.0 {
        return (case, WallSpans::new());
    }
    let mut spans = if sweep >= 360.0 - FULL_TURN_EPSILON {
        smallvec::smallvec![(0.0, 180.0)]
    } else {
        case.spans(start, end)
    };
    spans.retain(|(a1, a2)| a1 != a2);
    (case, spans)
}
