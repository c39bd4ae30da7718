// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cap wedge and wall strip path construction.
//!
//! Both shapes live on the cap ellipse inscribed in a rectangle. Angles are degrees, clockwise in
//! y-down coordinates with 0 at the rightmost point, and arcs are flattened to cubic Béziers.

use kurbo::{Arc, BezPath, PathEl, Rect, Shape, Vec2};

/// Smallest curve flattening tolerance used; lower or non-finite values are raised to it.
pub const MIN_TOLERANCE: f64 = 1e-3;

/// The rim arc of the ellipse inscribed in `rect`, shifted down by `dy`.
fn rim_arc(rect: Rect, dy: f64, start_degrees: f64, sweep_degrees: f64) -> Arc {
    Arc {
        center: rect.center() + Vec2::new(0.0, dy),
        radii: Vec2::new(0.5 * rect.width(), 0.5 * rect.height()),
        start_angle: start_degrees.to_radians(),
        sweep_angle: sweep_degrees.to_radians(),
        x_rotation: 0.0,
    }
}

/// Appends `arc`, joining it to the current point with a line if the path is not empty.
fn arc_to(path: &mut BezPath, arc: &Arc, tolerance: f64) {
    let tolerance = if tolerance.is_finite() {
        tolerance.max(MIN_TOLERANCE)
    } else {
        MIN_TOLERANCE
    };
    for el in arc.path_elements(tolerance) {
        match el {
            PathEl::MoveTo(p) if !path.elements().is_empty() => path.line_to(p),
            el => path.push(el),
        }
    }
}

/// The flat pie slice from the center of `rect` through `sweep_degrees` of rim starting at
/// `start_degrees`.
///
/// A zero sweep yields an empty path.
pub fn cap_path(rect: Rect, start_degrees: f64, sweep_degrees: f64, tolerance: f64) -> BezPath {
    let mut path = BezPath::new();
    if sweep_degrees == 0.0 {
        return path;
    }
    path.move_to(rect.center());
    arc_to(
        &mut path,
        &rim_arc(rect, 0.0, start_degrees, sweep_degrees),
        tolerance,
    );
    path.close_path();
    path
}

/// The side wall ribbon between `angle1` and `angle2`, extruded `depth` below the rim.
///
/// The lower edge runs from `angle2` to `angle1` on the shifted rim, then the path climbs to the
/// rim and runs back from `angle1` to `angle2`.
pub fn strip(rect: Rect, depth: f64, angle1: f64, angle2: f64, tolerance: f64) -> BezPath {
    let mut path = BezPath::new();
    arc_to(
        &mut path,
        &rim_arc(rect, depth, angle2, angle1 - angle2),
        tolerance,
    );
    arc_to(
        &mut path,
        &rim_arc(rect, 0.0, angle1, angle2 - angle1),
        tolerance,
    );
    path.close_path();
    path
}
