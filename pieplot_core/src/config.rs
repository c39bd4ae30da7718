// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use crate::layout::Size;

/// How the emitted wall and cap paths are ordered for painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintOrder {
    /// Every wall strip first, then every cap.
    ///
    /// A cap never hides a neighbour's wall, and cap edges cover the seam where a wall meets the
    /// rim.
    #[default]
    WallsThenCaps,
    /// Each wedge's cap immediately followed by its own walls, in dataset order.
    ///
    /// A later cap can overdraw an earlier wedge's wall near the wrap-around point.
    DataSetOrder,
}

/// Tunables for a [`PiePlot`](crate::PiePlot).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieConfig {
    /// Angle of the first wedge's leading edge, in degrees clockwise from the rightmost point.
    pub start_angle_degrees: f64,
    /// Width : height aspect ratio of the chart's bounding box.
    pub cap_to_extrusion_ratio: f64,
    /// Extrusion depth is `width / depth_to_width_ratio * (1 - 1 / cap_to_extrusion_ratio)`.
    pub depth_to_width_ratio: f64,
    /// Curve flattening tolerance used when converting arcs to `BezPath`s.
    pub tolerance: f64,
    /// Paint ordering of the emitted primitives.
    pub paint_order: PaintOrder,
    /// Size reported when neither dimension is constrained.
    pub fallback_size: Size,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            start_angle_degrees: -110.0,
            cap_to_extrusion_ratio: 2.0,
            depth_to_width_ratio: 10.0,
            tolerance: 0.1,
            paint_order: PaintOrder::default(),
            fallback_size: Size {
                width: 100.0,
                height: 100.0,
            },
        }
    }
}

impl PieConfig {
    /// Sets the rotational offset of the first wedge.
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle_degrees = degrees;
        self
    }

    /// Sets the bounding box aspect ratio (width : height).
    pub fn with_cap_to_extrusion_ratio(mut self, ratio: f64) -> Self {
        self.cap_to_extrusion_ratio = ratio;
        self
    }

    /// Sets the ratio controlling extrusion depth.
    pub fn with_depth_to_width_ratio(mut self, ratio: f64) -> Self {
        self.depth_to_width_ratio = ratio;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the paint ordering.
    pub fn with_paint_order(mut self, order: PaintOrder) -> Self {
        self.paint_order = order;
        self
    }

    /// Sets the size used when layout is unconstrained on both axes.
    pub fn with_fallback_size(mut self, size: Size) -> Self {
        self.fallback_size = size;
        self
    }

    /// Replaces unusable numeric settings with their defaults.
    ///
    /// Ratios and the tolerance must be finite and positive, and the start angle finite. A zero
    /// tolerance would never finish flattening an arc, and a zero depth ratio gives an infinite
    /// extrusion.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            start_angle_degrees: if self.start_angle_degrees.is_finite() {
                self.start_angle_degrees
            } else {
                defaults.start_angle_degrees
            },
            cap_to_extrusion_ratio: positive_or(
                self.cap_to_extrusion_ratio,
                defaults.cap_to_extrusion_ratio,
            ),
            depth_to_width_ratio: positive_or(
                self.depth_to_width_ratio,
                defaults.depth_to_width_ratio,
            ),
            tolerance: positive_or(self.tolerance, defaults.tolerance),
            ..self
        }
    }

    /// Extrusion depth for a chart of the given width.
    pub fn depth_for_width(&self, width: f64) -> f64 {
        width / self.depth_to_width_ratio * (1.0 - 1.0 / self.cap_to_extrusion_ratio)
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
