// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recompute driver: datasets + bounds in, derived wedges and paint primitives out.
//!
//! A [`PiePlot`] owns the current wedge set. Any change to the data, the bounds or the
//! configuration rebuilds every wedge into a fresh `Vec` and only then replaces the current one,
//! so readers see either the old set or the complete new one.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::{Brush, Color};
use smallvec::SmallVec;

use crate::angles::{allocate, validate_values};
use crate::layout::{MeasureSpec, Size, resolve_size};
use crate::path::{cap_path, strip};
use crate::shade::wall_shade;
use crate::wall::{WallCase, wall_spans};
use crate::{DataSet, PaintOrder, PieConfig, PieError, z_order};

/// Geometry and paints derived for one dataset in one recompute pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    /// Position of the source dataset.
    pub index: usize,
    /// Leading edge in degrees, `[0, 360)`.
    pub start_angle: f64,
    /// Angular width in degrees.
    pub sweep_angle: f64,
    /// Trailing edge in degrees, `[0, 360)`.
    pub end_angle: f64,
    /// Wall template selected for this wedge.
    pub wall_case: WallCase,
    /// The flat slice on the top face; empty for a zero value.
    pub cap_path: BezPath,
    /// Visible side wall strips.
    pub wall_paths: SmallVec<[BezPath; 2]>,
    /// Cap fill.
    pub face_shade: Color,
    /// Wall fill.
    pub wall_shade: Color,
}

/// Which face of a wedge a [`PaintPath`] paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaintPart {
    /// The top face.
    Cap,
    /// The n-th wall strip.
    Wall(usize),
}

/// A filled path ready for a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintPath {
    /// Index of the wedge this path belongs to.
    pub wedge: usize,
    /// Which face of the wedge.
    pub part: PaintPart,
    /// Closed outline.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint; see [`z_order`](crate::z_order).
    pub z_index: i32,
}

/// Builds the full wedge set for `data` inside `bounds`.
///
/// The cap ellipse fills the top of `bounds`, leaving room below it for the extrusion.
/// Unusable numeric settings in `config` fall back to their defaults (see
/// [`PieConfig::sanitized`]).
pub fn build_wedges(
    data: &[DataSet],
    bounds: Rect,
    config: &PieConfig,
) -> Result<Vec<Wedge>, PieError> {
    let config = config.sanitized();
    let values: Vec<f64> = data.iter().map(|ds| ds.value).collect();
    let angles = allocate(&values, config.start_angle_degrees)?;

    let depth = config.depth_for_width(bounds.width());
    let cap_rect = Rect::new(bounds.x0, bounds.y0, bounds.x1, bounds.y1 - depth);
    let tolerance = config.tolerance;

    let wedges = data
        .iter()
        .zip(angles)
        .enumerate()
        .map(|(index, (ds, a))| {
            let (wall_case, spans) = wall_spans(a.start, a.sweep, a.end);
            Wedge {
                index,
                start_angle: a.start,
                sweep_angle: a.sweep,
                end_angle: a.end,
                wall_case,
                cap_path: cap_path(cap_rect, a.start, a.sweep, tolerance),
                wall_paths: spans
                    .iter()
                    .map(|&(a1, a2)| strip(cap_rect, depth, a1, a2, tolerance))
                    .collect(),
                face_shade: ds.face_color,
                wall_shade: wall_shade(ds.face_color),
            }
        })
        .collect();
    Ok(wedges)
}

/// A pseudo-3D pie chart.
#[derive(Clone, Debug, Default)]
pub struct PiePlot {
    config: PieConfig,
    data: Vec<DataSet>,
    bounds: Option<Rect>,
    wedges: Vec<Wedge>,
    degenerate: bool,
}

impl PiePlot {
    /// Creates an empty chart.
    ///
    /// Unusable numeric settings fall back to their defaults (see [`PieConfig::sanitized`]).
    pub fn new(config: PieConfig) -> Self {
        Self {
            config: config.sanitized(),
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &PieConfig {
        &self.config
    }

    /// Replaces the configuration and recomputes.
    ///
    /// The configuration is sanitized first, as in [`new`](Self::new).
    pub fn set_config(&mut self, config: PieConfig) {
        self.config = config.sanitized();
        self.recompute();
    }

    /// The datasets of the last accepted [`set_data`](Self::set_data) call.
    pub fn data(&self) -> &[DataSet] {
        &self.data
    }

    /// Replaces the dataset list and recomputes.
    ///
    /// Negative or non-finite values are rejected; the previous data and wedges stay in place.
    /// A list whose values sum to zero is accepted but yields no geometry (see
    /// [`is_degenerate`](Self::is_degenerate)).
    pub fn set_data(&mut self, data: Vec<DataSet>) -> Result<(), PieError> {
        validate_values(data.iter().map(|ds| ds.value))?;
        self.data = data;
        self.recompute();
        Ok(())
    }

    /// The current bounding rectangle, if any.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Sets the bounding rectangle and recomputes with the stored datasets.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        self.recompute();
    }

    /// Forgets the bounding rectangle, clearing all geometry.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
        self.recompute();
    }

    /// The current wedge set, in dataset order.
    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    /// Returns `true` if the last pass had data and bounds but the values summed to zero.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Resolves the chart's size for a measurement request.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        resolve_size(
            width,
            height,
            self.config.cap_to_extrusion_ratio,
            self.config.fallback_size,
        )
    }

    /// Every non-empty cap and wall as a filled path, in paint order.
    pub fn paint_list(&self) -> Vec<PaintPath> {
        let (wall_z, cap_z) = match self.config.paint_order {
            PaintOrder::WallsThenCaps => (z_order::WALLS, z_order::CAPS),
            PaintOrder::DataSetOrder => (z_order::SLICES, z_order::SLICES),
        };

        let mut out = Vec::new();
        for wedge in &self.wedges {
            if !wedge.cap_path.elements().is_empty() {
                out.push(PaintPath {
                    wedge: wedge.index,
                    part: PaintPart::Cap,
                    path: wedge.cap_path.clone(),
                    fill: wedge.face_shade.into(),
                    z_index: cap_z,
                });
            }
            for (i, wall) in wedge.wall_paths.iter().enumerate() {
                out.push(PaintPath {
                    wedge: wedge.index,
                    part: PaintPart::Wall(i),
                    path: wall.clone(),
                    fill: wedge.wall_shade.into(),
                    z_index: wall_z,
                });
            }
        }
        out.sort_by_key(|p| (p.z_index, p.wedge, p.part));
        out
    }

    fn recompute(&mut self) {
        self.degenerate = false;
        let bounds = self
            .bounds
            .filter(|b| b.width() > 0.0 && b.height() > 0.0);
        let Some(bounds) = bounds else {
            tracing::debug!("pie recompute skipped: no usable bounds");
            self.wedges = Vec::new();
            return;
        };
        if self.data.is_empty() {
            tracing::debug!("pie recompute skipped: no datasets");
            self.wedges = Vec::new();
            return;
        }

        match build_wedges(&self.data, bounds, &self.config) {
            Ok(wedges) => {
                tracing::trace!(
                    "pie recompute: {} wedges, {} wall strips",
                    wedges.len(),
                    wedges.iter().map(|w| w.wall_paths.len()).sum::<usize>()
                );
                self.wedges = wedges;
            }
            Err(err) => {
                tracing::debug!(%err, "pie recompute produced no geometry");
                self.wedges = Vec::new();
                self.degenerate = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Shape;
    use peniko::color::palette::css;

    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 100.0)
    }

    fn plot_with(values: &[f64], config: PieConfig) -> PiePlot {
        let mut plot = PiePlot::new(config);
        plot.set_bounds(bounds());
        plot.set_data(
            values
                .iter()
                .map(|&v| DataSet::new("slice", css::STEEL_BLUE, v))
                .collect(),
        )
        .unwrap();
        plot
    }

    #[test]
    fn nothing_is_drawn_without_bounds_or_data() {
        let mut plot = PiePlot::new(PieConfig::default());
        plot.set_data(vec![DataSet::new("a", css::RED, 1.0)]).unwrap();
        assert!(plot.wedges().is_empty());

        plot.set_bounds(bounds());
        assert_eq!(plot.wedges().len(), 1);

        plot.clear_bounds();
        assert!(plot.wedges().is_empty());
        assert!(!plot.is_degenerate());

        plot.set_bounds(bounds());
        plot.set_data(Vec::new()).unwrap();
        assert!(plot.wedges().is_empty());
    }

    #[test]
    fn zero_total_clears_geometry() {
        let mut plot = plot_with(&[1.0, 2.0], PieConfig::default());
        assert_eq!(plot.wedges().len(), 2);
        plot.set_data(vec![DataSet::new("a", css::RED, 0.0)]).unwrap();
        assert!(plot.is_degenerate());
        assert!(plot.wedges().is_empty());
        assert!(plot.paint_list().is_empty());
    }

    #[test]
    fn rejected_data_keeps_previous_wedges() {
        let mut plot = plot_with(&[1.0, 2.0], PieConfig::default());
        let before = plot.wedges().to_vec();
        let err = plot
            .set_data(vec![
                DataSet::new("a", css::RED, 1.0),
                DataSet::new("b", css::RED, -1.0),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            PieError::NegativeValue {
                index: 1,
                value: -1.0
            }
        );
        assert_eq!(plot.wedges(), &before[..]);
        assert_eq!(plot.data().len(), 2);
    }

    #[test]
    fn wall_shade_is_darker_face() {
        let plot = plot_with(&[1.0], PieConfig::default());
        let w = &plot.wedges()[0];
        assert_eq!(w.face_shade, css::STEEL_BLUE);
        assert_eq!(w.wall_shade, wall_shade(css::STEEL_BLUE));
    }

    #[test]
    fn walls_then_caps_orders_all_walls_first() {
        let plot = plot_with(&[1.0, 1.0, 2.0], PieConfig::default().with_start_angle(0.0));
        let list = plot.paint_list();
        let first_cap = list
            .iter()
            .position(|p| p.part == PaintPart::Cap)
            .expect("caps are present");
        assert!(list[..first_cap].iter().all(|p| p.z_index == z_order::WALLS));
        assert!(list[first_cap..].iter().all(|p| p.part == PaintPart::Cap));
    }

    #[test]
    fn dataset_order_interleaves_cap_and_walls() {
        let config = PieConfig::default()
            .with_start_angle(0.0)
            .with_paint_order(PaintOrder::DataSetOrder);
        let plot = plot_with(&[1.0, 1.0, 2.0], config);
        let order: Vec<(usize, PaintPart)> =
            plot.paint_list().iter().map(|p| (p.wedge, p.part)).collect();
        assert_eq!(order, [
            (0, PaintPart::Cap),
            (0, PaintPart::Wall(0)),
            (1, PaintPart::Cap),
            (1, PaintPart::Wall(0)),
            (2, PaintPart::Cap),
        ]);
    }

    #[test]
    fn measure_uses_box_ratio() {
        let plot = PiePlot::new(PieConfig::default());
        let size = plot.measure(MeasureSpec::exact(200.0), MeasureSpec::at_most(150.0));
        assert_eq!(size, Size {
            width: 200.0,
            height: 100.0
        });
    }

    #[test]
    fn unusable_tolerance_and_depth_ratio_still_produce_finite_paths() {
        let config = PieConfig::default()
            .with_tolerance(0.0)
            .with_depth_to_width_ratio(0.0);
        let mut plot = plot_with(&[1.0, 2.0, 3.0], config);
        assert_eq!(plot.config().tolerance, 0.1);
        assert_eq!(plot.config().depth_to_width_ratio, 10.0);

        plot.set_config(plot.config().with_tolerance(-1.0));
        assert_eq!(plot.config().tolerance, 0.1);
        assert_eq!(plot.wedges().len(), 3);
        for p in plot.paint_list() {
            let b = p.path.bounding_box();
            assert!(
                b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite(),
                "{b:?}"
            );
        }

        let wedges = build_wedges(plot.data(), bounds(), &config).unwrap();
        assert_eq!(wedges, plot.wedges());
    }
}
