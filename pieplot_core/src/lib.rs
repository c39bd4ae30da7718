// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for pseudo-3D ("cake-style") pie charts.
//!
//! A chart is a flat elliptical cap split into wedges, sitting on an extruded side wall that is
//! painted a darker shade of each wedge's color. This crate turns a list of datasets and a
//! bounding rectangle into that layered set of filled `kurbo::BezPath`s:
//! - **Angles** divide the full turn between dataset values.
//! - **Walls** classify each wedge by which of its edges face the viewer, and extrude only the
//!   visible part of its rim.
//! - **Layout** negotiates the chart's size under host constraints at a fixed aspect ratio.
//!
//! [`PiePlot`] ties these together and keeps exactly one complete wedge set at a time.
//! Rasterization, legends and interaction are left to the caller.

#![no_std]

extern crate alloc;

pub mod angles;
mod chart;
mod config;
mod dataset;
mod error;
#[cfg(not(feature = "std"))]
mod float;
pub mod layout;
pub mod path;
pub mod shade;
pub mod wall;
pub mod z_order;

pub use angles::WedgeAngles;
pub use chart::{PaintPart, PaintPath, PiePlot, Wedge, build_wedges};
pub use config::{PaintOrder, PieConfig};
pub use dataset::{DataSet, color_from_argb};
pub use error::PieError;
pub use layout::{MeasureMode, MeasureSpec, Size};
pub use wall::WallCase;
