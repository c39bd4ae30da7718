// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for emitted pie primitives.
//!
//! Every [`PaintPath`](crate::PaintPath) carries an explicit `z_index`. Renderers should sort by
//! `(z_index, wedge, part)` for a deterministic tie-break; [`PiePlot::paint_list`] already
//! returns paths in that order.
//!
//! [`PiePlot::paint_list`]: crate::PiePlot::paint_list

/// Wall strips under [`PaintOrder::WallsThenCaps`](crate::PaintOrder::WallsThenCaps).
pub const WALLS: i32 = -10;
/// Caps under [`PaintOrder::WallsThenCaps`](crate::PaintOrder::WallsThenCaps).
pub const CAPS: i32 = 10;
/// Caps and walls under [`PaintOrder::DataSetOrder`](crate::PaintOrder::DataSetOrder); the
/// wedge index decides.
pub const SLICES: i32 = 0;
