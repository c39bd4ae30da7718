// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size negotiation for a fixed-aspect chart.
//!
//! Hosts measure a chart by offering each axis a size plus a constraint mode. The chart keeps
//! its box at a fixed width : height ratio, so whichever axis is pinned down drives the other:
//! - an **exact** axis wins outright,
//! - an **at most** axis caps the derived size,
//! - an **unspecified** axis takes whatever the ratio implies.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

/// How strictly a requested dimension must be honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    /// The dimension is fixed by the host.
    Exact,
    /// The dimension may be anything up to the requested size.
    AtMost,
    /// The host places no constraint on the dimension.
    Unspecified,
}

/// A requested size along one axis, together with its mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureSpec {
    /// Requested size.
    pub size: f64,
    /// Constraint mode for `size`.
    pub mode: MeasureMode,
}

impl MeasureSpec {
    const MODE_SHIFT: u32 = 30;
    const SIZE_MASK: u32 = (1 << Self::MODE_SHIFT) - 1;

    /// Creates a measure spec.
    pub fn new(size: f64, mode: MeasureMode) -> Self {
        Self { size, mode }
    }

    /// A fixed size.
    pub fn exact(size: f64) -> Self {
        Self::new(size, MeasureMode::Exact)
    }

    /// An upper bound.
    pub fn at_most(size: f64) -> Self {
        Self::new(size, MeasureMode::AtMost)
    }

    /// No constraint; `size` is only a hint.
    pub fn unspecified(size: f64) -> Self {
        Self::new(size, MeasureMode::Unspecified)
    }

    /// Decodes a packed spec: mode in the top two bits, size in the low thirty.
    ///
    /// Mode bits `0` are unspecified, `1` exact and `2` at-most. The unused pattern `3` decodes as
    /// exact, so the requested size is reported back unchanged.
    pub fn from_packed(packed: u32) -> Self {
        let size = f64::from(packed & Self::SIZE_MASK);
        let mode = match packed >> Self::MODE_SHIFT {
            0 => MeasureMode::Unspecified,
            2 => MeasureMode::AtMost,
            _ => MeasureMode::Exact,
        };
        Self { size, mode }
    }
}

/// Resolves the dependent dimension `b` from the driving dimension `a` and the ratio `a / b`.
pub fn resolve_dimension(a: f64, b: f64, mode: MeasureMode, ratio: f64) -> f64 {
    let ideal = a / ratio;
    match mode {
        MeasureMode::Exact => b,
        MeasureMode::AtMost => ideal.min(b).round(),
        MeasureMode::Unspecified => ideal.round(),
    }
}

/// Resolves a `(width, height)` pair for a box with the given width : height `ratio`.
///
/// `fallback` is used when neither axis is constrained.
pub fn resolve_size(width: MeasureSpec, height: MeasureSpec, ratio: f64, fallback: Size) -> Size {
    let (mut w, mut h) = (width.size, height.size);
    if width.mode == MeasureMode::Exact {
        h = resolve_dimension(w, h, height.mode, ratio);
    } else if height.mode == MeasureMode::Exact {
        w = resolve_dimension(h, w, width.mode, 1.0 / ratio);
    } else if width.mode == MeasureMode::AtMost {
        h = resolve_dimension(w, h, height.mode, ratio);
        w = w.min(h);
    } else if height.mode == MeasureMode::AtMost {
        w = resolve_dimension(h, w, width.mode, 1.0 / ratio);
        h = h.min(w);
    } else {
        return fallback;
    }
    Size {
        width: w,
        height: h,
    }
}
