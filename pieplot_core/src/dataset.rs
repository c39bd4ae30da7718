// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input records for a pie chart.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

/// One pie entry: a label, the color of its cap, and its magnitude.
///
/// The label is carried for legends and other consumers; geometry ignores it.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    /// Display text for this entry.
    pub label: String,
    /// Fill color of the wedge's top face.
    pub face_color: Color,
    /// Non-negative magnitude.
    pub value: f64,
}

impl DataSet {
    /// Creates a new dataset entry.
    pub fn new(label: impl Into<String>, face_color: impl Into<Color>, value: f64) -> Self {
        Self {
            label: label.into(),
            face_color: face_color.into(),
            value,
        }
    }

    /// Creates a dataset entry from a packed `0xAARRGGBB` color.
    pub fn from_argb(label: impl Into<String>, argb: u32, value: f64) -> Self {
        Self::new(label, color_from_argb(argb), value)
    }
}

/// Unpacks a `0xAARRGGBB` integer into a [`Color`].
pub fn color_from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_unpacks_channels_in_order() {
        let rgba = color_from_argb(0x80_ff_20_10).to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0xff, 0x20, 0x10, 0x80));
    }

    #[test]
    fn from_argb_keeps_label_and_value() {
        let ds = DataSet::from_argb("kanji", 0xff_00_00_ff, 3.5);
        assert_eq!(ds.label, "kanji");
        assert_eq!(ds.value, 3.5);
        assert_eq!(ds.face_color.to_rgba8().b, 0xff);
    }
}
