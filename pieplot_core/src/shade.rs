// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall shading.
//!
//! Walls are lit as if from directly above: same hue and saturation as the cap, half the
//! brightness.

use peniko::Color;

/// A color in hue/saturation/value form.
///
/// `hue` is in degrees `[0, 360)`; `saturation` and `value` are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue angle in degrees.
    pub hue: f32,
    /// Saturation.
    pub saturation: f32,
    /// Value (brightness).
    pub value: f32,
}

impl Hsv {
    /// Converts sRGB components in `[0, 1]`.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta <= 0.0 {
            0.0
        } else if max == r {
            let h = 60.0 * (g - b) / delta;
            if h < 0.0 { h + 360.0 } else { h }
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        Self {
            hue,
            saturation,
            value: max,
        }
    }

    /// Converts back to sRGB components.
    pub fn to_rgb(self) -> [f32; 3] {
        let c = self.value * self.saturation;
        let hp = self.hue / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = self.value - c;
        let (r, g, b) = if hp < 1.0 {
            (c, x, 0.0)
        } else if hp < 2.0 {
            (x, c, 0.0)
        } else if hp < 3.0 {
            (0.0, c, x)
        } else if hp < 4.0 {
            (0.0, x, c)
        } else if hp < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };
        [r + m, g + m, b + m]
    }
}

/// Returns the cap color as HSV.
pub fn to_hsv(color: Color) -> Hsv {
    let [r, g, b, _] = color.components;
    Hsv::from_rgb(r, g, b)
}

/// The shadow color for a wall whose cap is painted `face`.
///
/// Alpha is carried over unchanged.
pub fn wall_shade(face: Color) -> Color {
    let mut hsv = to_hsv(face);
    hsv.value *= 0.5;
    let [r, g, b] = hsv.to_rgb();
    Color::new([r, g, b, face.components[3]])
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    fn assert_components_close(a: Color, b: [f32; 4]) {
        for (got, want) in a.components.iter().zip(b) {
            assert!((got - want).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn red_wall_is_half_bright_red() {
        let shade = wall_shade(Color::new([1.0, 0.0, 0.0, 1.0]));
        assert_components_close(shade, [0.5, 0.0, 0.0, 1.0]);

        let hsv = to_hsv(shade);
        assert_eq!(hsv.hue, 0.0);
        assert!((hsv.saturation - 1.0).abs() < 1e-6);
        assert!((hsv.value - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hue_and_saturation_survive_shading() {
        let face = css::CORNFLOWER_BLUE;
        let before = to_hsv(face);
        let after = to_hsv(wall_shade(face));
        assert!((before.hue - after.hue).abs() < 1e-3);
        assert!((before.saturation - after.saturation).abs() < 1e-5);
        assert!((before.value * 0.5 - after.value).abs() < 1e-6);
    }

    #[test]
    fn grays_and_alpha() {
        assert_components_close(wall_shade(Color::new([1.0, 1.0, 1.0, 0.25])), [
            0.5, 0.5, 0.5, 0.25,
        ]);
        assert_components_close(wall_shade(Color::new([0.0, 0.0, 0.0, 1.0])), [
            0.0, 0.0, 0.0, 1.0,
        ]);
    }

    #[test]
    fn hsv_round_trips_each_sector() {
        for rgb in [
            [0.9, 0.3, 0.1],
            [0.4, 0.8, 0.2],
            [0.1, 0.7, 0.6],
            [0.2, 0.3, 0.9],
            [0.6, 0.1, 0.8],
            [0.9, 0.1, 0.5],
        ] {
            let back = Hsv::from_rgb(rgb[0], rgb[1], rgb[2]).to_rgb();
            for (got, want) in back.iter().zip(rgb) {
                assert!((got - want).abs() < 1e-5, "{rgb:?} -> {back:?}");
            }
        }
    }
}
