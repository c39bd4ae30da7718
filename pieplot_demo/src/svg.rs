// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `pieplot_demo`.

use kurbo::{Rect, Shape};
use peniko::Brush;
use pieplot_core::PaintPath;

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    paths: Vec<PaintPath>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn extend(&mut self, paths: impl IntoIterator<Item = PaintPath>) {
        self.paths.extend(paths);
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.bounds()) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        let view_box = view_box.unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut order: Vec<&PaintPath> = self.paths.iter().collect();
        order.sort_by_key(|p| (p.z_index, p.wedge, p.part));

        for p in order {
            let d = p.path.to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(&mut out, "fill", &p.fill);
            out.push_str("/>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    fn bounds(&self) -> Option<Rect> {
        self.paths
            .iter()
            .filter(|p| !p.path.elements().is_empty())
            .map(|p| p.path.bounding_box())
            .reduce(|a, b| a.union(b))
            .map(|r| r.inflate(10.0, 10.0))
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::BezPath;
    use peniko::Color;
    use pieplot_core::PaintPart;

    use super::*;

    fn square(x: f64) -> BezPath {
        Rect::new(x, 0.0, x + 10.0, 10.0).to_path(0.1)
    }

    #[test]
    fn paths_are_written_in_z_order() {
        let mut scene = SvgScene::default();
        scene.extend([
            PaintPath {
                wedge: 0,
                part: PaintPart::Cap,
                path: square(0.0),
                fill: Color::from_rgba8(0xff, 0, 0, 0xff).into(),
                z_index: 10,
            },
            PaintPath {
                wedge: 0,
                part: PaintPart::Wall(0),
                path: square(20.0),
                fill: Color::from_rgba8(0x80, 0, 0, 0x80).into(),
                z_index: -10,
            },
        ]);
        let svg = scene.to_svg_string();
        let wall = svg.find("#800000").expect("wall fill");
        let cap = svg.find("#ff0000").expect("cap fill");
        assert!(wall < cap, "{svg}");
        assert!(svg.contains(r#"fill-opacity="#));
    }

    #[test]
    fn empty_scene_uses_default_view_box() {
        let svg = SvgScene::default().to_svg_string();
        assert!(svg.contains(r#"viewBox="0 0 100 100""#), "{svg}");
    }
}
