// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart demos for `pieplot_core`, written out as SVG files.
mod svg;

use std::path::PathBuf;

use kurbo::Rect;
use peniko::color::palette::css;
use pieplot_core::{DataSet, MeasureSpec, PaintOrder, PieConfig, PiePlot};
use tracing_subscriber::EnvFilter;

struct Demo {
    name: &'static str,
    config: PieConfig,
    width: MeasureSpec,
    height: MeasureSpec,
    data: Vec<DataSet>,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("pieplot_demo_out"), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    for demo in [
        review_levels_demo(),
        quarters_demo(),
        wrap_demo(),
        single_slice_demo(),
    ] {
        let mut plot = PiePlot::new(demo.config);
        let size = plot.measure(demo.width, demo.height);
        plot.set_bounds(Rect::new(0.0, 0.0, size.width, size.height));
        if let Err(err) = plot.set_data(demo.data) {
            tracing::warn!(demo = demo.name, %err, "skipping demo");
            continue;
        }

        let mut scene = svg::SvgScene::default();
        scene.set_view_box(Rect::new(0.0, 0.0, size.width, size.height));
        scene.extend(plot.paint_list());

        let path = out_dir.join(format!("{}.svg", demo.name));
        std::fs::write(&path, scene.to_svg_string())?;
        tracing::info!(
            demo = demo.name,
            width = size.width,
            height = size.height,
            wedges = plot.wedges().len(),
            "wrote {}",
            path.display()
        );
    }
    Ok(())
}

fn review_levels_demo() -> Demo {
    // Item counts per review stage, colored with packed ARGB values.
    Demo {
        name: "review_levels",
        config: PieConfig::default(),
        width: MeasureSpec::exact(320.0),
        height: MeasureSpec::at_most(400.0),
        data: vec![
            DataSet::from_argb("Apprentice", 0xffdd_0093, 84.0),
            DataSet::from_argb("Guru", 0xff88_2d9e, 212.0),
            DataSet::from_argb("Master", 0xff29_4ddb, 377.0),
            DataSet::from_argb("Enlightened", 0xff00_93dd, 516.0),
            DataSet::from_argb("Burned", 0xff43_4343, 1030.0),
            DataSet::from_argb("Locked", 0xffcc_cccc, 0.0),
        ],
    }
}

fn quarters_demo() -> Demo {
    Demo {
        name: "quarters",
        config: PieConfig::default()
            .with_start_angle(0.0)
            .with_paint_order(PaintOrder::DataSetOrder),
        width: MeasureSpec::at_most(300.0),
        height: MeasureSpec::unspecified(0.0),
        data: vec![
            DataSet::new("north", css::TOMATO, 1.0),
            DataSet::new("east", css::GOLD, 1.0),
            DataSet::new("south", css::SEA_GREEN, 2.0),
        ],
    }
}

fn wrap_demo() -> Demo {
    Demo {
        name: "wrap",
        config: PieConfig::default()
            .with_start_angle(30.0)
            .with_depth_to_width_ratio(6.0),
        width: MeasureSpec::unspecified(0.0),
        height: MeasureSpec::exact(160.0),
        data: vec![
            DataSet::new("front", css::CORNFLOWER_BLUE, 1.0),
            DataSet::new("around", css::ORANGE, 2.0),
        ],
    }
}

fn single_slice_demo() -> Demo {
    Demo {
        name: "single",
        config: PieConfig::default().with_cap_to_extrusion_ratio(2.5),
        width: MeasureSpec::from_packed((1 << 30) | 250),
        height: MeasureSpec::from_packed(0),
        data: vec![DataSet::new("all", css::MEDIUM_PURPLE, 1.0)],
    }
}
