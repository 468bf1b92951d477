// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `rosette_core`.
mod svg;

use kurbo::{Point, Rect};
use peniko::Gradient;
use peniko::color::palette::css;
use rosette_charts::{
    ChartItem, CoxcombChart, RadarMode, RadarPane, RadarSeries, RadarValue, StrokeStyle,
};
use rosette_core::{Mark, Scene, polar_point};

const DEMO_SIZE: f64 = 400.0;

fn main() {
    coxcomb_demo();
    radar_demo();
    sector_demo();
    donut_demo();
}

fn write_svg(name: &str, marks: Vec<Mark>) {
    let mut scene = Scene::new();
    let diffs = scene.tick(marks);
    let mut svg_scene = svg::SvgScene::default();
    svg_scene.set_view_box(Rect::new(0.0, 0.0, DEMO_SIZE, DEMO_SIZE));
    svg_scene.apply_diffs(&diffs);
    std::fs::write(name, svg_scene.to_svg_string()).expect("write svg");
    println!("wrote {name}");
}

fn coxcomb_demo() {
    let mut chart = CoxcombChart::with_items(vec![
        ChartItem::new("wounds", 18.0, css::INDIAN_RED),
        ChartItem::new("disease", 42.0, css::STEEL_BLUE),
        ChartItem::new("other", 14.0, css::DARK_SEA_GREEN),
        ChartItem::new("accidents", 9.0, css::GOLDENROD),
        ChartItem::new("unknown", 5.0, css::SLATE_GRAY),
    ]);
    chart.resize(DEMO_SIZE, DEMO_SIZE);
    write_svg("coxcomb.svg", chart.marks());

    // Selection wiring: simulate a pointer press on the largest segment.
    chart.on_select(|event| {
        println!("selected #{}: {} = {}", event.index, event.item.name, event.item.value);
    });
    let segments = chart.layout().expect("layout");
    let center = Point::new(DEMO_SIZE / 2.0, DEMO_SIZE / 2.0);
    let press = polar_point(center, segments[0].mid_angle(), segments[0].label_radius());
    chart.pointer_pressed(press);
}

fn radar_demo() {
    let mut pane = RadarPane::new(css::WHITE_SMOKE);
    pane.resize(DEMO_SIZE, DEMO_SIZE);

    let gradient = Gradient::new_radial(Point::ZERO, 1.0)
        .with_stops([css::LIGHT_SKY_BLUE.with_alpha(0.7), css::ROYAL_BLUE.with_alpha(0.4)]);
    pane.add_series(
        RadarSeries::new(
            "this season",
            values(&[65.0, 80.0, 45.0, 90.0, 70.0, 55.0]),
        )
        .with_fill(gradient)
        .with_stroke(StrokeStyle::solid(css::ROYAL_BLUE, 2.0))
        .with_mode(RadarMode::SmoothPolygon),
    )
    .expect("series");
    pane.add_series(
        RadarSeries::new(
            "last season",
            values(&[50.0, 60.0, 55.0, 70.0, 80.0, 40.0]),
        )
        .with_fill(css::INDIAN_RED.with_alpha(0.3))
        .with_stroke(StrokeStyle::solid(css::INDIAN_RED, 2.0)),
    )
    .expect("series");

    write_svg("radar.svg", pane.marks());
}

fn sector_demo() {
    let mut pane = RadarPane::new(css::WHITE_SMOKE);
    pane.resize(DEMO_SIZE, DEMO_SIZE);
    pane.add_series(
        RadarSeries::new("load", values(&[35.0, 70.0, 55.0, 90.0, 20.0, 60.0, 45.0, 80.0]))
            .with_fill(css::MEDIUM_SEA_GREEN.with_alpha(0.6))
            .with_stroke(StrokeStyle::solid(css::SEA_GREEN, 1.0))
            .with_mode(RadarMode::Sector),
    )
    .expect("series");
    write_svg("radar_sector.svg", pane.marks());
}

fn donut_demo() {
    let mut pane = RadarPane::new(css::WHITE_SMOKE);
    pane.resize(DEMO_SIZE, DEMO_SIZE);
    let values = vec![
        RadarValue::new("north", 42.0, css::STEEL_BLUE),
        RadarValue::new("east", 27.0, css::GOLDENROD),
        RadarValue::new("south", 19.0, css::INDIAN_RED),
        RadarValue::new("west", 12.0, css::DARK_SEA_GREEN),
    ];
    pane.add_series(RadarSeries::new("regions", values).with_mode(RadarMode::Donut))
        .expect("series");
    write_svg("radar_donut.svg", pane.marks());
}

fn values(raw: &[f64]) -> Vec<RadarValue> {
    raw.iter()
        .enumerate()
        .map(|(i, v)| RadarValue::new(format!("v{i}"), *v, css::STEEL_BLUE))
        .collect()
}
