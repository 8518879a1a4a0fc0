use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Point, Rgba8, Vec2};
use crate::render::surface::Surface;
use crate::scene::color::ColorScheme;
use crate::scene::template::BackgroundKind;

/// Hexagon circumradius of the geometric tiling.
const HEX_RADIUS: f64 = 24.0;
/// Horizontal distance between hexagon centers.
const HEX_SPACING: f64 = 120.0;
/// Vertical distance between hexagon rows.
const HEX_ROW_SPACING: f64 = HEX_SPACING * 0.866;
/// First hexagon center on each axis, outside the canvas so edges are covered.
const HEX_START: f64 = -80.0;

const BANNER_TOP_Y: f64 = 200.0;
const BANNER_BOTTOM_INSET: f64 = 200.0;
/// Vertical rise of the banner cuts across the full canvas width.
const BANNER_RISE: f64 = 60.0;
const BANNER_STROKE: f64 = 12.0;

const RAY_COUNT: usize = 24;
/// Half-width of each burst ray, in radians.
const RAY_HALF_WIDTH: f64 = PI / 36.0;
const HIGHLIGHT_RADIUS: f64 = 200.0;

/// Paint the whole canvas. Must run first: it is the only stage that may assume a blank surface.
pub(crate) fn paint_background(surface: &mut Surface, kind: BackgroundKind, colors: &ColorScheme) {
    tracing::debug!(background = %kind, "painting background");
    match kind {
        BackgroundKind::Geometric => geometric(surface, colors),
        BackgroundKind::Diagonal => diagonal(surface, colors),
        BackgroundKind::RadialBurst => radial_burst(surface, colors),
    }
}

fn geometric(surface: &mut Surface, colors: &ColorScheme) {
    let canvas = surface.canvas();
    let (w, h) = (canvas.width_f64(), canvas.height_f64());
    let bounds = canvas.bounds();
    surface.fill_rect(bounds, colors.secondary());

    let mut tiles = BezPath::new();
    let mut row = 0usize;
    let mut y = HEX_START;
    while y < h - HEX_START {
        let offset_x = if row % 2 == 0 { 0.0 } else { HEX_SPACING / 2.0 };
        let mut x = HEX_START;
        while x < w - HEX_START {
            push_hexagon(&mut tiles, Point::new(x + offset_x, y), HEX_RADIUS);
            x += HEX_SPACING;
        }
        y += HEX_ROW_SPACING;
        row += 1;
    }
    surface.fill_path(&tiles, colors.primary());

    surface.fill_rect_linear(
        bounds,
        Point::ZERO,
        Point::new(w, h),
        &[
            (0.0, colors.primary().with_alpha(0x20)),
            (1.0, colors.secondary().with_alpha(0x40)),
        ],
    );
}

fn push_hexagon(path: &mut BezPath, center: Point, radius: f64) {
    for i in 0..6 {
        let angle = f64::from(i) * PI / 3.0;
        let p = center + Vec2::from_angle(angle) * radius;
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
}

fn diagonal(surface: &mut Surface, colors: &ColorScheme) {
    let canvas = surface.canvas();
    let (w, h) = (canvas.width_f64(), canvas.height_f64());
    surface.fill_rect(canvas.bounds(), colors.primary());

    let top = BANNER_TOP_Y;
    let bottom = h - BANNER_BOTTOM_INSET;

    let mut banners = BezPath::new();
    banners.move_to((0.0, 0.0));
    banners.line_to((w, 0.0));
    banners.line_to((w, top - BANNER_RISE));
    banners.line_to((0.0, top));
    banners.close_path();

    banners.move_to((0.0, bottom));
    banners.line_to((w, bottom - BANNER_RISE));
    banners.line_to((w, h));
    banners.line_to((0.0, h));
    banners.close_path();
    surface.fill_path(&banners, colors.secondary());

    for y in [top, bottom] {
        let mut cut = BezPath::new();
        cut.move_to((0.0, y));
        cut.line_to((w, y - BANNER_RISE));
        surface.stroke_path(&cut, BANNER_STROKE, Rgba8::WHITE);
    }
}

fn radial_burst(surface: &mut Surface, colors: &ColorScheme) {
    let canvas = surface.canvas();
    let bounds = canvas.bounds();
    let center = canvas.center();
    let max_radius = canvas.width_f64().max(canvas.height_f64());

    surface.fill_rect_radial(
        bounds,
        center,
        max_radius,
        &[(0.0, colors.secondary()), (1.0, colors.primary())],
    );

    let mut rays = BezPath::new();
    for i in 0..RAY_COUNT {
        let angle = (i as f64 / RAY_COUNT as f64) * PI * 2.0;
        let arc = kurbo::Arc::new(
            center,
            Vec2::new(max_radius, max_radius),
            angle - RAY_HALF_WIDTH,
            2.0 * RAY_HALF_WIDTH,
            0.0,
        );
        rays.move_to(center);
        rays.line_to(center + Vec2::from_angle(angle - RAY_HALF_WIDTH) * max_radius);
        rays.extend(arc.append_iter(0.25));
        rays.close_path();
    }
    surface.fill_path(&rays, colors.primary().with_alpha(0x40));

    surface.fill_rect_radial(
        bounds,
        center,
        HIGHLIGHT_RADIUS,
        &[
            (0.0, colors.secondary().with_alpha(0x80)),
            (1.0, colors.secondary().with_alpha(0)),
        ],
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
