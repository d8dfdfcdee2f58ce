//! Reine Geometrie-Funktionen: Fächer- und Tiefenlinien, Hit-Test-Distanzen, Clamping.
//!
//! Alle Funktionen sind seiteneffektfrei und arbeiten in Canvas-Pixeln.

use super::guide::MIN_GRID_STEPS;
use super::PerspectiveGrid;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Deckkraft einer Tiefenlinie direkt am Fluchtpunkt (Fade-Policy).
const FADE_NEAR: f32 = 1.0;
/// Deckkraft einer Tiefenlinie direkt am Rand (Fade-Policy).
const FADE_FAR: f32 = 0.3;
/// Faktor auf die Raster-Deckkraft (Abstands-Policy).
const SPACING_OPACITY_FACTOR: f32 = 0.8;
/// Obergrenze für Tiefenlinien der Abstands-Policy pro Raster.
pub const MAX_SPACED_DEPTH_LINES: u32 = 1024;

/// Wie Tiefenlinien eines Rasters verteilt werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthLinePolicy {
    /// Feste Anzahl (`grid.depth`), Deckkraft blendet zum Rand hin aus
    #[default]
    FadedCount,
    /// Fester Pixel-Abstand (`grid.spacing`), konstante Deckkraft
    FixedSpacing,
}

/// Ein Liniensegment mit eigener Deckkraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideSegment {
    /// Startpunkt
    pub from: Vec2,
    /// Endpunkt
    pub to: Vec2,
    /// Deckkraft in [0, 1]
    pub alpha: f32,
}

/// Y-Koordinate der Randkante, zu der ein Raster aufgespannt wird.
///
/// Liegt der Fluchtpunkt in der oberen Hälfte, ist es die Unterkante, sonst die Oberkante.
pub fn boundary_y(point: Vec2, canvas_height: f32) -> f32 {
    if point.y < canvas_height / 2.0 {
        canvas_height
    } else {
        0.0
    }
}

/// Anzahl Fächer-Schritte: mindestens [`MIN_GRID_STEPS`].
pub fn fan_steps(density: u32) -> u32 {
    density.max(MIN_GRID_STEPS)
}

/// Fächerlinien vom Fluchtpunkt zu `steps + 1` gleichmäßig verteilten Punkten der Randkante.
pub fn fan_segments(point: Vec2, density: u32, canvas_size: Vec2) -> Vec<(Vec2, Vec2)> {
    let steps = fan_steps(density);
    let edge_y = boundary_y(point, canvas_size.y);
    (0..=steps)
        .map(|i| {
            let x = canvas_size.x * i as f32 / steps as f32;
            (point, Vec2::new(x, edge_y))
        })
        .collect()
}

/// Horizontale Tiefenlinien eines Rasters nach der gewählten Policy.
pub fn depth_segments(
    grid: &PerspectiveGrid,
    canvas_size: Vec2,
    policy: DepthLinePolicy,
) -> Vec<GuideSegment> {
    let edge_y = boundary_y(grid.vanishing_point, canvas_size.y);
    let ys: Vec<(f32, f32)> = match policy {
        DepthLinePolicy::FadedCount => {
            faded_depth_levels(grid.vanishing_point.y, edge_y, grid.depth)
        }
        DepthLinePolicy::FixedSpacing => {
            let alpha = grid.opacity * SPACING_OPACITY_FACTOR;
            spaced_depth_levels(grid.vanishing_point.y, edge_y, grid.spacing)
                .into_iter()
                .map(|y| (y, alpha))
                .collect()
        }
    };

    ys.into_iter()
        .map(|(y, alpha)| GuideSegment {
            from: Vec2::new(0.0, y),
            to: Vec2::new(canvas_size.x, y),
            alpha,
        })
        .collect()
}

/// `depth` Linien zwischen Fluchtpunkt und Rand, jeweils `(y, alpha)`.
fn faded_depth_levels(point_y: f32, edge_y: f32, depth: u32) -> Vec<(f32, f32)> {
    let divisions = depth as f32 + 1.0;
    (1..=depth)
        .map(|i| {
            let progress = i as f32 / divisions;
            let y = point_y + (edge_y - point_y) * progress;
            let fade = FADE_FAR + (FADE_NEAR - FADE_FAR) * (1.0 - progress);
            (y, fade)
        })
        .collect()
}

/// Linien im Abstand `spacing` vom Fluchtpunkt Richtung Rand (Rand exklusiv).
///
/// Höchstens [`MAX_SPACED_DEPTH_LINES`] Linien; nicht-endliche Abstände liefern keine.
fn spaced_depth_levels(point_y: f32, edge_y: f32, spacing: f32) -> Vec<f32> {
    if !spacing.is_finite() || spacing <= 0.0 || point_y == edge_y {
        return Vec::new();
    }
    let direction = (edge_y - point_y).signum();
    let span = (edge_y - point_y).abs();
    let count = ((span / spacing).ceil() as u32)
        .saturating_sub(1)
        .min(MAX_SPACED_DEPTH_LINES);
    (1..=count)
        .map(|i| spacing * i as f32)
        .take_while(|offset| *offset < span)
        .map(|offset| point_y + direction * offset)
        .collect()
}

/// Abstand eines Punkts zum Segment `start..end`.
///
/// Projektion auf die Gerade, Parameter auf [0, 1] geklemmt. Bei `start == end`
/// ist es der Abstand zu `start`.
pub fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let delta = end - start;
    let length_sq = delta.length_squared();
    if length_sq == 0.0 {
        return point.distance(start);
    }
    let t = ((point - start).dot(delta) / length_sq).clamp(0.0, 1.0);
    point.distance(start + delta * t)
}

/// Klemmt einen Fluchtpunkt auf `[0, w] × [0, h - bottom_margin]`.
pub fn clamp_vanishing_point(point: Vec2, canvas_size: Vec2, bottom_margin: f32) -> Vec2 {
    let max_y = (canvas_size.y - bottom_margin).max(0.0);
    Vec2::new(
        point.x.clamp(0.0, canvas_size.x.max(0.0)),
        point.y.clamp(0.0, max_y),
    )
}

/// Canvas-Größe für ein Hintergrundbild: nie hochskalieren, nie breiter als `max_width`.
pub fn fit_canvas_to_image(image_size: Vec2, max_width: f32) -> Vec2 {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return image_size.max(Vec2::ZERO);
    }
    let scale = (max_width.max(1.0) / image_size.x).min(1.0);
    image_size * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridConfig, GuideSet};
    use approx::assert_relative_eq;

    fn grid_at(point: Vec2, depth: u32, spacing: f32) -> PerspectiveGrid {
        let mut set = GuideSet::new();
        let id = set
            .create_grid(GridConfig {
                vanishing_point: Some(point),
                depth: Some(depth),
                spacing: Some(spacing),
                ..GridConfig::default()
            })
            .expect("Raster erwartet");
        set.grid(id).cloned().expect("Raster erwartet")
    }

    #[test]
    fn test_fan_segments_density_18_spans_full_width() {
        let segments = fan_segments(Vec2::new(450.0, 200.0), 18, Vec2::new(900.0, 600.0));
        assert_eq!(segments.len(), 19);
        for (i, (from, to)) in segments.iter().enumerate() {
            assert_eq!(*from, Vec2::new(450.0, 200.0));
            assert_relative_eq!(to.x, 50.0 * i as f32, epsilon = 1e-3);
            assert_eq!(to.y, 600.0);
        }
    }

    #[test]
    fn test_fan_segments_enforce_minimum_steps() {
        let segments = fan_segments(Vec2::new(10.0, 10.0), 1, Vec2::new(100.0, 100.0));
        assert_eq!(segments.len(), 5);
    }

    #[test]
    fn test_boundary_edge_depends_on_vertical_half() {
        assert_eq!(boundary_y(Vec2::new(0.0, 299.0), 600.0), 600.0);
        assert_eq!(boundary_y(Vec2::new(0.0, 300.0), 600.0), 0.0);
        assert_eq!(boundary_y(Vec2::new(0.0, 550.0), 600.0), 0.0);
    }

    #[test]
    fn test_faded_depth_lines_are_evenly_spaced_and_fade() {
        let grid = grid_at(Vec2::new(450.0, 0.0), 3, 80.0);
        let lines = depth_segments(&grid, Vec2::new(900.0, 600.0), DepthLinePolicy::FadedCount);
        assert_eq!(lines.len(), 3);

        assert_relative_eq!(lines[0].from.y, 150.0, epsilon = 1e-3);
        assert_relative_eq!(lines[1].from.y, 300.0, epsilon = 1e-3);
        assert_relative_eq!(lines[2].from.y, 450.0, epsilon = 1e-3);
        assert_relative_eq!(lines[0].alpha, 0.3 + 0.7 * 0.75, epsilon = 1e-5);
        assert_relative_eq!(lines[2].alpha, 0.3 + 0.7 * 0.25, epsilon = 1e-5);
        assert!(lines.windows(2).all(|w| w[0].alpha > w[1].alpha));

        assert_eq!(lines[0].from.x, 0.0);
        assert_eq!(lines[0].to.x, 900.0);
    }

    #[test]
    fn test_fixed_spacing_depth_lines_stop_before_boundary() {
        let grid = grid_at(Vec2::new(100.0, 100.0), 6, 80.0);
        let lines = depth_segments(&grid, Vec2::new(400.0, 400.0), DepthLinePolicy::FixedSpacing);
        let ys: Vec<f32> = lines.iter().map(|l| l.from.y).collect();
        assert_eq!(ys, vec![180.0, 260.0, 340.0]);
        for line in &lines {
            assert_relative_eq!(line.alpha, grid.opacity * 0.8, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_fixed_spacing_walks_upwards_for_lower_half() {
        let grid = grid_at(Vec2::new(100.0, 300.0), 6, 100.0);
        let lines = depth_segments(&grid, Vec2::new(400.0, 400.0), DepthLinePolicy::FixedSpacing);
        let ys: Vec<f32> = lines.iter().map(|l| l.from.y).collect();
        assert_eq!(ys, vec![200.0, 100.0]);
    }

    #[test]
    fn test_fixed_spacing_degenerate_values_stay_bounded() {
        let canvas = Vec2::new(400.0, 400.0);
        let nan = grid_at(Vec2::new(100.0, 100.0), 6, f32::NAN);
        assert!(depth_segments(&nan, canvas, DepthLinePolicy::FixedSpacing).is_empty());

        let inf = grid_at(Vec2::new(100.0, 100.0), 6, f32::INFINITY);
        assert!(depth_segments(&inf, canvas, DepthLinePolicy::FixedSpacing).is_empty());

        let tiny = grid_at(Vec2::new(100.0, 100.0), 6, 0.0001);
        let lines = depth_segments(&tiny, canvas, DepthLinePolicy::FixedSpacing);
        assert_eq!(lines.len(), MAX_SPACED_DEPTH_LINES as usize);
        assert!(lines.iter().all(|l| l.from.y > 100.0 && l.from.y < 400.0));
    }

    #[test]
    fn test_distance_to_degenerate_segment_is_point_distance() {
        let s = Vec2::new(3.0, 4.0);
        let p = Vec2::new(6.0, 8.0);
        assert_relative_eq!(distance_to_segment(p, s, s), (p - s).length(), epsilon = 1e-6);
    }

    #[test]
    fn test_distance_perpendicular_at_midpoint() {
        let start = Vec2::new(10.0, 10.0);
        let end = Vec2::new(110.0, 60.0);
        let mid = (start + end) / 2.0;
        let normal = (end - start).perp().normalize();
        for d in [0.0_f32, 1.0, 7.5, 42.0] {
            assert_relative_eq!(
                distance_to_segment(mid + normal * d, start, end),
                d,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn test_distance_clamps_beyond_endpoints() {
        let d = distance_to_segment(Vec2::new(-3.0, 4.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_relative_eq!(d, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_vanishing_point_extremes() {
        let clamped = clamp_vanishing_point(
            Vec2::new(-500.0, 99999.0),
            Vec2::new(800.0, 600.0),
            20.0,
        );
        assert_eq!(clamped, Vec2::new(0.0, 580.0));
    }

    #[test]
    fn test_fit_canvas_never_upscales() {
        assert_eq!(
            fit_canvas_to_image(Vec2::new(400.0, 300.0), 900.0),
            Vec2::new(400.0, 300.0)
        );
        let fitted = fit_canvas_to_image(Vec2::new(1800.0, 1200.0), 900.0);
        assert_relative_eq!(fitted.x, 900.0, epsilon = 1e-3);
        assert_relative_eq!(fitted.y, 600.0, epsilon = 1e-3);
    }
}
