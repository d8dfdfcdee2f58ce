//! Builder für Render-Szenen aus dem AppState.
//!
//! Zeichen-Reihenfolge: Einträge in Einfüge-Reihenfolge, danach alle Handles
//! aktiver Raster, zuletzt der Marker für einen angefangenen Linien-Start.

use crate::app::AppState;
use crate::core::{depth_segments, fan_segments, Guide, GuideColor, LineGuide, PerspectiveGrid};
use crate::shared::{DashPattern, DrawPrimitive, EditorOptions, RenderScene, StrokeStyle};
use glam::Vec2;

/// Strichmuster der Fächerlinien.
pub const FAN_DASH: DashPattern = [4.0, 8.0];
/// Strichmuster des Startpunkt-Markers.
pub const PENDING_DASH: DashPattern = [6.0, 6.0];

const HANDLE_OUTLINE_ALPHA: f32 = 0.5;
const HANDLE_OUTLINE_WIDTH: f32 = 2.0;
const PENDING_MARKER_ALPHA: f32 = 0.6;
const PENDING_MARKER_WIDTH: f32 = 2.0;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let canvas = Vec2::from(state.view.canvas_size);
    let mut primitives = Vec::new();

    for guide in state.guides.iter() {
        match guide {
            Guide::Line(line) => push_line(&mut primitives, line),
            Guide::Grid(grid) if grid.enabled => {
                push_grid_lines(&mut primitives, grid, canvas, &state.options)
            }
            Guide::Grid(_) => {}
        }
    }

    let handle_outline = StrokeStyle::solid(
        GuideColor::BLACK.with_alpha(HANDLE_OUTLINE_ALPHA),
        HANDLE_OUTLINE_WIDTH,
    );
    for grid in state.guides.grids().filter(|grid| grid.enabled) {
        primitives.push(DrawPrimitive::Circle {
            center: grid.vanishing_point,
            radius: state.options.handle_radius,
            fill: Some(grid.color.with_alpha(1.0)),
            stroke: Some(handle_outline),
        });
    }

    if let Some(start) = state.editor.line_tool.pending_start() {
        primitives.push(DrawPrimitive::Circle {
            center: start,
            radius: state.options.pending_marker_radius,
            fill: None,
            stroke: Some(StrokeStyle::dashed(
                GuideColor::WHITE.with_alpha(PENDING_MARKER_ALPHA),
                PENDING_MARKER_WIDTH,
                PENDING_DASH,
            )),
        });
    }

    RenderScene {
        canvas_size: state.view.canvas_size,
        background: state.view.background.clone(),
        primitives,
        instruction: state.editor.active_tool.instruction(),
    }
}

fn push_line(primitives: &mut Vec<DrawPrimitive>, line: &LineGuide) {
    primitives.push(DrawPrimitive::Segment {
        from: line.start,
        to: line.end,
        stroke: StrokeStyle::solid(line.style.color.with_alpha(1.0), line.style.width),
    });
}

fn push_grid_lines(
    primitives: &mut Vec<DrawPrimitive>,
    grid: &PerspectiveGrid,
    canvas: Vec2,
    options: &EditorOptions,
) {
    let fan_stroke =
        StrokeStyle::dashed(grid.color.with_alpha(grid.opacity), grid.thickness, FAN_DASH);
    for (from, to) in fan_segments(grid.vanishing_point, grid.density, canvas) {
        primitives.push(DrawPrimitive::Segment {
            from,
            to,
            stroke: fan_stroke,
        });
    }

    for segment in depth_segments(grid, canvas, options.depth_policy) {
        primitives.push(DrawPrimitive::Segment {
            from: segment.from,
            to: segment.to,
            stroke: StrokeStyle::solid(grid.color.with_alpha(segment.alpha), grid.thickness),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridConfig, LineStyle};

    fn is_handle(primitive: &DrawPrimitive) -> bool {
        matches!(primitive, DrawPrimitive::Circle { fill: Some(_), .. })
    }

    #[test]
    fn test_handles_are_drawn_above_all_lines() {
        let mut state = AppState::new();
        state
            .guides
            .create_grid(GridConfig::at(Vec2::new(450.0, 200.0)))
            .expect("Raster erwartet");
        state
            .guides
            .create_line_guide(Vec2::ZERO, Vec2::new(10.0, 10.0), LineStyle::default());

        let scene = build(&state);
        let first_handle = scene
            .primitives
            .iter()
            .position(is_handle)
            .expect("Handle erwartet");
        assert!(scene.primitives[first_handle..]
            .iter()
            .all(|p| !matches!(p, DrawPrimitive::Segment { .. })));
        // 19 Fächerlinien + 6 Tiefenlinien + 1 Linie
        assert_eq!(scene.segment_count(), 26);
    }

    #[test]
    fn test_disabled_grid_produces_no_primitives() {
        let mut state = AppState::new();
        let id = state
            .guides
            .create_grid(GridConfig::at(Vec2::new(100.0, 100.0)))
            .expect("Raster erwartet");
        state.guides.set_enabled(id, false);

        let scene = build(&state);
        assert!(scene.primitives.is_empty());
    }

    #[test]
    fn test_fan_lines_are_dashed_with_grid_opacity() {
        let mut state = AppState::new();
        state
            .guides
            .create_grid(GridConfig {
                opacity: Some(0.4),
                ..GridConfig::at(Vec2::new(100.0, 100.0))
            })
            .expect("Raster erwartet");

        let scene = build(&state);
        match &scene.primitives[0] {
            DrawPrimitive::Segment { stroke, .. } => {
                assert_eq!(stroke.dash, Some(FAN_DASH));
                assert_eq!(stroke.color.a, 0.4);
            }
            other => panic!("Segment erwartet, erhalten: {:?}", other),
        }
    }

    #[test]
    fn test_pending_marker_is_last_and_dashed() {
        let mut state = AppState::new();
        state.editor.line_tool.on_tap(Vec2::new(5.0, 6.0));

        let scene = build(&state);
        match scene.primitives.last() {
            Some(DrawPrimitive::Circle {
                center,
                fill: None,
                stroke: Some(stroke),
                radius,
            }) => {
                assert_eq!(*center, Vec2::new(5.0, 6.0));
                assert_eq!(*radius, 8.0);
                assert_eq!(stroke.dash, Some(PENDING_DASH));
            }
            other => panic!("Marker erwartet, erhalten: {:?}", other),
        }
    }

    #[test]
    fn test_scene_carries_instruction_of_active_tool() {
        let state = AppState::new();
        let scene = build(&state);
        assert_eq!(scene.instruction, state.editor.active_tool.instruction());
        assert!(!scene.has_background());
    }
}
