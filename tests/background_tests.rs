use glam::Vec2;
use perspective_guides::{AppController, AppIntent, AppState, BackgroundImage};
use std::sync::Arc;

fn frame(width: u32, height: u32) -> Arc<BackgroundImage> {
    let rgba = vec![128u8; width as usize * height as usize * 4];
    let image =
        BackgroundImage::from_rgba_frame(width, height, rgba).expect("Frame sollte gültig sein");
    Arc::new(image)
}

#[test]
fn test_large_frame_is_scaled_down_to_max_width() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::BackgroundImageReady {
                image: frame(1800, 1200),
            },
        )
        .expect("Frame sollte übernommen werden");

    assert!(state.view.background.is_some());
    assert!(state.view.background_dirty);
    assert_eq!(state.view.canvas_size, [900.0, 600.0]);
}

#[test]
fn test_small_frame_is_never_upscaled() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::BackgroundImageReady {
                image: frame(320, 240),
            },
        )
        .expect("Frame sollte übernommen werden");

    assert_eq!(state.view.canvas_size, [320.0, 240.0]);
}

#[test]
fn test_narrow_window_limits_canvas_width() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::BackgroundImageReady {
                image: frame(1800, 1200),
            },
        )
        .expect("Frame sollte übernommen werden");
    controller
        .handle_intent(&mut state, AppIntent::AvailableWidthChanged { width: 632.0 })
        .expect("Breite sollte übernommen werden");

    let [width, height] = state.view.canvas_size;
    assert!((width - 600.0).abs() < 1e-3);
    assert!((height - 400.0).abs() < 1e-3);
}

#[test]
fn test_failed_load_leaves_state_unchanged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddGridRequested)
        .expect("Raster sollte erstellt werden");
    let size_before = state.view.canvas_size;

    let result = controller.handle_intent(
        &mut state,
        AppIntent::BackgroundImageSelected {
            path: "/nonexistent/reference.jpg".to_string(),
        },
    );

    assert!(result.is_err());
    assert!(state.view.background.is_none());
    assert_eq!(state.view.canvas_size, size_before);
    assert_eq!(state.guides.grid_count(), 1);
}

#[test]
fn test_load_png_from_disk() {
    let dir = std::env::temp_dir().join(format!("perspective_guides_bg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis erwartet");
    let path = dir.join("reference.png");
    image::RgbaImage::new(40, 20)
        .save(&path)
        .expect("PNG sollte geschrieben werden");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::BackgroundImageSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("PNG sollte geladen werden");

    let background = state.view.background.as_ref().expect("Bild erwartet");
    assert_eq!(background.dimensions(), (40, 20));
    assert_eq!(state.view.canvas_size, [40.0, 20.0]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_clear_image_removes_background_and_guides() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::BackgroundImageReady {
                image: frame(100, 100),
            },
        )
        .expect("Frame sollte übernommen werden");
    controller
        .handle_intent(&mut state, AppIntent::AddGridRequested)
        .expect("Raster sollte erstellt werden");
    state.view.background_dirty = false;

    controller
        .handle_intent(&mut state, AppIntent::ClearImageRequested)
        .expect("Bild entfernen sollte durchlaufen");

    assert!(state.view.background.is_none());
    assert!(state.view.background_dirty);
    assert!(state.guides.is_empty());
    assert_eq!(
        Vec2::from(state.view.canvas_size),
        Vec2::new(100.0, 100.0)
    );
}
