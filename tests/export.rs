use egui::pos2;
use image::Rgba;
use sketchpad::export;
use sketchpad::{CanvasEvent, SketchConfig, SketchError, Sketchpad};

fn small_config() -> SketchConfig {
    SketchConfig {
        canvas_size: [32, 16],
        export_scale: 4,
        ..Default::default()
    }
}

#[test]
fn test_png_is_scaled_with_white_background() {
    let pad = Sketchpad::new(small_config());
    let bytes = pad.export_png().unwrap();

    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (128, 64));
    assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
}

#[test]
fn test_strokes_are_replayed_but_preview_is_not() {
    let mut pad = Sketchpad::new(small_config());
    pad.handle(CanvasEvent::PointerDown(pos2(2.0, 8.0)));
    pad.handle(CanvasEvent::PointerMove(pos2(30.0, 8.0)));
    pad.handle(CanvasEvent::PointerUp);
    // Hovering leaves a preview in the lower left corner
    pad.handle(CanvasEvent::PointerMove(pos2(4.0, 14.0)));
    assert!(pad.preview().is_some());

    let image = export::render_image(pad.document(), pad.config()).unwrap();

    // Canvas y = 8 is row 32 at 4x
    assert_eq!(*image.get_pixel(64, 32), Rgba([0, 0, 0, 255]));
    assert_eq!(*image.get_pixel(16, 56), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_export_ignores_redo_buffer() {
    let mut pad = Sketchpad::new(small_config());
    pad.handle(CanvasEvent::PointerDown(pos2(2.0, 8.0)));
    pad.handle(CanvasEvent::PointerMove(pos2(30.0, 8.0)));
    pad.handle(CanvasEvent::PointerUp);
    pad.undo();

    let image = export::render_image(pad.document(), pad.config()).unwrap();
    assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
}

#[test]
fn test_oversized_export_is_an_error() {
    let config = SketchConfig {
        canvas_size: [u32::MAX, 2],
        export_scale: 2,
        ..Default::default()
    };
    let pad = Sketchpad::new(config);
    assert!(matches!(pad.export_png(), Err(SketchError::Surface { .. })));
}

#[test]
fn test_save_writes_fixed_filename() {
    let dir = std::env::temp_dir().join(format!("sketchpad-export-{}", std::process::id()));
    let config = SketchConfig {
        export_dir: dir.clone(),
        ..small_config()
    };
    let pad = Sketchpad::new(config);

    pad.export().unwrap();

    let written = std::fs::read(dir.join("sketchpad.png")).unwrap();
    assert_eq!(written, pad.export_png().unwrap());
    std::fs::remove_dir_all(&dir).unwrap();
}
