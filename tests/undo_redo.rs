use std::cell::Cell;
use std::rc::Rc;

use egui::{Pos2, pos2};
use sketchpad::surface::recording::RecordingSurface;
use sketchpad::{CanvasEvent, SketchEvent, Sketchpad};

fn draw(pad: &mut Sketchpad, points: &[Pos2]) {
    pad.handle(CanvasEvent::PointerDown(points[0]));
    for point in &points[1..] {
        pad.handle(CanvasEvent::PointerMove(*point));
    }
    pad.handle(CanvasEvent::PointerUp);
}

fn count_changes(pad: &Sketchpad) -> Rc<Cell<usize>> {
    let changes = Rc::new(Cell::new(0));
    let counter = changes.clone();
    pad.events().subscribe(move |event: &SketchEvent| {
        if *event == SketchEvent::Changed {
            counter.set(counter.get() + 1);
        }
    });
    changes
}

#[test]
fn test_stroke_scenario() {
    let mut pad = Sketchpad::default();
    draw(&mut pad, &[pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)]);

    let drawables = pad.document().drawables();
    assert_eq!(drawables.len(), 1);
    let stroke = drawables[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)]
    );
    let before = pad.document().clone();

    assert!(pad.undo());
    assert!(pad.document().is_empty());
    assert_eq!(pad.history().redo_stack().len(), 1);

    assert!(pad.redo());
    assert_eq!(*pad.document(), before);
}

#[test]
fn test_registry_grows_once_per_gesture() {
    let mut pad = Sketchpad::default();
    for i in 0..5 {
        let x = i as f32 * 10.0;
        draw(&mut pad, &[pos2(x, 0.0), pos2(x, 10.0)]);
        assert_eq!(pad.document().len(), i + 1);
    }
}

#[test]
fn test_undo_then_redo_restores_state() {
    let mut pad = Sketchpad::default();
    draw(&mut pad, &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    draw(&mut pad, &[pos2(9.0, 9.0)]);
    let before = pad.document().clone();

    pad.undo();
    pad.redo();

    assert_eq!(*pad.document(), before);
}

#[test]
fn test_new_gesture_discards_redo() {
    let mut pad = Sketchpad::default();
    draw(&mut pad, &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    pad.undo();

    pad.handle(CanvasEvent::PointerDown(pos2(1.0, 1.0)));
    let after_start = pad.document().clone();

    assert!(!pad.can_redo());
    assert!(!pad.redo());
    assert_eq!(*pad.document(), after_start);
}

#[test]
fn test_clear_empties_everything() {
    let mut pad = Sketchpad::default();
    draw(&mut pad, &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    draw(&mut pad, &[pos2(1.0, 0.0), pos2(6.0, 5.0)]);
    pad.undo();

    pad.clear();

    assert!(pad.document().is_empty());
    assert!(!pad.can_redo());
    assert!(!pad.undo());
}

#[test]
fn test_noops_do_not_notify() {
    let mut pad = Sketchpad::default();
    let changes = count_changes(&pad);

    assert!(!pad.undo());
    assert!(!pad.redo());
    assert_eq!(changes.get(), 0);
}

#[test]
fn test_each_mutation_notifies_once() {
    let mut pad = Sketchpad::default();
    let changes = count_changes(&pad);

    // start + two moves
    draw(&mut pad, &[pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    assert_eq!(changes.get(), 3);

    pad.undo();
    pad.redo();
    pad.clear();
    assert_eq!(changes.get(), 6);
}

#[test]
fn test_moves_after_gesture_end_only_preview() {
    let mut pad = Sketchpad::default();
    draw(&mut pad, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);
    pad.handle(CanvasEvent::PointerMove(pos2(50.0, 50.0)));

    assert_eq!(pad.document().drawables()[0].as_stroke().unwrap().points().len(), 2);
    assert!(pad.preview().is_some());

    pad.handle(CanvasEvent::PointerLeave);
    assert!(pad.preview().is_none());
}

#[test]
fn test_render_pass_segment_count() {
    let mut pad = Sketchpad::default();
    draw(&mut pad, &[pos2(0.0, 0.0)]);
    draw(&mut pad, &[pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(2.0, 0.0), pos2(3.0, 0.0)]);

    let mut surface = RecordingSurface::default();
    pad.render(&mut surface);

    // The single point stroke draws nothing, the four point stroke draws three
    assert_eq!(surface.line_count(), 3);
}
