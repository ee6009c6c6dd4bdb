use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use timewindow_rs::api::{
    TimeWindowEngine, WidgetConfig, WidgetContext, WidgetEvent, WidgetObserver,
};
use timewindow_rs::core::{ManualClock, SharedLimits};
use timewindow_rs::interaction::{DragKind, PointerTarget};
use timewindow_rs::render::NullSurface;

fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 6)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

type Seen = Rc<RefCell<Vec<(WidgetEvent, WidgetContext)>>>;

struct Recorder {
    name: &'static str,
    seen: Seen,
}

impl WidgetObserver for Recorder {
    fn id(&self) -> &str {
        self.name
    }

    fn on_event(&mut self, event: &WidgetEvent, context: WidgetContext) {
        self.seen.borrow_mut().push((event.clone(), context));
    }
}

fn build_engine() -> (TimeWindowEngine<NullSurface>, Seen) {
    let clock = ManualClock::new(anchor());
    let mut engine = TimeWindowEngine::new_with_clock(
        NullSurface::default(),
        WidgetConfig::new(1300.0),
        SharedLimits::default(),
        Box::new(clock),
    )
    .expect("engine init");

    let seen: Seen = Rc::new(RefCell::new(Vec::new()));
    engine.add_observer(Box::new(Recorder {
        name: "recorder",
        seen: Rc::clone(&seen),
    }));
    (engine, seen)
}

#[test]
fn updates_carry_zero_padded_labels_and_the_value_object() {
    let (mut engine, seen) = build_engine();

    engine.update_display().expect("re-render");

    let seen = seen.borrow();
    let (event, _context) = seen.last().expect("event dispatched");
    match event {
        WidgetEvent::SelectionChanged {
            value,
            start_label,
            end_label,
        } => {
            assert_eq!(start_label, "11:00");
            assert_eq!(end_label, "13:00");
            assert_eq!(value.duration_minutes, 120);
            assert!(value.is_valid);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn repeated_updates_over_unchanged_state_redispatch_identical_events() {
    let (mut engine, seen) = build_engine();

    engine.update_display().expect("first re-render");
    engine.update_display().expect("second re-render");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, seen[1].0);

    // The frame is identical too; only the dispatch repeats.
    let frame = engine.surface().last_frame.as_ref().expect("frame");
    assert!((frame.selection_left_px - 200.0).abs() <= 1e-9);
}

#[test]
fn context_tracks_the_active_drag() {
    let (mut engine, seen) = build_engine();

    engine
        .pointer_down(PointerTarget::Selection, 300.0)
        .expect("grab selection body");
    assert_eq!(
        seen.borrow().last().expect("event").1.active_drag,
        Some(DragKind::Move)
    );

    engine.pointer_up().expect("release");
    assert_eq!(seen.borrow().last().expect("event").1.active_drag, None);
}

#[test]
fn every_pointer_transition_dispatches_a_change() {
    let (mut engine, seen) = build_engine();

    engine
        .pointer_down(PointerTarget::Track, 500.0)
        .expect("press");
    engine.pointer_move(700.0).expect("extend");
    engine.pointer_up().expect("release");

    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn removed_observers_stop_receiving_events() {
    let (mut engine, seen) = build_engine();

    assert!(engine.remove_observer("recorder"));
    assert!(!engine.remove_observer("recorder"));

    engine.update_display().expect("re-render");
    assert!(seen.borrow().is_empty());
}

#[test]
fn half_hour_boundaries_format_with_minutes() {
    let clock = ManualClock::new(
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(9, 10, 0)
            .unwrap(),
    );
    let mut engine = TimeWindowEngine::new_with_clock(
        NullSurface::default(),
        WidgetConfig::new(1300.0),
        SharedLimits::default(),
        Box::new(clock),
    )
    .expect("engine init");

    let seen: Seen = Rc::new(RefCell::new(Vec::new()));
    engine.add_observer(Box::new(Recorder {
        name: "recorder",
        seen: Rc::clone(&seen),
    }));

    // 250px on a 1300px track is 2.5 hours from the 09:00 anchor.
    engine
        .pointer_down(PointerTarget::Selection, 300.0)
        .expect("grab selection body");
    engine.pointer_move(350.0).expect("nudge right");

    let seen = seen.borrow();
    match &seen.last().expect("event").0 {
        WidgetEvent::SelectionChanged { start_label, .. } => {
            assert_eq!(start_label, "11:30");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
