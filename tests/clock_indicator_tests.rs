use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use timewindow_rs::api::{TickOutcome, TimeWindowEngine, WidgetConfig, WidgetContext, WidgetEvent, WidgetObserver};
use timewindow_rs::core::{ManualClock, SharedLimits};
use timewindow_rs::render::NullSurface;

fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 6)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

struct Recorder {
    events: Rc<RefCell<Vec<WidgetEvent>>>,
}

impl WidgetObserver for Recorder {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: &WidgetEvent, _context: WidgetContext) {
        self.events.borrow_mut().push(event.clone());
    }
}

fn build_engine() -> (
    TimeWindowEngine<NullSurface>,
    ManualClock,
    Rc<RefCell<Vec<WidgetEvent>>>,
) {
    let clock = ManualClock::new(anchor());
    let mut engine = TimeWindowEngine::new_with_clock(
        NullSurface::default(),
        WidgetConfig::new(1300.0),
        SharedLimits::default(),
        Box::new(clock.clone()),
    )
    .expect("engine init");

    let events = Rc::new(RefCell::new(Vec::new()));
    engine.add_observer(Box::new(Recorder {
        events: Rc::clone(&events),
    }));
    (engine, clock, events)
}

fn reload_count(events: &Rc<RefCell<Vec<WidgetEvent>>>) -> usize {
    events
        .borrow()
        .iter()
        .filter(|event| matches!(event, WidgetEvent::ReloadRequested { .. }))
        .count()
}

#[test]
fn indicator_follows_the_clock_across_ticks() {
    let (mut engine, clock, _events) = build_engine();

    let outcome = engine.frame_tick().expect("tick");
    assert_eq!(outcome, TickOutcome::IndicatorUpdated(Some(0.0)));

    clock.advance(Duration::minutes(30));
    let outcome = engine.frame_tick().expect("tick");
    match outcome {
        TickOutcome::IndicatorUpdated(Some(px)) => assert!((px - 50.0).abs() <= 1e-9),
        other => panic!("unexpected outcome: {other:?}"),
    }

    let frame = engine.surface().last_frame.as_ref().expect("frame applied");
    assert_eq!(frame.indicator_px, engine.indicator_px());
}

#[test]
fn indicator_hides_when_now_falls_off_the_track() {
    let (mut engine, clock, _events) = build_engine();

    // Same wall-clock hour a day later: no rollover, but the instant sits
    // far past the right edge of the track.
    clock.set(anchor() + Duration::hours(24));
    let outcome = engine.frame_tick().expect("tick");

    assert_eq!(outcome, TickOutcome::IndicatorUpdated(None));
    assert!(engine.indicator_px().is_none());
}

#[test]
fn hour_rollover_requests_a_reload_once() {
    let (mut engine, clock, events) = build_engine();

    clock.set(anchor() + Duration::minutes(61));
    assert_eq!(
        engine.frame_tick().expect("tick"),
        TickOutcome::ReloadRequired
    );
    assert!(engine.is_stale());
    assert_eq!(reload_count(&events), 1);

    match events.borrow().last().expect("reload event") {
        WidgetEvent::ReloadRequested {
            anchor_hour,
            current_hour,
        } => {
            assert_eq!(*anchor_hour, 9);
            assert_eq!(*current_hour, 10);
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // Further ticks keep reporting the reload without re-emitting.
    assert_eq!(
        engine.frame_tick().expect("tick"),
        TickOutcome::ReloadRequired
    );
    assert_eq!(reload_count(&events), 1);
}

#[test]
fn clock_moving_to_an_earlier_hour_also_goes_stale() {
    let (mut engine, clock, _events) = build_engine();

    clock.set(anchor() - Duration::minutes(1));
    assert_eq!(
        engine.frame_tick().expect("tick"),
        TickOutcome::ReloadRequired
    );
    assert!(engine.is_stale());
}

#[test]
fn ticks_do_not_dispatch_selection_changes() {
    let (mut engine, clock, events) = build_engine();
    let before = events.borrow().len();

    clock.advance(Duration::minutes(5));
    engine.frame_tick().expect("tick");

    assert_eq!(events.borrow().len(), before);
}
