use super::*;
use crate::test_support::{ManualFactory, RecordingOs};

fn tooltip() -> (Arc<Tooltip>, Arc<ManualFactory>, Arc<RecordingOs>, Arc<VarText>) {
    let manual = Arc::new(ManualFactory::default());
    let factory: Arc<dyn OsFactory> = manual.clone();
    let native = Arc::new(RecordingOs::default());
    let text = Arc::new(VarText::new());
    let tooltip = Tooltip::new(
        &factory,
        native.clone() as Arc<dyn OsTooltip>,
        Arc::clone(&text),
        Duration::from_millis(500),
    );
    (tooltip, manual, native, text)
}

#[test]
fn text_change_arms_a_one_shot_timer() {
    let (_tooltip, factory, native, text) = tooltip();
    text.set("Volume");
    assert_eq!(
        *factory.log.started.lock(),
        [(Duration::from_millis(500), true)]
    );
    assert!(native.calls().is_empty());
}

#[test]
fn timer_shows_the_text_at_the_mouse() {
    let (_tooltip, factory, native, text) = tooltip();
    *factory.mouse.lock() = (5, 8);
    text.set("Volume");
    factory.fire();
    assert_eq!(native.calls(), ["tooltip 5,8 Volume"]);
}

#[test]
fn clearing_the_text_hides_and_cancels() {
    let (_tooltip, factory, native, text) = tooltip();
    text.set("Seek");
    text.set("");
    assert_eq!(*factory.log.stopped.lock(), 1);
    factory.fire();
    assert_eq!(native.calls(), ["tooltip hide"]);
}

#[test]
fn dropped_tooltip_stops_observing() {
    let (tooltip, factory, _native, text) = tooltip();
    drop(tooltip);
    text.set("Later");
    assert!(factory.log.started.lock().is_empty());
}
