use super::*;

use crate::{
    commands::CmdCallback,
    test_support::{logged, ManualFactory},
};

fn queue() -> (Arc<ManualFactory>, Arc<AsyncQueue>) {
    let factory = Arc::new(ManualFactory::default());
    let queue = AsyncQueue::new(&*factory, Duration::from_millis(10));
    (factory, queue)
}

#[test]
fn starts_a_periodic_flush_timer() {
    let (factory, _queue) = queue();
    assert_eq!(
        *factory.log.started.lock(),
        vec![(Duration::from_millis(10), false)]
    );
}

#[test]
fn same_type_push_supersedes_pending_command() {
    let (_factory, queue) = queue();
    let log = Arc::new(Mutex::new(Vec::new()));

    queue.push(logged(&log, "set equalizer bands", "first"), true);
    queue.push(logged(&log, "set equalizer bands", "second"), true);
    assert_eq!(queue.len(), 1);

    queue.flush();
    assert_eq!(*log.lock(), vec!["second".to_string()]);
}

#[test]
fn push_without_removal_keeps_both() {
    let (_factory, queue) = queue();
    let log = Arc::new(Mutex::new(Vec::new()));

    queue.push(logged(&log, "set equalizer bands", "first"), true);
    queue.push(logged(&log, "set equalizer bands", "second"), false);

    assert_eq!(queue.len(), 2);
}

#[test]
fn removal_keeps_other_types_in_order() {
    let (_factory, queue) = queue();
    let log = Arc::new(Mutex::new(Vec::new()));

    queue.push(logged(&log, "seek", "seek-1"), true);
    queue.push(logged(&log, "volume", "volume"), true);
    queue.push(logged(&log, "title", "title"), true);
    queue.push(logged(&log, "seek", "seek-2"), true);
    queue.flush();

    assert_eq!(*log.lock(), vec!["volume", "title", "seek-2"]);
}

#[test]
fn flush_runs_fifo_exactly_once() {
    let (_factory, queue) = queue();
    let log = Arc::new(Mutex::new(Vec::new()));

    queue.push(logged(&log, "a", "A"), false);
    queue.push(logged(&log, "b", "B"), false);
    queue.push(logged(&log, "c", "C"), false);
    queue.flush();
    queue.flush();

    assert_eq!(*log.lock(), vec!["A", "B", "C"]);
    assert!(queue.is_empty());
}

#[test]
fn command_may_push_while_being_flushed() {
    let (_factory, queue) = queue();
    let log = Arc::new(Mutex::new(Vec::new()));

    let follow_up = logged(&log, "follow", "follow-up");
    let weak_queue = Arc::downgrade(&queue);
    let log_outer = Arc::clone(&log);
    queue.push(
        Arc::new(CmdCallback::new("outer", move || {
            log_outer.lock().push("outer".to_string());
            if let Some(queue) = weak_queue.upgrade() {
                queue.push(Arc::clone(&follow_up), true);
            }
        })),
        true,
    );
    queue.flush();

    assert_eq!(*log.lock(), vec!["outer", "follow-up"]);
}

#[test]
fn timer_callback_flushes_the_queue() {
    let (factory, queue) = queue();
    let log = Arc::new(Mutex::new(Vec::new()));
    queue.push(logged(&log, "a", "A"), true);

    factory.fire();

    assert_eq!(*log.lock(), vec!["A"]);
}

#[test]
fn dropping_the_queue_stops_its_timer() {
    let (factory, queue) = queue();
    drop(queue);

    assert_eq!(*factory.log.stopped.lock(), 1);
    factory.fire();
}
