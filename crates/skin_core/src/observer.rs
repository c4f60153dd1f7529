//! One-to-many change notification between stateful cells and their watchers.

use std::{
    fmt,
    sync::{Arc, Weak},
};

use parking_lot::Mutex;

/// Receives change notifications from a [`Subject`].
pub trait Observer<S: ?Sized, A = ()>: Send + Sync {
    fn on_update(&self, subject: &S, arg: &A);
}

/// Set of observers watching one source.
///
/// The subject never owns its observers: it keeps weak handles, so an
/// observer that is dropped simply stops receiving notifications.
pub struct Subject<S: ?Sized, A = ()> {
    observers: Mutex<Vec<Weak<dyn Observer<S, A>>>>,
}

impl<S: ?Sized, A> Subject<S, A> {
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Registers an observer. Dead handles and duplicates are ignored.
    pub fn add_observer(&self, observer: Weak<dyn Observer<S, A>>) {
        if observer.strong_count() == 0 {
            return;
        }
        let mut observers = self.observers.lock();
        observers.retain(|existing| existing.strong_count() > 0);
        if !observers
            .iter()
            .any(|existing| Weak::ptr_eq(existing, &observer))
        {
            observers.push(observer);
        }
    }

    pub fn del_observer(&self, observer: &Weak<dyn Observer<S, A>>) {
        self.observers
            .lock()
            .retain(|existing| existing.strong_count() > 0 && !Weak::ptr_eq(existing, observer));
    }

    /// Calls every live observer with `source` and `arg`.
    ///
    /// Observers are snapshotted before the first callback and the lock is
    /// released while callbacks run, so an observer may register or
    /// deregister itself (or others) without deadlocking. Such changes only
    /// take effect for the next notification.
    pub fn notify(&self, source: &S, arg: &A) {
        let live: Vec<Arc<dyn Observer<S, A>>> = {
            let mut observers = self.observers.lock();
            observers.retain(|existing| existing.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in live {
            observer.on_update(source, arg);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .iter()
            .filter(|existing| existing.strong_count() > 0)
            .count()
    }
}

impl<S: ?Sized, A> Default for Subject<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized, A> fmt::Debug for Subject<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observer_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/observer_tests.rs"]
mod tests;
