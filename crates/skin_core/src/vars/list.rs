use std::sync::Arc;

use parking_lot::Mutex;

use crate::observer::Subject;

use super::{impl_variable, VarPercent};

/// What changed in a [`VarList`] since the last notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// Elements were added, removed or cleared.
    Structure,
    /// The element at this position was refreshed in place.
    Item(usize),
    /// The playing flag moved to this position.
    Playing(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListElem {
    pub text: Arc<str>,
    pub selected: bool,
    pub playing: bool,
}

impl ListElem {
    fn new(text: Arc<str>) -> Self {
        Self {
            text,
            selected: false,
            playing: false,
        }
    }
}

/// Ordered list of strings with selection and playing flags, plus the
/// scroll position controls bind to.
#[derive(Debug)]
pub struct VarList {
    elems: Mutex<Vec<ListElem>>,
    position: Arc<VarPercent>,
    subject: Subject<VarList, ListChange>,
}

impl_variable!(VarList, "list");

impl VarList {
    pub fn new() -> Self {
        let position = Arc::new(VarPercent::new());
        position.set(1.0);
        Self {
            elems: Mutex::new(Vec::new()),
            position,
            subject: Subject::new(),
        }
    }

    pub fn add(&self, text: impl Into<Arc<str>>) {
        self.elems.lock().push(ListElem::new(text.into()));
        self.subject.notify(self, &ListChange::Structure);
    }

    /// Removes every selected element in one pass, then notifies once.
    pub fn del_selected(&self) {
        self.elems.lock().retain(|elem| !elem.selected);
        self.subject.notify(self, &ListChange::Structure);
    }

    /// Empties the list and scrolls back to the top.
    pub fn clear(&self) {
        let had_elems = {
            let mut elems = self.elems.lock();
            let had_elems = !elems.is_empty();
            elems.clear();
            had_elems
        };
        self.position.set(1.0);
        if had_elems {
            self.subject.notify(self, &ListChange::Structure);
        }
    }

    pub fn size(&self) -> usize {
        self.elems.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.lock().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ListElem> {
        self.elems.lock().get(index).cloned()
    }

    pub fn items(&self) -> Vec<ListElem> {
        self.elems.lock().clone()
    }

    /// Returns false when `index` is out of range.
    pub fn set_selected(&self, index: usize, selected: bool) -> bool {
        let changed = match self.elems.lock().get_mut(index) {
            Some(elem) if elem.selected != selected => {
                elem.selected = selected;
                true
            }
            Some(_) => false,
            None => return false,
        };
        if changed {
            self.subject.notify(self, &ListChange::Item(index));
        }
        true
    }

    /// Selects `index` and deselects everything else.
    pub fn select_only(&self, index: usize) -> bool {
        {
            let mut elems = self.elems.lock();
            if index >= elems.len() {
                return false;
            }
            for (pos, elem) in elems.iter_mut().enumerate() {
                elem.selected = pos == index;
            }
        }
        self.subject.notify(self, &ListChange::Structure);
        true
    }

    /// Moves the playing flag to `index`.
    pub fn set_playing(&self, index: usize) -> bool {
        {
            let mut elems = self.elems.lock();
            if index >= elems.len() {
                return false;
            }
            for (pos, elem) in elems.iter_mut().enumerate() {
                elem.playing = pos == index;
            }
        }
        self.subject.notify(self, &ListChange::Playing(index));
        true
    }

    /// Tells observers the element at `index` should be redrawn.
    pub fn refresh_item(&self, index: usize) -> bool {
        if index >= self.size() {
            return false;
        }
        self.subject.notify(self, &ListChange::Item(index));
        true
    }

    pub fn position_var(&self) -> &Arc<VarPercent> {
        &self.position
    }

    pub fn subject(&self) -> &Subject<VarList, ListChange> {
        &self.subject
    }
}

impl Default for VarList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
