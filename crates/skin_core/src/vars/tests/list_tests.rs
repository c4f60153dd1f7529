use super::*;

use crate::observer::Observer;

#[derive(Default)]
struct Recorder {
    changes: Mutex<Vec<ListChange>>,
}

impl Observer<VarList, ListChange> for Recorder {
    fn on_update(&self, _subject: &VarList, arg: &ListChange) {
        self.changes.lock().push(*arg);
    }
}

fn watched(list: &VarList) -> Arc<Recorder> {
    let recorder = Arc::new(Recorder::default());
    let handle = Arc::downgrade(&recorder);
    list.subject().add_observer(handle);
    recorder
}

fn texts(list: &VarList) -> Vec<String> {
    list.items().iter().map(|elem| elem.text.to_string()).collect()
}

#[test]
fn del_selected_removes_all_selected_and_notifies_once() {
    let list = VarList::new();
    list.add("A");
    list.add("B");
    list.add("C");
    list.set_selected(0, true);
    list.set_selected(2, true);
    let recorder = watched(&list);

    list.del_selected();

    assert_eq!(texts(&list), vec!["B".to_string()]);
    assert_eq!(*recorder.changes.lock(), vec![ListChange::Structure]);
}

#[test]
fn add_appends_unselected_not_playing() {
    let list = VarList::new();
    let recorder = watched(&list);

    list.add("first");
    list.add(Arc::<str>::from("second"));

    let elem = list.get(1).expect("second element");
    assert_eq!(&*elem.text, "second");
    assert!(!elem.selected);
    assert!(!elem.playing);
    assert_eq!(recorder.changes.lock().len(), 2);
}

#[test]
fn clear_notifies_only_when_something_was_removed() {
    let list = VarList::new();
    let recorder = watched(&list);

    list.clear();
    assert!(recorder.changes.lock().is_empty());

    list.add("A");
    list.position_var().set(0.2);
    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.position_var().get(), 1.0);
    assert_eq!(
        *recorder.changes.lock(),
        vec![ListChange::Structure, ListChange::Structure]
    );
}

#[test]
fn playing_flag_is_exclusive() {
    let list = VarList::new();
    list.add("A");
    list.add("B");
    let recorder = watched(&list);

    assert!(list.set_playing(0));
    assert!(list.set_playing(1));
    assert!(!list.set_playing(5));

    let playing: Vec<bool> = list.items().iter().map(|elem| elem.playing).collect();
    assert_eq!(playing, vec![false, true]);
    assert_eq!(
        *recorder.changes.lock(),
        vec![ListChange::Playing(0), ListChange::Playing(1)]
    );
}

#[test]
fn select_only_and_refresh_item() {
    let list = VarList::new();
    list.add("A");
    list.add("B");
    list.set_selected(0, true);

    assert!(list.select_only(1));
    let selected: Vec<bool> = list.items().iter().map(|elem| elem.selected).collect();
    assert_eq!(selected, vec![false, true]);

    let recorder = watched(&list);
    assert!(list.refresh_item(0));
    assert!(!list.refresh_item(2));
    assert_eq!(*recorder.changes.lock(), vec![ListChange::Item(0)]);
}

#[test]
fn position_starts_at_top() {
    assert_eq!(VarList::new().position_var().get(), 1.0);
}
