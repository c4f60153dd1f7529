use super::*;

use crate::vars::{VarList, VarPercent};

#[test]
fn typed_lookup_checks_the_type_tag() {
    let manager = VarManager::new();
    manager.register_var(Arc::new(VarPercent::new()), "volume");

    assert!(manager.get_var_typed("volume", VarPercent::TYPE).is_some());
    assert!(manager.get_var_typed("volume", VarList::TYPE).is_none());
    assert!(manager.get_var_typed("missing", VarPercent::TYPE).is_none());

    let err = manager
        .lookup("volume", "text")
        .err()
        .expect("type mismatch");
    assert_eq!(
        err,
        SkinError::TypeMismatch {
            name: "volume".into(),
            expected: "text".into(),
            actual: "percent".into(),
        }
    );
}

#[test]
fn downcasts_to_the_concrete_variable() {
    let manager = VarManager::new();
    let volume = Arc::new(VarPercent::new());
    manager.register_var(volume.clone(), "volume");

    let found = manager.get::<VarPercent>("volume").expect("percent");
    found.set(0.5);
    assert_eq!(volume.get(), 0.5);
    assert!(manager.get::<VarList>("volume").is_none());
}

#[test]
fn re_registering_a_name_replaces_the_variable() {
    let manager = VarManager::new();
    manager.register_var(Arc::new(VarText::with_value("old")), "title");
    manager.register_var(Arc::new(VarText::with_value("new")), "title");

    let title = manager.get::<VarText>("title").expect("title");
    assert_eq!(title.get(), "new");
    assert_eq!(manager.names(), vec!["title".to_string()]);
}

#[test]
fn anonymous_variables_live_as_long_as_the_manager() {
    let manager = VarManager::new();
    let owned = Arc::new(VarPercent::new());
    manager.register_anonymous(owned.clone());
    assert_eq!(Arc::strong_count(&owned), 2);

    drop(manager);
    assert_eq!(Arc::strong_count(&owned), 1);
}

#[test]
fn constants_default_to_empty() {
    let manager = VarManager::new();
    manager.register_const("skin.version", "2.0");

    assert_eq!(manager.get_const("skin.version"), "2.0");
    assert_eq!(manager.get_const("unknown"), "");
}

#[test]
fn tooltip_and_help_text_are_always_present() {
    let manager = VarManager::new();
    manager.tooltip_text().set("Play");
    assert_eq!(manager.tooltip_text().get(), "Play");
    assert!(manager.help_text().is_empty());
}
