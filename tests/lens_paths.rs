use serde_json::{json, Value};
use threadview::{Lens, Path, Store};

#[test]
fn read_is_pull_based() {
    let store = Store::new(json!({"messages": []}));
    let lens = Lens::new(store.clone(), "messages");
    assert_eq!(lens.read(), json!([]));
    // Mutate behind the lens's back; the next read must see it.
    store.replace(json!({"messages": [1]}));
    assert_eq!(lens.read(), json!([1]));
}

#[test]
fn read_of_absent_path_is_null() {
    let store = Store::new(json!({}));
    assert_eq!(Lens::new(store, "messages").read(), Value::Null);
}

#[test]
fn set_replaces_only_the_focused_path() {
    let store = Store::new(json!({"messages": [1], "metadata": {"version": "0.1"}}));
    Lens::new(store.clone(), "messages").set(json!([]));
    assert_eq!(
        store.read(),
        json!({"messages": [], "metadata": {"version": "0.1"}})
    );
}

#[test]
fn nested_path_set_keeps_cousins() {
    let store = Store::new(json!({"a": {"b": 1, "c": 2}, "d": 3}));
    Lens::new(store.clone(), Path::nested(["a", "b"])).set(json!(10));
    assert_eq!(store.read(), json!({"a": {"b": 10, "c": 2}, "d": 3}));
}

#[test]
fn modify_appends_through_the_lens() {
    let store = Store::new(json!({"messages": [{"id": 1}]}));
    let lens = Lens::new(store, "messages");
    lens.modify(|sequence| {
        let mut items = sequence.as_array().cloned().unwrap_or_default();
        items.push(json!({"id": 2}));
        Value::Array(items)
    });
    assert_eq!(lens.read(), json!([{"id": 1}, {"id": 2}]));
}

#[test]
fn disjoint_lenses_do_not_interfere() {
    let store = Store::new(json!({"messages": [], "metadata": {"v": 1}}));
    let messages = Lens::new(store.clone(), "messages");
    let metadata = Lens::new(store, "metadata");

    messages.set(json!([{"from": [{"name": "A"}]}]));
    assert_eq!(metadata.read(), json!({"v": 1}));

    metadata.set(json!({"v": 2}));
    assert_eq!(messages.read(), json!([{"from": [{"name": "A"}]}]));
}

#[test]
fn reader_never_observes_a_mixed_root() {
    let store = Store::new(json!({"messages": [1], "metadata": {"v": 1}}));
    let before = store.read();
    Lens::new(store.clone(), "messages").set(json!([]));
    let after = store.read();
    // The held snapshot is entirely pre-mutation; the new root is entirely
    // post-mutation with untouched siblings.
    assert_eq!(before, json!({"messages": [1], "metadata": {"v": 1}}));
    assert_eq!(after, json!({"messages": [], "metadata": {"v": 1}}));
}

#[test]
fn set_into_missing_spine_creates_objects() {
    let store = Store::new(json!({}));
    Lens::new(store.clone(), Path::nested(["ui", "collapsed"])).set(json!(true));
    assert_eq!(store.read(), json!({"ui": {"collapsed": true}}));
}
