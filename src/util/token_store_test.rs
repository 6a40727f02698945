use super::*;

// Each test runs on its own thread, so the in-memory fallback cell starts
// empty every time.

#[test]
fn empty_store_yields_none() {
    assert_eq!(get(), None);
}

#[test]
fn set_then_get_round_trips() {
    set("abc");
    assert_eq!(get(), Some("abc".to_owned()));
}

#[test]
fn set_overwrites_previous_token() {
    set("first");
    set("second");
    assert_eq!(get(), Some("second".to_owned()));
}

#[test]
fn clear_removes_token() {
    set("abc");
    clear();
    assert_eq!(get(), None);
}

#[test]
fn clear_is_idempotent() {
    clear();
    clear();
    assert_eq!(get(), None);
}
