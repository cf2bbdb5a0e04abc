//! Input coalescing with an explicit clock.

use std::time::{Duration, Instant};

use shibori_core::index::ContainerId;

use super::{make_session, FakeHost, C, ITEMS};
use crate::DEFAULT_DEBOUNCE_WINDOW;

#[test]
fn pass_waits_for_the_quiet_window() {
    let mut session = make_session();
    let mut host = FakeHost::with_items(C, &ITEMS);
    let t0 = Instant::now();

    session.note_input(C, "2024", t0);
    assert_eq!(session.poll(t0 + Duration::from_millis(100), &mut host), 0);
    assert_eq!(host.visible_flags(C), vec![true; 4]);

    assert_eq!(session.poll(t0 + DEFAULT_DEBOUNCE_WINDOW, &mut host), 1);
    assert_eq!(host.visible_flags(C), vec![false, false, false, true]);
}

#[test]
fn rapid_edits_coalesce_into_the_last_query() {
    let mut session = make_session();
    let mut host = FakeHost::with_items(C, &ITEMS);
    let t0 = Instant::now();

    session.note_input(C, "s", t0);
    session.note_input(C, "su", t0 + Duration::from_millis(40));
    session.note_input(C, "suugaku", t0 + Duration::from_millis(80));

    // The first edit's deadline has passed, but it was superseded
    assert_eq!(session.poll(t0 + Duration::from_millis(160), &mut host), 0);

    assert_eq!(session.poll(t0 + Duration::from_millis(230), &mut host), 1);
    assert_eq!(host.visible_flags(C), vec![true, false, false, false]);
}

#[test]
fn empty_edit_is_debounced_like_any_other() {
    let mut session = make_session();
    let mut host = FakeHost::with_items(C, &ITEMS);
    let t0 = Instant::now();

    session.filter_now(C, "2024", &mut host);
    session.note_input(C, "", t0);
    assert_eq!(host.visible_flags(C), vec![false, false, false, true]);

    session.poll(t0 + DEFAULT_DEBOUNCE_WINDOW, &mut host);
    assert_eq!(host.visible_flags(C), vec![true; 4]);
}

#[test]
fn cancel_pending_drops_the_pass() {
    let mut session = make_session();
    let mut host = FakeHost::with_items(C, &ITEMS);
    let t0 = Instant::now();

    session.note_input(C, "2024", t0);
    session.cancel_pending(C);
    assert_eq!(session.poll(t0 + Duration::from_secs(1), &mut host), 0);
    assert_eq!(host.visible_flags(C), vec![true; 4]);
}

#[test]
fn filter_now_supersedes_a_pending_pass() {
    let mut session = make_session();
    let mut host = FakeHost::with_items(C, &ITEMS);
    let t0 = Instant::now();

    session.note_input(C, "eigo", t0);
    session.filter_now(C, "2024", &mut host);
    assert_eq!(session.poll(t0 + Duration::from_secs(1), &mut host), 0);
    assert_eq!(host.visible_flags(C), vec![false, false, false, true]);
}

#[test]
fn next_deadline_reports_the_earliest_pending() {
    let mut session = make_session();
    let d = ContainerId(2);
    let t0 = Instant::now();

    assert!(session.next_deadline().is_none());
    session.note_input(C, "a", t0 + Duration::from_millis(50));
    session.note_input(d, "b", t0);
    assert_eq!(session.next_deadline(), Some(t0 + DEFAULT_DEBOUNCE_WINDOW));
}

#[test]
fn containers_debounce_independently() {
    let d = ContainerId(2);
    let mut session = make_session();
    let mut host = FakeHost::new();
    host.add_container(C, &["数学", "英語"]);
    host.add_container(d, &["数学", "英語"]);
    let t0 = Instant::now();

    session.note_input(C, "suugaku", t0);
    session.note_input(d, "eigo", t0 + Duration::from_millis(100));

    assert_eq!(session.poll(t0 + DEFAULT_DEBOUNCE_WINDOW, &mut host), 1);
    assert_eq!(host.visible_flags(C), vec![true, false]);
    assert_eq!(host.visible_flags(d), vec![true, true]);

    assert_eq!(session.poll(t0 + Duration::from_millis(250), &mut host), 1);
    assert_eq!(host.visible_flags(d), vec![false, true]);
}
