//! Tests for stale-result suppression.

use std::sync::Arc;
use std::thread;

use price_tracker_core::RequestSequencer;

#[test]
fn only_latest_token_is_accepted() {
    let seq = RequestSequencer::new();
    let first = seq.issue();
    let second = seq.issue();

    assert!(second > first);
    assert!(!seq.is_current(first));
    assert_eq!(seq.accept(first, "stale"), None);
    assert_eq!(seq.accept(second, "fresh"), Some("fresh"));
}

#[test]
fn a_single_request_is_current() {
    let seq = RequestSequencer::new();
    let token = seq.issue();
    assert_eq!(token.id(), 1);
    assert!(seq.is_current(token));
}

#[test]
fn tokens_are_unique_across_threads() {
    let seq = Arc::new(RequestSequencer::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let seq = Arc::clone(&seq);
            thread::spawn(move || (0..100).map(|_| seq.issue().id()).collect::<Vec<_>>())
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 400);
    assert_eq!(ids.last().copied(), Some(400));
}
