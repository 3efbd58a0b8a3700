use super::*;

#[test]
fn fresh_ticket_is_current() {
    let generation = RequestGeneration::default();
    let ticket = generation.begin();
    assert!(generation.is_current(ticket));
}

#[test]
fn newer_request_supersedes_older() {
    let generation = RequestGeneration::default();
    let first = generation.begin();
    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn invalidate_drops_outstanding_ticket() {
    let generation = RequestGeneration::default();
    let ticket = generation.begin();
    generation.invalidate();
    assert!(!generation.is_current(ticket));
}

#[test]
fn clones_share_the_counter() {
    let generation = RequestGeneration::default();
    let handle = generation.clone();
    let ticket = generation.begin();
    handle.invalidate();
    assert!(!generation.is_current(ticket));
}
