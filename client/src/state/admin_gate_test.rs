use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

struct ScriptedChecker {
    answer: Result<bool, FetchError>,
    calls: Cell<usize>,
    seen_token: RefCell<Option<String>>,
}

impl ScriptedChecker {
    fn new(answer: Result<bool, FetchError>) -> Self {
        Self {
            answer,
            calls: Cell::new(0),
            seen_token: RefCell::new(None),
        }
    }
}

impl AdminChecker for ScriptedChecker {
    fn check_admin(&self, token: &str) -> impl Future<Output = Result<bool, FetchError>> {
        self.calls.set(self.calls.get() + 1);
        *self.seen_token.borrow_mut() = Some(token.to_owned());
        let answer = self.answer.clone();
        async move { answer }
    }
}

#[test]
fn gate_starts_checking() {
    assert_eq!(GateState::default(), GateState::Checking);
}

#[test]
fn missing_token_is_unauthorized_without_request() {
    let checker = ScriptedChecker::new(Ok(true));
    assert_eq!(block_on(resolve_gate(None, &checker)), GateState::Unauthorized);
    assert_eq!(checker.calls.get(), 0);
}

#[test]
fn blank_token_is_unauthorized_without_request() {
    let checker = ScriptedChecker::new(Ok(true));
    assert_eq!(block_on(resolve_gate(Some("  ".to_owned()), &checker)), GateState::Unauthorized);
    assert_eq!(checker.calls.get(), 0);
}

#[test]
fn admin_token_is_authorized() {
    let checker = ScriptedChecker::new(Ok(true));
    assert_eq!(block_on(resolve_gate(Some("tok".to_owned()), &checker)), GateState::Authorized);
    assert_eq!(checker.calls.get(), 1);
    assert_eq!(checker.seen_token.borrow().as_deref(), Some("tok"));
}

#[test]
fn non_admin_token_is_unauthorized() {
    let checker = ScriptedChecker::new(Ok(false));
    assert_eq!(block_on(resolve_gate(Some("tok".to_owned()), &checker)), GateState::Unauthorized);
}

#[test]
fn non_200_response_fails_closed() {
    let checker = ScriptedChecker::new(Err(FetchError::Status(403)));
    assert_eq!(block_on(resolve_gate(Some("tok".to_owned()), &checker)), GateState::Unauthorized);
}

#[test]
fn network_and_decode_failures_fail_closed() {
    for err in [
        FetchError::Network("offline".to_owned()),
        FetchError::Malformed("bad json".to_owned()),
        FetchError::Unavailable,
    ] {
        let checker = ScriptedChecker::new(Err(err));
        assert_eq!(block_on(resolve_gate(Some("tok".to_owned()), &checker)), GateState::Unauthorized);
    }
}

#[test]
fn only_authorized_shows_content() {
    assert!(GateState::Authorized.shows_content());
    assert!(!GateState::Checking.shows_content());
    assert!(!GateState::Unauthorized.shows_content());
}

#[test]
fn only_unauthorized_redirects_to_root() {
    assert_eq!(GateState::Unauthorized.redirect_target(), Some("/"));
    assert_eq!(GateState::Checking.redirect_target(), None);
    assert_eq!(GateState::Authorized.redirect_target(), None);
}

#[test]
fn resolved_gate_without_token_redirects_and_hides_content() {
    let checker = ScriptedChecker::new(Ok(true));
    let state = block_on(resolve_gate(None, &checker));
    assert_eq!(state.redirect_target(), Some(UNAUTHORIZED_REDIRECT));
    assert!(!state.shows_content());
}

#[test]
fn resolved_admin_gate_shows_content_without_redirect() {
    let checker = ScriptedChecker::new(Ok(true));
    let state = block_on(resolve_gate(Some("tok".to_owned()), &checker));
    assert!(state.shows_content());
    assert_eq!(state.redirect_target(), None);
}

#[test]
fn status_text_per_state() {
    assert_eq!(GateState::Checking.status_text(), "Loading...");
    assert_eq!(GateState::Unauthorized.status_text(), "Redirecting...");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_checker_is_unavailable_outside_browser() {
    let checker = HttpAdminChecker::new(ApiConfig::new("http://localhost:5000"));
    assert_eq!(block_on(resolve_gate(Some("tok".to_owned()), &checker)), GateState::Unauthorized);
}
