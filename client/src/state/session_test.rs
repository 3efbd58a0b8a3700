use super::*;

#[test]
fn fixed_session_returns_token() {
    let session = Session::fixed(Some("abc"));
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn fixed_session_without_token_is_none() {
    assert_eq!(Session::fixed(None).token(), None);
}

#[test]
fn blank_token_reads_as_none() {
    assert_eq!(Session::fixed(Some("   ")).token(), None);
    assert_eq!(Session::fixed(Some("")).token(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_is_empty_outside_browser() {
    assert_eq!(Session::browser().token(), None);
}

#[test]
fn debug_output_hides_token_value() {
    let rendered = format!("{:?}", Session::fixed(Some("secret-token")));
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("has_token: true"));
}

#[test]
fn custom_provider_is_consulted() {
    struct StaticProvider;
    impl SessionProvider for StaticProvider {
        fn token(&self) -> Option<String> {
            Some("from-provider".to_owned())
        }
    }
    assert_eq!(Session::new(StaticProvider).token().as_deref(), Some("from-provider"));
}
