use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn parse_posts_body_returns_posts() {
    let posts = parse_posts_body(r#"{"posts":[{"_id":"1","title":"A"},{"_id":"2"}]}"#).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].display_title(), "A");
}

#[test]
fn parse_posts_body_empty_list_is_empty_error() {
    assert_eq!(parse_posts_body(r#"{"posts":[]}"#), Err(FetchError::Empty));
}

#[test]
fn parse_posts_body_missing_key_is_empty_error() {
    assert_eq!(parse_posts_body(r#"{"items":[{"_id":"1"}]}"#), Err(FetchError::Empty));
    assert_eq!(parse_posts_body(r#"{"posts":null}"#), Err(FetchError::Empty));
}

#[test]
fn parse_posts_body_tolerates_irregular_posts() {
    let body = r#"{"posts":[
        {"_id":"a","id":"a","title":"Both ids"},
        {"_id":"b","views":null},
        {"_id":"c","image":"/i.png","imgSrc":"/j.png"},
        {"title":"no id at all"}
    ]}"#;
    let posts = parse_posts_body(body).unwrap();
    let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(posts[1].views, 0);
    assert_eq!(posts[2].display_image(), "/i.png");
}

#[test]
fn parse_posts_body_with_only_unusable_posts_is_empty_error() {
    assert_eq!(parse_posts_body(r#"{"posts":[{"title":"x"},7]}"#), Err(FetchError::Empty));
}

#[test]
fn parse_posts_body_rejects_non_json() {
    assert!(matches!(parse_posts_body("<html>oops</html>"), Err(FetchError::Malformed(_))));
}

#[test]
fn parse_posts_body_rejects_wrong_posts_type() {
    assert!(matches!(parse_posts_body(r#"{"posts":"nope"}"#), Err(FetchError::Malformed(_))));
}

#[test]
fn parse_admin_response_reads_flag_on_200() {
    assert_eq!(parse_admin_response(200, r#"{"isAdmin":true}"#), Ok(true));
    assert_eq!(parse_admin_response(200, r#"{"isAdmin":false}"#), Ok(false));
}

#[test]
fn parse_admin_response_rejects_other_statuses() {
    assert_eq!(parse_admin_response(204, ""), Err(FetchError::Status(204)));
    assert_eq!(parse_admin_response(401, r#"{"isAdmin":true}"#), Err(FetchError::Status(401)));
}

#[test]
fn parse_admin_response_rejects_garbage_body() {
    assert!(matches!(parse_admin_response(200, "not json"), Err(FetchError::Malformed(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_calls_are_unavailable_outside_browser() {
    let api = ApiConfig::new("http://localhost:5000");
    assert_eq!(futures::executor::block_on(fetch_posts(&api)), Err(FetchError::Unavailable));
    assert_eq!(
        futures::executor::block_on(check_admin(&api, "t")),
        Err(FetchError::Unavailable)
    );
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(FetchError::Status(500).to_string(), "unexpected status: 500");
    assert_eq!(FetchError::Empty.to_string(), "no posts available");
}
