//! Endpoint behavior through warp's test harness.

use cw_core::ExpiryPolicy;
use cw_server::routes::routes;
use cw_server::ServerState;
use tokio::time::{advance, Duration};

fn state(password: &str) -> ServerState {
    ServerState::new(password, None)
}

#[tokio::test]
async fn index_serves_the_page() {
    let api = routes(state("pw"));
    let res = warp::test::request().path("/").reply(&api).await;
    assert_eq!(res.status(), 200);
    let content_type = res.headers().get("content-type").expect("content-type");
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(String::from_utf8_lossy(res.body()).contains("clipwire"));
}

#[tokio::test]
async fn copy_then_paste_round_trips_multibyte_text() {
    let api = routes(state("pw"));
    let res = warp::test::request()
        .method("POST")
        .path("/copy")
        .header("password", "pw")
        .json(&serde_json::json!({ "text": "héllo wörld 🎉" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    assert_eq!(
        std::str::from_utf8(res.body()).expect("utf-8 body"),
        "updated remote clipboard"
    );

    let res = warp::test::request()
        .path("/paste")
        .header("password", "pw")
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    let content_type = res.headers().get("content-type").expect("content-type");
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert_eq!(
        std::str::from_utf8(res.body()).expect("utf-8 body"),
        "héllo wörld 🎉"
    );
}

#[tokio::test]
async fn wrong_password_is_rejected_without_touching_the_store() {
    let state = state("right");
    let api = routes(state.clone());

    let res = warp::test::request()
        .method("POST")
        .path("/copy")
        .header("password", "wrong")
        .json(&serde_json::json!({ "text": "intruder" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 401);
    assert_eq!(
        std::str::from_utf8(res.body()).expect("utf-8 body"),
        "invalid password"
    );
    assert_eq!(state.store.read().await.text, "");
}

#[tokio::test]
async fn missing_password_is_rejected() {
    let api = routes(state("pw"));
    let res = warp::test::request().path("/paste").reply(&api).await;
    assert_eq!(res.status(), 401);
    assert_eq!(
        std::str::from_utf8(res.body()).expect("utf-8 body"),
        "invalid password"
    );
}

#[tokio::test]
async fn password_header_name_is_case_insensitive() {
    let api = routes(state("pw"));
    let res = warp::test::request()
        .method("POST")
        .path("/copy")
        .header("PASSWORD", "pw")
        .json(&serde_json::json!({ "text": "ok" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn paste_before_any_copy_returns_empty_ok() {
    let api = routes(state("pw"));
    let res = warp::test::request()
        .path("/paste")
        .header("password", "pw")
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    assert!(res.body().is_empty());
    assert!(res.headers().get("x-clipboard-timestamp").is_some());
}

#[tokio::test]
async fn malformed_json_returns_500_and_preserves_the_value() {
    let state = state("pw");
    let api = routes(state.clone());
    state.store.write("keep me").await;

    let res = warp::test::request()
        .method("POST")
        .path("/copy")
        .header("password", "pw")
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&api)
        .await;
    assert_eq!(res.status(), 500);
    assert_eq!(
        std::str::from_utf8(res.body()).expect("utf-8 body"),
        "error parsing JSON body"
    );
    assert_eq!(state.store.read().await.text, "keep me");
}

#[tokio::test]
async fn paste_timestamp_header_parses_back() {
    let api = routes(state("pw"));
    warp::test::request()
        .method("POST")
        .path("/copy")
        .header("password", "pw")
        .json(&serde_json::json!({ "text": "stamped" }))
        .reply(&api)
        .await;

    let res = warp::test::request()
        .path("/paste")
        .header("password", "pw")
        .reply(&api)
        .await;
    let header = res
        .headers()
        .get("x-clipboard-timestamp")
        .expect("timestamp header")
        .to_str()
        .expect("ascii header");
    chrono::DateTime::parse_from_str(header, "%d %b %y %H:%M %z")
        .expect("rfc822 timestamp with numeric zone");
}

#[tokio::test]
async fn cors_headers_are_present_for_cross_origin_calls() {
    let api = routes(state("pw"));
    let res = warp::test::request()
        .path("/paste")
        .header("password", "pw")
        .header("origin", "http://elsewhere.example")
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn preflight_allows_the_password_header() {
    let api = routes(state("pw"));
    let res = warp::test::request()
        .method("OPTIONS")
        .path("/copy")
        .header("origin", "http://elsewhere.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "password")
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    let allowed = res
        .headers()
        .get("access-control-allow-headers")
        .expect("allow-headers")
        .to_str()
        .expect("ascii header");
    assert!(allowed.contains("password"));
}

#[tokio::test(start_paused = true)]
async fn clipboard_expires_over_http() {
    let state = ServerState::new("pw", ExpiryPolicy::from_secs(2));
    let api = routes(state.clone());

    let res = warp::test::request()
        .method("POST")
        .path("/copy")
        .header("password", "pw")
        .json(&serde_json::json!({ "text": "short lived" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    tokio::task::yield_now().await;

    advance(Duration::from_secs(3)).await;
    tokio::task::yield_now().await;

    let res = warp::test::request()
        .path("/paste")
        .header("password", "pw")
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    assert!(res.body().is_empty());
}
