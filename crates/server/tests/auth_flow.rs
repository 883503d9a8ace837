mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;

use support::{build_app, OWNER_EMAIL, OWNER_PASSWORD};

fn login_request(email: &str, password: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(json!({"email": email, "password": password}).to_string()))?)
}

#[tokio::test]
async fn login_sets_cookie_and_returns_token() -> anyhow::Result<()> {
    let app = build_app();
    let resp = {
        use tower::Service;
        app.router.clone().call(login_request(OWNER_EMAIL, OWNER_PASSWORD)?).await?
    };
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.starts_with("auth_token="), "{cookie}");
    assert!(cookie.contains("HttpOnly"));

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["subject"], OWNER_EMAIL);
    let token = body["token"].as_str().unwrap_or_default();

    let req = Request::builder()
        .uri("/clients")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    assert_eq!(app.send(req).await?.0, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn email_match_ignores_case() -> anyhow::Result<()> {
    let app = build_app();
    let (status, _) = app.send(login_request(&OWNER_EMAIL.to_uppercase(), OWNER_PASSWORD)?).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn wrong_credentials_are_401() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = app.send(login_request(OWNER_EMAIL, "wrong-password")?).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Unauthorized"}));

    let (status, _) = app.send(login_request("someone@else.test", OWNER_PASSWORD)?).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn logout_clears_cookie() -> anyhow::Result<()> {
    let app = build_app();
    let req = Request::builder().method("POST").uri("/auth/logout").body(Body::empty())?;
    let resp = {
        use tower::Service;
        app.router.clone().call(req).await?
    };
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("auth_token="), "{cookie}");
    assert!(cookie.contains("Max-Age=0"), "{cookie}");
    Ok(())
}

#[tokio::test]
async fn logout_with_session_cookie_expires_it() -> anyhow::Result<()> {
    let app = build_app();
    let req = Request::builder()
        .method("POST")
        .uri("/auth/logout")
        .header("cookie", format!("auth_token={}", app.token()))
        .body(Body::empty())?;
    let resp = {
        use tower::Service;
        app.router.clone().call(req).await?
    };
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cookies: Vec<&str> = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    assert_eq!(cookies.len(), 1, "{cookies:?}");
    assert!(cookies[0].starts_with("auth_token=;"), "{}", cookies[0]);
    assert!(cookies[0].contains("Max-Age=0"));
    Ok(())
}
