mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use meat_freshness_api::auth::{decode_jwt, MAX_EXPIRY_HOURS};
use meat_freshness_api::config::AppConfig;
use meat_freshness_api::types::Role;

#[tokio::test]
async fn signup_then_login_issues_token_with_role() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app
        .post_json(
            "/signup",
            &json!({ "username": "c1", "password": "pw-c1", "user_type": "customer" }),
            None,
        )
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "User signed up successfully");
    let id = body["id"].as_i64().expect("id");

    let res = app
        .post_json("/login", &json!({ "username": "c1", "password": "pw-c1" }), None)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["expires_in"].as_u64().unwrap_or(0) > 0);

    let token = body["access_token"].as_str().expect("access_token");
    let claims = decode_jwt(token, common::TEST_SECRET)?;
    assert_eq!(claims.user_id, id);
    assert_eq!(claims.user_type, Role::Customer);

    Ok(())
}

#[tokio::test]
async fn duplicate_username_conflicts() -> Result<()> {
    let app = common::TestApp::spawn().await?;
    app.signup("dup", "first", "manager").await?;

    let res = app
        .post_json(
            "/signup",
            &json!({ "username": "dup", "password": "second", "user_type": "customer" }),
            None,
        )
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // The first account keeps its password
    app.login("dup", "first").await?;

    Ok(())
}

#[tokio::test]
async fn signup_rejects_invalid_role_and_missing_fields() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app
        .post_json("/signup", &json!({ "username": "x", "user_type": "butcher" }), None)
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["password"].is_string(), "{}", body);
    assert!(body["field_errors"]["user_type"].is_string(), "{}", body);

    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app
        .client
        .post(app.url("/signup"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "INVALID_JSON");

    Ok(())
}

#[tokio::test]
async fn wrong_password_and_unknown_user_look_the_same() -> Result<()> {
    let app = common::TestApp::spawn().await?;
    app.signup("m1", "right", "manager").await?;

    let wrong = app
        .post_json("/login", &json!({ "username": "m1", "password": "wrong" }), None)
        .await?;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong: Value = wrong.json().await?;

    let unknown = app
        .post_json("/login", &json!({ "username": "ghost", "password": "wrong" }), None)
        .await?;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown: Value = unknown.json().await?;

    assert_eq!(wrong, unknown);
    assert_eq!(wrong["message"], "Bad username or password");

    Ok(())
}

#[tokio::test]
async fn login_rejects_empty_body() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app.post_json("/login", &json!({}), None).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn login_accepts_signup_shaped_body() -> Result<()> {
    let app = common::TestApp::spawn().await?;
    let id = app.signup("m1", "pw", "manager").await?;

    // The role in a login body is ignored, even when it is not the user's
    for user_type in ["manager", "admin"] {
        let res = app
            .post_json(
                "/login",
                &json!({ "username": "m1", "password": "pw", "user_type": user_type }),
                None,
            )
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "user_type {}", user_type);
        let body: Value = res.json().await?;
        let claims = decode_jwt(body["access_token"].as_str().expect("token"), common::TEST_SECRET)?;
        assert_eq!(claims.user_id, id);
        assert_eq!(claims.user_type, Role::Manager);
    }

    let res = app
        .post_json(
            "/login",
            &json!({ "username": "m1", "password": "wrong", "user_type": "manager" }),
            None,
        )
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn oversized_expiry_is_clamped_at_login() -> Result<()> {
    let mut config = AppConfig::for_tests();
    config.security.jwt_expiry_hours = 10_000_000_000_000_000;
    let app = common::TestApp::spawn_with(config).await?;
    app.signup("c1", "pw", "customer").await?;

    let res = app
        .post_json("/login", &json!({ "username": "c1", "password": "pw" }), None)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["expires_in"].as_u64(), Some(MAX_EXPIRY_HOURS * 3600));

    Ok(())
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() -> Result<()> {
    let mut config = AppConfig::for_tests();
    config.api.max_request_size_bytes = 1024;
    let app = common::TestApp::spawn_with(config).await?;

    let body = json!({
        "username": "x".repeat(4096),
        "password": "pw",
        "user_type": "customer"
    });
    let res = app.post_json("/signup", &body, None).await?;
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");

    Ok(())
}

#[tokio::test]
async fn non_json_content_type_is_unsupported() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app
        .client
        .post(app.url("/signup"))
        .header("content-type", "text/plain")
        .body(r#"{"username":"u","password":"pw","user_type":"customer"}"#)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");

    Ok(())
}
