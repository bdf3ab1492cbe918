mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_reports_database_ok() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app.get("/health", None).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert!(body["timestamp"].is_string(), "timestamp missing: {}", body);

    Ok(())
}

#[tokio::test]
async fn root_lists_endpoints() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app.get("/", None).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["name"], "Meat Freshness API");
    assert!(body["endpoints"]["calculate_quality"].is_string());

    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    let res = app.get("/api/data/users", None).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
