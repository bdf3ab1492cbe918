mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use meat_freshness_api::auth::{generate_jwt, Claims};
use meat_freshness_api::types::Role;

const POST_ROUTES: [(&str, Role); 3] = [
    ("/register_shop", Role::Manager),
    ("/meat_data", Role::Customer),
    ("/calculate_quality", Role::Customer),
];

const GET_ROUTES: [(&str, Role); 3] = [
    ("/meat_list", Role::Customer),
    ("/admin/users", Role::Admin),
    ("/admin/shops", Role::Admin),
];

#[tokio::test]
async fn wrong_role_is_forbidden_everywhere() -> Result<()> {
    let app = common::TestApp::spawn().await?;
    let mut tokens = Vec::new();
    for role in Role::ALL {
        let (_, token) = app.user(&format!("user-{}", role), role.as_str()).await?;
        tokens.push((role, token));
    }

    for (path, allowed) in POST_ROUTES {
        for (role, token) in &tokens {
            if *role == allowed {
                continue;
            }
            // Role is checked before the body, so an invalid body still gets 403
            let res = app.post_json(path, &json!({}), Some(token)).await?;
            assert_eq!(res.status(), StatusCode::FORBIDDEN, "{} as {}", path, role);
            let body: Value = res.json().await?;
            assert_eq!(body["code"], "FORBIDDEN");
        }
    }

    for (path, allowed) in GET_ROUTES {
        for (role, token) in &tokens {
            let status = app.get(path, Some(token)).await?.status();
            if *role == allowed {
                assert_eq!(status, StatusCode::OK, "{} as {}", path, role);
            } else {
                assert_eq!(status, StatusCode::FORBIDDEN, "{} as {}", path, role);
            }
        }
    }

    Ok(())
}

#[tokio::test]
async fn missing_or_bad_token_is_unauthorized() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    for (path, _) in POST_ROUTES {
        let res = app.post_json(path, &json!({}), None).await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", path);
    }
    for (path, _) in GET_ROUTES {
        let res = app.get(path, Some("not-a-jwt")).await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", path);
    }

    let res = app
        .client
        .get(app.url("/meat_list"))
        .header("authorization", "Token abc")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() -> Result<()> {
    let app = common::TestApp::spawn().await?;
    let claims = Claims::new(1, Role::Admin, 1);
    let forged = generate_jwt(&claims, "some-other-secret")?;

    let res = app.get("/admin/users", Some(&forged)).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Invalid or expired token");

    Ok(())
}

