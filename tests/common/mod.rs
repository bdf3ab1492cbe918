#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use serde_json::{json, Value};

use meat_freshness_api::config::AppConfig;
use meat_freshness_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// One server per test, each on its own port with a private in-memory store.
pub struct TestApp {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        let config = AppConfig::for_tests();
        assert_eq!(config.security.jwt_secret, TEST_SECRET);
        Self::spawn_with(config).await
    }

    /// Same as `spawn` with a caller-adjusted configuration.
    pub async fn spawn_with(mut config: AppConfig) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);
        config.server.port = port;

        let state = AppState::initialize(config)
            .await
            .context("failed to initialize test state")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, meat_freshness_api::app(state)).await {
                tracing::error!("test server exited: {}", e);
            }
        });

        let app = Self {
            port,
            base_url,
            client: reqwest::Client::new(),
        };
        app.wait_ready(Duration::from_secs(10)).await?;
        Ok(app)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value, token: Option<&str>) -> Result<Response> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    pub async fn signup(&self, username: &str, password: &str, user_type: &str) -> Result<i64> {
        let res = self
            .post_json(
                "/signup",
                &json!({ "username": username, "password": password, "user_type": user_type }),
                None,
            )
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "signup failed: {}", res.status());
        let body: Value = res.json().await?;
        body["id"].as_i64().context("signup response without id")
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let res = self
            .post_json("/login", &json!({ "username": username, "password": password }), None)
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());
        let body: Value = res.json().await?;
        body["access_token"]
            .as_str()
            .map(str::to_string)
            .context("login response without access_token")
    }

    /// Sign up and log in, returning (user id, token).
    pub async fn user(&self, username: &str, user_type: &str) -> Result<(i64, String)> {
        let password = format!("{}-password", username);
        let id = self.signup(username, &password, user_type).await?;
        let token = self.login(username, &password).await?;
        Ok((id, token))
    }

    /// A manager with one registered shop, returning the shop id.
    pub async fn shop(&self, manager: &str) -> Result<i64> {
        let (_, token) = self.user(manager, "manager").await?;
        let res = self
            .post_json(
                "/register_shop",
                &json!({ "name": format!("{} meats", manager), "location": "Main St" }),
                Some(&token),
            )
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "register_shop failed: {}", res.status());
        let body: Value = res.json().await?;
        body["id"].as_i64().context("register_shop response without id")
    }

    pub async fn store_reading(
        &self,
        token: &str,
        shop_id: i64,
        part: &str,
        impedance: f64,
    ) -> Result<Response> {
        self.post_json(
            "/meat_data",
            &reading(shop_id, part, impedance),
            Some(token),
        )
        .await
    }
}

pub fn reading(shop_id: i64, part: &str, impedance: f64) -> Value {
    json!({
        "impedance": impedance,
        "purchase_date": "2024-05-01T10:00:00Z",
        "butcher_shop_id": shop_id,
        "part": part
    })
}
