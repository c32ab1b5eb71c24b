use std::sync::Arc;

use anyhow::{Context, Result};

use users_api::auth::TokenService;
use users_api::database::memory::MemoryStore;
use users_api::database::{NewUser, User, UserStore};
use users_api::{app, AppState};

pub const TEST_SECRET: &str = "gokuhijouhou";

/// One API instance over a fresh in-memory store.
///
/// Every test spawns its own server: cargo runs tests in a binary
/// concurrently, and a shared store would couple them.
pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryStore>,
    pub tokens: TokenService,
}

impl TestServer {
    /// Seed a user directly through the store, bypassing the HTTP surface.
    pub async fn seed_user(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let user = self
            .store
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        Ok(user)
    }

    /// Obtain a bearer token from the open /auth endpoint.
    pub async fn token(&self) -> Result<String> {
        let client = reqwest::Client::new();
        let body = client
            .get(format!("{}/auth", self.base_url))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        body.get("token")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string())
            .context("auth response missing token")
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    let store = Arc::new(MemoryStore::new());
    let tokens = TokenService::new(TEST_SECRET, 24);

    let state = AppState {
        store: store.clone(),
        tokens: tokens.clone(),
    };
    let router = app(state);

    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        users_api::serve(listener, router).await.expect("server");
    });

    Ok(TestServer {
        base_url,
        store,
        tokens,
    })
}
