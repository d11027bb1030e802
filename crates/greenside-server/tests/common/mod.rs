use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{Value, json};

use greenside_core::store::MemoryStore;
use greenside_server::build_app_with_store;
use greenside_server::config::ServerConfig;

pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server over an in-memory store seeded with the default
    /// courses.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    /// Start a test server whose store starts with no courses at all.
    pub async fn empty() -> Self {
        let config = ServerConfig {
            seed_default_courses: false,
            ..ServerConfig::default()
        };
        Self::from_config(config).await
    }

    async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app_with_store(config, Box::new(MemoryStore::new())).unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            client: reqwest::Client::new(),
            _shutdown: handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Create a course from `(par, hcp)` pairs and return its JSON.
    pub async fn create_course(&self, name: &str, holes: &[(u8, u8)]) -> Value {
        let holes: Vec<Value> = holes
            .iter()
            .map(|&(par, hcp)| json!({ "par": par, "hcp": hcp }))
            .collect();
        let resp = self
            .client
            .post(self.url("/api/v1/courses"))
            .json(&json!({ "name": name, "holes": holes }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        resp.json().await.unwrap()
    }

    /// Start a game with the named players and stroke matrix, returning its id.
    pub async fn create_game(&self, course_id: u64, names: &[&str], strokes: Value) -> u64 {
        let players: Vec<Value> = names
            .iter()
            .map(|name| json!({ "name": name, "handicap": 0 }))
            .collect();
        let resp = self
            .client
            .post(self.url("/api/v1/games"))
            .json(&json!({
                "courseId": course_id,
                "players": players,
                "strokesGiven": strokes,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        let body: Value = resp.json().await.unwrap();
        body["id"].as_u64().unwrap()
    }

    /// Enter a score as typed and return the raw response.
    pub async fn put_score(
        &self,
        game: u64,
        hole: usize,
        player: usize,
        value: &str,
    ) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/api/v1/games/{game}/scores/{hole}/{player}")))
            .json(&json!({ "value": value }))
            .send()
            .await
            .unwrap()
    }
}
