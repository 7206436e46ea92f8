// Axum request handlers — translate game API requests into engine operations.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

use crate::game::{AristocratGame, CipherToken};

/// Shared map of variant name to its engine. Each engine sits behind its
/// own mutex: `generate_cipher` replaces round state non-atomically, so
/// concurrent requests for one variant must be serialized.
pub type VariantMap = Arc<RwLock<HashMap<String, Arc<Mutex<AristocratGame>>>>>;

pub struct GameServer {
    port: u16,
    variants: VariantMap,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl GameServer {
    /// Start the API server on the given port (0 for an OS-assigned one),
    /// returning a handle.
    pub async fn start(variants: VariantMap, port: u16) -> Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        let port = listener.local_addr()?.port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let app = Router::new()
            .route("/api/{variant}/new-round", get(new_round_handler))
            .route("/api/{variant}/check", post(check_handler))
            .with_state(variants.clone());

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        Ok(Self {
            port,
            variants,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Build the API base URL for a variant.
    pub fn url_for_variant(&self, name: &str) -> String {
        format!("http://127.0.0.1:{}/api/{}", self.port, name)
    }

    /// Get a reference to the variant map.
    pub fn variants(&self) -> &VariantMap {
        &self.variants
    }

    /// Shutdown the server gracefully.
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, Serialize)]
struct NewRoundResponse {
    tokens: Vec<String>,
    freqs: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
struct CheckRequest {
    #[serde(default)]
    guess: String,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    correct: bool,
    answer: String,
}

fn lookup_variant(variants: &VariantMap, name: &str) -> Option<Arc<Mutex<AristocratGame>>> {
    let map = variants.read();
    map.get(name).cloned()
}

/// GET /api/{variant}/new-round — generate a round and return its tokens.
async fn new_round_handler(
    State(variants): State<VariantMap>,
    Path(variant): Path<String>,
) -> Response {
    let game = match lookup_variant(&variants, &variant) {
        Some(g) => g,
        None => {
            return (StatusCode::NOT_FOUND, "unknown game variant").into_response();
        }
    };

    let mut game = game.lock();
    game.generate_cipher();

    let tokens: Vec<String> = game.cipher_tokens().iter().map(CipherToken::rendered).collect();
    let freqs = game.token_frequencies().to_vec();

    debug!("new round variant={} tokens={}", variant, tokens.len());
    Json(NewRoundResponse { tokens, freqs }).into_response()
}

/// POST /api/{variant}/check — check a guess and reveal the answer.
async fn check_handler(
    State(variants): State<VariantMap>,
    Path(variant): Path<String>,
    Json(request): Json<CheckRequest>,
) -> Response {
    let game = match lookup_variant(&variants, &variant) {
        Some(g) => g,
        None => {
            return (StatusCode::NOT_FOUND, "unknown game variant").into_response();
        }
    };

    let game = game.lock();
    let correct = game.check_guess(&request.guess);
    let answer = game.plaintext().to_string();

    debug!("guess checked variant={} correct={}", variant, correct);
    Json(CheckResponse { correct, answer }).into_response()
}
