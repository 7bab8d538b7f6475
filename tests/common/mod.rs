// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process mock of the Circle Web3 Services endpoints.
//!
//! The mock holds an RSA key pair, serves its public half from
//! `/config/entity/publicKey` and decrypts every `entitySecretCiphertext` it
//! receives, so tests can check what was actually sent.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use circle_provider::circle::CircleClient;
use circle_provider::config::{ApiKey, EntitySecret};
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::{Oaep, RsaPrivateKey};
use serde_json::{json, Value};
use sha2::Sha256;

pub const API_KEY: &str = "TEST_API_KEY:abc123:def456";
pub const API_PREFIX: &str = "/v1/w3s";

pub fn entity_secret_bytes() -> Vec<u8> {
    (0u8..32).map(|b| b.wrapping_mul(7).wrapping_add(3)).collect()
}

pub fn entity_secret() -> EntitySecret {
    EntitySecret::from_bytes(entity_secret_bytes()).unwrap()
}

fn private_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut rand::rngs::OsRng, 2048).unwrap())
}

/// Failure injection and response shaping.
#[derive(Debug, Clone, Default)]
pub struct Behavior {
    pub fail_public_key: bool,
    pub fail_wallet_set: bool,
    pub fail_wallets: bool,
    pub empty_wallet_set_id: bool,
    /// Circle chain identifier reported for every created wallet instead of
    /// the requested one.
    pub wallet_chain_override: Option<String>,
    /// Answer wallet creation with a wallet for the first requested chain only.
    pub first_chain_only: bool,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: &'static str,
    pub authorization: Option<String>,
    pub body: Value,
}

impl RecordedRequest {
    /// Decrypt the `entitySecretCiphertext` field with the mock's key.
    pub fn decrypted_secret(&self) -> Vec<u8> {
        let encoded = self.body["entitySecretCiphertext"]
            .as_str()
            .expect("ciphertext field");
        let raw = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .expect("base64 ciphertext");
        private_key()
            .decrypt(Oaep::new::<Sha256>(), &raw)
            .expect("OAEP-SHA256 ciphertext")
    }
}

/// Wallet handed out by the mock, as reported in the response.
#[derive(Debug, Clone)]
pub struct CreatedWallet {
    pub blockchain: String,
    pub address: String,
}

struct MockState {
    behavior: Behavior,
    public_key_pem: String,
    requests: Mutex<Vec<RecordedRequest>>,
    wallets: Mutex<Vec<CreatedWallet>>,
    counter: AtomicU64,
}

impl MockState {
    fn record(&self, method: &'static str, path: &'static str, headers: &HeaderMap, body: Value) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path,
            authorization,
            body,
        });
    }

    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub struct MockCircle {
    pub base_url: String,
    state: Arc<MockState>,
    server: tokio::task::JoinHandle<()>,
}

impl MockCircle {
    pub async fn start() -> Self {
        Self::start_with(Behavior::default()).await
    }

    pub async fn start_with(behavior: Behavior) -> Self {
        let public_key_pem = private_key()
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)
            .unwrap();
        let state = Arc::new(MockState {
            behavior,
            public_key_pem,
            requests: Mutex::new(Vec::new()),
            wallets: Mutex::new(Vec::new()),
            counter: AtomicU64::new(0),
        });

        let routes = Router::new()
            .route("/config/entity/publicKey", get(public_key))
            .route("/developer/walletSets", post(create_wallet_set))
            .route("/developer/wallets", post(create_wallets))
            .route("/contracts/query", post(query_contract));
        let app = Router::new()
            .nest(API_PREFIX, routes)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
            server,
        }
    }

    pub fn client(&self) -> CircleClient {
        CircleClient::with_base_url(&ApiKey::new(API_KEY), &self.base_url, Duration::from_secs(5))
            .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn created_wallets(&self) -> Vec<CreatedWallet> {
        self.state.wallets.lock().unwrap().clone()
    }

    /// Address of the last wallet the mock created for a Circle chain id.
    pub fn created_address(&self, blockchain: &str) -> Option<String> {
        self.created_wallets()
            .into_iter()
            .rev()
            .find(|w| w.blockchain == blockchain)
            .map(|w| w.address)
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

impl Drop for MockCircle {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn circle_error(status: StatusCode, code: i64, message: &str) -> Response {
    (status, Json(json!({ "code": code, "message": message }))).into_response()
}

async fn public_key(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("GET", "/config/entity/publicKey", &headers, Value::Null);
    if state.behavior.fail_public_key {
        return circle_error(StatusCode::UNAUTHORIZED, 401, "Malformed authorization.");
    }
    Json(json!({ "data": { "publicKey": state.public_key_pem } })).into_response()
}

async fn create_wallet_set(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let name = body["name"].clone();
    state.record("POST", "/developer/walletSets", &headers, body);
    if state.behavior.fail_wallet_set {
        return circle_error(StatusCode::BAD_REQUEST, 156004, "entity secret ciphertext is invalid");
    }
    let id = if state.behavior.empty_wallet_set_id {
        String::new()
    } else {
        format!("0189bc61-7fe4-70f3-8a1b-{:012x}", state.next())
    };
    Json(json!({
        "data": {
            "walletSet": {
                "id": id,
                "custodyType": "DEVELOPER",
                "name": name,
                "createDate": "2026-01-20T10:00:00Z",
                "updateDate": "2026-01-20T10:00:00Z"
            }
        }
    }))
    .into_response()
}

async fn create_wallets(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST", "/developer/wallets", &headers, body.clone());
    if state.behavior.fail_wallets {
        return circle_error(StatusCode::INTERNAL_SERVER_ERROR, 1, "Something went wrong.");
    }

    let wallet_set_id = body["walletSetId"].clone();
    let count = body["count"].as_u64().unwrap_or(1);
    let mut requested = body["blockchains"].as_array().cloned().unwrap_or_default();
    if state.behavior.first_chain_only {
        requested.truncate(1);
    }
    let mut wallets = Vec::new();
    for blockchain in requested {
        for _ in 0..count {
            let blockchain = match &state.behavior.wallet_chain_override {
                Some(chain) => Value::String(chain.clone()),
                None => blockchain.clone(),
            };
            let n = state.next();
            let address = format!("0x{n:040x}");
            state.wallets.lock().unwrap().push(CreatedWallet {
                blockchain: blockchain.as_str().unwrap_or_default().to_string(),
                address: address.clone(),
            });
            wallets.push(json!({
                "id": format!("wallet-{n}"),
                "state": "LIVE",
                "walletSetId": wallet_set_id,
                "custodyType": "DEVELOPER",
                "address": address,
                "blockchain": blockchain,
                "accountType": "SCA",
                "updateDate": "2026-01-20T10:00:01Z",
                "createDate": "2026-01-20T10:00:01Z"
            }));
        }
    }
    Json(json!({ "data": { "wallets": wallets } })).into_response()
}

async fn query_contract(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST", "/contracts/query", &headers, body);
    Json(json!({
        "data": {
            "outputData": "0x0000000000000000000000000000000000000000000000000000000000000001",
            "outputValues": [1]
        }
    }))
    .into_response()
}
