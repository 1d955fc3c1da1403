// src/auth.rs

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::AppState;

pub const REALM: &str = r#"Basic realm="Login Required""#;

/// Decides whether a username/password pair may access the API.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single user whose password is kept only as a SHA-256 digest.
#[derive(Clone)]
pub struct StaticCredential {
    username: String,
    username_hash: Vec<u8>,
    password_hash: Vec<u8>,
}

impl StaticCredential {
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        let username = username.into();
        Self {
            username_hash: digest(&username),
            username,
            password_hash: digest(password),
        }
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredential")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier for StaticCredential {
    fn verify(&self, username: &str, password: &str) -> bool {
        // both digests are always compared
        let user_ok = constant_time_eq(&digest(username), &self.username_hash);
        let pass_ok = constant_time_eq(&digest(password), &self.password_hash);
        user_ok & pass_ok
    }
}

fn digest(value: &str) -> Vec<u8> {
    Sha256::digest(value.as_bytes()).to_vec()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}

/// Credentials carried by an `Authorization: Basic ...` header.
#[derive(Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// `None` for a missing, non-Basic or undecodable header.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        Self::parse(value)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// Middleware rejecting requests without valid Basic credentials.
pub async fn require_basic_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match BasicCredentials::from_headers(req.headers()) {
        Some(creds) if state.credentials.verify(&creds.username, &creds.password) => {
            next.run(req).await
        }
        Some(creds) => {
            warn!(user = %creds.username, path = %req.uri().path(), "rejected credentials");
            challenge()
        }
        None => challenge(),
    }
}

fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, REALM)],
        "Unauthorized Access",
    )
        .into_response()
}
