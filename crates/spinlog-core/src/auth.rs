//! Refresh-token exchange against the Spotify accounts service.

use serde::Deserialize;
use tracing::debug;

use crate::config::Credentials;
use crate::error::{Error, Result};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Exchange the long-lived refresh token for a short-lived access token.
///
/// The access token is scoped to one run and never persisted. Any failure
/// is fatal; there is no retry.
pub fn exchange_refresh_token(agent: &ureq::Agent, credentials: &Credentials) -> Result<String> {
    let mut response = agent
        .post(TOKEN_URL)
        .send_form([
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .map_err(|e| Error::TokenExchange(e.to_string()))?;

    let token: TokenResponse = response
        .body_mut()
        .read_json()
        .map_err(|e| Error::TokenExchange(e.to_string()))?;

    debug!("Token exchange succeeded");

    token
        .access_token
        .ok_or_else(|| Error::TokenExchange("response missing access_token".to_string()))
}
