use std::time::Duration;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use hireboard_config::SheetsConfig;

use crate::{Error, Result};

const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3_600;
/// Tokens within this many seconds of expiry are refreshed early so an
/// in-flight request never carries a token that dies mid-call.
const EXPIRY_SLACK_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
	iss: &'a str,
	scope: &'a str,
	aud: &'a str,
	iat: i64,
	exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
	access_token: String,
	#[serde(default = "default_expires_in")]
	expires_in: i64,
}

fn default_expires_in() -> i64 {
	3_600
}

#[derive(Debug, Clone)]
pub struct AccessToken {
	pub token: String,
	pub expires_at: OffsetDateTime,
}

impl AccessToken {
	pub fn is_fresh(&self, now: OffsetDateTime) -> bool {
		now + time::Duration::seconds(EXPIRY_SLACK_SECS) < self.expires_at
	}
}

/// Exchanges an RS256-signed service account assertion for a bearer token at
/// the configured token endpoint.
pub async fn fetch_access_token(cfg: &SheetsConfig) -> Result<AccessToken> {
	let now = OffsetDateTime::now_utc();
	let assertion = sign_assertion(cfg, now)?;
	let client =
		reqwest::Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let response = client
		.post(&cfg.token_uri)
		.form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
		.send()
		.await?;
	let status = response.status();

	if !status.is_success() {
		let body = response.text().await.unwrap_or_default();

		return Err(Error::TokenRejected { status: status.as_u16(), body });
	}

	let token: TokenResponse = response.json().await?;

	Ok(AccessToken {
		token: token.access_token,
		expires_at: now + time::Duration::seconds(token.expires_in),
	})
}

fn sign_assertion(cfg: &SheetsConfig, now: OffsetDateTime) -> Result<String> {
	let issued_at = now.unix_timestamp();
	let claims = Claims {
		iss: &cfg.client_email,
		scope: SCOPE,
		aud: &cfg.token_uri,
		iat: issued_at,
		exp: issued_at + ASSERTION_LIFETIME_SECS,
	};
	let key = EncodingKey::from_rsa_pem(cfg.private_key.as_bytes())?;

	jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key).map_err(Error::from)
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;

	#[test]
	fn tokens_near_expiry_are_stale() {
		let token = AccessToken {
			token: "t".to_string(),
			expires_at: datetime!(2026-03-10 12:00 UTC),
		};

		assert!(token.is_fresh(datetime!(2026-03-10 11:58 UTC)));
		assert!(!token.is_fresh(datetime!(2026-03-10 11:59:30 UTC)));
		assert!(!token.is_fresh(datetime!(2026-03-10 12:01 UTC)));
	}

	#[test]
	fn token_response_defaults_the_lifetime() {
		let parsed: TokenResponse =
			serde_json::from_value(serde_json::json!({ "access_token": "abc" }))
				.expect("Failed to parse token response.");

		assert_eq!(parsed.access_token, "abc");
		assert_eq!(parsed.expires_in, 3_600);
	}
}
