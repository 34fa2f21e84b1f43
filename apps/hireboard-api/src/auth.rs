use axum::{
	Json,
	extract::{Request, State},
	http::StatusCode,
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "auth_token";
pub const SESSION_VALUE: &str = "authenticated_session";
const SESSION_MAX_AGE: time::Duration = time::Duration::days(7);

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
	pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// Matches the submitted secret against the configured one and hands out the
/// session cookie. One shared secret; no accounts, no hashing, no lockout.
pub async fn login(
	State(state): State<AppState>,
	jar: CookieJar,
	Json(payload): Json<LoginRequest>,
) -> Response {
	if payload.password != *state.dashboard_password {
		return (
			StatusCode::UNAUTHORIZED,
			Json(LoginResponse {
				success: false,
				message: Some("Invalid password".to_string()),
			}),
		)
			.into_response();
	}

	let cookie = Cookie::build((SESSION_COOKIE, SESSION_VALUE))
		.http_only(true)
		.same_site(SameSite::Lax)
		.max_age(SESSION_MAX_AGE)
		.path("/")
		.build();

	(jar.add(cookie), Json(LoginResponse { success: true, message: None })).into_response()
}

/// Two-state gate: anonymous requests to private paths bounce to the login
/// page, and an already authenticated visit to the login page bounces home.
pub async fn gate(jar: CookieJar, request: Request, next: Next) -> Response {
	let path = request.uri().path();
	let authenticated = jar
		.get(SESSION_COOKIE)
		.map(|cookie| cookie.value() == SESSION_VALUE)
		.unwrap_or(false);

	if !authenticated && !is_public(path) {
		return Redirect::temporary("/login").into_response();
	}
	if authenticated && path == "/login" {
		return Redirect::temporary("/").into_response();
	}

	next.run(request).await
}

fn is_public(path: &str) -> bool {
	path == "/login"
		|| path == "/health"
		|| path.starts_with("/api/auth")
		|| path.starts_with("/assets/")
		|| path.contains('.')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn public_paths_skip_the_gate() {
		assert!(is_public("/login"));
		assert!(is_public("/api/auth/login"));
		assert!(is_public("/assets/app.js"));
		assert!(is_public("/favicon.ico"));
		assert!(is_public("/health"));
	}

	#[test]
	fn private_paths_require_a_session() {
		assert!(!is_public("/"));
		assert!(!is_public("/api/leads"));
		assert!(!is_public("/api/trends"));
	}
}
