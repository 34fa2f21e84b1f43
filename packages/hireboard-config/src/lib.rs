mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Auth, Config, Service, SheetsConfig};

use std::env;

const DEFAULT_HTTP_BIND: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SHEET_TAB: &str = "CRM";
const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub fn from_env() -> Result<Config> {
	from_lookup(|name| env::var(name).ok())
}

pub fn from_lookup<F>(lookup: F) -> Result<Config>
where
	F: Fn(&str) -> Option<String>,
{
	let timeout_ms = match optional(&lookup, "SHEETS_TIMEOUT_MS") {
		Some(raw) => raw.parse().map_err(|_| Error::Validation {
			message: "SHEETS_TIMEOUT_MS must be an integer millisecond count.".to_string(),
		})?,
		None => DEFAULT_TIMEOUT_MS,
	};
	let mut cfg = Config {
		service: Service {
			http_bind: optional(&lookup, "HTTP_BIND")
				.unwrap_or_else(|| DEFAULT_HTTP_BIND.to_string()),
			log_level: optional(&lookup, "LOG_LEVEL")
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		},
		auth: Auth { dashboard_password: required(&lookup, "DASHBOARD_PASSWORD")? },
		sheets: SheetsConfig {
			client_email: required(&lookup, "GOOGLE_CLIENT_EMAIL")?,
			private_key: required(&lookup, "GOOGLE_PRIVATE_KEY")?,
			spreadsheet_id: required(&lookup, "SHEET_ID")?,
			tab: optional(&lookup, "SHEET_TAB").unwrap_or_else(|| DEFAULT_SHEET_TAB.to_string()),
			api_base: optional(&lookup, "SHEETS_API_BASE")
				.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
			token_uri: optional(&lookup, "GOOGLE_TOKEN_URI")
				.unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
			timeout_ms,
		},
	};

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if !cfg.sheets.private_key.contains("-----BEGIN") {
		return Err(Error::Validation {
			message: "GOOGLE_PRIVATE_KEY must be a PEM-encoded private key.".to_string(),
		});
	}
	if cfg.sheets.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "SHEETS_TIMEOUT_MS must be greater than zero.".to_string(),
		});
	}
	if cfg.sheets.tab.contains('!') {
		return Err(Error::Validation {
			message: "SHEET_TAB must be a bare tab name without a range.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	// Deployment environments store the PEM key on one line with escaped
	// newlines; the signer needs the real thing.
	if cfg.sheets.private_key.contains("\\n") {
		cfg.sheets.private_key = cfg.sheets.private_key.replace("\\n", "\n");
	}
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String>
where
	F: Fn(&str) -> Option<String>,
{
	optional(lookup, name).ok_or(Error::MissingVar { name })
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
	F: Fn(&str) -> Option<String>,
{
	lookup(name).map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
