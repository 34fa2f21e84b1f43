mod error;
pub mod token;
pub mod values;

pub use error::{Error, Result};
pub use token::AccessToken;

use std::sync::Mutex;

use time::OffsetDateTime;

use hireboard_config::SheetsConfig;

/// Sheets API handle that caches the service account access token between
/// calls. The lock is never held across an await; a token refresh racing
/// another request at worst fetches twice and keeps the later token.
pub struct SheetsClient {
	cfg: SheetsConfig,
	token: Mutex<Option<AccessToken>>,
}

impl SheetsClient {
	pub fn new(cfg: SheetsConfig) -> Self {
		Self { cfg, token: Mutex::new(None) }
	}

	pub async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
		let bearer = self.bearer().await?;

		values::get_values(&self.cfg, &bearer, range).await
	}

	pub async fn update_values(&self, range: &str, rows: &[Vec<String>]) -> Result<()> {
		let bearer = self.bearer().await?;

		values::update_values(&self.cfg, &bearer, range, rows).await
	}

	async fn bearer(&self) -> Result<String> {
		let now = OffsetDateTime::now_utc();

		{
			let cached = self.token.lock().unwrap_or_else(|err| err.into_inner());

			if let Some(token) = cached.as_ref()
				&& token.is_fresh(now)
			{
				return Ok(token.token.clone());
			}
		}

		let fetched = token::fetch_access_token(&self.cfg).await?;
		let bearer = fetched.token.clone();

		*self.token.lock().unwrap_or_else(|err| err.into_inner()) = Some(fetched);

		Ok(bearer)
	}
}
