pub mod cache;
pub mod list;
pub mod trends;
pub mod update;

use std::{future::Future, pin::Pin, sync::Arc};

pub use cache::{CACHE_TTL, Clock, LeadCache, SystemClock};
pub use trends::{TrendsRequest, TrendsResponse};
pub use update::{UpdateLeadRequest, UpdateLeadResponse};

use hireboard_config::Config;
use hireboard_sheets::SheetsClient;

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam over the spreadsheet API so tests run against an in-memory grid.
pub trait SheetsApi
where
	Self: Send + Sync,
{
	fn get_values<'a>(
		&'a self,
		range: &'a str,
	) -> BoxFuture<'a, hireboard_sheets::Result<Vec<Vec<String>>>>;

	fn update_values<'a>(
		&'a self,
		range: &'a str,
		rows: Vec<Vec<String>>,
	) -> BoxFuture<'a, hireboard_sheets::Result<()>>;
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	Upstream { message: String },
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "{message}"),
			Self::Upstream { message } => write!(f, "{message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<hireboard_sheets::Error> for ServiceError {
	fn from(err: hireboard_sheets::Error) -> Self {
		Self::Upstream { message: err.to_string() }
	}
}

struct DefaultSheets {
	client: SheetsClient,
}

impl SheetsApi for DefaultSheets {
	fn get_values<'a>(
		&'a self,
		range: &'a str,
	) -> BoxFuture<'a, hireboard_sheets::Result<Vec<Vec<String>>>> {
		Box::pin(self.client.get_values(range))
	}

	fn update_values<'a>(
		&'a self,
		range: &'a str,
		rows: Vec<Vec<String>>,
	) -> BoxFuture<'a, hireboard_sheets::Result<()>> {
		Box::pin(async move { self.client.update_values(range, &rows).await })
	}
}

pub struct LeadService {
	pub cfg: Config,
	pub sheets: Arc<dyn SheetsApi>,
	pub cache: LeadCache,
}

impl LeadService {
	pub fn new(cfg: Config) -> Self {
		let client = SheetsClient::new(cfg.sheets.clone());

		Self {
			cfg,
			sheets: Arc::new(DefaultSheets { client }),
			cache: LeadCache::new(Arc::new(SystemClock)),
		}
	}

	pub fn with_sheets(cfg: Config, sheets: Arc<dyn SheetsApi>, clock: Arc<dyn Clock>) -> Self {
		Self { cfg, sheets, cache: LeadCache::new(clock) }
	}

	pub(crate) fn range(&self, block: &str) -> String {
		format!("{}!{block}", self.cfg.sheets.tab)
	}
}
