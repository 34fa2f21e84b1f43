#[derive(Debug, Clone)]
pub struct Config {
	pub service: Service,
	pub auth: Auth,
	pub sheets: SheetsConfig,
}

#[derive(Debug, Clone)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct Auth {
	/// Shared secret every dashboard operator logs in with.
	pub dashboard_password: String,
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
	pub client_email: String,
	/// PEM-encoded service account key; literal `\n` escapes are expanded at load.
	pub private_key: String,
	pub spreadsheet_id: String,
	/// Sheet tab holding the lead rows.
	pub tab: String,
	pub api_base: String,
	pub token_uri: String,
	pub timeout_ms: u64,
}
