pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to sign the service account assertion: {0}.")]
	Sign(#[from] jsonwebtoken::errors::Error),
	#[error("Sheets API transport failure: {0}.")]
	Transport(#[from] reqwest::Error),
	#[error("Token endpoint returned status {status}: {body}")]
	TokenRejected { status: u16, body: String },
	#[error("Sheets API returned status {status}: {body}")]
	Api { status: u16, body: String },
}
