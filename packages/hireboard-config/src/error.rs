pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Missing required environment variable {name}.")]
	MissingVar { name: &'static str },
	#[error("{message}")]
	Validation { message: String },
}
