pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid configuration: {message}")]
	InvalidConfig { message: String },
	#[error("Backend error: {message}")]
	Backend { message: String },
	#[error(transparent)]
	Sources(#[from] seek_sources::Error),
}
impl From<regex::Error> for Error {
	fn from(err: regex::Error) -> Self {
		Self::InvalidConfig { message: err.to_string() }
	}
}
