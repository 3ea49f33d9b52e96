use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why the roster data could not be made available. Any one document failing fails the whole load.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read data file at {path:?}: {source}")]
	Read { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse data file at {path:?}: {source}")]
	Parse { path: PathBuf, source: serde_json::Error },
}
impl Error {
	pub fn path(&self) -> &std::path::Path {
		match self {
			Self::Read { path, .. } | Self::Parse { path, .. } => path,
		}
	}
}
