use thiserror::Error;

/// Errors returned by the checked serialization API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
	/// Output buffer cannot hold the serialized value.
	#[error("buffer too small: needed {needed} units, only {available} available")]
	BufferTooSmall { needed: usize, available: usize },
}
