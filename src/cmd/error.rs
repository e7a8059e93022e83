use thiserror::Error;
use unserialize::wire::DecodeError;

/// CLI-local result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input could not be read.
	#[error("io: {path}: {source}")]
	Io {
		/// Input label (`<stdin>` for `-`).
		path: String,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Input exceeded `--max-bytes`.
	#[error("input exceeds --max-bytes limit of {limit} bytes")]
	InputTooLarge {
		/// Configured ceiling.
		limit: usize,
	},
	/// Decoder rejected the input.
	#[error("decode: {0}")]
	Decode(#[from] DecodeError),
	/// JSON rendering failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
