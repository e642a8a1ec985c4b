//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The `language` value is not a supported client language code.
	#[error("invalid client language: {0} (expected one of ja, en, de, fr)")]
	InvalidLanguage(String),

	/// A value has the wrong type or does not fit its field.
	#[error("invalid value for '{key}': {reason}")]
	InvalidValue {
		/// The KDL key.
		key: String,
		/// Why the value was rejected.
		reason: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal warning during configuration parsing.
///
/// These warnings are collected during parsing and reported to the user,
/// but do not prevent the configuration from being loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A key that no section understands; it is ignored.
	UnknownKey {
		/// The KDL key.
		key: String,
		/// Where the key was found (e.g., "layout block").
		found_in: &'static str,
	},
	/// A key given more than once; the last occurrence wins.
	DuplicateKey {
		/// The KDL key.
		key: String,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownKey { key, found_in } => {
				write!(f, "unknown key '{key}' in {found_in} will be ignored")
			}
			ConfigWarning::DuplicateKey { key } => {
				write!(f, "'{key}' is set more than once; the last value is used")
			}
		}
	}
}
