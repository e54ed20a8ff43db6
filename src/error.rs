use std::path::PathBuf;

/// Library-level structured errors for xget.
///
/// Conversion itself never fails with an error: unsupported or malformed input
/// is reported through [`crate::convert::ConvertResult`]. These variants cover
/// configuration loading and rule compilation.
#[derive(Debug, thiserror::Error)]
pub enum XgetError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Mutually exclusive options: {option1} and {option2}")]
	MutuallyExclusive { option1: String, option2: String },

	#[error("Invalid rule {id:?}: {reason}")]
	InvalidRule { id: String, reason: String },

	#[error("Duplicate platform rule id: {id}")]
	DuplicateRuleId { id: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using XgetError.
pub type Result<T> = std::result::Result<T, XgetError>;
