//! Conversion of a raw input URL into an accelerated URL under a base domain.
//!
//! The pipeline is normalize, parse, match, transform, assemble. It performs no
//! I/O and never returns an error: every failure mode is a [`ConvertResult`]
//! variant.

use crate::catalog::{Catalog, PlatformRule};
use crate::normalize::normalize;
use crate::rules::{find_matching_rule, transform_path};
use serde::Serialize;
use url::Url;

/// Base domain used when nothing else is configured.
pub const DEFAULT_BASE: &str = "https://xget.xi-xu.me";

/// Message for input that cannot be parsed as an absolute URL.
pub const MALFORMED_URL_MESSAGE: &str = "Invalid URL format, make sure it includes http(s)://";

/// Message for a well-formed URL that no platform rule accepts.
pub const UNSUPPORTED_PLATFORM_MESSAGE: &str = "No supported platform matched this URL";

/// Outcome of one conversion attempt.
#[derive(Debug, Clone)]
pub enum ConvertResult<'c> {
	/// Nothing was entered. Not an error; callers show no status.
	Empty,

	/// The normalized input could not be parsed as a URL.
	Malformed { message: String },

	/// The URL parsed, but no rule accepted it.
	Unsupported { input: Url, message: String },

	/// A rule matched and an output URL was produced.
	Converted {
		input: Url,
		platform: &'c PlatformRule,
		output: String,
	},
}

impl<'c> ConvertResult<'c> {
	/// Whether a platform matched and an output was produced.
	pub fn ok(&self) -> bool {
		matches!(self, ConvertResult::Converted { .. })
	}

	/// The parsed input, present whenever parsing succeeded.
	pub fn input(&self) -> Option<&Url> {
		match self {
			ConvertResult::Unsupported { input, .. } | ConvertResult::Converted { input, .. } => {
				Some(input)
			}
			ConvertResult::Empty | ConvertResult::Malformed { .. } => None,
		}
	}

	/// The matched rule.
	pub fn platform(&self) -> Option<&'c PlatformRule> {
		match self {
			ConvertResult::Converted { platform, .. } => Some(*platform),
			_ => None,
		}
	}

	/// The rewritten URL.
	pub fn output(&self) -> Option<&str> {
		match self {
			ConvertResult::Converted { output, .. } => Some(output.as_str()),
			_ => None,
		}
	}

	/// Explanation for a failed conversion. Empty for blank input and for
	/// successful conversions.
	pub fn message(&self) -> &str {
		match self {
			ConvertResult::Malformed { message } | ConvertResult::Unsupported { message, .. } => {
				message.as_str()
			}
			ConvertResult::Empty | ConvertResult::Converted { .. } => "",
		}
	}

	/// Whether the result should be shown as an error.
	pub fn is_error(&self) -> bool {
		matches!(
			self,
			ConvertResult::Malformed { .. } | ConvertResult::Unsupported { .. }
		)
	}

	/// Flat, serializable view of this result.
	pub fn report(&self, raw: &str) -> ConvertReport {
		ConvertReport {
			ok: self.ok(),
			raw: raw.to_string(),
			input: self.input().map(|url| url.to_string()),
			platform: self.platform().map(|rule| rule.id.clone()),
			name: self.platform().map(|rule| rule.name.clone()),
			prefix: self.platform().map(|rule| rule.prefix.clone()),
			output: self.output().map(str::to_string),
			message: self.message().to_string(),
		}
	}
}

/// Serializable summary of a [`ConvertResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
	pub ok: bool,
	pub raw: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub input: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub platform: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub prefix: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub output: Option<String>,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub message: String,
}

/// Strip a single trailing `/` from the base domain.
pub fn trim_base(base: &str) -> &str {
	base.strip_suffix('/').unwrap_or(base)
}

/// The URL's search component, `?` included, or `""` when absent or empty.
fn search(url: &Url) -> String {
	match url.query() {
		Some(query) if !query.is_empty() => format!("?{query}"),
		_ => String::new(),
	}
}

/// The URL's hash component, `#` included, or `""` when absent or empty.
fn hash(url: &Url) -> String {
	match url.fragment() {
		Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
		_ => String::new(),
	}
}

/// Convert `raw` into an accelerated URL rooted at `base`.
pub fn convert<'c>(catalog: &'c Catalog, raw: &str, base: &str) -> ConvertResult<'c> {
	let normalized = normalize(raw);
	if normalized.is_empty() {
		return ConvertResult::Empty;
	}

	let input = match Url::parse(&normalized) {
		Ok(url) => url,
		Err(err) => {
			tracing::debug!(input = %normalized, error = %err, "failed to parse URL");
			return ConvertResult::Malformed {
				message: MALFORMED_URL_MESSAGE.to_string(),
			};
		}
	};

	let Some(platform) = find_matching_rule(catalog.rules(), &input) else {
		return ConvertResult::Unsupported {
			input,
			message: UNSUPPORTED_PLATFORM_MESSAGE.to_string(),
		};
	};

	let suffix = transform_path(&input, platform);
	let output = format!(
		"{}/{}/{}{}{}",
		trim_base(base),
		platform.prefix,
		suffix,
		search(&input),
		hash(&input)
	);

	tracing::trace!(rule = %platform.id, %output, "converted");

	ConvertResult::Converted {
		input,
		platform,
		output,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_trim_base_strips_one_slash() {
		assert_eq!(trim_base("https://xget.xi-xu.me/"), "https://xget.xi-xu.me");
		assert_eq!(trim_base("https://xget.xi-xu.me"), "https://xget.xi-xu.me");
		assert_eq!(trim_base("https://x.example//"), "https://x.example/");
	}

	#[test]
	fn test_empty_input() {
		let catalog = Catalog::builtin();
		let result = convert(&catalog, "   ", DEFAULT_BASE);
		assert!(!result.ok());
		assert!(!result.is_error());
		assert_eq!(result.message(), "");
		assert!(result.input().is_none());
	}

	#[test]
	fn test_malformed_input_has_no_parsed_url() {
		let catalog = Catalog::builtin();
		let result = convert(&catalog, "https://exa mple.com/x", DEFAULT_BASE);
		assert!(!result.ok());
		assert!(result.is_error());
		assert_eq!(result.message(), MALFORMED_URL_MESSAGE);
		assert!(result.input().is_none());
		assert!(result.platform().is_none());
	}

	#[test]
	fn test_unsupported_input_keeps_parsed_url() {
		let catalog = Catalog::builtin();
		let result = convert(&catalog, "https://example.com/resource", DEFAULT_BASE);
		assert!(!result.ok());
		assert_eq!(result.message(), UNSUPPORTED_PLATFORM_MESSAGE);
		assert_eq!(result.input().unwrap().host_str(), Some("example.com"));
		assert!(result.output().is_none());
	}

	#[test]
	fn test_search_and_hash_are_carried() {
		let catalog = Catalog::builtin();
		let result = convert(
			&catalog,
			"https://github.com/xixu-me/Xget/blob/main/README.md?plain=1#L10",
			DEFAULT_BASE,
		);
		assert_eq!(
			result.output(),
			Some("https://xget.xi-xu.me/gh/xixu-me/Xget/blob/main/README.md?plain=1#L10")
		);
	}

	#[test]
	fn test_empty_search_and_hash_are_dropped() {
		let catalog = Catalog::builtin();
		let result = convert(&catalog, "https://pypi.org/simple/?#", DEFAULT_BASE);
		assert_eq!(result.output(), Some("https://xget.xi-xu.me/pypi/simple/"));
	}

	#[test]
	fn test_report() {
		let catalog = Catalog::builtin();
		let report = convert(&catalog, "github.com/xixu-me/Xget", DEFAULT_BASE)
			.report("github.com/xixu-me/Xget");
		assert!(report.ok);
		assert_eq!(report.platform.as_deref(), Some("github"));
		assert_eq!(report.name.as_deref(), Some("GitHub"));
		assert_eq!(report.prefix.as_deref(), Some("gh"));
		assert_eq!(report.input.as_deref(), Some("https://github.com/xixu-me/Xget"));
		assert!(report.message.is_empty());
	}
}
