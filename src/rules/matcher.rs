use crate::catalog::types::{PlatformRule, RuleMatcher};
use crate::error::{Result, XgetError};
use regex::Regex;
use url::Url;

/// Whether `hostname` is accepted by the host entry `entry`.
///
/// Accepted when equal, or when `hostname` ends with `"." + entry`. A bare
/// substring never matches: `notreallyexample.com` is not `example.com`.
pub fn host_accepted(hostname: &str, entry: &str) -> bool {
	match hostname.strip_suffix(entry) {
		Some("") => true,
		Some(rest) => rest.ends_with('.'),
		None => false,
	}
}

impl RuleMatcher {
	/// Evaluate the predicate against a parsed URL.
	pub fn holds(&self, url: &Url) -> bool {
		let path = url.path();
		match self {
			RuleMatcher::PathPrefix {
				prefix,
				case_insensitive: true,
			} => path
				.to_ascii_lowercase()
				.starts_with(&prefix.to_ascii_lowercase()),
			RuleMatcher::PathPrefix { prefix, .. } => path.starts_with(prefix.as_str()),
			RuleMatcher::PathPattern(regex) => regex.is_match(path),
		}
	}
}

impl PlatformRule {
	/// Check whether any of this rule's host entries accepts `hostname`.
	pub fn accepts_host(&self, hostname: &str) -> bool {
		self.hosts
			.iter()
			.any(|entry| host_accepted(hostname, entry))
	}

	/// Check if this rule matches the given URL.
	pub fn matches(&self, url: &Url) -> bool {
		let Some(hostname) = url.host_str() else {
			return false;
		};

		if !self.accepts_host(hostname) {
			return false;
		}

		// Host matched; a predicate, if present, must also hold
		match self.matcher {
			Some(ref matcher) => matcher.holds(url),
			None => true,
		}
	}
}

/// Compile a regex pattern string.
pub fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| XgetError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

/// Find the first matching rule for a given URL.
///
/// Selection is purely by table order: no scoring, no best-match heuristic.
pub fn find_matching_rule<'a>(rules: &'a [PlatformRule], url: &Url) -> Option<&'a PlatformRule> {
	let matched = rules.iter().find(|rule| rule.matches(url));

	match matched {
		Some(rule) => tracing::debug!(rule = %rule.id, host = ?url.host_str(), "platform matched"),
		None => tracing::debug!(host = ?url.host_str(), "no platform matched"),
	}

	matched
}
