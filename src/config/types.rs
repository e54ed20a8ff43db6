use crate::catalog::{Catalog, PathTransform, PlatformRule, RuleMatcher};
use crate::error::{Result, XgetError};
use crate::rules::{compile_regex, host_accepted};
use serde::Deserialize;
use std::path::PathBuf;

/// Segment prepended for community hosts when a rule does not name one.
pub const DEFAULT_COMMUNITY_SEGMENT: &str = "community";

/// Top-level configuration from a `.xget.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory cascade here and jump to ~/.xget.toml.
	#[serde(default)]
	pub root: bool,

	/// Base domain that rewritten URLs are rooted at.
	#[serde(default)]
	pub base: Option<String>,

	/// Extra platform rules, checked before the built-in table.
	/// First matching rule wins.
	#[serde(default)]
	pub rules: Vec<RuleConfig>,
}

/// A user-defined platform rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RuleConfig {
	/// Unique identifier. Must not collide with a built-in rule.
	pub id: String,

	/// Display label. Defaults to the id.
	pub name: Option<String>,

	/// Path segment inserted after the base domain.
	pub prefix: String,

	/// Accepted host suffixes.
	pub hosts: Vec<String>,

	#[serde(default)]
	pub description: String,

	/// Only match URLs whose path starts with this prefix
	/// (mutually exclusive with path_pattern).
	pub path_prefix: Option<String>,

	/// Compare `path_prefix` case-sensitively.
	#[serde(default)]
	pub case_sensitive: bool,

	/// Only match URLs whose path matches this regex
	/// (mutually exclusive with path_prefix).
	pub path_pattern: Option<String>,

	/// Hostname whose paths get `community_segment` prepended.
	pub community_host: Option<String>,

	/// Segment used with `community_host`. Defaults to `community`.
	pub community_segment: Option<String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// Base domain from the most specific config that sets one.
	pub base: Option<String>,

	/// The config file `base` came from.
	pub base_source: Option<PathBuf>,

	/// All rules from all configs, in cascade order (first match wins).
	pub rules: Vec<RuleWithSource>,
}

/// A rule with its source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct RuleWithSource {
	/// The rule itself.
	pub rule: RuleConfig,

	/// The config file this rule came from.
	pub source: PathBuf,
}

impl RuleConfig {
	fn invalid(&self, reason: &str) -> XgetError {
		XgetError::InvalidRule {
			id: self.id.clone(),
			reason: reason.to_string(),
		}
	}

	/// Validate field combinations and values.
	pub fn validate(&self) -> Result<()> {
		if self.path_prefix.is_some() && self.path_pattern.is_some() {
			return Err(XgetError::MutuallyExclusive {
				option1: "path_prefix".to_string(),
				option2: "path_pattern".to_string(),
			});
		}

		if self.id.trim().is_empty() {
			return Err(self.invalid("id must not be empty"));
		}
		if self.prefix.trim().is_empty() {
			return Err(self.invalid("prefix must not be empty"));
		}
		if self.prefix.contains('/') {
			return Err(self.invalid("prefix must be a single path segment"));
		}
		if self.hosts.is_empty() {
			return Err(self.invalid("at least one host is required"));
		}
		if self.hosts.iter().any(|host| host.trim().is_empty()) {
			return Err(self.invalid("hosts must not contain empty entries"));
		}
		if self.community_segment.is_some() && self.community_host.is_none() {
			return Err(self.invalid("community_segment requires community_host"));
		}
		if let Some(ref community) = self.community_host {
			let community = community.trim().to_ascii_lowercase();
			let accepted = self
				.hosts
				.iter()
				.any(|host| host_accepted(&community, &host.trim().to_ascii_lowercase()));
			if !accepted {
				return Err(self.invalid("community_host must be accepted by hosts"));
			}
		}

		if let Some(ref pattern) = self.path_pattern {
			compile_regex(pattern)?;
		}

		Ok(())
	}

	/// Build the platform rule this config describes.
	pub fn to_platform_rule(&self) -> Result<PlatformRule> {
		self.validate()?;

		let matcher = match (&self.path_prefix, &self.path_pattern) {
			(Some(prefix), _) => Some(RuleMatcher::PathPrefix {
				prefix: prefix.clone(),
				case_insensitive: !self.case_sensitive,
			}),
			(None, Some(pattern)) => Some(RuleMatcher::PathPattern(compile_regex(pattern)?)),
			(None, None) => None,
		};

		let transform = match self.community_host {
			Some(ref host) => PathTransform::HostSegment {
				host: host.trim().to_ascii_lowercase(),
				segment: self
					.community_segment
					.clone()
					.unwrap_or_else(|| DEFAULT_COMMUNITY_SEGMENT.to_string()),
			},
			None => PathTransform::StripLeadingSlash,
		};

		Ok(PlatformRule {
			id: self.id.clone(),
			name: self.name.clone().unwrap_or_else(|| self.id.clone()),
			prefix: self.prefix.clone(),
			// Parsed hostnames are lowercase
			hosts: self
				.hosts
				.iter()
				.map(|host| host.trim().to_ascii_lowercase())
				.collect(),
			description: self.description.clone(),
			matcher,
			transform,
		})
	}
}

impl Config {
	/// Validate all rules in this config.
	pub fn validate(&self) -> Result<()> {
		for rule in &self.rules {
			rule.validate()?;
		}
		Ok(())
	}
}

impl MergedConfig {
	/// Compile the user rules, in cascade order.
	pub fn platform_rules(&self) -> Result<Vec<PlatformRule>> {
		self.rules
			.iter()
			.map(|rws| rws.rule.to_platform_rule())
			.collect()
	}

	/// Catalog with the user rules ahead of the built-in table.
	pub fn build_catalog(&self) -> Result<Catalog> {
		Catalog::with_rules(self.platform_rules()?)
	}
}
