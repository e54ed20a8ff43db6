use regex::Regex;

/// Descriptor mapping a family of source hosts to an accelerated-URL prefix.
#[derive(Debug, Clone)]
pub struct PlatformRule {
	/// Unique short identifier, e.g. `github`.
	pub id: String,

	/// Human-readable display label.
	pub name: String,

	/// Path segment inserted after the base domain, e.g. `gh`.
	pub prefix: String,

	/// Domain suffixes accepted by this rule. A hostname is accepted when it
	/// equals an entry or is a subdomain of it.
	pub hosts: Vec<String>,

	/// Free-form annotation. Not used for matching.
	pub description: String,

	/// Extra predicate that must hold in addition to the host check.
	pub matcher: Option<RuleMatcher>,

	/// Strategy producing the path emitted after the prefix.
	pub transform: PathTransform,
}

/// Predicate narrowing a rule beyond its host set.
#[derive(Debug, Clone)]
pub enum RuleMatcher {
	/// The URL path starts with `prefix`.
	PathPrefix {
		prefix: String,
		case_insensitive: bool,
	},

	/// The URL path matches a regular expression.
	PathPattern(Regex),
}

/// How the path after the prefix is derived from the source URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PathTransform {
	/// Drop exactly one leading `/` and keep everything else verbatim.
	#[default]
	StripLeadingSlash,

	/// Like `StripLeadingSlash`, but prepend `segment/` when the hostname is
	/// exactly `host`.
	HostSegment { host: String, segment: String },
}

impl PlatformRule {
	/// Whether the rule carries a predicate beyond its host set.
	pub fn is_narrowed(&self) -> bool {
		self.matcher.is_some()
	}
}
