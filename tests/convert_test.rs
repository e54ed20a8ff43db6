use xget_convert::catalog::{Catalog, PathTransform, PlatformRule, RuleMatcher};
use xget_convert::convert::{
	DEFAULT_BASE, MALFORMED_URL_MESSAGE, UNSUPPORTED_PLATFORM_MESSAGE, convert,
};
use xget_convert::normalize::normalize;

fn rule(id: &str, prefix: &str, hosts: &[&str]) -> PlatformRule {
	PlatformRule {
		id: id.to_string(),
		name: id.to_string(),
		prefix: prefix.to_string(),
		hosts: hosts.iter().map(|h| h.to_string()).collect(),
		description: String::new(),
		matcher: None,
		transform: PathTransform::StripLeadingSlash,
	}
}

// ============================================================================
// Platform scenarios
// ============================================================================

#[test]
fn test_github_without_scheme() {
	let catalog = Catalog::builtin();
	let result = convert(&catalog, "github.com/xixu-me/Xget", DEFAULT_BASE);

	assert!(result.ok());
	assert_eq!(result.platform().unwrap().id, "github");
	assert_eq!(result.output(), Some("https://xget.xi-xu.me/gh/xixu-me/Xget"));
}

#[test]
fn test_raw_githubusercontent_keeps_subpath() {
	let catalog = Catalog::builtin();
	let result = convert(
		&catalog,
		"https://raw.githubusercontent.com/xixu-me/Xget/main/README.md",
		DEFAULT_BASE,
	);

	assert!(result.ok());
	assert_eq!(result.platform().unwrap().id, "github");
	assert_eq!(
		result.output(),
		Some("https://xget.xi-xu.me/gh/xixu-me/Xget/main/README.md")
	);
}

#[test]
fn test_conda_community_channel() {
	let catalog = Catalog::builtin();
	let result = convert(
		&catalog,
		"https://conda.anaconda.org/conda-forge/linux-64/repodata.json",
		DEFAULT_BASE,
	);

	assert!(result.ok());
	assert_eq!(
		result.output(),
		Some("https://xget.xi-xu.me/conda/community/conda-forge/linux-64/repodata.json")
	);
}

#[test]
fn test_conda_official_channel() {
	let catalog = Catalog::builtin();
	let result = convert(
		&catalog,
		"https://repo.anaconda.com/pkgs/main/linux-64/repodata.json",
		DEFAULT_BASE,
	);

	assert_eq!(
		result.output(),
		Some("https://xget.xi-xu.me/conda/pkgs/main/linux-64/repodata.json")
	);
}

#[test]
fn test_homebrew_takes_precedence_over_github() {
	let catalog = Catalog::builtin();

	let brew = convert(&catalog, "https://github.com/Homebrew/brew", DEFAULT_BASE);
	assert_eq!(brew.platform().unwrap().id, "homebrew");
	assert_eq!(
		brew.output(),
		Some("https://xget.xi-xu.me/homebrew/Homebrew/brew")
	);

	let tap = convert(
		&catalog,
		"https://github.com/xixu-me/homebrew-tap",
		DEFAULT_BASE,
	);
	assert_eq!(tap.platform().unwrap().id, "github");

	// Subdomains of github.com are accepted by the homebrew host entry too
	let gist = convert(&catalog, "https://gist.github.com/homebrew/abc", DEFAULT_BASE);
	assert_eq!(gist.platform().unwrap().id, "homebrew");
}

#[test]
fn test_various_platforms() {
	let catalog = Catalog::builtin();
	let cases = [
		("https://huggingface.co/gpt2/resolve/main/config.json", "hf"),
		("https://registry.npmjs.org/react", "npm"),
		("https://files.pythonhosted.org/packages/x.whl", "pypi"),
		("https://ghcr.io/v2/owner/image/manifests/latest", "cr"),
		("https://api.openai.com/v1/chat/completions", "ip"),
		("https://static.crates.io/crates/serde/serde-1.0.0.crate", "crates"),
		("https://downloads.sourceforge.net/project/x/y.zip", "sf"),
	];

	for (input, prefix) in cases {
		let result = convert(&catalog, input, DEFAULT_BASE);
		assert!(result.ok(), "input: {input}");
		assert_eq!(result.platform().unwrap().prefix, prefix, "input: {input}");
	}
}

#[test]
fn test_uppercase_host_matches() {
	let catalog = Catalog::builtin();
	let result = convert(&catalog, "HTTPS://GitHub.COM/xixu-me/Xget", DEFAULT_BASE);
	assert_eq!(result.output(), Some("https://xget.xi-xu.me/gh/xixu-me/Xget"));
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_blank_input_is_not_an_error() {
	let catalog = Catalog::builtin();
	for raw in ["", " ", "\t", "\n  \r\n", "\u{FEFF}", "\u{FEFF}  "] {
		let result = convert(&catalog, raw, DEFAULT_BASE);
		assert!(!result.ok());
		assert_eq!(result.message(), "");
		assert_ne!(result.message(), UNSUPPORTED_PLATFORM_MESSAGE);
		assert!(result.input().is_none());
	}
}

#[test]
fn test_unsupported_vs_malformed_distinguished_by_input() {
	let catalog = Catalog::builtin();

	let unsupported = convert(&catalog, "https://example.com/resource", DEFAULT_BASE);
	assert!(!unsupported.ok());
	assert_eq!(unsupported.message(), UNSUPPORTED_PLATFORM_MESSAGE);
	assert!(unsupported.input().is_some());

	let malformed = convert(&catalog, "http://[::1", DEFAULT_BASE);
	assert!(!malformed.ok());
	assert_eq!(malformed.message(), MALFORMED_URL_MESSAGE);
	assert!(malformed.input().is_none());
}

#[test]
fn test_lookalike_host_is_unsupported() {
	let catalog = Catalog::builtin();
	let result = convert(&catalog, "https://notgithub.com/a/b", DEFAULT_BASE);
	assert!(!result.ok());
	assert!(result.input().is_some());
}

// ============================================================================
// Base domain and ordering properties
// ============================================================================

#[test]
fn test_output_starts_with_trimmed_base_and_prefix() {
	let catalog = Catalog::builtin();
	let bases = [
		"https://xget.xi-xu.me",
		"https://xget.xi-xu.me/",
		"https://mirror.example.com/sub",
	];
	let inputs = [
		"github.com/xixu-me/Xget",
		"https://pypi.org/simple/requests/?a=1",
		"https://conda.anaconda.org/conda-forge/",
		"https://github.com",
	];

	for base in bases {
		let trimmed = base.strip_suffix('/').unwrap_or(base);
		for input in inputs {
			let result = convert(&catalog, input, base);
			let expected = format!("{}/{}/", trimmed, result.platform().unwrap().prefix);
			assert!(
				result.output().unwrap().starts_with(&expected),
				"{input} with {base}"
			);
		}
	}
}

#[test]
fn test_earlier_rule_wins_regardless_of_specificity() {
	let catalog = Catalog::from_rules(vec![
		rule("broad", "broad", &["example.com"]),
		rule("specific", "specific", &["cdn.example.com"]),
	])
	.unwrap();

	let result = convert(&catalog, "https://cdn.example.com/a", DEFAULT_BASE);
	assert_eq!(result.platform().unwrap().id, "broad");

	let reversed = Catalog::from_rules(vec![
		rule("specific", "specific", &["cdn.example.com"]),
		rule("broad", "broad", &["example.com"]),
	])
	.unwrap();

	let result = convert(&reversed, "https://cdn.example.com/a", DEFAULT_BASE);
	assert_eq!(result.platform().unwrap().id, "specific");
}

#[test]
fn test_user_rule_with_pattern_precedes_builtin() {
	let mut narrowed = rule("gh-releases", "ghr", &["github.com"]);
	narrowed.matcher = Some(RuleMatcher::PathPattern(
		regex::Regex::new(r"^/[^/]+/[^/]+/releases/").unwrap(),
	));
	let catalog = Catalog::with_rules(vec![narrowed]).unwrap();

	let release = convert(
		&catalog,
		"https://github.com/a/b/releases/download/v1/x.tar.gz",
		DEFAULT_BASE,
	);
	assert_eq!(
		release.output(),
		Some("https://xget.xi-xu.me/ghr/a/b/releases/download/v1/x.tar.gz")
	);

	let source = convert(&catalog, "https://github.com/a/b", DEFAULT_BASE);
	assert_eq!(source.platform().unwrap().id, "github");
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_protocol_relative() {
	assert_eq!(
		normalize("//huggingface.co/model"),
		"https://huggingface.co/model"
	);
}

#[test]
fn test_normalize_is_idempotent_on_converter_inputs() {
	for raw in [
		"github.com/xixu-me/Xget",
		" //huggingface.co/model ",
		"ftp://example.com/data",
		"",
	] {
		let once = normalize(raw);
		assert_eq!(normalize(&once), once);
	}
}
