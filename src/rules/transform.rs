use crate::catalog::types::{PathTransform, PlatformRule};
use url::Url;

/// Strip exactly one leading `/` from a path, keeping the rest verbatim.
pub fn strip_leading_slash(path: &str) -> &str {
	path.strip_prefix('/').unwrap_or(path)
}

impl PathTransform {
	/// Apply this strategy to a parsed URL.
	///
	/// Only the path and hostname are inspected; query and fragment are
	/// carried by the converter.
	pub fn apply(&self, url: &Url) -> String {
		let path = strip_leading_slash(url.path());
		match self {
			PathTransform::StripLeadingSlash => path.to_string(),
			PathTransform::HostSegment { host, segment } => {
				if url.host_str() == Some(host.as_str()) {
					format!("{segment}/{path}")
				} else {
					path.to_string()
				}
			}
		}
	}
}

/// Produce the path emitted after `rule.prefix` for `url`.
pub fn transform_path(url: &Url, rule: &PlatformRule) -> String {
	rule.transform.apply(url)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn url(input: &str) -> Url {
		Url::parse(input).unwrap()
	}

	fn community() -> PathTransform {
		PathTransform::HostSegment {
			host: "conda.anaconda.org".to_string(),
			segment: "community".to_string(),
		}
	}

	#[test]
	fn test_strip_leading_slash() {
		assert_eq!(strip_leading_slash("/a/b"), "a/b");
		assert_eq!(strip_leading_slash("//a"), "/a");
		assert_eq!(strip_leading_slash("a"), "a");
		assert_eq!(strip_leading_slash(""), "");
	}

	#[test]
	fn test_default_preserves_trailing_slash() {
		let transform = PathTransform::default();
		assert_eq!(
			transform.apply(&url("https://github.com/xixu-me/Xget/")),
			"xixu-me/Xget/"
		);
	}

	#[test]
	fn test_default_ignores_query_and_fragment() {
		let transform = PathTransform::StripLeadingSlash;
		assert_eq!(
			transform.apply(&url("https://pypi.org/simple/requests/?x=1#frag")),
			"simple/requests/"
		);
	}

	#[test]
	fn test_default_keeps_percent_encoding() {
		let transform = PathTransform::StripLeadingSlash;
		assert_eq!(
			transform.apply(&url("https://example.com/a%20b/c%2Fd")),
			"a%20b/c%2Fd"
		);
	}

	#[test]
	fn test_root_path_becomes_empty() {
		let transform = PathTransform::StripLeadingSlash;
		assert_eq!(transform.apply(&url("https://github.com")), "");
	}

	#[test]
	fn test_host_segment_on_community_host() {
		assert_eq!(
			community().apply(&url("https://conda.anaconda.org/conda-forge/noarch/x.json")),
			"community/conda-forge/noarch/x.json"
		);
	}

	#[test]
	fn test_host_segment_on_official_host() {
		assert_eq!(
			community().apply(&url("https://repo.anaconda.com/pkgs/main/linux-64/x.json")),
			"pkgs/main/linux-64/x.json"
		);
	}

	#[test]
	fn test_host_segment_requires_exact_host() {
		assert_eq!(
			community().apply(&url("https://mirror.conda.anaconda.org/conda-forge/x")),
			"conda-forge/x"
		);
	}
}
