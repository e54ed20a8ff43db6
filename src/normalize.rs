//! Input normalization: loosely typed user input to an absolute URL string.

use regex::Regex;
use std::sync::LazyLock;

/// A URI scheme followed by `:`, e.g. `https:` or `git+ssh:`.
static SCHEME_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z\d+.\-]*:").expect("static scheme regex"));

/// Byte order mark, left behind by some editors at the start of a file.
const BOM: char = '\u{FEFF}';

/// Whitespace as stripped from user input, including the byte order mark.
fn is_blank_char(c: char) -> bool {
	c.is_whitespace() || c == BOM
}

/// Canonicalize raw input into an absolute URL string.
///
/// - Blank input (whitespace or byte order marks only) yields `""`.
/// - Protocol-relative input (`//host/...`) gets `https:`.
/// - Input already carrying any scheme is left untouched.
/// - Anything else gets `https://`.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
	let trimmed = raw.trim_matches(is_blank_char);
	if trimmed.is_empty() {
		return String::new();
	}

	if trimmed.starts_with("//") {
		return format!("https:{trimmed}");
	}

	if has_scheme(trimmed) {
		return trimmed.to_string();
	}

	format!("https://{trimmed}")
}

/// Whether `input` starts with a URI scheme.
pub fn has_scheme(input: &str) -> bool {
	SCHEME_REGEX.is_match(input)
}
