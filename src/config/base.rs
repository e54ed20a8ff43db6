use crate::convert::DEFAULT_BASE;

/// Environment variable overriding the base domain.
pub const BASE_ENV_VAR: &str = "XGET_BASE";

/// Where the effective base domain came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
	Cli,
	Env,
	Config,
	Default,
}

/// Trimmed value, or `None` when blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|v| !v.is_empty())
}

/// Pick the base domain by precedence: command line, environment, config
/// file, built-in default. Blank values are skipped.
pub fn resolve_base(
	cli: Option<&str>,
	env: Option<&str>,
	config: Option<&str>,
) -> (String, BaseSource) {
	if let Some(base) = non_blank(cli) {
		return (base.to_string(), BaseSource::Cli);
	}
	if let Some(base) = non_blank(env) {
		return (base.to_string(), BaseSource::Env);
	}
	if let Some(base) = non_blank(config) {
		return (base.to_string(), BaseSource::Config);
	}
	(DEFAULT_BASE.to_string(), BaseSource::Default)
}

/// Read the base domain override from the environment.
pub fn base_from_env() -> Option<String> {
	std::env::var(BASE_ENV_VAR).ok()
}
