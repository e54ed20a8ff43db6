use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, RuleWithSource};
use crate::error::{Result, XgetError};
use std::path::{Path, PathBuf};

/// Config file name looked up in each directory and in the home directory.
pub const CONFIG_FILE_NAME: &str = ".xget.toml";

/// Environment variable that, if truthy, skips the ~/.xget.toml lookup.
pub const NO_USER_CONFIG_ENV_VAR: &str = "XGET_NO_USER_CONFIG";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.xget.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.xget.toml (unless `XGET_NO_USER_CONFIG` is truthy)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	// Walk up the directory tree
	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			let is_root = config.root;

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		// Move to parent directory
		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.xget.toml if it exists, isn't disabled and wasn't
/// already picked up by the directory walk.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	if user_config_disabled() {
		return Ok(None);
	}

	let user_config_path = user_config_path()?;

	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Whether `XGET_NO_USER_CONFIG` asks to skip ~/.xget.toml.
fn user_config_disabled() -> bool {
	std::env::var(NO_USER_CONFIG_ENV_VAR).is_ok_and(|value| disables_user_config(&value))
}

/// Any value other than blank, `0`, `false` or `no` disables the user config.
fn disables_user_config(value: &str) -> bool {
	let value = value.trim().to_ascii_lowercase();
	!matches!(value.as_str(), "" | "0" | "false" | "no")
}

/// Merge multiple configs into a single effective config.
///
/// Rules are collected in cascade order (first match wins). The base domain
/// comes from the first (most specific) config that sets one.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		// Collect rules with their source
		for rule in &loaded.config.rules {
			merged.rules.push(RuleWithSource {
				rule: rule.clone(),
				source: loaded.path.clone(),
			});
		}

		if merged.base.is_none()
			&& let Some(ref base) = loaded.config.base
		{
			merged.base = Some(base.clone());
			merged.base_source = Some(loaded.path.clone());
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(XgetError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
