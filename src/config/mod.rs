//! Configuration loading and parsing for xget.
//!
//! This module handles:
//! - TOML config file parsing
//! - Directory cascade discovery
//! - Config merging
//! - Base domain resolution

pub mod base;
pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use base::{BASE_ENV_VAR, BaseSource, base_from_env, resolve_base};
pub use cascade::{
	CONFIG_FILE_NAME, NO_USER_CONFIG_ENV_VAR, discover_configs, load_merged_config, merge_configs,
	user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{Config, LoadedConfig, MergedConfig, RuleConfig, RuleWithSource};
