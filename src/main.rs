use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

use xget_convert::catalog::Catalog;
use xget_convert::config::{
	BaseSource, CONFIG_FILE_NAME, MergedConfig, base_from_env, generate_init_template,
	load_merged_config, resolve_base, user_config_path,
};
use xget_convert::convert::{ConvertResult, convert};
use xget_convert::logging::{TELEMETRY_TARGET, init_logging};
use xget_convert::normalize::normalize;

#[derive(Parser)]
#[command(name = "xget")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting platform URLs into Xget accelerated URLs"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Base domain for rewritten URLs (overrides XGET_BASE and config files)
	#[arg(long, global = true, value_name = "URL")]
	base: Option<String>,

	/// Enable debug logging on stderr
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Create a template .xget.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .xget.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert URLs into accelerated URLs (reads stdin when no URL is given)
	Convert {
		/// Source URLs
		urls: Vec<String>,

		/// Print one JSON object per input
		#[arg(long)]
		json: bool,
	},
	/// Print the normalized form of URLs
	Normalize {
		/// Raw inputs
		#[arg(required = true)]
		urls: Vec<String>,
	},
	/// List supported platforms in match order
	Platforms,
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display config files, effective base domain and user rules
	Show,
	/// Check all config files for errors without converting anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	let Some(command) = cli.command else {
		// No command specified - this shouldn't happen due to arg_required_else_help
		return Ok(ExitCode::SUCCESS);
	};

	match command {
		Commands::Convert { urls, json } => handle_convert(&urls, json, cli.base.as_deref()),
		Commands::Normalize { urls } => handle_normalize(&urls),
		Commands::Platforms => handle_platforms(),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(cli.base.as_deref()),
			ConfigAction::Validate => handle_config_validate(),
		},
	}
}

/// Effective catalog and base domain for the current directory.
struct Session {
	merged: MergedConfig,
	catalog: Catalog,
	base: String,
	base_source: BaseSource,
}

fn load_session(cli_base: Option<&str>) -> Result<Session> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let merged = load_merged_config(&cwd).context("Failed to load configuration")?;
	let catalog = merged
		.build_catalog()
		.context("Failed to compile platform rules")?;

	let env_base = base_from_env();
	let (base, base_source) =
		resolve_base(cli_base, env_base.as_deref(), merged.base.as_deref());

	if url::Url::parse(&base).is_err() {
		tracing::warn!(%base, "base domain is not an absolute URL");
	}
	tracing::debug!(%base, source = ?base_source, rules = catalog.len(), "session loaded");

	Ok(Session {
		merged,
		catalog,
		base,
		base_source,
	})
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template();
	std::fs::write(&config_path, template)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_convert(urls: &[String], json: bool, cli_base: Option<&str>) -> Result<ExitCode> {
	let session = load_session(cli_base)?;

	let inputs: Vec<String> = if urls.is_empty() {
		std::io::stdin()
			.lock()
			.lines()
			.collect::<std::io::Result<_>>()
			.context("Failed to read URLs from stdin")?
	} else {
		urls.to_vec()
	};

	let mut failed = false;

	for raw in &inputs {
		let result = convert(&session.catalog, raw, &session.base);
		record_conversion(&result);

		// Nothing typed is not an error and produces no output
		if matches!(result, ConvertResult::Empty) {
			continue;
		}

		if let Some(platform) = result.platform() {
			tracing::info!("detected {} (prefix {})", platform.name, platform.prefix);
		}

		if json {
			let line = serde_json::to_string(&result.report(raw))
				.context("Failed to serialize conversion result")?;
			println!("{line}");
		} else if let Some(output) = result.output() {
			println!("{output}");
		} else {
			eprintln!("{}: {}", raw.trim(), result.message());
		}

		if result.is_error() {
			failed = true;
		}
	}

	Ok(if failed {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	})
}

/// Emit the conversion telemetry event for a result.
fn record_conversion(result: &ConvertResult<'_>) {
	match result {
		ConvertResult::Empty => {}
		ConvertResult::Converted { platform, input, .. } => tracing::info!(
			target: TELEMETRY_TARGET,
			event = "conversion_detected",
			platform = %platform.id,
			input_host = ?input.host_str()
		),
		_ => tracing::info!(
			target: TELEMETRY_TARGET,
			event = "conversion_failed",
			reason = result.message()
		),
	}
}

fn handle_normalize(urls: &[String]) -> Result<ExitCode> {
	for raw in urls {
		println!("{}", normalize(raw));
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_platforms() -> Result<ExitCode> {
	let session = load_session(None)?;

	for rule in session.catalog.list_supported_platforms() {
		println!("{:<14} {:<10} {}", rule.id, rule.prefix, rule.name);
		println!("{:<14} hosts: {}", "", rule.hosts.join(", "));
		if !rule.description.is_empty() {
			println!("{:<14} {}", "", rule.description);
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(cli_base: Option<&str>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = xget_convert::config::discover_configs(&cwd)
		.context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):\n");

		for loaded in &configs {
			println!("# Source: {}", loaded.path.display());
			println!("# root: {}", loaded.config.root);
			if let Some(ref base) = loaded.config.base {
				println!("# base: {}", base);
			}
			println!("# rules: {}", loaded.config.rules.len());
			println!();

			for (i, rule) in loaded.config.rules.iter().enumerate() {
				println!("  Rule {}:", i + 1);
				println!("    id: {}", rule.id);
				println!("    prefix: {}", rule.prefix);
				println!("    hosts: {}", rule.hosts.join(", "));
				if let Some(ref prefix) = rule.path_prefix {
					println!("    path_prefix: {}", prefix);
				}
				if let Some(ref pattern) = rule.path_pattern {
					println!("    path_pattern: {}", pattern);
				}
				if let Some(ref host) = rule.community_host {
					println!("    community_host: {}", host);
				}
				println!();
			}
		}
	}

	let session = load_session(cli_base)?;

	if !session.merged.rules.is_empty() {
		println!("User rules (in match order, ahead of built-in platforms):");
		for rws in &session.merged.rules {
			println!(
				"  {:<14} {:<10} from {}",
				rws.rule.id,
				rws.rule.prefix,
				rws.source.display()
			);
		}
		println!();
	}

	println!("Effective base: {} ({:?})", session.base, session.base_source);
	if let Some(ref source) = session.merged.base_source
		&& session.base_source == BaseSource::Config
	{
		println!("  from {}", source.display());
	}

	// Show user config path
	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let configs = match xget_convert::config::discover_configs(&cwd) {
		Ok(configs) => configs,
		Err(e) => {
			eprintln!("Configuration error: {:?}", anyhow::Error::from(e));
			return Ok(ExitCode::FAILURE);
		}
	};

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	let merged = xget_convert::config::merge_configs(&configs);
	let catalog = match merged.build_catalog() {
		Ok(catalog) => catalog,
		Err(e) => {
			eprintln!("Configuration error: {:?}", anyhow::Error::from(e));
			return Ok(ExitCode::FAILURE);
		}
	};

	println!("All configuration files are valid:");
	for loaded in &configs {
		println!(
			"  {} ({} rules)",
			loaded.path.display(),
			loaded.config.rules.len()
		);
	}

	for (shadowed, by) in catalog.unreachable_rules() {
		println!(
			"warning: rule {} is shadowed by earlier rule {} and can never match",
			shadowed.id, by.id
		);
	}

	Ok(ExitCode::SUCCESS)
}
