use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use netfilters::app_dirs;

/// Prefix of the environment layer; `NETFILTERS__UI__THEME` maps to `ui.theme`.
pub(super) const ENV_PREFIX: &str = "netfilters";
pub(super) const ENV_SEPARATOR: &str = "__";

/// One configuration file and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigFile {
	pub(super) path: PathBuf,
	pub(super) required: bool,
}

/// Configuration layers for one run, lowest precedence first. The environment
/// layer always sits above the files; CLI flags are applied after
/// deserialisation.
#[derive(Debug, Clone)]
pub(super) struct ConfigLayers {
	files: Vec<ConfigFile>,
}

impl ConfigLayers {
	/// Discovered files unless `--no-config` is given, then every `--config`
	/// file in the order passed.
	pub(super) fn for_cli(cli: &CliArgs) -> Self {
		let discovered = if cli.no_config {
			Vec::new()
		} else {
			discovered_files()
		};
		let files = discovered
			.into_iter()
			.map(|path| ConfigFile {
				path,
				required: false,
			})
			.chain(cli.config.iter().map(|path| ConfigFile {
				path: path.clone(),
				required: true,
			}))
			.collect();
		Self { files }
	}

	pub(super) fn files(&self) -> &[ConfigFile] {
		&self.files
	}

	/// Merge the layers into a single [`Config`].
	pub(super) fn build(&self) -> Result<Config> {
		let builder = self
			.files
			.iter()
			.fold(Config::builder(), |builder, file| {
				builder.add_source(File::from(file.path.clone()).required(file.required))
			})
			.add_source(
				Environment::with_prefix(ENV_PREFIX)
					.separator(ENV_SEPARATOR)
					.try_parsing(true),
			);

		builder
			.build()
			.context("failed to merge configuration layers")
	}
}

/// Optional files looked up on every run: the user config directory, then the
/// working directory.
fn discovered_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	match app_dirs::get_config_dir() {
		Ok(dir) => files.push(dir.join("config.toml")),
		Err(err) => log::debug!("skipping user config file: {err:#}"),
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".netfilters.toml"));
		files.push(current_dir.join("netfilters.toml"));
	}

	files
}
