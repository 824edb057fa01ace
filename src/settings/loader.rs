use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::ConfigLayers;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let layers = ConfigLayers::for_cli(cli);
	log::debug!("configuration files: {:?}", layers.files());

	let mut raw: RawConfig = layers
		.build()?
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::env;
	use std::io::Write;
	use std::sync::{Mutex, MutexGuard};

	use clap::Parser;
	use netfilters::ResourceType;

	use super::*;

	/// Every test here reads the `NETFILTERS__*` layer; hold this while the
	/// process environment is being read or changed.
	static ENV_LOCK: Mutex<()> = Mutex::new(());

	fn env_lock() -> MutexGuard<'static, ()> {
		ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	/// Sets environment variables for the lifetime of the value and removes
	/// them on drop.
	struct ScopedEnv {
		names: Vec<&'static str>,
	}

	impl ScopedEnv {
		fn set(vars: &[(&'static str, &str)]) -> Self {
			for (name, value) in vars {
				// SAFETY: callers hold `ENV_LOCK`, so no other test reads the
				// environment concurrently.
				unsafe { env::set_var(name, value) };
			}
			Self {
				names: vars.iter().map(|(name, _)| *name).collect(),
			}
		}
	}

	impl Drop for ScopedEnv {
		fn drop(&mut self) {
			for name in &self.names {
				// SAFETY: see `ScopedEnv::set`.
				unsafe { env::remove_var(name) };
			}
		}
	}

	fn config_file(contents: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "{contents}").unwrap();
		file
	}

	#[test]
	fn file_values_are_overridden_by_flags() {
		let _lock = env_lock();
		let file = config_file(
			"[ui]\ntheme = \"light\"\ninitial_type = \"css\"\nsearch_width = 30\n\n[requests]\nfile = \"requests.json\"",
		);
		let path = file.path().display().to_string();
		let cli = CliArgs::parse_from([
			"netfilters",
			"--no-config",
			"--config",
			path.as_str(),
			"--type",
			"js",
		]);

		let resolved = load(&cli).unwrap();
		assert_eq!(resolved.theme_name, "light");
		assert_eq!(resolved.filter.resource_type, ResourceType::Js);
		assert_eq!(resolved.bar.search_width, 30);
		assert_eq!(
			resolved.requests_file.as_deref(),
			Some(std::path::Path::new("requests.json"))
		);
	}

	#[test]
	fn invalid_file_values_name_the_config_key() {
		let _lock = env_lock();
		let file = config_file("[ui]\nsearch_width = 3");
		let path = file.path().display().to_string();
		let cli = CliArgs::parse_from(["netfilters", "--no-config", "--config", path.as_str()]);

		let message = load(&cli).unwrap_err().to_string();
		assert!(message.contains("ui.search_width"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn environment_sits_between_files_and_flags() {
		let _lock = env_lock();
		let file = config_file("[ui]\ntheme = \"solarized\"\nsearch_width = 30");
		let path = file.path().display().to_string();
		let _env = ScopedEnv::set(&[
			("NETFILTERS__UI__THEME", "light"),
			("NETFILTERS__UI__SEARCH_WIDTH", "3"),
		]);
		let args = |extra: &[&str]| {
			let mut argv = vec!["netfilters", "--no-config", "--config", path.as_str()];
			argv.extend_from_slice(extra);
			CliArgs::parse_from(argv)
		};

		let from_env = load(&args(&["--search-width", "20"])).unwrap();
		assert_eq!(from_env.theme_name, "light");
		assert_eq!(from_env.bar.search_width, 20);

		let from_flag = load(&args(&["--search-width", "20", "--theme", "slate"])).unwrap();
		assert_eq!(from_flag.theme_name, "slate");

		let message = load(&args(&[])).unwrap_err().to_string();
		assert!(message.contains("environment variable `NETFILTERS__UI__SEARCH_WIDTH`"));
		assert!(message.contains("got `3`"));
	}
}
