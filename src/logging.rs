//! File-backed logging.
//!
//! The terminal is owned by the UI while the app runs, so records go to
//! `netfilters.log` in the cache directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs;

const LOG_FILE: &str = "netfilters.log";
const FILTER_ENV: &str = "NETFILTERS_LOG";

/// Where [`initialize`] writes records.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE))
}

/// Install the global logger, writing to the cache directory. Returns the log
/// file path.
///
/// The level filter is read from `NETFILTERS_LOG`, then `RUST_LOG`, and
/// defaults to `warn`.
pub fn initialize() -> Result<PathBuf> {
	let dir = app_dirs::get_cache_dir()?;
	initialize_in(&dir)
}

pub fn initialize_in(dir: &Path) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = open_log(&path)?;

	let spec = std::env::var(FILTER_ENV).ok();
	filter_builder(spec.as_deref())
		.target(Target::Pipe(Box::new(file)))
		.format_timestamp_millis()
		.try_init()
		.context("logger already initialized")?;

	log::info!("logging to {}", path.display());
	Ok(path)
}

/// A blank `NETFILTERS_LOG` falls through to `RUST_LOG`.
fn filter_builder(spec: Option<&str>) -> Builder {
	match spec.filter(|spec| !spec.trim().is_empty()) {
		Some(spec) => {
			let mut builder = Builder::new();
			builder.parse_filters(spec);
			builder
		}
		None => Builder::from_env(Env::default().default_filter_or("warn")),
	}
}

fn open_log(path: &Path) -> Result<File> {
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
