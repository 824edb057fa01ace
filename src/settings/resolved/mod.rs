use std::path::PathBuf;

use netfilters::{FilterBarOptions, FilterState, Theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigKey, ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Filter the bar starts with.
	pub filter: FilterState,
	pub bar: FilterBarOptions,
	pub theme_name: String,
	pub theme: Theme,
	/// Request list to load; the built-in sample is used when absent.
	pub requests_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
