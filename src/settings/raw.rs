use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;

use netfilters::tui::components::filter_bar::{
	DEFAULT_MORE_LABEL, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_WIDTH,
};
use netfilters::tui::theme::{self, DEFAULT_THEME};
use netfilters::{FilterBarOptions, FilterState, ResourceType};

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigKey, ConfigSources, ResolvedConfig, SettingSource};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	requests: RequestsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	initial_type: Option<String>,
	more_label: Option<String>,
	placeholder: Option<String>,
	search_width: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RequestsSection {
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(initial_type) = cli.initial_type.clone() {
			self.ui.initial_type = Some(initial_type);
		}
		if let Some(label) = cli.more_label.clone() {
			self.ui.more_label = Some(label);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(width) = cli.search_width {
			self.ui.search_width = Some(width);
		}
		if let Some(file) = cli.requests.clone() {
			self.requests.file = Some(file);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = self.sources(cli);

		let resource_type = match self.ui.initial_type.as_deref() {
			None => ResourceType::default(),
			Some(label) => label.parse::<ResourceType>().map_err(|err| {
				ConfigError::rejected(ConfigKey::InitialType, label, &sources, err.to_string())
			})?,
		};

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = theme::by_name(&theme_name).ok_or_else(|| {
			ConfigError::rejected(
				ConfigKey::Theme,
				theme_name.clone(),
				&sources,
				format!("expected one of: {}", theme::names().join(", ")),
			)
		})?;

		let config = ResolvedConfig {
			filter: FilterState::new(self.ui.initial_query.unwrap_or_default(), resource_type),
			bar: FilterBarOptions {
				more_label: self
					.ui
					.more_label
					.unwrap_or_else(|| DEFAULT_MORE_LABEL.to_string()),
				placeholder: self
					.ui
					.placeholder
					.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
				search_width: self.ui.search_width.unwrap_or(DEFAULT_SEARCH_WIDTH),
			},
			theme_name,
			theme,
			requests_file: self.requests.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}

	/// Attribute each validated key to the layer that supplied it.
	fn sources(&self, cli: &CliArgs) -> ConfigSources {
		let present = [
			(ConfigKey::Theme, cli.theme.is_some(), self.ui.theme.is_some()),
			(
				ConfigKey::InitialType,
				cli.initial_type.is_some(),
				self.ui.initial_type.is_some(),
			),
			(
				ConfigKey::MoreLabel,
				cli.more_label.is_some(),
				self.ui.more_label.is_some(),
			),
			(
				ConfigKey::SearchWidth,
				cli.search_width.is_some(),
				self.ui.search_width.is_some(),
			),
		];

		let mut sources = ConfigSources::default();
		for (key, from_cli, has_value) in present {
			sources.record(key, SettingSource::detect(key, from_cli, has_value));
		}
		sources
	}
}
