use super::{ConfigError, ConfigKey, ConfigSources, ResolvedConfig};

/// Narrowest search box that still shows a few typed characters next to the
/// cursor.
pub(super) const MIN_SEARCH_WIDTH: u16 = 8;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.bar.search_width < MIN_SEARCH_WIDTH {
		return Err(ConfigError::rejected(
			ConfigKey::SearchWidth,
			config.bar.search_width.to_string(),
			sources,
			format!("must be at least {MIN_SEARCH_WIDTH}"),
		));
	}

	if config.bar.more_label.trim().is_empty() {
		return Err(ConfigError::rejected(
			ConfigKey::MoreLabel,
			config.bar.more_label.clone(),
			sources,
			"must not be empty",
		));
	}

	Ok(())
}
