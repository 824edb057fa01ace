use thiserror::Error;

use super::{ConfigKey, ConfigSources, SettingSource};

/// A setting that parsed but cannot be used, attributed to the layer that
/// supplied it.
#[derive(Debug, Error)]
#[error("{key} from {origin} is not usable: {reason} (got `{value}`)")]
pub(crate) struct ConfigError {
	pub(crate) key: ConfigKey,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn rejected(
		key: ConfigKey,
		value: impl Into<String>,
		sources: &ConfigSources,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin: sources.source_for(key),
			reason: reason.into(),
		}
	}
}
