use std::env;
use std::fmt;

/// A validated setting, named the three ways a user can supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigKey {
	Theme,
	InitialType,
	MoreLabel,
	SearchWidth,
}

impl ConfigKey {
	const COUNT: usize = 4;

	/// Dotted path in the configuration file.
	pub(crate) const fn name(self) -> &'static str {
		match self {
			Self::Theme => "ui.theme",
			Self::InitialType => "ui.initial_type",
			Self::MoreLabel => "ui.more_label",
			Self::SearchWidth => "ui.search_width",
		}
	}

	/// Environment variable read by the `NETFILTERS__` layer.
	pub(crate) const fn env_var(self) -> &'static str {
		match self {
			Self::Theme => "NETFILTERS__UI__THEME",
			Self::InitialType => "NETFILTERS__UI__INITIAL_TYPE",
			Self::MoreLabel => "NETFILTERS__UI__MORE_LABEL",
			Self::SearchWidth => "NETFILTERS__UI__SEARCH_WIDTH",
		}
	}

	pub(crate) const fn cli_flag(self) -> &'static str {
		match self {
			Self::Theme => "--theme",
			Self::InitialType => "--type",
			Self::MoreLabel => "--more-label",
			Self::SearchWidth => "--search-width",
		}
	}

	const fn slot(self) -> usize {
		self as usize
	}
}

impl fmt::Display for ConfigKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// The layer a setting's final value was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(ConfigKey),
	Environment(ConfigKey),
	ConfigFile(ConfigKey),
}

impl SettingSource {
	/// Attribute a present value to the highest layer that could have set it.
	/// Returns `None` when no layer supplied `key`.
	pub(crate) fn detect(key: ConfigKey, cli_present: bool, value_present: bool) -> Option<Self> {
		if !value_present {
			None
		} else if cli_present {
			Some(Self::CliFlag(key))
		} else if env::var_os(key.env_var()).is_some() {
			Some(Self::Environment(key))
		} else {
			Some(Self::ConfigFile(key))
		}
	}
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(key) => write!(f, "CLI flag `{}`", key.cli_flag()),
			Self::Environment(key) => write!(f, "environment variable `{}`", key.env_var()),
			Self::ConfigFile(key) => write!(f, "configuration key `{}`", key.name()),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	slots: [Option<SettingSource>; ConfigKey::COUNT],
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: ConfigKey, source: Option<SettingSource>) {
		self.slots[key.slot()] = source;
	}

	/// Source of `key`; unset keys are reported against the config file.
	pub(crate) fn source_for(&self, key: ConfigKey) -> SettingSource {
		self.slots[key.slot()].unwrap_or(SettingSource::ConfigFile(key))
	}
}
