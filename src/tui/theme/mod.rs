//! Colour themes for the filter bar and the request table.

mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = builtins::slate::NAME;

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Names of the bundled themes, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// Look up a bundled theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	builtins::BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.name.eq_ignore_ascii_case(wanted))
		.map(|definition| definition.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive() {
		assert!(by_name(" Light ").is_some());
		assert!(by_name("SOLARIZED").is_some());
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn default_theme_is_registered() {
		assert!(names().contains(&DEFAULT_THEME));
		assert_eq!(by_name(DEFAULT_THEME).map(|theme| theme.header), Some(SLATE.header));
	}
}
