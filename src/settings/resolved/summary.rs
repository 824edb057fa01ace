use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Theme: {}", config.theme_name);
	println!("  Initial type: {}", config.filter.resource_type);
	if config.filter.search_value.is_empty() {
		println!("  Initial query: (empty)");
	} else {
		println!("  Initial query: {}", config.filter.search_value);
	}
	println!("  More label: {}", config.bar.more_label);
	println!("  Placeholder: {}", config.bar.placeholder);
	println!("  Search width: {}", config.bar.search_width);
	match &config.requests_file {
		Some(path) => println!("  Requests: {}", path.display()),
		None => println!("  Requests: (built-in sample)"),
	}
}
