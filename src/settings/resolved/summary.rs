use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  API base URL: {}", config.base_url),
		format!("  Request timeout: {}ms", config.timeout.as_millis()),
		format!("  Debounce: {}ms", config.debounce.as_millis()),
		format!("  Page refresh: {}", config.page_refresh.as_str()),
		format!("  Title: {}", config.title),
		format!("  UI theme: {}", config.theme),
		format!("  Log level: {}", config.log_level),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines
}

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

#[cfg(test)]
mod tests {
	use super::super::sample;
	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let mut config = sample();
		config.initial_query = "mesa".into();

		let lines = summary_lines(&config);
		assert_eq!(lines[0], "Effective configuration:");
		assert!(lines.contains(&"  API base URL: http://127.0.0.1:8000/".to_string()));
		assert!(lines.contains(&"  Debounce: 500ms".to_string()));
		assert!(lines.contains(&"  Page refresh: debounced".to_string()));
		assert!(lines.contains(&"  Log level: INFO".to_string()));
		assert!(lines.contains(&"  Initial query: mesa".to_string()));
	}

	#[test]
	fn summary_omits_empty_query() {
		let lines = summary_lines(&sample());
		assert!(!lines.iter().any(|line| line.contains("Initial query")));
	}
}
