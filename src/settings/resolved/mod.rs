use std::time::Duration;

use log::LevelFilter;
use url::Url;
use vitrine_query::{CoordinatorOptions, PageRefresh};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub base_url: Url,
	pub timeout: Duration,
	pub debounce: Duration,
	pub page_refresh: PageRefresh,
	pub initial_query: String,
	pub title: String,
	pub theme: String,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn coordinator_options(&self) -> CoordinatorOptions {
		CoordinatorOptions {
			debounce: self.debounce,
			page_refresh: self.page_refresh,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(crate) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		base_url: Url::parse("http://127.0.0.1:8000").unwrap(),
		timeout: Duration::from_millis(10_000),
		debounce: Duration::from_millis(500),
		page_refresh: PageRefresh::Debounced,
		initial_query: String::new(),
		title: "Products".into(),
		theme: "slate".into(),
		log_level: LevelFilter::Info,
	}
}
