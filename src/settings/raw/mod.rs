use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Error, Result};
use log::LevelFilter;
use serde::Deserialize;
use url::Url;
use vitrine_query::PageRefresh;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub(super) const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub(super) const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub(super) const DEFAULT_TITLE: &str = "Products";
pub(super) const DEFAULT_THEME: &str = "slate";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) page_refresh: Option<String>,
	pub(super) initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) api: ApiSection,
	pub(super) search: SearchSection,
	pub(super) ui: UiSection,
	pub(super) log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(base_url) = &cli.base_url {
			self.api.base_url = Some(base_url.clone());
		}
		if let Some(timeout_ms) = cli.timeout_ms {
			self.api.timeout_ms = Some(timeout_ms);
		}
		if let Some(debounce_ms) = cli.debounce_ms {
			self.search.debounce_ms = Some(debounce_ms);
		}
		if let Some(page_refresh) = cli.page_refresh {
			self.search.page_refresh = Some(page_refresh.as_str().to_string());
		}
		if let Some(query) = &cli.initial_query {
			self.search.initial_query = Some(query.clone());
		}
		if let Some(title) = &cli.title {
			self.ui.title = Some(title.clone());
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
		if let Some(level) = cli.log_level {
			self.log.level = Some(level.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			api_timeout_ms: detect_source(
				cli.timeout_ms.is_some(),
				self.api.timeout_ms.is_some(),
				"VITRINE__API__TIMEOUT_MS",
				"--timeout-ms",
				"api.timeout_ms",
			),
			search_debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"VITRINE__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
		};

		let base_url = self.resolve_base_url(cli)?;
		let page_refresh = self.resolve_page_refresh(cli)?;
		let theme = self.resolve_theme(cli)?;
		let log_level = self.resolve_log_level(cli)?;

		let config = ResolvedConfig {
			base_url,
			timeout: Duration::from_millis(self.api.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
			debounce: Duration::from_millis(
				self.search.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
			),
			page_refresh,
			initial_query: self.search.initial_query.unwrap_or_default(),
			title: self.ui.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			theme,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}

	fn resolve_base_url(&self, cli: &CliArgs) -> Result<Url, ConfigError> {
		let Some(raw) = self.api.base_url.as_deref() else {
			return Url::parse(DEFAULT_BASE_URL).map_err(|err| {
				ConfigError::invalid(
					"api.base_url",
					DEFAULT_BASE_URL,
					SettingSource::Default,
					err.to_string(),
				)
			});
		};
		let origin = || {
			source_or_key(
				cli.base_url.is_some(),
				"VITRINE__API__BASE_URL",
				"--base-url",
				"api.base_url",
			)
		};
		let url = Url::parse(raw.trim())
			.map_err(|err| ConfigError::invalid("api.base_url", raw, origin(), err.to_string()))?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::invalid(
				"api.base_url",
				raw,
				origin(),
				"scheme must be http or https",
			));
		}
		Ok(url)
	}

	fn resolve_page_refresh(&self, cli: &CliArgs) -> Result<PageRefresh, ConfigError> {
		match self.search.page_refresh.as_deref().map(str::trim) {
			None => Ok(PageRefresh::default()),
			Some(value) if value.eq_ignore_ascii_case("debounced") => Ok(PageRefresh::Debounced),
			Some(value) if value.eq_ignore_ascii_case("immediate") => Ok(PageRefresh::Immediate),
			Some(value) => Err(ConfigError::invalid(
				"search.page_refresh",
				value,
				source_or_key(
					cli.page_refresh.is_some(),
					"VITRINE__SEARCH__PAGE_REFRESH",
					"--page-refresh",
					"search.page_refresh",
				),
				"expected `debounced` or `immediate`",
			)),
		}
	}

	fn resolve_theme(&self, cli: &CliArgs) -> Result<String, ConfigError> {
		let Some(name) = self.ui.theme.as_deref() else {
			return Ok(DEFAULT_THEME.to_string());
		};
		if vitrine_tui::style::by_name(name).is_some() {
			return Ok(name.trim().to_ascii_lowercase());
		}
		let known: Vec<&str> = vitrine_tui::style::names().collect();
		Err(ConfigError::invalid(
			"ui.theme",
			name,
			source_or_key(cli.theme.is_some(), "VITRINE__UI__THEME", "--theme", "ui.theme"),
			format!("unknown theme; expected one of {}", known.join(", ")),
		))
	}

	fn resolve_log_level(&self, cli: &CliArgs) -> Result<LevelFilter, ConfigError> {
		let Some(level) = self.log.level.as_deref() else {
			return Ok(LevelFilter::Info);
		};
		LevelFilter::from_str(level.trim()).map_err(|_| {
			ConfigError::invalid(
				"log.level",
				level,
				source_or_key(
					cli.log_level.is_some(),
					"VITRINE__LOG__LEVEL",
					"--log-level",
					"log.level",
				),
				"expected off, error, warn, info, debug or trace",
			)
		})
	}
}

fn source_or_key(
	cli_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> SettingSource {
	detect_source(cli_present, true, env_var, cli_flag, key)
		.unwrap_or(SettingSource::ConfigKey(key))
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
