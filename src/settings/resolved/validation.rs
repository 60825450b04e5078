use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.debounce.is_zero() {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			"0",
			sources.source_for_debounce(),
			"must be greater than zero",
		));
	}

	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"api.timeout_ms",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	Ok(())
}
