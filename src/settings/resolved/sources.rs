use std::fmt;

/// Where an effective setting came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	Default,
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default => write!(f, "built-in default"),
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_timeout_ms: Option<SettingSource>,
	pub(crate) search_debounce_ms: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.api_timeout_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.timeout_ms"))
	}

	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.search_debounce_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.debounce_ms"))
	}
}
