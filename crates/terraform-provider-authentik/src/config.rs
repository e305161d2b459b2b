// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider configuration.
//!
//! Layers in increasing precedence: defaults, TOML file, environment,
//! the provider block sent by the host.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use authentik_api::ApiConfig;
use authentik_common_config::{env_bool, env_string, load_secret_env, load_toml_file, ConfigError, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

pub const ENV_URL: &str = "AUTHENTIK_URL";
pub const ENV_TOKEN: &str = "AUTHENTIK_TOKEN";
pub const ENV_INSECURE: &str = "AUTHENTIK_INSECURE";

/// Partial provider configuration from one source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfigLayer {
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub token: Option<SecretString>,
	#[serde(default)]
	pub insecure: Option<bool>,
	#[serde(default)]
	pub headers: Option<BTreeMap<String, String>>,
	/// Per-request timeout in seconds.
	#[serde(default)]
	pub timeout: Option<u64>,
}

impl ProviderConfigLayer {
	/// Read `AUTHENTIK_URL`, `AUTHENTIK_TOKEN` (or `AUTHENTIK_TOKEN_FILE`) and
	/// `AUTHENTIK_INSECURE`.
	pub fn from_env() -> std::result::Result<Self, ConfigError> {
		Ok(Self {
			url: env_string(ENV_URL),
			token: load_secret_env(ENV_TOKEN)?,
			insecure: env_bool(ENV_INSECURE),
			headers: None,
			timeout: None,
		})
	}

	pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
		debug!(path = %path.display(), "loading provider config file");
		load_toml_file(path)
	}

	pub fn merge(&mut self, other: ProviderConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.token.is_some() {
			self.token = other.token;
		}
		if other.insecure.is_some() {
			self.insecure = other.insecure;
		}
		if other.headers.is_some() {
			self.headers = other.headers;
		}
		if other.timeout.is_some() {
			self.timeout = other.timeout;
		}
	}

	pub fn finalize(self) -> Result<ApiConfig> {
		let url = self
			.url
			.filter(|u| !u.trim().is_empty())
			.ok_or_else(|| ConfigError::missing_field("url"))?;
		let token = self
			.token
			.filter(|t| !t.expose().is_empty())
			.ok_or_else(|| ConfigError::missing_field("token"))?;

		let mut config = ApiConfig::new(&url, token.expose().as_str())?
			.with_insecure(self.insecure.unwrap_or(false));
		for (name, value) in self.headers.unwrap_or_default() {
			config = config.with_header(name, value);
		}
		if let Some(secs) = self.timeout.filter(|secs| *secs > 0) {
			config = config.with_timeout(Duration::from_secs(secs));
		}
		Ok(config)
	}
}

/// Resolve the API configuration from every source.
pub fn resolve(file: Option<&Path>, block: ProviderConfigLayer) -> Result<ApiConfig> {
	let mut layer = ProviderConfigLayer::default();
	if let Some(path) = file {
		layer.merge(ProviderConfigLayer::from_file(path)?);
	}
	layer.merge(ProviderConfigLayer::from_env()?);
	layer.merge(block);
	layer.finalize()
}
