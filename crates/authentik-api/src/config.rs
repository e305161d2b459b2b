// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Connection settings for the authentik API client.

use std::collections::BTreeMap;
use std::time::Duration;

use authentik_common_config::{Secret, SecretString};
use authentik_common_http::RetryConfig;
use url::Url;

use crate::error::ApiError;

const API_PREFIX: &str = "api/v3/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build an [`ApiClient`](crate::ApiClient).
///
/// The token is held as a [`SecretString`]; `Debug` output never contains it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
	/// Instance root, e.g. `https://authentik.example.com/`
	url: Url,
	token: SecretString,
	/// Skip TLS certificate verification
	pub insecure: bool,
	/// Extra headers sent with every request
	pub headers: BTreeMap<String, String>,
	pub timeout: Duration,
	/// Applied to GET requests only
	pub retry_config: RetryConfig,
}

impl ApiConfig {
	/// Create a configuration for the instance at `url`.
	///
	/// The URL must be absolute http(s). A trailing slash is added so the API
	/// prefix joins below any sub-path the instance is served from.
	pub fn new(url: &str, token: impl Into<String>) -> Result<Self, ApiError> {
		Ok(Self {
			url: Self::normalize_url(url)?,
			token: Secret::new(token.into()),
			insecure: false,
			headers: BTreeMap::new(),
			timeout: DEFAULT_TIMEOUT,
			retry_config: RetryConfig::default(),
		})
	}

	fn normalize_url(raw: &str) -> Result<Url, ApiError> {
		let trimmed = raw.trim().trim_end_matches('/');
		if trimmed.is_empty() {
			return Err(ApiError::config("authentik URL is empty"));
		}

		let url = Url::parse(&format!("{trimmed}/"))
			.map_err(|e| ApiError::config(format!("invalid authentik URL '{raw}': {e}")))?;

		match url.scheme() {
			"http" | "https" => {}
			other => {
				return Err(ApiError::config(format!(
					"authentik URL must use http or https, got '{other}'"
				)))
			}
		}

		if url.host_str().is_none() {
			return Err(ApiError::config("authentik URL must include a host"));
		}

		Ok(url)
	}

	pub fn with_insecure(mut self, insecure: bool) -> Self {
		self.insecure = insecure;
		self
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
		self.retry_config = config;
		self
	}

	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Root of the v3 API, e.g. `https://authentik.example.com/api/v3/`.
	pub fn api_base(&self) -> Url {
		// The prefix is a static relative path, joining it onto a valid base
		// with a trailing slash cannot fail.
		self.url.join(API_PREFIX).unwrap_or_else(|_| self.url.clone())
	}

	pub(crate) fn token(&self) -> &str {
		self.token.expose()
	}
}
