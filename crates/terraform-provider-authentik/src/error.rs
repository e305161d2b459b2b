// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use authentik_api::ApiError;
use authentik_common_config::ConfigError;

use crate::plugin::{Diagnostic, Diagnostics};

pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
	#[error(transparent)]
	Api(#[from] ApiError),

	/// An attribute holding JSON text did not parse.
	#[error("invalid JSON in '{attribute}': {source}")]
	Json {
		attribute: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid value for '{attribute}': {message}")]
	InvalidAttribute { attribute: String, message: String },

	/// A data-source lookup matched nothing.
	#[error("{0}")]
	NoMatch(&'static str),

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("unknown resource type '{0}'")]
	UnknownResource(String),

	#[error("unknown data source type '{0}'")]
	UnknownDataSource(String),
}

impl ProviderError {
	pub fn json(attribute: impl Into<String>, source: serde_json::Error) -> Self {
		Self::Json {
			attribute: attribute.into(),
			source,
		}
	}

	pub fn invalid_attribute(attribute: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidAttribute {
			attribute: attribute.into(),
			message: message.into(),
		}
	}
}

impl From<ProviderError> for Diagnostic {
	fn from(e: ProviderError) -> Self {
		let diagnostic = Diagnostic::error(e.to_string());
		match e {
			ProviderError::Json { attribute, .. }
			| ProviderError::InvalidAttribute { attribute, .. } => diagnostic.with_attribute(attribute),
			_ => diagnostic,
		}
	}
}

impl From<ProviderError> for Diagnostics {
	fn from(e: ProviderError) -> Self {
		Diagnostic::from(e).into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use authentik_api::StatusCode;

	#[test]
	fn api_status_error_keeps_its_message() {
		let e = ProviderError::from(ApiError::Status {
			status: StatusCode::BAD_REQUEST,
			method: "POST".to_string(),
			path: "/api/v3/core/groups/".to_string(),
			body: "{\"name\":[\"This field is required.\"]}".to_string(),
		});
		let diags = Diagnostics::from(e);
		let diag = diags.iter().next().unwrap();
		assert_eq!(
			diag.summary,
			"HTTP Error '400 Bad Request' during request 'POST /api/v3/core/groups/': \"{\"name\":[\"This field is required.\"]}\""
		);
		assert!(diag.attribute.is_none());
	}

	#[test]
	fn json_error_points_at_attribute() {
		let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
		let diag = Diagnostic::from(ProviderError::json("oidc_jwks", source));
		assert_eq!(diag.attribute.as_deref(), Some("oidc_jwks"));
		assert!(diag.summary.starts_with("invalid JSON in 'oidc_jwks'"));
	}
}
