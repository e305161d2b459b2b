// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the authentik API client.

use authentik_common_http::{RetryConfig, RetryableError};
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when calling the authentik API.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request never produced an HTTP response.
	#[error("HTTP Error '{0}' without http response")]
	Network(#[source] reqwest::Error),

	/// The server answered with a non-2xx status.
	#[error("HTTP Error '{status}' during request '{method} {path}': \"{body}\"")]
	Status {
		status: StatusCode,
		method: String,
		path: String,
		body: String,
	},

	/// The response body could not be decoded.
	#[error("Invalid response during request '{method} {path}': {message}")]
	InvalidResponse {
		method: String,
		path: String,
		message: String,
	},

	/// Client configuration is unusable.
	#[error("Configuration error: {0}")]
	Config(String),
}

impl ApiError {
	/// HTTP status of the failed request, if the server answered.
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			ApiError::Status { status, .. } => Some(*status),
			ApiError::Network(e) => e.status(),
			_ => None,
		}
	}

	/// The object addressed by the request does not exist.
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(StatusCode::NOT_FOUND)
	}

	pub fn config(message: impl Into<String>) -> Self {
		Self::Config(message.into())
	}
}

impl RetryableError for ApiError {
	fn is_retryable(&self) -> bool {
		match self {
			ApiError::Network(e) => e.is_retryable(),
			ApiError::Status { status, .. } => RetryConfig::is_retryable_status(*status),
			ApiError::InvalidResponse { .. } | ApiError::Config(_) => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn status_error(status: StatusCode) -> ApiError {
		ApiError::Status {
			status,
			method: "GET".to_string(),
			path: "/api/v3/core/groups/abc/".to_string(),
			body: "{\"detail\":\"Not found.\"}".to_string(),
		}
	}

	#[test]
	fn status_error_display_names_request() {
		let err = status_error(StatusCode::NOT_FOUND);
		assert_eq!(
			err.to_string(),
			"HTTP Error '404 Not Found' during request 'GET /api/v3/core/groups/abc/': \"{\"detail\":\"Not found.\"}\""
		);
	}

	#[test]
	fn not_found_detection() {
		assert!(status_error(StatusCode::NOT_FOUND).is_not_found());
		assert!(!status_error(StatusCode::FORBIDDEN).is_not_found());
		assert!(!ApiError::config("bad url").is_not_found());
	}

	#[test]
	fn retryable_only_for_transient_statuses() {
		assert!(status_error(StatusCode::SERVICE_UNAVAILABLE).is_retryable());
		assert!(status_error(StatusCode::TOO_MANY_REQUESTS).is_retryable());
		assert!(!status_error(StatusCode::BAD_REQUEST).is_retryable());
		assert!(!status_error(StatusCode::NOT_FOUND).is_retryable());
		assert!(!ApiError::config("x").is_retryable());
	}
}
