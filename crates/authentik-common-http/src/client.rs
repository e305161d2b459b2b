// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client builder with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Product token sent in front of the provider version.
pub const USER_AGENT_PREFIX: &str = "authentik-terraform";

/// Creates a client builder carrying the provider User-Agent.
///
/// Callers add TLS, timeout and default headers before building.
///
/// # Example
/// ```ignore
/// let client = authentik_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the provider User-Agent string.
///
/// Format: `authentik-terraform/{version}`
pub fn user_agent() -> String {
	format!("{USER_AGENT_PREFIX}/{}", env!("CARGO_PKG_VERSION"))
}
