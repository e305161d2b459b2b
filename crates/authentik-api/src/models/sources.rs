// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OAuth sources (`/sources/oauth/`), addressed by slug.

use std::fmt;

use authentik_common_config::REDACTED;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

string_enum! {
	/// How multiple bound policies combine.
	PolicyEngineMode {
		All => "all",
		Any => "any",
	}
}

string_enum! {
	/// How an incoming identity is matched against existing users.
	UserMatchingMode {
		Identifier => "identifier",
		EmailLink => "email_link",
		EmailDeny => "email_deny",
		UsernameLink => "username_link",
		UsernameDeny => "username_deny",
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthSource {
	pub pk: String,
	pub name: String,
	pub slug: String,
	#[serde(default)]
	pub enabled: bool,
	#[serde(default)]
	pub authentication_flow: Option<String>,
	#[serde(default)]
	pub enrollment_flow: Option<String>,
	pub policy_engine_mode: PolicyEngineMode,
	pub user_matching_mode: UserMatchingMode,
	#[serde(default)]
	pub user_path_template: String,
	pub provider_type: String,
	#[serde(default)]
	pub request_token_url: Option<String>,
	#[serde(default)]
	pub authorization_url: Option<String>,
	#[serde(default)]
	pub access_token_url: Option<String>,
	#[serde(default)]
	pub profile_url: Option<String>,
	pub consumer_key: String,
	#[serde(default)]
	pub callback_url: String,
	#[serde(default)]
	pub additional_scopes: Option<String>,
	#[serde(default)]
	pub oidc_well_known_url: Option<String>,
	#[serde(default)]
	pub oidc_jwks_url: Option<String>,
	#[serde(default)]
	pub oidc_jwks: Option<Map<String, Value>>,
}

/// Optional URLs and scopes are omitted when unset; the flows are always sent.
#[derive(Clone, PartialEq, Serialize)]
pub struct OAuthSourceRequest {
	pub name: String,
	pub slug: String,
	pub enabled: bool,
	pub authentication_flow: Option<String>,
	pub enrollment_flow: Option<String>,
	pub policy_engine_mode: PolicyEngineMode,
	pub user_matching_mode: UserMatchingMode,
	pub user_path_template: String,
	pub provider_type: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request_token_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile_url: Option<String>,
	pub consumer_key: String,
	pub consumer_secret: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_scopes: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub oidc_well_known_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub oidc_jwks_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub oidc_jwks: Option<Map<String, Value>>,
}

impl fmt::Debug for OAuthSourceRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OAuthSourceRequest")
			.field("name", &self.name)
			.field("slug", &self.slug)
			.field("enabled", &self.enabled)
			.field("authentication_flow", &self.authentication_flow)
			.field("enrollment_flow", &self.enrollment_flow)
			.field("policy_engine_mode", &self.policy_engine_mode)
			.field("user_matching_mode", &self.user_matching_mode)
			.field("provider_type", &self.provider_type)
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret", &REDACTED)
			.finish_non_exhaustive()
	}
}
