// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authenticator stages (`/stages/authenticator/static/`, `/stages/authenticator/validate/`).

use serde::{Deserialize, Serialize};

string_enum! {
	/// What the validate stage does when the user has no device configured.
	NotConfiguredAction {
		Skip => "skip",
		Deny => "deny",
		Configure => "configure",
	}
}

string_enum! {
	DeviceClass {
		Static => "static",
		Totp => "totp",
		Webauthn => "webauthn",
		Duo => "duo",
		Sms => "sms",
		Email => "email",
	}
}

string_enum! {
	UserVerification {
		Required => "required",
		Preferred => "preferred",
		Discouraged => "discouraged",
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatorStaticStage {
	pub pk: String,
	pub name: String,
	#[serde(default)]
	pub configure_flow: Option<String>,
	#[serde(default)]
	pub token_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatorStaticStageRequest {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub configure_flow: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatorValidateStage {
	pub pk: String,
	pub name: String,
	pub not_configured_action: NotConfiguredAction,
	#[serde(default)]
	pub device_classes: Vec<DeviceClass>,
	#[serde(default)]
	pub configuration_stages: Vec<String>,
	#[serde(default)]
	pub last_auth_threshold: String,
	pub webauthn_user_verification: UserVerification,
}

/// `device_classes` is always sent, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatorValidateStageRequest {
	pub name: String,
	pub not_configured_action: NotConfiguredAction,
	pub device_classes: Vec<DeviceClass>,
	pub configuration_stages: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_auth_threshold: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub webauthn_user_verification: Option<UserVerification>,
}
