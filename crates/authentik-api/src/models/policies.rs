// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Policy bindings (`/policies/bindings/`).

use serde::{Deserialize, Serialize};

/// Binds exactly one of a policy, a group or a user to a target object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyBinding {
	pub pk: String,
	#[serde(default)]
	pub policy: Option<String>,
	#[serde(default)]
	pub group: Option<String>,
	#[serde(default)]
	pub user: Option<i64>,
	pub target: String,
	#[serde(default)]
	pub negate: bool,
	#[serde(default)]
	pub enabled: bool,
	pub order: i64,
	#[serde(default)]
	pub timeout: i64,
	#[serde(default)]
	pub failure_result: bool,
}

/// `policy`, `group` and `user` are always sent; `null` unbinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyBindingRequest {
	pub policy: Option<String>,
	pub group: Option<String>,
	pub user: Option<i64>,
	pub target: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub negate: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enabled: Option<bool>,
	pub order: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub timeout: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub failure_result: Option<bool>,
}
