// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SCIM providers (`/providers/scim/`), addressed by integer pk.

use std::fmt;

use authentik_common_config::REDACTED;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ScimProvider {
	pub pk: i64,
	pub name: String,
	pub url: String,
	#[serde(default)]
	pub token: Option<String>,
	#[serde(default)]
	pub property_mappings: Vec<String>,
	#[serde(default)]
	pub property_mappings_group: Vec<String>,
	#[serde(default)]
	pub exclude_users_service_account: bool,
	#[serde(default)]
	pub filter_group: Option<String>,
}

impl fmt::Debug for ScimProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScimProvider")
			.field("pk", &self.pk)
			.field("name", &self.name)
			.field("url", &self.url)
			.field("token", &self.token.as_ref().map(|_| REDACTED))
			.field("property_mappings", &self.property_mappings)
			.field("property_mappings_group", &self.property_mappings_group)
			.field(
				"exclude_users_service_account",
				&self.exclude_users_service_account,
			)
			.field("filter_group", &self.filter_group)
			.finish()
	}
}

#[derive(Clone, PartialEq, Serialize)]
pub struct ScimProviderRequest {
	pub name: String,
	pub url: String,
	pub token: String,
	pub property_mappings: Vec<String>,
	pub property_mappings_group: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exclude_users_service_account: Option<bool>,
	pub filter_group: Option<String>,
}

impl fmt::Debug for ScimProviderRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScimProviderRequest")
			.field("name", &self.name)
			.field("url", &self.url)
			.field("token", &REDACTED)
			.field("property_mappings", &self.property_mappings)
			.field("property_mappings_group", &self.property_mappings_group)
			.field(
				"exclude_users_service_account",
				&self.exclude_users_service_account,
			)
			.field("filter_group", &self.filter_group)
			.finish()
	}
}
