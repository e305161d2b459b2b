// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Property mappings (`/propertymappings/saml/`, `/propertymappings/ldap/`).

use serde::{Deserialize, Serialize};

use crate::client::Query;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamlPropertyMapping {
	pub pk: String,
	#[serde(default)]
	pub managed: Option<String>,
	pub name: String,
	pub expression: String,
	pub saml_name: String,
	#[serde(default)]
	pub friendly_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamlPropertyMappingRequest {
	pub name: String,
	pub expression: String,
	pub saml_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub friendly_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdapPropertyMapping {
	pub pk: String,
	#[serde(default)]
	pub managed: Option<String>,
	pub name: String,
	pub expression: String,
	pub object_field: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LdapPropertyMappingListQuery {
	/// Matches any of the given managed identifiers.
	pub managed: Vec<String>,
	pub name: Option<String>,
	pub object_field: Option<String>,
}

impl LdapPropertyMappingListQuery {
	pub fn to_query(&self) -> Query {
		let mut query = Query::new();
		for managed in &self.managed {
			query.push(("managed", managed.clone()));
		}
		if let Some(name) = &self.name {
			query.push(("name", name.clone()));
		}
		if let Some(object_field) = &self.object_field {
			query.push(("object_field", object_field.clone()));
		}
		query
	}
}
