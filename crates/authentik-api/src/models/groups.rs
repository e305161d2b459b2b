// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Groups (`/core/groups/`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::Query;

/// A user as embedded in a group response (`users_obj`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
	pub pk: i64,
	pub username: String,
	pub name: String,
	#[serde(default)]
	pub is_active: bool,
	#[serde(default)]
	pub last_login: Option<String>,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub attributes: Map<String, Value>,
	#[serde(default)]
	pub uid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
	pub pk: String,
	pub num_pk: i64,
	pub name: String,
	#[serde(default)]
	pub is_superuser: bool,
	#[serde(default)]
	pub parent: Option<String>,
	#[serde(default)]
	pub parent_name: Option<String>,
	#[serde(default)]
	pub users: Vec<i64>,
	/// `null` unless the request asked for `include_users`.
	#[serde(default)]
	pub users_obj: Option<Vec<GroupMember>>,
	#[serde(default)]
	pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRequest {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_superuser: Option<bool>,
	pub parent: Option<String>,
	pub users: Vec<i64>,
	pub attributes: Map<String, Value>,
}

/// Filters accepted by the group list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupListQuery {
	pub attributes: Option<String>,
	pub is_superuser: Option<bool>,
	pub members_by_pk: Vec<i64>,
	pub members_by_username: Vec<String>,
	pub name: Option<String>,
	pub ordering: Option<String>,
	pub search: Option<String>,
	pub include_users: Option<bool>,
}

impl GroupListQuery {
	pub fn to_query(&self) -> Query {
		let mut query = Query::new();
		if let Some(attributes) = &self.attributes {
			query.push(("attributes", attributes.clone()));
		}
		if let Some(include_users) = self.include_users {
			query.push(("include_users", include_users.to_string()));
		}
		if let Some(is_superuser) = self.is_superuser {
			query.push(("is_superuser", is_superuser.to_string()));
		}
		for pk in &self.members_by_pk {
			query.push(("members_by_pk", pk.to_string()));
		}
		for username in &self.members_by_username {
			query.push(("members_by_username", username.clone()));
		}
		if let Some(name) = &self.name {
			query.push(("name", name.clone()));
		}
		if let Some(ordering) = &self.ordering {
			query.push(("ordering", ordering.clone()));
		}
		if let Some(search) = &self.search {
			query.push(("search", search.clone()));
		}
		query
	}
}
