// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::{Group, GroupListQuery, GroupMember};
use authentik_api::ApiClient;
use serde_json::{json, Map, Value};

use crate::error::{ProviderError, Result};
use crate::helpers::json_string;
use crate::plugin::{Attribute, AttributeType, Block, DataSource, ResourceData};

/// `authentik_group`: look up one group by name or pk.
pub struct GroupDataSource;

fn member_schema() -> Block {
	Block::new()
		.attribute("pk", Attribute::int().computed())
		.attribute("username", Attribute::string().computed())
		.attribute("name", Attribute::string().computed())
		.attribute("is_active", Attribute::bool().computed())
		.attribute("last_login", Attribute::string().computed())
		.attribute("email", Attribute::string().computed())
		.attribute("attributes", Attribute::string().computed())
		.attribute("uid", Attribute::string().computed())
}

pub(crate) fn group_schema() -> Block {
	Block::new()
		.description("Get groups by pk or name")
		.attribute(
			"pk",
			Attribute::string()
				.optional()
				.computed()
				.exactly_one_of(&["pk", "name"]),
		)
		.attribute("num_pk", Attribute::int().computed())
		.attribute(
			"name",
			Attribute::string()
				.optional()
				.computed()
				.exactly_one_of(&["pk", "name"]),
		)
		.attribute("is_superuser", Attribute::bool().computed())
		.attribute("parent", Attribute::string().computed())
		.attribute("parent_name", Attribute::string().computed())
		.attribute("users", Attribute::list(AttributeType::Int).computed())
		.attribute(
			"include_users",
			Attribute::bool()
				.optional()
				.default(true)
				.description("Whether to include group members. Note that depending on group size, this can make the query take longer"),
		)
		.attribute("users_obj", Attribute::nested(member_schema()).computed())
		.attribute("attributes", Attribute::string().computed())
}

fn member_to_map(member: GroupMember) -> Result<Value> {
	Ok(json!({
		"pk": member.pk,
		"username": member.username,
		"name": member.name,
		"is_active": member.is_active,
		"last_login": member.last_login,
		"email": member.email,
		"attributes": json_string("users_obj.attributes", &member.attributes)?,
		"uid": member.uid,
	}))
}

/// Flatten a group into the attribute map of [`group_schema`].
pub(crate) fn group_to_map(group: Group) -> Result<Map<String, Value>> {
	let users_obj = group
		.users_obj
		.unwrap_or_default()
		.into_iter()
		.map(member_to_map)
		.collect::<Result<Vec<_>>>()?;

	let mut map = Map::new();
	map.insert("pk".to_string(), json!(group.pk));
	map.insert("num_pk".to_string(), json!(group.num_pk));
	map.insert("name".to_string(), json!(group.name));
	map.insert("is_superuser".to_string(), json!(group.is_superuser));
	map.insert("parent".to_string(), json!(group.parent));
	map.insert("parent_name".to_string(), json!(group.parent_name));
	map.insert("users".to_string(), json!(group.users));
	map.insert("users_obj".to_string(), Value::Array(users_obj));
	map.insert(
		"attributes".to_string(),
		json!(json_string("attributes", &group.attributes)?),
	);
	Ok(map)
}

#[async_trait]
impl DataSource for GroupDataSource {
	fn schema(&self) -> Block {
		group_schema()
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let include_users = data.get_bool("include_users");

		let group = if let Some(pk) = data.get_ok_string("pk") {
			client.core_groups_retrieve(&pk, include_users).await?
		} else {
			let query = GroupListQuery {
				name: data.get_ok_string("name"),
				include_users: Some(include_users),
				..Default::default()
			};
			client
				.core_groups_list(&query, 1)
				.await?
				.results
				.into_iter()
				.next()
				.ok_or(ProviderError::NoMatch("No matching groups found"))?
		};

		data.set_id(group.pk.clone());
		for (key, value) in group_to_map(group)? {
			data.set(&key, value);
		}
		Ok(())
	}
}
