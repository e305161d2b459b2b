// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::GroupListQuery;
use authentik_api::ApiClient;
use serde_json::Value;
use tracing::debug;

use super::group::{group_schema, group_to_map};
use crate::error::Result;
use crate::plugin::{Attribute, AttributeType, Block, DataSource, ResourceData};

/// `authentik_groups`: every group matching the filters.
pub struct GroupsDataSource;

fn groups_to_query(data: &ResourceData) -> GroupListQuery {
	GroupListQuery {
		attributes: data.get_ok_string("attributes"),
		is_superuser: data.get_ok_bool("is_superuser"),
		members_by_pk: data.get_ok_int_list("members_by_pk").unwrap_or_default(),
		members_by_username: data
			.get_ok_string_list("members_by_username")
			.unwrap_or_default(),
		name: data.get_ok_string("name"),
		ordering: data.get_ok_string("ordering"),
		search: data.get_ok_string("search"),
		include_users: None,
	}
}

#[async_trait]
impl DataSource for GroupsDataSource {
	fn schema(&self) -> Block {
		Block::new()
			.description("Get groups list")
			.attribute("attributes", Attribute::string().optional())
			.attribute("is_superuser", Attribute::bool().optional())
			.attribute("members_by_pk", Attribute::list(AttributeType::Int).optional())
			.attribute(
				"members_by_username",
				Attribute::list(AttributeType::String).optional(),
			)
			.attribute("name", Attribute::string().optional())
			.attribute("ordering", Attribute::string().optional())
			.attribute("search", Attribute::string().optional())
			.attribute("groups", Attribute::nested(group_schema().as_computed()).computed())
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let query = groups_to_query(data);
		let groups = client
			.core_groups_list_all(&query)
			.await?
			.into_iter()
			.map(|group| group_to_map(group).map(Value::Object))
			.collect::<Result<Vec<_>>>()?;

		debug!(count = groups.len(), "groups matched");
		data.set_id("0");
		data.set("groups", groups);
		Ok(())
	}
}
