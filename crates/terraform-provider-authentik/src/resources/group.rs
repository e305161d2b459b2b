// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::GroupRequest;
use authentik_api::ApiClient;

use crate::error::Result;
use crate::helpers::{diff_suppress_json, found, json_object, json_string};
use crate::plugin::{Attribute, AttributeType, Block, Resource, ResourceData};

/// `authentik_group`
pub struct GroupResource;

fn group_to_request(data: &ResourceData) -> Result<GroupRequest> {
	Ok(GroupRequest {
		name: data.get_string("name"),
		is_superuser: Some(data.get_bool("is_superuser")),
		parent: data.get_ok_string("parent"),
		users: data.get_int_list("users"),
		attributes: json_object(data, "attributes")?,
	})
}

#[async_trait]
impl Resource for GroupResource {
	fn schema(&self) -> Block {
		Block::new()
			.attribute("name", Attribute::string().required())
			.attribute("is_superuser", Attribute::bool().optional().default(false))
			.attribute("parent", Attribute::string().optional())
			.attribute("users", Attribute::list(AttributeType::Int).optional())
			.attribute(
				"attributes",
				Attribute::string()
					.optional()
					.default("{}")
					.diff_suppress(diff_suppress_json),
			)
	}

	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = group_to_request(data)?;
		let res = client.core_groups_create(&request).await?;
		data.set_id(res.pk);
		self.read(client, data).await
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.core_groups_retrieve(data.id(), false).await;
		let Some(group) = found(data, res)? else {
			return Ok(());
		};

		data.set("name", group.name);
		data.set("is_superuser", group.is_superuser);
		data.set("parent", group.parent);
		data.set("users", group.users);
		data.set("attributes", json_string("attributes", &group.attributes)?);
		Ok(())
	}

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = group_to_request(data)?;
		let res = client.core_groups_update(data.id(), &request).await;
		let Some(group) = found(data, res)? else {
			return Ok(());
		};
		data.set_id(group.pk);
		self.read(client, data).await
	}

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.core_groups_destroy(data.id()).await;
		found(data, res)?;
		data.set_id("");
		Ok(())
	}
}
