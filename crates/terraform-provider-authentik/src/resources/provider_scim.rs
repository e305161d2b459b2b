// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::ScimProviderRequest;
use authentik_api::ApiClient;

use crate::error::{ProviderError, Result};
use crate::helpers::found;
use crate::plugin::{Attribute, AttributeType, Block, Resource, ResourceData};

/// `authentik_provider_scim`, identified by its integer pk.
pub struct ScimProviderResource;

fn provider_to_request(data: &ResourceData) -> ScimProviderRequest {
	ScimProviderRequest {
		name: data.get_string("name"),
		url: data.get_string("url"),
		token: data.get_string("token"),
		property_mappings: data.get_string_list("property_mappings"),
		property_mappings_group: data.get_string_list("property_mappings_group"),
		exclude_users_service_account: Some(data.get_bool("exclude_users_service_account")),
		filter_group: data.get_ok_string("filter_group"),
	}
}

fn pk(data: &ResourceData) -> Result<i64> {
	data
		.id()
		.parse()
		.map_err(|e| ProviderError::invalid_attribute("id", format!("'{}' is not an integer: {e}", data.id())))
}

#[async_trait]
impl Resource for ScimProviderResource {
	fn schema(&self) -> Block {
		Block::new()
			.attribute("name", Attribute::string().required())
			.attribute("url", Attribute::string().required())
			.attribute("token", Attribute::string().required().sensitive())
			.attribute("property_mappings", Attribute::list(AttributeType::String).optional())
			.attribute(
				"property_mappings_group",
				Attribute::list(AttributeType::String).optional(),
			)
			.attribute(
				"exclude_users_service_account",
				Attribute::bool().optional().default(false),
			)
			.attribute("filter_group", Attribute::string().optional())
	}

	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client
			.providers_scim_create(&provider_to_request(data))
			.await?;
		data.set_id(res.pk.to_string());
		self.read(client, data).await
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.providers_scim_retrieve(pk(data)?).await;
		let Some(provider) = found(data, res)? else {
			return Ok(());
		};

		data.set("name", provider.name);
		data.set("url", provider.url);
		if provider.token.is_some() {
			data.set("token", provider.token);
		}
		data.set("property_mappings", provider.property_mappings);
		data.set("property_mappings_group", provider.property_mappings_group);
		data.set(
			"exclude_users_service_account",
			provider.exclude_users_service_account,
		);
		data.set("filter_group", provider.filter_group);
		Ok(())
	}

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client
			.providers_scim_update(pk(data)?, &provider_to_request(data))
			.await;
		let Some(provider) = found(data, res)? else {
			return Ok(());
		};
		data.set_id(provider.pk.to_string());
		self.read(client, data).await
	}

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.providers_scim_destroy(pk(data)?).await;
		found(data, res)?;
		data.set_id("");
		Ok(())
	}
}
