// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::SamlPropertyMappingRequest;
use authentik_api::ApiClient;

use crate::error::Result;
use crate::helpers::{diff_suppress_expression, found};
use crate::plugin::{Attribute, Block, Resource, ResourceData};

/// `authentik_property_mapping_saml`
pub struct SamlPropertyMappingResource;

fn mapping_to_request(data: &ResourceData) -> SamlPropertyMappingRequest {
	SamlPropertyMappingRequest {
		name: data.get_string("name"),
		saml_name: data.get_string("saml_name"),
		expression: data.get_string("expression"),
		friendly_name: data.get_ok_string("friendly_name"),
	}
}

#[async_trait]
impl Resource for SamlPropertyMappingResource {
	fn schema(&self) -> Block {
		Block::new()
			.attribute("name", Attribute::string().required())
			.attribute("saml_name", Attribute::string().required())
			.attribute("friendly_name", Attribute::string().optional())
			.attribute(
				"expression",
				Attribute::string()
					.required()
					.diff_suppress(diff_suppress_expression),
			)
	}

	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client
			.propertymappings_saml_create(&mapping_to_request(data))
			.await?;
		data.set_id(res.pk);
		self.read(client, data).await
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.propertymappings_saml_retrieve(data.id()).await;
		let Some(mapping) = found(data, res)? else {
			return Ok(());
		};

		data.set("name", mapping.name);
		data.set("expression", mapping.expression);
		data.set("saml_name", mapping.saml_name);
		if mapping.friendly_name.is_some() {
			data.set("friendly_name", mapping.friendly_name);
		}
		Ok(())
	}

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = mapping_to_request(data);
		let res = client
			.propertymappings_saml_update(data.id(), &request)
			.await;
		let Some(mapping) = found(data, res)? else {
			return Ok(());
		};
		data.set_id(mapping.pk);
		self.read(client, data).await
	}

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.propertymappings_saml_destroy(data.id()).await;
		found(data, res)?;
		data.set_id("");
		Ok(())
	}
}
