// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::AuthenticatorStaticStageRequest;
use authentik_api::ApiClient;

use crate::error::Result;
use crate::helpers::found;
use crate::plugin::{Attribute, Block, Resource, ResourceData};

/// `authentik_stage_authenticator_static`
pub struct StaticAuthenticatorStageResource;

fn stage_to_request(data: &ResourceData) -> AuthenticatorStaticStageRequest {
	AuthenticatorStaticStageRequest {
		name: data.get_string("name"),
		configure_flow: data.get_ok_string("configure_flow"),
		token_count: Some(data.get_int("token_count")),
	}
}

#[async_trait]
impl Resource for StaticAuthenticatorStageResource {
	fn schema(&self) -> Block {
		Block::new()
			.attribute("name", Attribute::string().required())
			.attribute("configure_flow", Attribute::string().optional())
			.attribute("token_count", Attribute::int().optional().default(6))
	}

	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client
			.stages_authenticator_static_create(&stage_to_request(data))
			.await?;
		data.set_id(res.pk);
		self.read(client, data).await
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.stages_authenticator_static_retrieve(data.id()).await;
		let Some(stage) = found(data, res)? else {
			return Ok(());
		};

		data.set("name", stage.name);
		data.set("token_count", stage.token_count);
		if stage.configure_flow.is_some() {
			data.set("configure_flow", stage.configure_flow);
		}
		Ok(())
	}

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = stage_to_request(data);
		let res = client
			.stages_authenticator_static_update(data.id(), &request)
			.await;
		let Some(stage) = found(data, res)? else {
			return Ok(());
		};
		data.set_id(stage.pk);
		self.read(client, data).await
	}

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.stages_authenticator_static_destroy(data.id()).await;
		found(data, res)?;
		data.set_id("");
		Ok(())
	}
}
