// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::PolicyBindingRequest;
use authentik_api::ApiClient;

use crate::error::Result;
use crate::helpers::found;
use crate::plugin::{Attribute, Block, Resource, ResourceData};

/// `authentik_policy_binding`
pub struct PolicyBindingResource;

/// Unset subjects go out as `null` so an update can unbind them.
fn binding_to_request(data: &ResourceData) -> PolicyBindingRequest {
	PolicyBindingRequest {
		policy: data.get_ok_string("policy"),
		group: data.get_ok_string("group"),
		user: data.get_ok_int("user"),
		target: data.get_string("target"),
		negate: Some(data.get_bool("negate")),
		enabled: Some(data.get_bool("enabled")),
		order: data.get_int("order"),
		timeout: Some(data.get_int("timeout")),
		failure_result: Some(data.get_bool("failure_result")),
	}
}

#[async_trait]
impl Resource for PolicyBindingResource {
	fn schema(&self) -> Block {
		Block::new()
			.attribute(
				"target",
				Attribute::string()
					.required()
					.description("ID of the object this binding should apply to"),
			)
			.attribute("policy", Attribute::string().optional().description("UUID of the policy"))
			.attribute("user", Attribute::int().optional().description("PK of the user"))
			.attribute("group", Attribute::string().optional().description("UUID of the group"))
			.attribute("order", Attribute::int().required())
			.attribute("negate", Attribute::bool().optional().default(false))
			.attribute("enabled", Attribute::bool().optional().default(true))
			.attribute("timeout", Attribute::int().optional().default(30))
			.attribute(
				"failure_result",
				Attribute::bool()
					.optional()
					.default(false)
					.description("Result to use when the policy execution fails"),
			)
	}

	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client
			.policies_bindings_create(&binding_to_request(data))
			.await?;
		data.set_id(res.pk);
		self.read(client, data).await
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.policies_bindings_retrieve(data.id()).await;
		let Some(binding) = found(data, res)? else {
			return Ok(());
		};

		data.set("target", binding.target);
		data.set("policy", binding.policy);
		data.set("user", binding.user);
		data.set("group", binding.group);
		data.set("order", binding.order);
		data.set("negate", binding.negate);
		data.set("enabled", binding.enabled);
		data.set("timeout", binding.timeout);
		data.set("failure_result", binding.failure_result);
		Ok(())
	}

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = binding_to_request(data);
		let res = client.policies_bindings_update(data.id(), &request).await;
		let Some(binding) = found(data, res)? else {
			return Ok(());
		};
		data.set_id(binding.pk);
		self.read(client, data).await
	}

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.policies_bindings_destroy(data.id()).await;
		found(data, res)?;
		data.set_id("");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn defaults_fill_request() {
		let serde_json::Value::Object(values) = json!({"target": "app", "order": 0, "group": "g-1"}) else {
			unreachable!()
		};
		let req = binding_to_request(&ResourceData::new(PolicyBindingResource.schema(), values));
		assert_eq!(req.group.as_deref(), Some("g-1"));
		assert_eq!(req.policy, None);
		assert_eq!(req.user, None);
		assert_eq!(req.enabled, Some(true));
		assert_eq!(req.timeout, Some(30));
		assert_eq!(req.failure_result, Some(false));
	}
}
