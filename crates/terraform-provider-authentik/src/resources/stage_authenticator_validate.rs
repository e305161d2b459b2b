// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::{
	AuthenticatorValidateStageRequest, DeviceClass, NotConfiguredAction, UserVerification,
};
use authentik_api::ApiClient;

use crate::error::{ProviderError, Result};
use crate::helpers::{enum_value, found};
use crate::plugin::{Attribute, AttributeType, Block, Resource, ResourceData};

/// `authentik_stage_authenticator_validate`
pub struct ValidateAuthenticatorStageResource;

fn stage_to_request(data: &ResourceData) -> Result<AuthenticatorValidateStageRequest> {
	let device_classes = data
		.get_string_list("device_classes")
		.iter()
		.map(|class| {
			class
				.parse::<DeviceClass>()
				.map_err(|e| ProviderError::invalid_attribute("device_classes", e.to_string()))
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(AuthenticatorValidateStageRequest {
		name: data.get_string("name"),
		not_configured_action: enum_value::<NotConfiguredAction>(data, "not_configured_action")?,
		device_classes,
		configuration_stages: data.get_string_list("configuration_stages"),
		last_auth_threshold: Some(data.get_string("last_auth_threshold")),
		webauthn_user_verification: Some(enum_value::<UserVerification>(
			data,
			"webauthn_user_verification",
		)?),
	})
}

#[async_trait]
impl Resource for ValidateAuthenticatorStageResource {
	fn schema(&self) -> Block {
		Block::new()
			.attribute("name", Attribute::string().required())
			.attribute(
				"not_configured_action",
				Attribute::string()
					.required()
					.description(format!("One of: {}", NotConfiguredAction::VALUES.join(", "))),
			)
			.attribute("device_classes", Attribute::list(AttributeType::String).optional())
			.attribute("configuration_stages", Attribute::list(AttributeType::String).optional())
			.attribute(
				"last_auth_threshold",
				Attribute::string().optional().default("seconds=0"),
			)
			.attribute(
				"webauthn_user_verification",
				Attribute::string().optional().default("preferred"),
			)
	}

	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = stage_to_request(data)?;
		let res = client
			.stages_authenticator_validate_create(&request)
			.await?;
		data.set_id(res.pk);
		self.read(client, data).await
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.stages_authenticator_validate_retrieve(data.id()).await;
		let Some(stage) = found(data, res)? else {
			return Ok(());
		};

		data.set("name", stage.name);
		data.set("not_configured_action", stage.not_configured_action);
		data.set("configuration_stages", stage.configuration_stages);
		data.set("device_classes", stage.device_classes);
		data.set("last_auth_threshold", stage.last_auth_threshold);
		data.set("webauthn_user_verification", stage.webauthn_user_verification);
		Ok(())
	}

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = stage_to_request(data)?;
		let res = client
			.stages_authenticator_validate_update(data.id(), &request)
			.await;
		let Some(stage) = found(data, res)? else {
			return Ok(());
		};
		data.set_id(stage.pk);
		self.read(client, data).await
	}

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.stages_authenticator_validate_destroy(data.id()).await;
		found(data, res)?;
		data.set_id("");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn data(values: serde_json::Value) -> ResourceData {
		let serde_json::Value::Object(values) = values else {
			panic!("object expected");
		};
		ResourceData::new(ValidateAuthenticatorStageResource.schema(), values)
	}

	#[test]
	fn unknown_device_class_is_an_attribute_error() {
		let err = stage_to_request(&data(json!({
			"name": "mfa",
			"not_configured_action": "skip",
			"device_classes": ["totp", "carrier-pigeon"],
		})))
		.unwrap_err();
		assert!(matches!(err, ProviderError::InvalidAttribute { ref attribute, .. } if attribute == "device_classes"));
	}

	#[test]
	fn defaults_apply() {
		let req = stage_to_request(&data(json!({"name": "mfa", "not_configured_action": "deny"}))).unwrap();
		assert_eq!(req.not_configured_action, NotConfiguredAction::Deny);
		assert!(req.device_classes.is_empty());
		assert_eq!(req.last_auth_threshold.as_deref(), Some("seconds=0"));
		assert_eq!(req.webauthn_user_verification, Some(UserVerification::Preferred));
	}
}
