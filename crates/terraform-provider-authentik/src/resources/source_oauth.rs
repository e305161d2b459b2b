// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::{OAuthSourceRequest, PolicyEngineMode, UserMatchingMode};
use authentik_api::ApiClient;

use crate::error::Result;
use crate::helpers::{diff_suppress_json, enum_value, found, json_object, json_string};
use crate::plugin::{Attribute, Block, Resource, ResourceData};

const MANUAL_URL: &str = "Manually configure OAuth2 URLs when `oidc_well_known_url` is not set.";

/// `authentik_source_oauth`, identified by slug.
pub struct OAuthSourceResource;

fn source_to_request(data: &ResourceData) -> Result<OAuthSourceRequest> {
	let oidc_jwks = if data.get_string("oidc_jwks").is_empty() {
		None
	} else {
		Some(json_object(data, "oidc_jwks")?)
	};

	Ok(OAuthSourceRequest {
		name: data.get_string("name"),
		slug: data.get_string("slug"),
		enabled: data.get_bool("enabled"),
		authentication_flow: Some(data.get_string("authentication_flow")),
		enrollment_flow: Some(data.get_string("enrollment_flow")),
		policy_engine_mode: enum_value::<PolicyEngineMode>(data, "policy_engine_mode")?,
		user_matching_mode: enum_value::<UserMatchingMode>(data, "user_matching_mode")?,
		user_path_template: data.get_string("user_path_template"),
		provider_type: data.get_string("provider_type"),
		request_token_url: data.get_ok_string("request_token_url"),
		authorization_url: data.get_ok_string("authorization_url"),
		access_token_url: data.get_ok_string("access_token_url"),
		profile_url: data.get_ok_string("profile_url"),
		consumer_key: data.get_string("consumer_key"),
		consumer_secret: data.get_string("consumer_secret"),
		additional_scopes: data.get_ok_string("additional_scopes"),
		oidc_well_known_url: data.get_ok_string("oidc_well_known_url"),
		oidc_jwks_url: data.get_ok_string("oidc_jwks_url"),
		oidc_jwks,
	})
}

#[async_trait]
impl Resource for OAuthSourceResource {
	fn schema(&self) -> Block {
		Block::new()
			.attribute("name", Attribute::string().required())
			.attribute("uuid", Attribute::string().optional().computed())
			.attribute("slug", Attribute::string().required())
			.attribute(
				"user_path_template",
				Attribute::string()
					.optional()
					.default("goauthentik.io/sources/%(slug)s"),
			)
			.attribute("authentication_flow", Attribute::string().required())
			.attribute("enrollment_flow", Attribute::string().required())
			.attribute("enabled", Attribute::bool().optional().default(true))
			.attribute(
				"policy_engine_mode",
				Attribute::string()
					.optional()
					.default(PolicyEngineMode::Any.as_str()),
			)
			.attribute(
				"user_matching_mode",
				Attribute::string()
					.optional()
					.default(UserMatchingMode::Identifier.as_str()),
			)
			.attribute("provider_type", Attribute::string().required())
			.attribute("request_token_url", Attribute::string().optional().description(MANUAL_URL))
			.attribute("authorization_url", Attribute::string().optional().description(MANUAL_URL))
			.attribute(
				"access_token_url",
				Attribute::string().optional().description("Only required for OAuth1."),
			)
			.attribute("profile_url", Attribute::string().optional().description(MANUAL_URL))
			.attribute(
				"oidc_well_known_url",
				Attribute::string().optional().description(
					"Automatically configure source from OIDC well-known endpoint. URL is taken as is, and should end with `.well-known/openid-configuration`.",
				),
			)
			.attribute(
				"oidc_jwks_url",
				Attribute::string()
					.optional()
					.description("Automatically configure JWKS if not specified by `oidc_well_known_url`."),
			)
			.attribute(
				"oidc_jwks",
				Attribute::string()
					.optional()
					.computed()
					.diff_suppress(diff_suppress_json)
					.description("Manually configure JWKS keys for use with machine-to-machine authentication. JSON format expected."),
			)
			.attribute("additional_scopes", Attribute::string().optional())
			.attribute("consumer_key", Attribute::string().required())
			.attribute("consumer_secret", Attribute::string().required().sensitive())
			.attribute("callback_uri", Attribute::string().computed())
	}

	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = source_to_request(data)?;
		let res = client.sources_oauth_create(&request).await?;
		data.set_id(res.slug);
		self.read(client, data).await
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.sources_oauth_retrieve(data.id()).await;
		let Some(source) = found(data, res)? else {
			return Ok(());
		};

		data.set("name", source.name);
		data.set("slug", source.slug);
		data.set("uuid", source.pk);
		data.set("user_path_template", source.user_path_template);
		if source.authentication_flow.is_some() {
			data.set("authentication_flow", source.authentication_flow);
		}
		if source.enrollment_flow.is_some() {
			data.set("enrollment_flow", source.enrollment_flow);
		}
		data.set("enabled", source.enabled);
		data.set("policy_engine_mode", source.policy_engine_mode);
		data.set("user_matching_mode", source.user_matching_mode);
		data.set("additional_scopes", source.additional_scopes);
		data.set("provider_type", source.provider_type);
		data.set("consumer_key", source.consumer_key);
		for (key, url) in [
			("request_token_url", source.request_token_url),
			("authorization_url", source.authorization_url),
			("access_token_url", source.access_token_url),
			("profile_url", source.profile_url),
		] {
			if url.is_some() {
				data.set(key, url);
			}
		}
		data.set("callback_uri", source.callback_url);
		data.set("oidc_well_known_url", source.oidc_well_known_url.unwrap_or_default());
		data.set("oidc_jwks_url", source.oidc_jwks_url.unwrap_or_default());
		data.set(
			"oidc_jwks",
			json_string("oidc_jwks", &source.oidc_jwks.unwrap_or_default())?,
		);
		Ok(())
	}

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let request = source_to_request(data)?;
		let res = client.sources_oauth_update(data.id(), &request).await;
		let Some(source) = found(data, res)? else {
			return Ok(());
		};
		data.set_id(source.slug);
		self.read(client, data).await
	}

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let res = client.sources_oauth_destroy(data.id()).await;
		found(data, res)?;
		data.set_id("");
		Ok(())
	}
}
