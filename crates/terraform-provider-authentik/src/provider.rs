// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The provider registry and the entry point the host calls into.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use authentik_api::ApiClient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info, instrument};

use crate::config::{self, ProviderConfigLayer};
use crate::data_sources::{GroupDataSource, GroupsDataSource, LdapPropertyMappingDataSource};
use crate::error::ProviderError;
use crate::plugin::{
	validate, Attribute, AttributeType, Block, DataSource, Diagnostics, Resource, ResourceData,
};
use crate::resources::{
	GroupResource, OAuthSourceResource, PolicyBindingResource, SamlPropertyMappingResource,
	ScimProviderResource, StaticAuthenticatorStageResource, ValidateAuthenticatorStageResource,
};

/// Lifecycle operation on a managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
	Create,
	Read,
	Update,
	Delete,
	Import,
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Operation::Create => "create",
			Operation::Read => "read",
			Operation::Update => "update",
			Operation::Delete => "delete",
			Operation::Import => "import",
		};
		f.write_str(name)
	}
}

/// What an invocation addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	Resource {
		type_name: String,
		operation: Operation,
	},
	DataSource {
		type_name: String,
	},
}

/// Input of one invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Request {
	/// The provider block.
	#[serde(default)]
	pub provider: Map<String, Value>,
	/// Id of the existing object; required for everything but `create`.
	#[serde(default)]
	pub id: Option<String>,
	/// Resource or data-source attributes.
	#[serde(default)]
	pub config: Map<String, Value>,
}

/// Output of one invocation. `state` is `null` when the object does not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
	pub state: Option<Value>,
	pub diagnostics: Diagnostics,
}

fn check(diags: Diagnostics) -> Result<(), Diagnostics> {
	if diags.has_error() {
		Err(diags)
	} else {
		Ok(())
	}
}

pub struct AuthentikProvider {
	resources: BTreeMap<&'static str, Box<dyn Resource>>,
	data_sources: BTreeMap<&'static str, Box<dyn DataSource>>,
}

impl Default for AuthentikProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl AuthentikProvider {
	pub fn new() -> Self {
		let mut resources: BTreeMap<&'static str, Box<dyn Resource>> = BTreeMap::new();
		resources.insert("authentik_group", Box::new(GroupResource));
		resources.insert("authentik_policy_binding", Box::new(PolicyBindingResource));
		resources.insert(
			"authentik_property_mapping_saml",
			Box::new(SamlPropertyMappingResource),
		);
		resources.insert("authentik_provider_scim", Box::new(ScimProviderResource));
		resources.insert("authentik_source_oauth", Box::new(OAuthSourceResource));
		resources.insert(
			"authentik_stage_authenticator_static",
			Box::new(StaticAuthenticatorStageResource),
		);
		resources.insert(
			"authentik_stage_authenticator_validate",
			Box::new(ValidateAuthenticatorStageResource),
		);

		let mut data_sources: BTreeMap<&'static str, Box<dyn DataSource>> = BTreeMap::new();
		data_sources.insert("authentik_group", Box::new(GroupDataSource));
		data_sources.insert("authentik_groups", Box::new(GroupsDataSource));
		data_sources.insert(
			"authentik_property_mapping_ldap",
			Box::new(LdapPropertyMappingDataSource),
		);

		Self {
			resources,
			data_sources,
		}
	}

	/// Schema of the provider block.
	pub fn schema(&self) -> Block {
		Block::new()
			.attribute(
				"url",
				Attribute::string().optional().description(format!(
					"The authentik API endpoint, can optionally be passed as `{}` environmental variable",
					config::ENV_URL
				)),
			)
			.attribute(
				"token",
				Attribute::string().optional().sensitive().description(format!(
					"The authentik API token, can optionally be passed as `{}` environmental variable",
					config::ENV_TOKEN
				)),
			)
			.attribute(
				"insecure",
				Attribute::bool().optional().default(false).description(format!(
					"Whether to skip TLS verification, can optionally be passed as `{}` environmental variable",
					config::ENV_INSECURE
				)),
			)
			.attribute(
				"headers",
				Attribute::map(AttributeType::String)
					.optional()
					.description("Optional HTTP headers sent with every request"),
			)
			.attribute(
				"timeout",
				Attribute::int()
					.optional()
					.description("Per-request timeout in seconds, defaults to 30"),
			)
	}

	/// Every schema the provider declares, for the host.
	pub fn schemas(&self) -> Value {
		let resources: Map<String, Value> = self
			.resources
			.iter()
			.map(|(name, r)| (name.to_string(), json!(r.schema())))
			.collect();
		let data_sources: Map<String, Value> = self
			.data_sources
			.iter()
			.map(|(name, d)| (name.to_string(), json!(d.schema())))
			.collect();
		json!({
			"provider": self.schema(),
			"resources": resources,
			"data_sources": data_sources,
		})
	}

	pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.resources.keys().copied()
	}

	pub fn data_source_types(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.data_sources.keys().copied()
	}

	pub fn resource(&self, type_name: &str) -> Result<&dyn Resource, ProviderError> {
		self
			.resources
			.get(type_name)
			.map(|r| r.as_ref())
			.ok_or_else(|| ProviderError::UnknownResource(type_name.to_string()))
	}

	pub fn data_source(&self, type_name: &str) -> Result<&dyn DataSource, ProviderError> {
		self
			.data_sources
			.get(type_name)
			.map(|d| d.as_ref())
			.ok_or_else(|| ProviderError::UnknownDataSource(type_name.to_string()))
	}

	/// Validate the provider block, layer it over the file and environment,
	/// and build the API client.
	pub fn configure(
		&self,
		config_file: Option<&Path>,
		block: Map<String, Value>,
	) -> Result<ApiClient, Diagnostics> {
		check(validate(&self.schema(), &block))?;
		let layer: ProviderConfigLayer = serde_json::from_value(Value::Object(block))
			.map_err(|e| ProviderError::json("provider", e))?;
		let api_config = config::resolve(config_file, layer)?;
		let client = ApiClient::new(&api_config).map_err(ProviderError::from)?;
		info!(url = %api_config.url(), "provider configured");
		Ok(client)
	}

	/// Run one operation and report the resulting state.
	pub async fn invoke(&self, target: &Target, request: Request, config_file: Option<&Path>) -> Response {
		match self.try_invoke(target, request, config_file).await {
			Ok(state) => Response {
				state,
				diagnostics: Diagnostics::new(),
			},
			Err(diagnostics) => Response {
				state: None,
				diagnostics,
			},
		}
	}

	async fn try_invoke(
		&self,
		target: &Target,
		request: Request,
		config_file: Option<&Path>,
	) -> Result<Option<Value>, Diagnostics> {
		let client = self.configure(config_file, request.provider)?;
		match target {
			Target::Resource {
				type_name,
				operation,
			} => {
				self
					.run_resource(&client, type_name, *operation, request.id, request.config)
					.await
			}
			Target::DataSource { type_name } => {
				self.run_data_source(&client, type_name, request.config).await
			}
		}
	}

	/// Dispatch a resource operation against an already configured client.
	#[instrument(skip(self, client, id, config), fields(id))]
	pub async fn run_resource(
		&self,
		client: &ApiClient,
		type_name: &str,
		operation: Operation,
		id: Option<String>,
		config: Map<String, Value>,
	) -> Result<Option<Value>, Diagnostics> {
		let resource = self.resource(type_name)?;
		let schema = resource.schema();

		if matches!(operation, Operation::Create | Operation::Update) {
			check(validate(&schema, &config))?;
		}

		let id = id.unwrap_or_default();
		if id.is_empty() && operation != Operation::Create {
			return Err(ProviderError::invalid_attribute("id", format!("an id is required to {operation}")).into());
		}
		tracing::Span::current().record("id", id.as_str());

		let mut data = ResourceData::new(schema, config).with_id(id);
		match operation {
			Operation::Create => resource.create(client, &mut data).await?,
			Operation::Read => resource.read(client, &mut data).await?,
			Operation::Update => resource.update(client, &mut data).await?,
			Operation::Delete => resource.delete(client, &mut data).await?,
			Operation::Import => resource.import(client, &mut data).await?,
		}

		debug!(gone = data.id().is_empty(), "resource operation finished");
		Ok(data.to_state())
	}

	/// Read a data source against an already configured client.
	#[instrument(skip(self, client, config))]
	pub async fn run_data_source(
		&self,
		client: &ApiClient,
		type_name: &str,
		config: Map<String, Value>,
	) -> Result<Option<Value>, Diagnostics> {
		let data_source = self.data_source(type_name)?;
		let schema = data_source.schema();
		check(validate(&schema, &config))?;

		let mut data = ResourceData::new(schema, config);
		data_source.read(client, &mut data).await?;
		Ok(data.to_state())
	}
}
