// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use authentik_api::models::LdapPropertyMappingListQuery;
use authentik_api::ApiClient;

use crate::error::{ProviderError, Result};
use crate::plugin::{Attribute, AttributeType, Block, DataSource, ResourceData};

/// `authentik_property_mapping_ldap`
pub struct LdapPropertyMappingDataSource;

fn mapping_query(data: &ResourceData) -> LdapPropertyMappingListQuery {
	let managed = match data.get_ok_string_list("managed_list") {
		Some(list) => list,
		None => data.get_ok_string("managed").into_iter().collect(),
	};
	LdapPropertyMappingListQuery {
		managed,
		name: data.get_ok_string("name"),
		object_field: data.get_ok_string("object_field"),
	}
}

#[async_trait]
impl DataSource for LdapPropertyMappingDataSource {
	fn schema(&self) -> Block {
		Block::new()
			.description("Get LDAP Property mappings")
			.attribute(
				"name",
				Attribute::string().optional().conflicts_with(&["managed_list"]),
			)
			.attribute("managed", Attribute::string().optional())
			.attribute(
				"managed_list",
				Attribute::list(AttributeType::String)
					.optional()
					.description("Retrieve multiple property mappings"),
			)
			.attribute(
				"ids",
				Attribute::list(AttributeType::String)
					.optional()
					.computed()
					.description("List of ids when `managed_list` is set."),
			)
			.attribute("object_field", Attribute::string().optional().computed())
			.attribute("expression", Attribute::string().computed())
	}

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		let mappings = client
			.propertymappings_ldap_list(&mapping_query(data))
			.await?;

		let Some(first) = mappings.first() else {
			return Err(ProviderError::NoMatch("No matching mappings found"));
		};

		if data.get_ok("managed_list").is_some() {
			data.set_id("-1");
			let ids: Vec<&str> = mappings.iter().map(|m| m.pk.as_str()).collect();
			data.set("ids", ids);
		} else {
			data.set_id(first.pk.clone());
			data.set("name", &first.name);
			data.set("expression", &first.expression);
			data.set("object_field", &first.object_field);
		}
		Ok(())
	}
}
