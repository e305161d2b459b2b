// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::instrument;

use crate::client::{segment, ApiClient, Query};
use crate::error::Result;
use crate::models::{
	LdapPropertyMapping, LdapPropertyMappingListQuery, SamlPropertyMapping,
	SamlPropertyMappingRequest,
};

const SAML: &str = "propertymappings/saml/";
const LDAP: &str = "propertymappings/ldap/";

impl ApiClient {
	#[instrument(skip(self))]
	pub async fn propertymappings_saml_retrieve(&self, pk: &str) -> Result<SamlPropertyMapping> {
		self
			.get(&format!("{SAML}{}/", segment(pk)), &Query::new())
			.await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn propertymappings_saml_create(
		&self,
		request: &SamlPropertyMappingRequest,
	) -> Result<SamlPropertyMapping> {
		self.post(SAML, request).await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn propertymappings_saml_update(
		&self,
		pk: &str,
		request: &SamlPropertyMappingRequest,
	) -> Result<SamlPropertyMapping> {
		self.put(&format!("{SAML}{}/", segment(pk)), request).await
	}

	#[instrument(skip(self))]
	pub async fn propertymappings_saml_destroy(&self, pk: &str) -> Result<()> {
		self.delete(&format!("{SAML}{}/", segment(pk))).await
	}

	/// Every LDAP property mapping matching `query`, across all pages.
	#[instrument(skip(self))]
	pub async fn propertymappings_ldap_list(
		&self,
		query: &LdapPropertyMappingListQuery,
	) -> Result<Vec<LdapPropertyMapping>> {
		self.list_all(LDAP, &query.to_query()).await
	}
}
