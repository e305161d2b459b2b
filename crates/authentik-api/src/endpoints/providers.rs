// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::instrument;

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::models::{ScimProvider, ScimProviderRequest};

const SCIM: &str = "providers/scim/";

impl ApiClient {
	#[instrument(skip(self))]
	pub async fn providers_scim_retrieve(&self, pk: i64) -> Result<ScimProvider> {
		self.get(&format!("{SCIM}{pk}/"), &Query::new()).await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn providers_scim_create(&self, request: &ScimProviderRequest) -> Result<ScimProvider> {
		self.post(SCIM, request).await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn providers_scim_update(
		&self,
		pk: i64,
		request: &ScimProviderRequest,
	) -> Result<ScimProvider> {
		self.put(&format!("{SCIM}{pk}/"), request).await
	}

	#[instrument(skip(self))]
	pub async fn providers_scim_destroy(&self, pk: i64) -> Result<()> {
		self.delete(&format!("{SCIM}{pk}/")).await
	}
}
