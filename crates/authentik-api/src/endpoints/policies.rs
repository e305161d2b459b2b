// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::instrument;

use crate::client::{segment, ApiClient, Query};
use crate::error::Result;
use crate::models::{PolicyBinding, PolicyBindingRequest};

const BINDINGS: &str = "policies/bindings/";

impl ApiClient {
	#[instrument(skip(self))]
	pub async fn policies_bindings_retrieve(&self, pk: &str) -> Result<PolicyBinding> {
		self
			.get(&format!("{BINDINGS}{}/", segment(pk)), &Query::new())
			.await
	}

	#[instrument(skip(self, request), fields(target = %request.target))]
	pub async fn policies_bindings_create(
		&self,
		request: &PolicyBindingRequest,
	) -> Result<PolicyBinding> {
		self.post(BINDINGS, request).await
	}

	#[instrument(skip(self, request), fields(target = %request.target))]
	pub async fn policies_bindings_update(
		&self,
		pk: &str,
		request: &PolicyBindingRequest,
	) -> Result<PolicyBinding> {
		self
			.put(&format!("{BINDINGS}{}/", segment(pk)), request)
			.await
	}

	#[instrument(skip(self))]
	pub async fn policies_bindings_destroy(&self, pk: &str) -> Result<()> {
		self.delete(&format!("{BINDINGS}{}/", segment(pk))).await
	}
}
