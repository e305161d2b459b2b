// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::instrument;

use crate::client::{segment, ApiClient, Query};
use crate::error::Result;
use crate::models::{Group, GroupListQuery, GroupRequest};
use crate::pagination::Paginated;

const GROUPS: &str = "core/groups/";

impl ApiClient {
	/// Fetch a single page of groups.
	#[instrument(skip(self))]
	pub async fn core_groups_list(
		&self,
		query: &GroupListQuery,
		page: u32,
	) -> Result<Paginated<Group>> {
		let mut query = query.to_query();
		query.push(("page", page.to_string()));
		self.get(GROUPS, &query).await
	}

	/// Fetch every page of groups matching `query`.
	#[instrument(skip(self))]
	pub async fn core_groups_list_all(&self, query: &GroupListQuery) -> Result<Vec<Group>> {
		self.list_all(GROUPS, &query.to_query()).await
	}

	#[instrument(skip(self))]
	pub async fn core_groups_retrieve(&self, pk: &str, include_users: bool) -> Result<Group> {
		let query: Query = vec![("include_users", include_users.to_string())];
		self
			.get(&format!("{GROUPS}{}/", segment(pk)), &query)
			.await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn core_groups_create(&self, request: &GroupRequest) -> Result<Group> {
		self.post(GROUPS, request).await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn core_groups_update(&self, pk: &str, request: &GroupRequest) -> Result<Group> {
		self
			.put(&format!("{GROUPS}{}/", segment(pk)), request)
			.await
	}

	#[instrument(skip(self))]
	pub async fn core_groups_destroy(&self, pk: &str) -> Result<()> {
		self.delete(&format!("{GROUPS}{}/", segment(pk))).await
	}
}
