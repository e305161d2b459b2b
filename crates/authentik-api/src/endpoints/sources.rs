// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::instrument;

use crate::client::{segment, ApiClient, Query};
use crate::error::Result;
use crate::models::{OAuthSource, OAuthSourceRequest};

const OAUTH: &str = "sources/oauth/";

impl ApiClient {
	#[instrument(skip(self))]
	pub async fn sources_oauth_retrieve(&self, slug: &str) -> Result<OAuthSource> {
		self
			.get(&format!("{OAUTH}{}/", segment(slug)), &Query::new())
			.await
	}

	#[instrument(skip(self, request), fields(slug = %request.slug))]
	pub async fn sources_oauth_create(&self, request: &OAuthSourceRequest) -> Result<OAuthSource> {
		self.post(OAUTH, request).await
	}

	/// `slug` is the current slug; the request may rename it.
	#[instrument(skip(self, request))]
	pub async fn sources_oauth_update(
		&self,
		slug: &str,
		request: &OAuthSourceRequest,
	) -> Result<OAuthSource> {
		self.put(&format!("{OAUTH}{}/", segment(slug)), request).await
	}

	#[instrument(skip(self))]
	pub async fn sources_oauth_destroy(&self, slug: &str) -> Result<()> {
		self.delete(&format!("{OAUTH}{}/", segment(slug))).await
	}
}
