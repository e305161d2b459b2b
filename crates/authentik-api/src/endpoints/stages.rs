// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::instrument;

use crate::client::{segment, ApiClient, Query};
use crate::error::Result;
use crate::models::{
	AuthenticatorStaticStage, AuthenticatorStaticStageRequest, AuthenticatorValidateStage,
	AuthenticatorValidateStageRequest,
};

const STATIC: &str = "stages/authenticator/static/";
const VALIDATE: &str = "stages/authenticator/validate/";

impl ApiClient {
	#[instrument(skip(self))]
	pub async fn stages_authenticator_static_retrieve(
		&self,
		pk: &str,
	) -> Result<AuthenticatorStaticStage> {
		self
			.get(&format!("{STATIC}{}/", segment(pk)), &Query::new())
			.await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn stages_authenticator_static_create(
		&self,
		request: &AuthenticatorStaticStageRequest,
	) -> Result<AuthenticatorStaticStage> {
		self.post(STATIC, request).await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn stages_authenticator_static_update(
		&self,
		pk: &str,
		request: &AuthenticatorStaticStageRequest,
	) -> Result<AuthenticatorStaticStage> {
		self.put(&format!("{STATIC}{}/", segment(pk)), request).await
	}

	#[instrument(skip(self))]
	pub async fn stages_authenticator_static_destroy(&self, pk: &str) -> Result<()> {
		self.delete(&format!("{STATIC}{}/", segment(pk))).await
	}

	#[instrument(skip(self))]
	pub async fn stages_authenticator_validate_retrieve(
		&self,
		pk: &str,
	) -> Result<AuthenticatorValidateStage> {
		self
			.get(&format!("{VALIDATE}{}/", segment(pk)), &Query::new())
			.await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn stages_authenticator_validate_create(
		&self,
		request: &AuthenticatorValidateStageRequest,
	) -> Result<AuthenticatorValidateStage> {
		self.post(VALIDATE, request).await
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn stages_authenticator_validate_update(
		&self,
		pk: &str,
		request: &AuthenticatorValidateStageRequest,
	) -> Result<AuthenticatorValidateStage> {
		self
			.put(&format!("{VALIDATE}{}/", segment(pk)), request)
			.await
	}

	#[instrument(skip(self))]
	pub async fn stages_authenticator_validate_destroy(&self, pk: &str) -> Result<()> {
		self.delete(&format!("{VALIDATE}{}/", segment(pk))).await
	}
}
