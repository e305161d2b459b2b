// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The contract between the host runtime and the resource handlers.
//!
//! The host owns planning, diffing and state. Handlers only translate a
//! [`ResourceData`] into API calls and write the server's answer back.

mod data;
mod diagnostics;
mod schema;
mod validate;

use async_trait::async_trait;
use authentik_api::ApiClient;

use crate::error::Result;

pub use data::{is_zero, ResourceData};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use schema::{Attribute, AttributeType, Block, DiffSuppressFn};
pub use validate::validate;

/// A managed object type with a full create/read/update/delete lifecycle.
#[async_trait]
pub trait Resource: Send + Sync {
	fn schema(&self) -> Block;

	/// Create the object and set the id. State is re-read afterwards.
	async fn create(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()>;

	/// Refresh `data` from the server. Clears the id if the object is gone.
	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()>;

	async fn update(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()>;

	async fn delete(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()>;

	/// Pass-through import: the imported id is the resource id.
	async fn import(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()> {
		self.read(client, data).await
	}
}

/// A read-only query.
#[async_trait]
pub trait DataSource: Send + Sync {
	fn schema(&self) -> Block;

	async fn read(&self, client: &ApiClient, data: &mut ResourceData) -> Result<()>;
}
