// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terraform provider for authentik.
//!
//! Each resource and data source translates a flat attribute map into calls
//! on [`authentik_api::ApiClient`] and writes the server's answer back.
//! Planning, diffing and state storage belong to the host runtime.

pub mod config;
pub mod data_sources;
pub mod error;
pub mod helpers;
pub mod plugin;
pub mod provider;
pub mod resources;

pub use error::{ProviderError, Result};
pub use provider::{AuthentikProvider, Operation, Request, Response, Target};
