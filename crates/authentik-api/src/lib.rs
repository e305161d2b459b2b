// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed client for the authentik REST API.
//!
//! One method per server operation (list / retrieve / create / update /
//! destroy), grouped by API area under [`endpoints`]. Request and response
//! shapes live in [`models`].

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pagination;

pub use authentik_common_http::RetryConfig;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use pagination::{Paginated, Pagination};
pub use reqwest::StatusCode;
