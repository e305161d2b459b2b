// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the authentik provider.
//!
//! This crate provides:
//! - A pre-configured HTTP client builder with the provider User-Agent
//! - Retry logic with exponential backoff for idempotent requests

mod client;
mod retry;

pub use client::{builder, user_agent, USER_AGENT_PREFIX};
pub use retry::{retry, RetryConfig, RetryableError};
