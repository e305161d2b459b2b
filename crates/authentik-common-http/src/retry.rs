// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exponential backoff for idempotent HTTP requests.
//!
//! Only reads go through [`retry`]. A POST, PUT or DELETE that times out may
//! still have been applied by authentik, so those are sent exactly once.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

/// How often and how patiently a request is repeated.
#[derive(Debug, Clone)]
pub struct RetryConfig {
	/// Total attempts including the first one. `0` and `1` both mean a single try.
	pub max_attempts: u32,
	pub base_delay: Duration,
	pub max_delay: Duration,
	pub backoff_factor: f64,
	/// Spread each delay over `[delay / 2, delay]`.
	pub jitter: bool,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_attempts: 3,
			base_delay: Duration::from_millis(200),
			max_delay: Duration::from_secs(5),
			backoff_factor: 2.0,
			jitter: true,
		}
	}
}

impl RetryConfig {
	pub fn disabled() -> Self {
		Self {
			max_attempts: 1,
			..Self::default()
		}
	}

	/// Rate limiting, request timeouts and gateway or server hiccups.
	pub fn is_retryable_status(status: StatusCode) -> bool {
		status == StatusCode::TOO_MANY_REQUESTS
			|| status == StatusCode::REQUEST_TIMEOUT
			|| matches!(status.as_u16(), 500 | 502 | 503 | 504)
	}

	/// Pause before retry number `retry` (1-based). Never longer than `max_delay`.
	pub fn delay_for(&self, retry: u32) -> Duration {
		let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
		let ceiling = self.max_delay.as_secs_f64();
		let mut secs = (self.base_delay.as_secs_f64() * self.backoff_factor.powi(exponent)).min(ceiling);
		if !secs.is_finite() {
			secs = ceiling;
		}
		if self.jitter {
			secs *= 0.5 + fastrand::f64() / 2.0;
		}
		Duration::from_secs_f64(secs)
	}
}

pub trait RetryableError {
	fn is_retryable(&self) -> bool;
}

impl RetryableError for reqwest::Error {
	fn is_retryable(&self) -> bool {
		self.is_timeout()
			|| self.is_connect()
			|| self.status().is_some_and(RetryConfig::is_retryable_status)
	}
}

/// Await `op` until it succeeds, fails permanently, or `cfg.max_attempts`
/// is used up. The last error is returned.
pub async fn retry<F, Fut, T, E>(cfg: &RetryConfig, mut op: F) -> Result<T, E>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = Result<T, E>>,
	E: RetryableError + std::fmt::Debug,
{
	let attempts = cfg.max_attempts.max(1);
	let mut attempt = 1;

	loop {
		let err = match op().await {
			Ok(value) => return Ok(value),
			Err(err) => err,
		};

		if !err.is_retryable() {
			return Err(err);
		}
		if attempt >= attempts {
			if attempts > 1 {
				warn!(error = ?err, attempts, "request still failing, giving up");
			}
			return Err(err);
		}

		let delay = cfg.delay_for(attempt);
		debug!(error = ?err, attempt, attempts, delay_ms = delay.as_millis() as u64, "transient failure, backing off");
		tokio::time::sleep(delay).await;
		attempt += 1;
	}
}
