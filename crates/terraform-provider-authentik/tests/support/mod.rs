// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared fixtures for tests against a mocked authentik API.

#![allow(dead_code)]

use std::time::Duration;

use authentik_api::{ApiClient, ApiConfig, RetryConfig};
use serde_json::{json, Map, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub fn client(server: &MockServer) -> ApiClient {
	let config = ApiConfig::new(&server.uri(), TOKEN)
		.unwrap()
		.with_retry_config(RetryConfig::disabled());
	ApiClient::new(&config).unwrap()
}

/// A client that retries transient failures quickly.
pub fn retrying_client(server: &MockServer, max_attempts: u32) -> ApiClient {
	let config = ApiConfig::new(&server.uri(), TOKEN)
		.unwrap()
		.with_retry_config(RetryConfig {
			max_attempts,
			base_delay: Duration::from_millis(1),
			max_delay: Duration::from_millis(2),
			backoff_factor: 2.0,
			jitter: false,
		});
	ApiClient::new(&config).unwrap()
}

pub fn object(value: Value) -> Map<String, Value> {
	match value {
		Value::Object(map) => map,
		other => panic!("expected a JSON object, got {other}"),
	}
}

pub fn group(pk: &str, name: &str) -> Value {
	json!({
		"pk": pk,
		"num_pk": 1,
		"name": name,
		"is_superuser": false,
		"parent": null,
		"parent_name": null,
		"users": [1],
		"users_obj": null,
		"attributes": {"team": "ops"},
	})
}

pub fn page(results: Vec<Value>, current: i64, next: i64) -> Value {
	json!({
		"pagination": {
			"next": next,
			"previous": current - 1,
			"count": results.len(),
			"current": current,
			"total_pages": if next == 0 { current } else { next },
			"start_index": 1,
			"end_index": results.len(),
		},
		"results": results,
	})
}
