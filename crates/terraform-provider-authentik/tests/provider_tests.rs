// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end invocations through `AuthentikProvider::invoke`.
//!
//! Tests cover:
//! - the provider block configures the client used for the call
//! - extra headers from the provider block reach the API
//! - operations other than create need an id
//! - unknown types come back as error diagnostics
//! - responses serialize to the `{state, diagnostics}` envelope

mod support;

use serde_json::json;
use terraform_provider_authentik::{AuthentikProvider, Operation, Request, Target};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{group, object};

fn request(server: &MockServer, id: Option<&str>) -> Request {
	Request {
		provider: object(json!({
			"url": server.uri(),
			"token": "block-token",
			"headers": {"X-Tenant": "blue"},
			"timeout": 10,
		})),
		id: id.map(str::to_string),
		config: object(json!({"name": "ops"})),
	}
}

#[tokio::test]
async fn invoke_reads_with_configured_client() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v3/core/groups/g-1/"))
		.and(header("authorization", "Bearer block-token"))
		.and(header("x-tenant", "blue"))
		.respond_with(ResponseTemplate::new(200).set_body_json(group("g-1", "ops")))
		.expect(1)
		.mount(&server)
		.await;

	let target = Target::Resource {
		type_name: "authentik_group".to_string(),
		operation: Operation::Read,
	};
	let response = AuthentikProvider::new()
		.invoke(&target, request(&server, Some("g-1")), None)
		.await;

	assert!(response.diagnostics.is_empty());
	let envelope = serde_json::to_value(&response).unwrap();
	assert_eq!(envelope["state"]["id"], "g-1");
	assert_eq!(envelope["diagnostics"], json!([]));
}

#[tokio::test]
async fn invoke_without_id_is_rejected() {
	let server = MockServer::start().await;

	let target = Target::Resource {
		type_name: "authentik_group".to_string(),
		operation: Operation::Delete,
	};
	let response = AuthentikProvider::new()
		.invoke(&target, request(&server, None), None)
		.await;

	assert!(response.state.is_none());
	assert!(response.diagnostics.has_error());
	assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_data_source_is_a_diagnostic() {
	let server = MockServer::start().await;

	let target = Target::DataSource {
		type_name: "authentik_user".to_string(),
	};
	let response = AuthentikProvider::new()
		.invoke(&target, request(&server, None), None)
		.await;

	let envelope = serde_json::to_value(&response).unwrap();
	assert_eq!(envelope["state"], json!(null));
	assert_eq!(envelope["diagnostics"][0]["severity"], "error");
	assert!(envelope["diagnostics"][0]["summary"]
		.as_str()
		.unwrap()
		.contains("authentik_user"));
}
