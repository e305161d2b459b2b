// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource lifecycles against a mocked authentik API.
//!
//! Tests cover:
//! - create followed by read round-trips every attribute
//! - unset optional fields are omitted, or sent as `null` where clearing is needed
//! - a 404 on read or update drops the object from state and makes delete idempotent
//! - mutating requests are sent once even when retries are enabled
//! - HTTP errors surface verbatim as diagnostics

mod support;

use serde_json::json;
use terraform_provider_authentik::{AuthentikProvider, Operation};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{client, group, object, retrying_client};

#[tokio::test]
async fn group_create_round_trips_through_read() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/api/v3/core/groups/"))
		.and(header("authorization", "Bearer test-token"))
		.and(body_json(json!({
			"name": "ops",
			"is_superuser": false,
			"parent": null,
			"users": [1],
			"attributes": {"team": "ops"},
		})))
		.respond_with(ResponseTemplate::new(201).set_body_json(group("g-1", "ops")))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/core/groups/g-1/"))
		.and(query_param("include_users", "false"))
		.respond_with(ResponseTemplate::new(200).set_body_json(group("g-1", "ops")))
		.expect(1)
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_group",
			Operation::Create,
			None,
			object(json!({"name": "ops", "users": [1], "attributes": "{\"team\": \"ops\"}"})),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["id"], "g-1");
	assert_eq!(state["name"], "ops");
	assert_eq!(state["is_superuser"], false);
	assert_eq!(state["parent"], json!(null));
	assert_eq!(state["users"], json!([1]));
	assert_eq!(state["attributes"], "{\"team\":\"ops\"}");
}

#[tokio::test]
async fn read_of_deleted_object_clears_state() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v3/stages/authenticator/static/s-1/"))
		.respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_stage_authenticator_static",
			Operation::Read,
			Some("s-1".to_string()),
			object(json!({"name": "static"})),
		)
		.await
		.unwrap();

	assert!(state.is_none());
}

#[tokio::test]
async fn delete_is_idempotent() {
	let server = MockServer::start().await;
	Mock::given(method("DELETE"))
		.and(path("/api/v3/policies/bindings/b-1/"))
		.respond_with(ResponseTemplate::new(204))
		.up_to_n_times(1)
		.mount(&server)
		.await;
	Mock::given(method("DELETE"))
		.and(path("/api/v3/policies/bindings/b-1/"))
		.respond_with(ResponseTemplate::new(404))
		.mount(&server)
		.await;

	let provider = AuthentikProvider::new();
	let client = client(&server);
	for _ in 0..2 {
		let state = provider
			.run_resource(
				&client,
				"authentik_policy_binding",
				Operation::Delete,
				Some("b-1".to_string()),
				object(json!({"target": "app", "order": 0})),
			)
			.await
			.unwrap();
		assert!(state.is_none());
	}
}

#[tokio::test]
async fn policy_binding_sends_unset_subjects_as_null() {
	let server = MockServer::start().await;
	let binding = json!({
		"pk": "b-1",
		"policy": null,
		"group": "g-1",
		"user": null,
		"target": "app-1",
		"negate": false,
		"enabled": true,
		"order": 5,
		"timeout": 30,
		"failure_result": false,
	});
	Mock::given(method("PUT"))
		.and(path("/api/v3/policies/bindings/b-1/"))
		.and(body_json(json!({
			"policy": null,
			"group": "g-1",
			"user": null,
			"target": "app-1",
			"negate": false,
			"enabled": true,
			"order": 5,
			"timeout": 30,
			"failure_result": false,
		})))
		.respond_with(ResponseTemplate::new(200).set_body_json(binding.clone()))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/policies/bindings/b-1/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(binding))
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_policy_binding",
			Operation::Update,
			Some("b-1".to_string()),
			object(json!({"target": "app-1", "group": "g-1", "order": 5})),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["group"], "g-1");
	assert_eq!(state["policy"], json!(null));
	assert_eq!(state["user"], json!(null));
	assert_eq!(state["timeout"], 30);
}

#[tokio::test]
async fn saml_mapping_omits_unset_friendly_name() {
	let server = MockServer::start().await;
	let mapping = json!({
		"pk": "m-1",
		"managed": null,
		"name": "email",
		"expression": "return request.user.email",
		"saml_name": "email",
		"friendly_name": null,
	});
	Mock::given(method("POST"))
		.and(path("/api/v3/propertymappings/saml/"))
		.and(body_json(json!({
			"name": "email",
			"saml_name": "email",
			"expression": "return request.user.email\n",
		})))
		.respond_with(ResponseTemplate::new(201).set_body_json(mapping.clone()))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/propertymappings/saml/m-1/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(mapping))
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_property_mapping_saml",
			Operation::Create,
			None,
			object(json!({
				"name": "email",
				"saml_name": "email",
				"expression": "return request.user.email\n",
			})),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["id"], "m-1");
	assert!(state.get("friendly_name").is_none());
	assert_eq!(state["expression"], "return request.user.email");
}

#[tokio::test]
async fn oauth_source_is_keyed_by_slug() {
	let server = MockServer::start().await;
	let source = json!({
		"pk": "5f0c-uuid",
		"name": "GitHub",
		"slug": "github",
		"enabled": true,
		"authentication_flow": "auth-flow",
		"enrollment_flow": "enroll-flow",
		"policy_engine_mode": "any",
		"user_matching_mode": "identifier",
		"user_path_template": "goauthentik.io/sources/%(slug)s",
		"provider_type": "github",
		"request_token_url": null,
		"authorization_url": null,
		"access_token_url": null,
		"profile_url": null,
		"consumer_key": "client-id",
		"callback_url": "/source/oauth/callback/github/",
		"additional_scopes": "",
		"oidc_well_known_url": "",
		"oidc_jwks_url": "",
		"oidc_jwks": {},
	});
	Mock::given(method("POST"))
		.and(path("/api/v3/sources/oauth/"))
		.respond_with(ResponseTemplate::new(201).set_body_json(source.clone()))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/sources/oauth/github/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(source))
		.expect(1)
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_source_oauth",
			Operation::Create,
			None,
			object(json!({
				"name": "GitHub",
				"slug": "github",
				"authentication_flow": "auth-flow",
				"enrollment_flow": "enroll-flow",
				"provider_type": "github",
				"consumer_key": "client-id",
				"consumer_secret": "client-secret",
			})),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["id"], "github");
	assert_eq!(state["uuid"], "5f0c-uuid");
	assert_eq!(state["callback_uri"], "/source/oauth/callback/github/");
	assert_eq!(state["oidc_jwks"], "{}");
	assert_eq!(state["consumer_secret"], "client-secret");
}

#[tokio::test]
async fn scim_provider_uses_integer_ids() {
	let server = MockServer::start().await;
	let provider_json = json!({
		"pk": 42,
		"name": "scim",
		"url": "http://localhost",
		"token": "foo",
		"property_mappings": [],
		"property_mappings_group": [],
		"exclude_users_service_account": false,
		"filter_group": null,
	});
	Mock::given(method("GET"))
		.and(path("/api/v3/providers/scim/42/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(provider_json))
		.expect(1)
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_provider_scim",
			Operation::Import,
			Some("42".to_string()),
			Default::default(),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["id"], "42");
	assert_eq!(state["name"], "scim");
	assert_eq!(state["token"], "foo");
}

#[tokio::test]
async fn http_errors_become_diagnostics() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/api/v3/stages/authenticator/static/"))
		.respond_with(ResponseTemplate::new(400).set_body_string("{\"name\":[\"exists\"]}"))
		.mount(&server)
		.await;

	let diags = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_stage_authenticator_static",
			Operation::Create,
			None,
			object(json!({"name": "static"})),
		)
		.await
		.unwrap_err();

	let summaries: Vec<_> = diags.iter().map(|d| d.summary.clone()).collect();
	assert_eq!(
		summaries,
		vec![
			"HTTP Error '400 Bad Request' during request 'POST /api/v3/stages/authenticator/static/': \"{\"name\":[\"exists\"]}\"".to_string()
		]
	);
}

#[tokio::test]
async fn invalid_config_never_reaches_the_api() {
	let server = MockServer::start().await;

	let diags = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_stage_authenticator_validate",
			Operation::Create,
			None,
			object(json!({"not_configured_action": "skip", "device_classes": "totp"})),
		)
		.await
		.unwrap_err();

	assert!(diags.has_error());
	assert_eq!(diags.len(), 2);
	assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_of_vanished_object_clears_state() {
	let server = MockServer::start().await;
	Mock::given(method("PUT"))
		.and(path("/api/v3/stages/authenticator/static/s-1/"))
		.respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/stages/authenticator/static/s-1/"))
		.respond_with(ResponseTemplate::new(404))
		.expect(0)
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_stage_authenticator_static",
			Operation::Update,
			Some("s-1".to_string()),
			object(json!({"name": "static"})),
		)
		.await
		.unwrap();

	assert!(state.is_none());
}

#[tokio::test]
async fn create_is_not_retried_on_transient_failure() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/api/v3/stages/authenticator/static/"))
		.respond_with(ResponseTemplate::new(503))
		.expect(1)
		.mount(&server)
		.await;

	let diags = AuthentikProvider::new()
		.run_resource(
			&retrying_client(&server, 3),
			"authentik_stage_authenticator_static",
			Operation::Create,
			None,
			object(json!({"name": "static"})),
		)
		.await
		.unwrap_err();

	assert!(diags.has_error());
	assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn static_stage_create_round_trips_through_read() {
	let server = MockServer::start().await;
	let stage = json!({
		"pk": "s-1",
		"name": "static",
		"configure_flow": "flow-1",
		"token_count": 6,
	});
	Mock::given(method("POST"))
		.and(path("/api/v3/stages/authenticator/static/"))
		.and(body_json(json!({
			"name": "static",
			"configure_flow": "flow-1",
			"token_count": 6,
		})))
		.respond_with(ResponseTemplate::new(201).set_body_json(stage.clone()))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/stages/authenticator/static/s-1/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(stage))
		.expect(1)
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_stage_authenticator_static",
			Operation::Create,
			None,
			object(json!({"name": "static", "configure_flow": "flow-1"})),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["id"], "s-1");
	assert_eq!(state["name"], "static");
	assert_eq!(state["configure_flow"], "flow-1");
	assert_eq!(state["token_count"], 6);
}

#[tokio::test]
async fn validate_stage_create_round_trips_through_read() {
	let server = MockServer::start().await;
	let stage = json!({
		"pk": "v-1",
		"name": "mfa",
		"not_configured_action": "configure",
		"device_classes": ["totp", "webauthn"],
		"configuration_stages": ["s-1"],
		"last_auth_threshold": "seconds=0",
		"webauthn_user_verification": "preferred",
	});
	Mock::given(method("POST"))
		.and(path("/api/v3/stages/authenticator/validate/"))
		.and(body_json(json!({
			"name": "mfa",
			"not_configured_action": "configure",
			"device_classes": ["totp", "webauthn"],
			"configuration_stages": ["s-1"],
			"last_auth_threshold": "seconds=0",
			"webauthn_user_verification": "preferred",
		})))
		.respond_with(ResponseTemplate::new(201).set_body_json(stage.clone()))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/stages/authenticator/validate/v-1/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(stage))
		.expect(1)
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_stage_authenticator_validate",
			Operation::Create,
			None,
			object(json!({
				"name": "mfa",
				"not_configured_action": "configure",
				"device_classes": ["totp", "webauthn"],
				"configuration_stages": ["s-1"],
			})),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["id"], "v-1");
	assert_eq!(state["not_configured_action"], "configure");
	assert_eq!(state["device_classes"], json!(["totp", "webauthn"]));
	assert_eq!(state["configuration_stages"], json!(["s-1"]));
	assert_eq!(state["webauthn_user_verification"], "preferred");
}

#[tokio::test]
async fn validate_stage_sends_empty_device_classes() {
	let server = MockServer::start().await;
	let stage = json!({
		"pk": "v-1",
		"name": "mfa",
		"not_configured_action": "skip",
		"device_classes": [],
		"configuration_stages": [],
		"last_auth_threshold": "seconds=0",
		"webauthn_user_verification": "preferred",
	});
	Mock::given(method("PUT"))
		.and(path("/api/v3/stages/authenticator/validate/v-1/"))
		.and(body_json(json!({
			"name": "mfa",
			"not_configured_action": "skip",
			"device_classes": [],
			"configuration_stages": [],
			"last_auth_threshold": "seconds=0",
			"webauthn_user_verification": "preferred",
		})))
		.respond_with(ResponseTemplate::new(200).set_body_json(stage.clone()))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v3/stages/authenticator/validate/v-1/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(stage))
		.mount(&server)
		.await;

	let state = AuthentikProvider::new()
		.run_resource(
			&client(&server),
			"authentik_stage_authenticator_validate",
			Operation::Update,
			Some("v-1".to_string()),
			object(json!({"name": "mfa", "not_configured_action": "skip"})),
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(state["device_classes"], json!([]));
}
