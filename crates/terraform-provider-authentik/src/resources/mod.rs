// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Managed resources, one module per authentik object type.

mod group;
mod policy_binding;
mod property_mapping_saml;
mod provider_scim;
mod source_oauth;
mod stage_authenticator_static;
mod stage_authenticator_validate;

pub use group::GroupResource;
pub use policy_binding::PolicyBindingResource;
pub use property_mapping_saml::SamlPropertyMappingResource;
pub use provider_scim::ScimProviderResource;
pub use source_oauth::OAuthSourceResource;
pub use stage_authenticator_static::StaticAuthenticatorStageResource;
pub use stage_authenticator_validate::ValidateAuthenticatorStageResource;
