// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod group;
mod groups;
mod property_mapping_ldap;

pub use group::GroupDataSource;
pub use groups::GroupsDataSource;
pub use property_mapping_ldap::LdapPropertyMappingDataSource;
