// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One `impl ApiClient` block per API area.
//!
//! Paths are relative to the `api/v3/` base and always end in `/`, as the
//! server redirects slash-less paths.

mod groups;
mod policies;
mod propertymappings;
mod providers;
mod sources;
mod stages;
