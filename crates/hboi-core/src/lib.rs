// Dweve HBOI - HBO-i Domain Description Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core services for the HBO-i domain description dataset.
//!
//! This crate holds everything below the transport layer:
//!
//! - **Data model**: the typed canonical dataset ([`model`])
//! - **Validation**: JSON Schema validation with typed normalization
//!   ([`validator`])
//! - **Caching**: a TTL-bounded FIFO store for dataset snapshots ([`cache`])
//! - **Queries**: entity lookups, joins, filters, search, alias resolution,
//!   crosswalks and progression paths ([`query`])
//! - **Orchestration**: one initialization lifecycle over loader, validator,
//!   cache and queries ([`service`])

pub mod cache;
mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod loader;
pub mod model;
pub mod query;
mod section;
mod service;
mod validator;

pub use cache::{CacheConfig, CacheEntryInfo, CacheStats, DatasetCache};
pub use error::{HboiError, HboiResult};
pub use loader::{DataLoader, FileStatus, LoaderConfig};
pub use model::Dataset;
pub use query::{
    Coordinate, DataService, DataStats, FilterOptions, ProgressionPath, ProgressionStep,
    SearchOptions,
};
pub use section::Section;
pub use service::{HboiService, HboiServiceConfig, EXAMPLE_DATA_KEY};
pub use validator::{
    format_violations, SchemaInfo, SchemaValidator, SchemaViolation, ValidationReport,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
