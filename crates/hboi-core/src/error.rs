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

//! Error types for the HBO-i core services.

use thiserror::Error;

/// Core error type.
///
/// Configuration problems (missing schema file, schema compilation failure)
/// are the only fatal kinds; everything else is either a recoverable result
/// value or a precondition violation that callers report at their boundary.
#[derive(Error, Debug)]
pub enum HboiError {
    /// IO error while reading schema or dataset files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON Schema could not be compiled.
    #[error("failed to compile schema: {0}")]
    SchemaCompile(String),

    /// The schema file is absent.
    #[error("schema file not found: {0}")]
    SchemaFileMissing(String),

    /// A query was issued before the data service was seeded.
    #[error("data service not initialized, call initialize() first")]
    NotInitialized,

    /// `initialize` was called on an already-seeded data service.
    #[error("data service already initialized, use reload() to replace the dataset")]
    AlreadyInitialized,

    /// An operation was issued before the orchestrating service ran `initialize`.
    #[error("HBO-i service not initialized, call initialize() first")]
    ServiceNotReady,
}

/// Result type for core operations.
pub type HboiResult<T> = Result<T, HboiError>;
