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

//! HBO-i Model Context Protocol (MCP) server.
//!
//! Exposes the HBO-i domain description dataset to AI/LLM systems over
//! JSON-RPC 2.0 on stdio:
//!
//! - **Query tools** for activities, architecture layers, proficiency
//!   levels, professional tasks and competencies
//! - **Filtering and search** across the dataset
//! - **Validation** of arbitrary payloads against the canonical schema
//! - **Crosswalk and progression** helpers
//! - **Resources** serving the schema and the validated dataset as JSON

mod error;
mod protocol;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use protocol::*;
pub use server::{McpServer, McpServerConfig, DATASET_RESOURCE_URI, SCHEMA_RESOURCE_URI};
pub use tools::{execute_tool, get_tools};

/// MCP server version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server name for the MCP handshake.
pub const SERVER_NAME: &str = "hboi-mcp-server";
