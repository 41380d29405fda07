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

//! Validation and server-info tools.

use crate::error::{McpError, McpResult};
use crate::protocol::CallToolResult;
use crate::tools::helpers::{parse_args, pretty, text_result};
use crate::tools::types::{GetInfoArgs, ValidateDataArgs};
use hboi_core::HboiService;
use serde_json::Value as JsonValue;

/// Cache key for payloads checked through `validate_hboi_data`.
const VALIDATION_DATA_KEY: &str = "validation_data";

/// Execute the `validate_hboi_data` tool.
///
/// A payload that fails validation is a normal result, not a tool error.
pub fn execute_validate_data(
    args: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    let args: ValidateDataArgs = parse_args(args)?;
    let report = service.validate_and_cache(&args.data, VALIDATION_DATA_KEY)?;

    if report.is_valid {
        Ok(text_result(
            "Data is valid according to HBOI schema".to_string(),
        ))
    } else {
        Ok(text_result(format!(
            "Validation failed: {}",
            report.error_message.unwrap_or_default()
        )))
    }
}

/// Execute the `get_hboi_info` tool.
pub fn execute_get_info(
    args: Option<JsonValue>,
    service: &HboiService,
    tool_names: &[String],
) -> McpResult<CallToolResult> {
    let args: GetInfoArgs = parse_args(args)?;

    let info = match args.topic.as_str() {
        "overview" => {
            "HBOI MCP Server provides domain expertise and validation tools for HBO-i related data and operations."
                .to_string()
        }
        "schema" => {
            "The server uses JSON Schema validation to ensure data compliance with HBOI standards."
                .to_string()
        }
        "validation" => {
            "Data validation is performed with a compiled JSON Schema validator (draft-07) with structured error reporting."
                .to_string()
        }
        "tools" => format!("Available tools: {}", tool_names.join(", ")),
        "stats" => pretty(&service.cache_stats())?,
        topic => {
            return Err(McpError::InvalidArguments(format!(
                "Unknown topic: {topic}. Available topics: overview, schema, validation, tools, stats"
            )));
        }
    };

    Ok(text_result(info))
}
