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

//! Helper functions shared across MCP tools.

use crate::error::{McpError, McpResult};
use crate::protocol::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Parse JSON arguments into a typed structure.
pub fn parse_args<T: for<'de> Deserialize<'de>>(args: Option<JsonValue>) -> McpResult<T> {
    let args = args.unwrap_or(JsonValue::Object(serde_json::Map::new()));
    serde_json::from_value(args).map_err(|e| McpError::InvalidArguments(e.to_string()))
}

/// Wrap a text payload as a successful tool result.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult {
        content: vec![Content::Text { text }],
        is_error: None,
    }
}

/// Pretty-print a value for embedding in a text result.
pub fn pretty<T: Serialize>(value: &T) -> McpResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_args_accepts_valid_input() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Args {
            name: String,
            count: i32,
        }

        let parsed: Args = parse_args(Some(json!({ "name": "x", "count": 3 }))).unwrap();
        assert_eq!(
            parsed,
            Args {
                name: "x".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn parse_args_missing_required_field_fails() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Args {
            required: String,
        }

        let result: McpResult<Args> = parse_args(Some(json!({})));
        assert!(matches!(result, Err(McpError::InvalidArguments(_))));
    }

    #[test]
    fn parse_args_none_defaults_to_empty_object() {
        #[derive(Debug, Default, Deserialize)]
        struct Args {
            #[serde(default)]
            optional: Option<String>,
        }

        let parsed: Args = parse_args(None).unwrap();
        assert!(parsed.optional.is_none());
    }

    #[test]
    fn text_result_wraps_content() {
        let result = text_result("hello".to_string());
        assert!(result.is_error.is_none());
        let Content::Text { text } = &result.content[0];
        assert_eq!(text, "hello");
    }
}
