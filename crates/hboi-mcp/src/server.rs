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

//! MCP server implementation.
//!
//! The server owns the [`HboiService`] context and threads it through every
//! tool call; there is no process-wide singleton. Tool execution failures become
//! successful responses carrying an error envelope, so one bad call never
//! takes the transport down; only protocol-level problems produce JSON-RPC
//! errors.

use crate::error::McpResult;
use crate::protocol::*;
use crate::tools::{execute_tool, get_tools};
use crate::{SERVER_NAME, VERSION};
use hboi_core::HboiService;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader as AsyncBufReader};
use tracing::{debug, info, warn};

/// URI of the schema resource.
pub const SCHEMA_RESOURCE_URI: &str = "hboi://schema";
/// URI of the dataset resource.
pub const DATASET_RESOURCE_URI: &str = "hboi://dataset";

/// MCP server configuration.
#[derive(Debug, Clone)]
pub struct McpServerConfig {
    /// Server name reported in the protocol handshake.
    pub name: String,
    /// Server version reported in the protocol handshake.
    pub version: String,
}

impl Default for McpServerConfig {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: VERSION.to_string(),
        }
    }
}

/// HBO-i MCP server over stdio.
///
/// JSON-RPC 2.0, one message per line: requests on stdin, responses on
/// stdout, logs on stderr.
pub struct McpServer {
    config: McpServerConfig,
    service: HboiService,
    initialized: bool,
}

impl McpServer {
    /// Create a server around an already-initialized service context.
    pub fn new(config: McpServerConfig, service: HboiService) -> Self {
        Self {
            config,
            service,
            initialized: false,
        }
    }

    /// The service context, for inspection in tests.
    pub fn service(&self) -> &HboiService {
        &self.service
    }

    /// Run the server on stdio (synchronous).
    pub fn run_stdio(&mut self) -> McpResult<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        let reader = BufReader::new(stdin.lock());

        info!("HBOI MCP server starting on stdio");

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            debug!("received: {}", line);

            let response = self.handle_line(&line);
            let response_str = serde_json::to_string(&response)?;
            debug!("sending: {}", response_str);
            writeln!(stdout, "{}", response_str)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Run the server on stdio (asynchronous).
    pub async fn run_stdio_async(&mut self) -> McpResult<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = AsyncBufReader::new(stdin);

        info!("HBOI MCP server starting on stdio (async)");

        let mut line = String::new();
        loop {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) => break, // EOF
                Ok(_) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    debug!("received: {}", trimmed);

                    let response = self.handle_line(trimmed);
                    let response_str = serde_json::to_string(&response)?;
                    debug!("sending: {}", response_str);
                    stdout.write_all(response_str.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
                Err(error) => {
                    warn!(%error, "read error on stdin");
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> JsonRpcResponse {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request),
            Err(error) => {
                JsonRpcResponse::error(None, -32700, format!("Parse error: {error}"), None)
            }
        }
    }

    /// Handle a single JSON-RPC request.
    pub fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "initialized" => {
                info!("client sent initialized notification");
                JsonRpcResponse::success(id, json!({}))
            }
            "shutdown" => {
                info!("server shutting down");
                self.initialized = false;
                JsonRpcResponse::success(id, json!({}))
            }
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params),
            "resources/list" => self.handle_resources_list(id),
            "resources/read" => self.handle_resources_read(id, request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            method => {
                warn!("unknown method: {}", method);
                JsonRpcResponse::error(id, -32601, format!("Method not found: {method}"), None)
            }
        }
    }

    fn handle_initialize(&mut self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let _params: InitializeParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(params) => params,
                Err(error) => {
                    return JsonRpcResponse::error(
                        id,
                        -32602,
                        format!("Invalid params: {error}"),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(id, -32602, "Missing params".to_string(), None);
            }
        };

        self.initialized = true;
        info!("server initialized");

        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, -32603, error.to_string(), None),
        }
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ListToolsResult { tools: get_tools() };
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, -32603, error.to_string(), None),
        }
    }

    /// Tool dispatch. Tool failures are reported inside a successful
    /// response with `isError: true` and the uniform
    /// `Error executing tool <name>: <message>` envelope.
    fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(params) => params,
                Err(error) => {
                    return JsonRpcResponse::error(
                        id,
                        -32602,
                        format!("Invalid params: {error}"),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(id, -32602, "Missing params".to_string(), None);
            }
        };

        let result = match execute_tool(&params.name, params.arguments, &self.service) {
            Ok(result) => result,
            Err(error) => CallToolResult {
                content: vec![Content::Text {
                    text: format!("Error executing tool {}: {}", params.name, error),
                }],
                is_error: Some(true),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, -32603, error.to_string(), None),
        }
    }

    fn handle_resources_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let resources = vec![
            Resource {
                uri: SCHEMA_RESOURCE_URI.to_string(),
                name: "hboi.schema.json".to_string(),
                description: Some("JSON Schema of the HBO-i canonical dataset".to_string()),
                mime_type: Some("application/json".to_string()),
            },
            Resource {
                uri: DATASET_RESOURCE_URI.to_string(),
                name: "hboi.example.json".to_string(),
                description: Some("Validated HBO-i canonical dataset".to_string()),
                mime_type: Some("application/json".to_string()),
            },
        ];

        let result = ListResourcesResult { resources };
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, -32603, error.to_string(), None),
        }
    }

    fn handle_resources_read(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ReadResourceParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(params) => params,
                Err(error) => {
                    return JsonRpcResponse::error(
                        id,
                        -32602,
                        format!("Invalid params: {error}"),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(id, -32602, "Missing params".to_string(), None);
            }
        };

        let text = match params.uri.as_str() {
            SCHEMA_RESOURCE_URI => match self.service.validator() {
                Ok(validator) => serde_json::to_string_pretty(validator.schema()).ok(),
                Err(_) => None,
            },
            DATASET_RESOURCE_URI => dataset_text(&self.service),
            _ => {
                return JsonRpcResponse::error(
                    id,
                    -32602,
                    format!("Resource not found: {}", params.uri),
                    None,
                );
            }
        };

        let Some(text) = text else {
            return JsonRpcResponse::error(
                id,
                -32002,
                format!("Resource unavailable: {}", params.uri),
                None,
            );
        };

        let result = ReadResourceResult {
            contents: vec![ResourceContent {
                uri: params.uri,
                mime_type: Some("application/json".to_string()),
                text: Some(text),
            }],
        };
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, -32603, error.to_string(), None),
        }
    }
}

/// Pretty-print the current dataset, `None` when unavailable.
fn dataset_text(service: &HboiService) -> Option<String> {
    let dataset = service.data().ok().flatten()?;
    serde_json::to_string_pretty(dataset.as_ref()).ok()
}
