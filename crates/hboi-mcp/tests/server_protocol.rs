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

//! Protocol-level tests driving `handle_request` end to end.

use hboi_core::{fixtures, HboiService, HboiServiceConfig};
use hboi_mcp::{JsonRpcRequest, JsonRpcResponse, McpServer, McpServerConfig};
use serde_json::{json, Value};
use tempfile::TempDir;

fn ready_server() -> (TempDir, McpServer) {
    let dir = TempDir::new().unwrap();
    fixtures::write_sample_files(dir.path()).unwrap();
    let mut service = HboiService::new(HboiServiceConfig::with_base_dir(dir.path()));
    service.initialize().unwrap();
    (dir, McpServer::new(McpServerConfig::default(), service))
}

fn server_without_data() -> (TempDir, McpServer) {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("hboi.schema.json"),
        serde_json::to_string(&fixtures::sample_schema()).unwrap(),
    )
    .unwrap();
    let mut service = HboiService::new(HboiServiceConfig::with_base_dir(dir.path()));
    service.initialize().unwrap();
    (dir, McpServer::new(McpServerConfig::default(), service))
}

fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: method.to_string(),
        params,
    }
}

fn initialize_params() -> Value {
    json!({
        "protocolVersion": "2024-11-05",
        "capabilities": {},
        "clientInfo": { "name": "test-client", "version": "0.0.1" }
    })
}

fn result(response: &JsonRpcResponse) -> &Value {
    assert!(
        response.error.is_none(),
        "unexpected error: {:?}",
        response.error
    );
    response.result.as_ref().expect("response carries a result")
}

fn call_tool(server: &mut McpServer, name: &str, arguments: Value) -> Value {
    let response = server.handle_request(request(
        "tools/call",
        Some(json!({ "name": name, "arguments": arguments })),
    ));
    result(&response).clone()
}

fn tool_text(call_result: &Value) -> &str {
    call_result["content"][0]["text"]
        .as_str()
        .expect("tool result carries text content")
}

#[test]
fn initialize_handshake() {
    let (_dir, mut server) = ready_server();

    let response = server.handle_request(request("initialize", Some(initialize_params())));
    let result = result(&response);

    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "hboi-mcp-server");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
}

#[test]
fn initialize_without_params_is_an_error() {
    let (_dir, mut server) = ready_server();
    let response = server.handle_request(request("initialize", None));
    assert_eq!(response.error.unwrap().code, -32602);
}

#[test]
fn unknown_method_is_not_found() {
    let (_dir, mut server) = ready_server();
    let response = server.handle_request(request("does/not/exist", None));
    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert!(error.message.contains("does/not/exist"));
}

#[test]
fn ping_answers_empty_object() {
    let (_dir, mut server) = ready_server();
    let response = server.handle_request(request("ping", None));
    assert_eq!(result(&response), &json!({}));
}

#[test]
fn tools_list_catalog() {
    let (_dir, mut server) = ready_server();
    let response = server.handle_request(request("tools/list", None));
    let tools = result(&response)["tools"].as_array().unwrap().clone();

    assert_eq!(tools.len(), 12);
    assert!(tools
        .iter()
        .any(|tool| tool["name"] == "get_progression_path"));
    for tool in &tools {
        assert!(tool["inputSchema"]["type"] == "object");
    }
}

#[test]
fn tools_call_happy_path() {
    let (_dir, mut server) = ready_server();

    let result = call_tool(&mut server, "get_activiteiten", json!({}));
    assert!(result.get("isError").is_none());
    assert!(tool_text(&result).starts_with("Found 5 activiteiten:"));

    let result = call_tool(
        &mut server,
        "search_hboi",
        json!({ "query": "requirements-analyse", "section": "beroepstaken" }),
    );
    assert!(tool_text(&result).contains("Found 1 results:"));
}

#[test]
fn tools_call_unknown_tool_uses_error_envelope() {
    let (_dir, mut server) = ready_server();
    let result = call_tool(&mut server, "no_such_tool", json!({}));

    assert_eq!(result["isError"], true);
    assert_eq!(
        tool_text(&result),
        "Error executing tool no_such_tool: Tool not found: no_such_tool"
    );
}

#[test]
fn tools_call_on_unseeded_service_reports_not_initialized() {
    let (_dir, mut server) = server_without_data();
    let result = call_tool(&mut server, "get_activiteiten", json!({}));

    assert_eq!(result["isError"], true);
    let text = tool_text(&result);
    assert!(text.starts_with("Error executing tool get_activiteiten:"));
    assert!(text.contains("not initialized"));
}

#[test]
fn tools_call_without_params_is_a_protocol_error() {
    let (_dir, mut server) = ready_server();
    let response = server.handle_request(request("tools/call", None));
    assert_eq!(response.error.unwrap().code, -32602);
}

#[test]
fn validate_tool_round_trip() {
    let (_dir, mut server) = ready_server();

    let ok = call_tool(
        &mut server,
        "validate_hboi_data",
        json!({ "data": fixtures::sample_dataset_value() }),
    );
    assert_eq!(tool_text(&ok), "Data is valid according to HBOI schema");

    let bad = call_tool(&mut server, "validate_hboi_data", json!({ "data": [1, 2] }));
    assert!(tool_text(&bad).starts_with("Validation failed:"));
}

#[test]
fn resources_list_and_read() {
    let (_dir, mut server) = ready_server();

    let response = server.handle_request(request("resources/list", None));
    let resources = result(&response)["resources"].as_array().unwrap().clone();
    assert_eq!(resources.len(), 2);
    assert!(resources.iter().any(|r| r["uri"] == "hboi://schema"));

    let response = server.handle_request(request(
        "resources/read",
        Some(json!({ "uri": "hboi://dataset" })),
    ));
    let contents = &result(&response)["contents"][0];
    assert_eq!(contents["mimeType"], "application/json");
    let text = contents["text"].as_str().unwrap();
    let dataset: Value = serde_json::from_str(text).unwrap();
    assert_eq!(dataset["activiteiten"].as_array().map(Vec::len), Some(5));
}

#[test]
fn resources_read_unknown_uri() {
    let (_dir, mut server) = ready_server();
    let response = server.handle_request(request(
        "resources/read",
        Some(json!({ "uri": "hboi://nope" })),
    ));
    assert_eq!(response.error.unwrap().code, -32602);
}

#[test]
fn shutdown_resets_protocol_state() {
    let (_dir, mut server) = ready_server();
    server.handle_request(request("initialize", Some(initialize_params())));
    let response = server.handle_request(request("shutdown", None));
    assert_eq!(result(&response), &json!({}));
}
