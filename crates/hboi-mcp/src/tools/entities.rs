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

//! Entity listing tools.

use crate::error::McpResult;
use crate::protocol::CallToolResult;
use crate::tools::helpers::{parse_args, pretty, text_result};
use crate::tools::types::GetBeroepstakenArgs;
use hboi_core::HboiService;
use serde_json::Value as JsonValue;

/// Execute the `get_activiteiten` tool.
pub fn execute_get_activiteiten(service: &HboiService) -> McpResult<CallToolResult> {
    let activiteiten = service.data_service().activiteiten()?;
    Ok(text_result(format!(
        "Found {} activiteiten:\n\n{}",
        activiteiten.len(),
        pretty(&activiteiten)?
    )))
}

/// Execute the `get_architectuurlagen` tool.
pub fn execute_get_architectuurlagen(service: &HboiService) -> McpResult<CallToolResult> {
    let architectuurlagen = service.data_service().architectuurlagen()?;
    Ok(text_result(format!(
        "Found {} architectuurlagen:\n\n{}",
        architectuurlagen.len(),
        pretty(&architectuurlagen)?
    )))
}

/// Execute the `get_beheersingsniveaus` tool.
pub fn execute_get_beheersingsniveaus(service: &HboiService) -> McpResult<CallToolResult> {
    let beheersingsniveaus = service.data_service().beheersingsniveaus()?;
    Ok(text_result(format!(
        "Found {} beheersingsniveaus:\n\n{}",
        beheersingsniveaus.len(),
        pretty(&beheersingsniveaus)?
    )))
}

/// Execute the `get_beroepstaken` tool: the full collection with optional
/// per-axis filters, served from the orchestrator's cached dataset.
pub fn execute_get_beroepstaken(
    args: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    let args: GetBeroepstakenArgs = parse_args(args)?;

    let Some(dataset) = service.data()? else {
        return Ok(text_result("No beroepstaken data available".to_string()));
    };

    let mut taken: Vec<_> = dataset.beroepstaken.iter().collect();
    if let Some(id) = args.activiteit_id.as_deref().filter(|id| !id.is_empty()) {
        taken.retain(|taak| taak.activiteit_id == id);
    }
    if let Some(id) = args
        .architectuurlaag_id
        .as_deref()
        .filter(|id| !id.is_empty())
    {
        taken.retain(|taak| taak.architectuurlaag_id == id);
    }
    if let Some(niveau) = args.beheersingsniveau_id.filter(|n| *n != 0) {
        taken.retain(|taak| taak.beheersingsniveau_id == niveau);
    }

    Ok(text_result(format!(
        "Found {} beroepstaken:\n\n{}",
        taken.len(),
        pretty(&taken)?
    )))
}

/// Execute the `get_dataset_stats` tool.
pub fn execute_get_dataset_stats(service: &HboiService) -> McpResult<CallToolResult> {
    let stats = service.data_service().stats()?;
    Ok(text_result(format!(
        "HBO-i dataset statistics:\n\n{}",
        pretty(&stats)?
    )))
}
