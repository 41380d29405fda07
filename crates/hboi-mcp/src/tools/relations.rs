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

//! Relational tools: crosswalks, filters, aliases and progression paths.

use crate::error::McpResult;
use crate::protocol::CallToolResult;
use crate::tools::helpers::{parse_args, pretty, text_result};
use crate::tools::types::{CompetentiesArgs, ProgressionArgs, ResolveAliasArgs};
use hboi_core::{FilterOptions, HboiService};
use serde_json::Value as JsonValue;

/// Execute the `get_competenties_for_activiteit` tool.
pub fn execute_get_competenties_for_activiteit(
    args: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    let args: CompetentiesArgs = parse_args(args)?;
    let competenties = service
        .data_service()
        .competenties_for_activiteit(&args.activiteit_id)?;
    Ok(text_result(format!(
        "Found {} competenties for activiteit {}:\n\n{}",
        competenties.len(),
        args.activiteit_id,
        pretty(&competenties)?
    )))
}

/// Execute the `filter_beroepstaken` tool.
pub fn execute_filter_beroepstaken(
    args: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    let options: FilterOptions = parse_args(args)?;
    let filtered = service.data_service().filter_beroepstaken(&options)?;
    Ok(text_result(format!(
        "Found {} beroepstaken matching criteria:\n\n{}",
        filtered.len(),
        pretty(&filtered)?
    )))
}

/// Execute the `get_progression_path` tool.
pub fn execute_get_progression_path(
    args: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    let args: ProgressionArgs = parse_args(args)?;
    let path = service
        .data_service()
        .progression_path(&args.from_coordinate(), &args.to_coordinate())?;

    match path {
        Some(path) => Ok(text_result(format!(
            "Progression path found:\n\n{}",
            pretty(&path)?
        ))),
        None => Ok(text_result(
            "No progression path found between the specified beroepstaken.".to_string(),
        )),
    }
}

/// Execute the `resolve_alias` tool.
pub fn execute_resolve_alias(
    args: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    let args: ResolveAliasArgs = parse_args(args)?;
    let resolved = service.data_service().resolve_alias(&args.alias)?;

    match resolved {
        Some(id) => Ok(text_result(format!(
            "Alias '{}' resolves to: {}",
            args.alias, id
        ))),
        None => Ok(text_result(format!(
            "No canonical ID found for alias '{}'",
            args.alias
        ))),
    }
}
