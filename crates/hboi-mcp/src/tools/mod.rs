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

//! HBO-i tools for the MCP server.
//!
//! Available tools:
//! - `validate_hboi_data`: Validate a payload against the HBO-i JSON schema
//! - `get_hboi_info`: Server and dataset information by topic
//! - `get_activiteiten` / `get_architectuurlagen` / `get_beheersingsniveaus`:
//!   Full axis collections
//! - `get_beroepstaken`: Professional tasks with optional per-axis filters
//! - `filter_beroepstaken`: Conjunctive filtering including kwaliteitseisen
//! - `search_hboi`: Substring search, dataset-wide or per section
//! - `get_competenties_for_activiteit`: Activity → competency crosswalk
//! - `get_progression_path`: Synthetic progression between two coordinates
//! - `resolve_alias`: Alias → canonical id resolution
//! - `get_dataset_stats`: Entity counts per collection

mod entities;
mod helpers;
mod relations;
mod search;
#[macro_use]
mod schema_macros;
mod types;
mod validation;

pub use entities::{
    execute_get_activiteiten, execute_get_architectuurlagen, execute_get_beheersingsniveaus,
    execute_get_beroepstaken, execute_get_dataset_stats,
};
pub use relations::{
    execute_filter_beroepstaken, execute_get_competenties_for_activiteit,
    execute_get_progression_path, execute_resolve_alias,
};
pub use search::execute_search_hboi;
pub use validation::{execute_get_info, execute_validate_data};

use crate::error::{McpError, McpResult};
use crate::protocol::{CallToolResult, Tool};
use hboi_core::HboiService;
use serde_json::Value as JsonValue;

/// Get all available HBO-i tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "validate_hboi_data".to_string(),
            description: "Validate data against HBOI JSON schema".to_string(),
            input_schema: tool_schema! {
                required: ["data"],
                properties: {
                    data: schema_object_arg!("The data to validate against HBOI schema")
                }
            },
        },
        Tool {
            name: "get_hboi_info".to_string(),
            description: "Get information about HBOI domain and capabilities".to_string(),
            input_schema: tool_schema! {
                required: ["topic"],
                properties: {
                    topic: schema_enum!(
                        ["overview", "schema", "validation", "tools", "stats"],
                        "Specific topic to get information about"
                    )
                }
            },
        },
        Tool {
            name: "get_activiteiten".to_string(),
            description: "Get all activiteiten (activities) from HBOI data".to_string(),
            input_schema: tool_schema!(),
        },
        Tool {
            name: "get_architectuurlagen".to_string(),
            description: "Get all architectuurlagen (architecture layers) from HBOI data"
                .to_string(),
            input_schema: tool_schema!(),
        },
        Tool {
            name: "get_beheersingsniveaus".to_string(),
            description: "Get all beheersingsniveaus (proficiency levels) from HBOI data"
                .to_string(),
            input_schema: tool_schema!(),
        },
        Tool {
            name: "get_beroepstaken".to_string(),
            description: "Get beroepstaken (professional tasks) from HBOI data".to_string(),
            input_schema: tool_schema! {
                required: [],
                properties: {
                    activiteit_id: activiteit_arg!("Filter by activiteit ID"),
                    architectuurlaag_id: architectuurlaag_arg!("Filter by architectuurlaag ID"),
                    beheersingsniveau_id: niveau_arg!("Filter by beheersingsniveau ID")
                }
            },
        },
        Tool {
            name: "filter_beroepstaken".to_string(),
            description: "Filter beroepstaken based on multiple criteria".to_string(),
            input_schema: tool_schema! {
                required: [],
                properties: {
                    activiteit_id: activiteit_arg!("Filter by activiteit ID"),
                    architectuurlaag_id: architectuurlaag_arg!("Filter by architectuurlaag ID"),
                    beheersingsniveau_id: niveau_arg!("Filter by beheersingsniveau ID"),
                    kwaliteitseisen: kwaliteitseisen_arg!()
                }
            },
        },
        Tool {
            name: "search_hboi".to_string(),
            description: "Search in HBOI data".to_string(),
            input_schema: tool_schema! {
                required: ["query"],
                properties: {
                    query: schema_string!("Search query"),
                    section: schema_enum!(
                        [
                            "beheersingsniveaus",
                            "activiteiten",
                            "architectuurlagen",
                            "professional_skills",
                            "beroepstaken",
                        ],
                        "Specific section to search in"
                    )
                }
            },
        },
        Tool {
            name: "get_competenties_for_activiteit".to_string(),
            description: "Get competenties (competencies) related to a specific activiteit"
                .to_string(),
            input_schema: tool_schema! {
                required: ["activiteit_id"],
                properties: {
                    activiteit_id: activiteit_arg!("Activiteit ID to get competencies for")
                }
            },
        },
        Tool {
            name: "get_progression_path".to_string(),
            description: "Get progression path between two beroepstaken".to_string(),
            input_schema: tool_schema! {
                required: [
                    "from_activiteit_id",
                    "from_architectuurlaag_id",
                    "from_beheersingsniveau_id",
                    "to_activiteit_id",
                    "to_architectuurlaag_id",
                    "to_beheersingsniveau_id",
                ],
                properties: {
                    from_activiteit_id: activiteit_arg!("Source activiteit ID"),
                    from_architectuurlaag_id: architectuurlaag_arg!("Source architectuurlaag ID"),
                    from_beheersingsniveau_id: niveau_arg!("Source beheersingsniveau ID"),
                    to_activiteit_id: activiteit_arg!("Target activiteit ID"),
                    to_architectuurlaag_id: architectuurlaag_arg!("Target architectuurlaag ID"),
                    to_beheersingsniveau_id: niveau_arg!("Target beheersingsniveau ID")
                }
            },
        },
        Tool {
            name: "resolve_alias".to_string(),
            description: "Resolve an alias or display name to its canonical HBOI ID".to_string(),
            input_schema: tool_schema! {
                required: ["alias"],
                properties: {
                    alias: schema_string!("Alias, name or title to resolve")
                }
            },
        },
        Tool {
            name: "get_dataset_stats".to_string(),
            description: "Get entity counts for the loaded HBOI dataset".to_string(),
            input_schema: tool_schema!(),
        },
    ]
}

/// Execute a tool by name against the shared service context.
pub fn execute_tool(
    name: &str,
    arguments: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    match name {
        "validate_hboi_data" => execute_validate_data(arguments, service),
        "get_hboi_info" => {
            let names: Vec<String> = get_tools().into_iter().map(|tool| tool.name).collect();
            execute_get_info(arguments, service, &names)
        }
        "get_activiteiten" => execute_get_activiteiten(service),
        "get_architectuurlagen" => execute_get_architectuurlagen(service),
        "get_beheersingsniveaus" => execute_get_beheersingsniveaus(service),
        "get_beroepstaken" => execute_get_beroepstaken(arguments, service),
        "filter_beroepstaken" => execute_filter_beroepstaken(arguments, service),
        "search_hboi" => execute_search_hboi(arguments, service),
        "get_competenties_for_activiteit" => {
            execute_get_competenties_for_activiteit(arguments, service)
        }
        "get_progression_path" => execute_get_progression_path(arguments, service),
        "resolve_alias" => execute_resolve_alias(arguments, service),
        "get_dataset_stats" => execute_get_dataset_stats(service),
        _ => Err(McpError::ToolNotFound(name.to_string())),
    }
}
