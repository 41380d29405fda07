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

//! Free-text search tool.

use crate::error::McpResult;
use crate::protocol::CallToolResult;
use crate::tools::helpers::{parse_args, pretty, text_result};
use crate::tools::types::SearchArgs;
use hboi_core::{HboiService, Section};
use serde_json::Value as JsonValue;

/// Execute the `search_hboi` tool.
///
/// A section name that matches no known section yields zero results, not an
/// error.
pub fn execute_search_hboi(
    args: Option<JsonValue>,
    service: &HboiService,
) -> McpResult<CallToolResult> {
    let args: SearchArgs = parse_args(args)?;

    let results = match args.section.as_deref() {
        None => service.search(&args.query, None)?,
        Some(name) => match Section::parse(name) {
            Some(section) => service.search(&args.query, Some(section))?,
            None => Vec::new(),
        },
    };

    let scope = args
        .section
        .as_deref()
        .map(|section| format!(" in {section}"))
        .unwrap_or_default();
    Ok(text_result(format!(
        "Search results for \"{}\"{}:\n\nFound {} results:\n\n{}",
        args.query,
        scope,
        results.len(),
        pretty(&results)?
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Content;
    use crate::tools::testutil::ready_service;
    use serde_json::json;

    fn text(result: &CallToolResult) -> &str {
        let Content::Text { text } = &result.content[0];
        text
    }

    #[test]
    fn search_within_a_section() {
        let (_dir, service) = ready_service();
        let result = execute_search_hboi(
            Some(json!({ "query": "requirements-analyse", "section": "beroepstaken" })),
            &service,
        )
        .unwrap();
        assert!(text(&result)
            .starts_with("Search results for \"requirements-analyse\" in beroepstaken:"));
        assert!(text(&result).contains("Found 1 results:"));
    }

    #[test]
    fn search_across_the_dataset() {
        let (_dir, service) = ready_service();
        let result =
            execute_search_hboi(Some(json!({ "query": "Taakgericht" })), &service).unwrap();
        assert!(!text(&result).contains("Found 0 results:"));
    }

    #[test]
    fn unknown_section_yields_empty_results() {
        let (_dir, service) = ready_service();
        let result = execute_search_hboi(
            Some(json!({ "query": "anything", "section": "invalid_section" })),
            &service,
        )
        .unwrap();
        assert!(text(&result).contains("Found 0 results:"));
    }
}
