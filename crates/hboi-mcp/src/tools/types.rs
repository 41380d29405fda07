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

//! Shared argument structures for MCP tools.

use hboi_core::Coordinate;
use serde::Deserialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Deserialize)]
pub struct ValidateDataArgs {
    pub data: JsonValue,
}

#[derive(Debug, Deserialize)]
pub struct GetInfoArgs {
    pub topic: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GetBeroepstakenArgs {
    pub activiteit_id: Option<String>,
    pub architectuurlaag_id: Option<String>,
    pub beheersingsniveau_id: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct SearchArgs {
    pub query: String,
    pub section: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompetentiesArgs {
    pub activiteit_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ProgressionArgs {
    pub from_activiteit_id: String,
    pub from_architectuurlaag_id: String,
    pub from_beheersingsniveau_id: u8,
    pub to_activiteit_id: String,
    pub to_architectuurlaag_id: String,
    pub to_beheersingsniveau_id: u8,
}

impl ProgressionArgs {
    pub fn from_coordinate(&self) -> Coordinate {
        Coordinate {
            activiteit_id: self.from_activiteit_id.clone(),
            architectuurlaag_id: self.from_architectuurlaag_id.clone(),
            beheersingsniveau_id: self.from_beheersingsniveau_id,
        }
    }

    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate {
            activiteit_id: self.to_activiteit_id.clone(),
            architectuurlaag_id: self.to_architectuurlaag_id.clone(),
            beheersingsniveau_id: self.to_beheersingsniveau_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResolveAliasArgs {
    pub alias: String,
}
