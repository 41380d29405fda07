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

//! Declarative macros for tool input schemas.
//!
//! Generic building blocks (`schema_string!`, `schema_bool!`, …) plus
//! domain-specific shorthands for the three axis arguments every other tool
//! takes: `activiteit_arg!`, `architectuurlaag_arg!` and `niveau_arg!` carry
//! the canonical enumerations so the tool catalog states them once.

/// Generate a JSON schema object with type "string" and description.
#[macro_export]
macro_rules! schema_string {
    ($description:expr) => {
        serde_json::json!({
            "type": "string",
            "description": $description
        })
    };
}

/// Generate a JSON schema object with type "boolean" and optional default.
#[macro_export]
macro_rules! schema_bool {
    ($description:expr) => {
        serde_json::json!({
            "type": "boolean",
            "description": $description
        })
    };
    ($description:expr, default: $default:expr) => {
        serde_json::json!({
            "type": "boolean",
            "description": $description,
            "default": $default
        })
    };
}

/// Generate a JSON schema object with type "integer" and optional bounds.
#[macro_export]
macro_rules! schema_integer {
    ($description:expr) => {
        serde_json::json!({
            "type": "integer",
            "description": $description
        })
    };
    ($description:expr, minimum: $min:expr, maximum: $max:expr) => {
        serde_json::json!({
            "type": "integer",
            "description": $description,
            "minimum": $min,
            "maximum": $max
        })
    };
}

/// Generate a JSON schema object with string enum constraints.
#[macro_export]
macro_rules! schema_enum {
    ([$($variant:expr),+ $(,)?], $description:expr) => {
        serde_json::json!({
            "type": "string",
            "enum": [$($variant),+],
            "description": $description
        })
    };
}

/// Generate a JSON schema object for an array of strings, optionally
/// enum-constrained.
#[macro_export]
macro_rules! schema_string_array {
    ($description:expr) => {
        serde_json::json!({
            "type": "array",
            "items": { "type": "string" },
            "description": $description
        })
    };
    ($description:expr, items_enum: [$($variant:expr),+ $(,)?]) => {
        serde_json::json!({
            "type": "array",
            "items": { "type": "string", "enum": [$($variant),+] },
            "description": $description
        })
    };
}

/// Generate a JSON schema object with type "object" and description.
#[macro_export]
macro_rules! schema_object_arg {
    ($description:expr) => {
        serde_json::json!({
            "type": "object",
            "description": $description
        })
    };
}

/// Generate a complete tool schema with properties and required fields.
#[macro_export]
macro_rules! tool_schema {
    (
        required: [$($req:expr),* $(,)?],
        properties: {
            $($field:ident: $schema:expr),+ $(,)?
        }
    ) => {
        serde_json::json!({
            "type": "object",
            "properties": {
                $(stringify!($field): $schema),+
            },
            "required": [$($req),*]
        })
    };
    () => {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    };
}

/// Schema for an activiteit id argument with the canonical enumeration.
#[macro_export]
macro_rules! activiteit_arg {
    ($description:expr) => {
        $crate::schema_enum!(
            [
                "act.analyseren",
                "act.adviseren",
                "act.ontwerpen",
                "act.realiseren",
                "act.manage_control",
            ],
            $description
        )
    };
}

/// Schema for an architectuurlaag id argument with the canonical enumeration.
#[macro_export]
macro_rules! architectuurlaag_arg {
    ($description:expr) => {
        $crate::schema_enum!(
            [
                "arch.gebruikersinteractie",
                "arch.organisatieprocessen",
                "arch.infrastructuur",
                "arch.software",
                "arch.hardware_interfacing",
            ],
            $description
        )
    };
}

/// Schema for a beheersingsniveau id argument (1-4).
#[macro_export]
macro_rules! niveau_arg {
    ($description:expr) => {
        $crate::schema_integer!($description, minimum: 1, maximum: 4)
    };
}

/// Schema for a kwaliteitseisen filter argument.
#[macro_export]
macro_rules! kwaliteitseisen_arg {
    () => {
        $crate::schema_string_array!(
            "Filter by kwaliteitseisen (quality requirements)",
            items_enum: [
                "security",
                "privacy",
                "duurzaamheid",
                "budget",
                "tijd",
                "performance",
                "toegankelijkheid",
                "compliance",
            ]
        )
    };
}
