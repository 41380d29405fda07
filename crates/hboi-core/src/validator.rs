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

//! Runtime validation of dataset JSON against the HBO-i schema.
//!
//! A malformed schema is a startup failure: compilation errors surface as
//! [`HboiError::SchemaCompile`] from the constructor. Malformed *data* is
//! never an error: validation always returns a [`ValidationReport`] the
//! caller branches on.

use crate::error::{HboiError, HboiResult};
use crate::model::Dataset;
use crate::section::Section;
use jsonschema::Validator;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

/// Outcome of a validation run.
///
/// On success `data` carries the dataset decoded into its typed shape.
/// On failure `violations` holds the structured findings and
/// `error_message` a rendered summary.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub data: Option<Dataset>,
    pub violations: Vec<SchemaViolation>,
    pub error_message: Option<String>,
}

impl ValidationReport {
    fn valid(data: Option<Dataset>) -> Self {
        Self {
            is_valid: true,
            data,
            ..Default::default()
        }
    }

    fn invalid(violations: Vec<SchemaViolation>) -> Self {
        let error_message = Some(format_violations(&violations));
        Self {
            is_valid: false,
            data: None,
            violations,
            error_message,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            is_valid: false,
            data: None,
            violations: Vec::new(),
            error_message: Some(message),
        }
    }
}

/// One structured validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaViolation {
    /// JSON pointer into the instance, empty at the root.
    pub instance_path: String,
    /// JSON pointer into the schema.
    pub schema_path: String,
    pub message: String,
}

impl SchemaViolation {
    /// Preferred locator: instance path, then schema path, then `root`.
    fn locator(&self) -> &str {
        if !self.instance_path.is_empty() {
            &self.instance_path
        } else if !self.schema_path.is_empty() {
            &self.schema_path
        } else {
            "root"
        }
    }
}

/// Render violations as a numbered, newline-joined summary.
pub fn format_violations(violations: &[SchemaViolation]) -> String {
    if violations.is_empty() {
        return "No validation errors".to_string();
    }
    let lines: Vec<String> = violations
        .iter()
        .enumerate()
        .map(|(index, violation)| {
            format!("{}. {}: {}", index + 1, violation.locator(), violation.message)
        })
        .collect();
    format!("Validation failed:\n{}", lines.join("\n"))
}

/// Static schema metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaInfo {
    pub title: String,
    pub version: String,
    pub sections: Vec<String>,
}

/// Compiled validator for the fixed HBO-i schema.
pub struct SchemaValidator {
    schema: Value,
    compiled: Validator,
}

impl SchemaValidator {
    /// Compile `schema` for validation.
    ///
    /// `$schema` and `$id` are stripped first; left in place they would make
    /// compilation attempt external resolution. Compilation failure is fatal.
    pub fn new(mut schema: Value) -> HboiResult<Self> {
        if let Some(object) = schema.as_object_mut() {
            object.remove("$schema");
            object.remove("$id");
        }

        let compiled = jsonschema::validator_for(&schema)
            .map_err(|error| HboiError::SchemaCompile(error.to_string()))?;
        info!("schema compiled for validation");

        Ok(Self { schema, compiled })
    }

    /// Validate a value against the full schema.
    ///
    /// Never fails for malformed data; non-object inputs produce an invalid
    /// report because the top-level schema requires an object.
    pub fn validate(&self, value: &Value) -> ValidationReport {
        if !self.compiled.is_valid(value) {
            let violations: Vec<SchemaViolation> = self
                .compiled
                .iter_errors(value)
                .map(|error| SchemaViolation {
                    instance_path: error.instance_path.to_string(),
                    schema_path: error.schema_path.to_string(),
                    message: error.to_string(),
                })
                .collect();
            return ValidationReport::invalid(violations);
        }

        // Normalize to the typed dataset shape.
        match serde_json::from_value::<Dataset>(value.clone()) {
            Ok(dataset) => ValidationReport::valid(Some(dataset)),
            Err(error) => ValidationReport::failed(format!("Validation error: {error}")),
        }
    }

    /// Whether `value` conforms to the schema.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.compiled.is_valid(value)
    }

    /// Structured findings for `value`, empty when it conforms.
    pub fn violations(&self, value: &Value) -> Vec<SchemaViolation> {
        self.compiled
            .iter_errors(value)
            .map(|error| SchemaViolation {
                instance_path: error.instance_path.to_string(),
                schema_path: error.schema_path.to_string(),
                message: error.to_string(),
            })
            .collect()
    }

    /// Validate one top-level section of `value` against its sub-schema.
    ///
    /// A missing section or a non-object input is a failed report, not an
    /// error; the same goes for a sub-schema that will not compile.
    pub fn validate_section(&self, value: &Value, section: Section) -> ValidationReport {
        let Some(object) = value.as_object() else {
            return ValidationReport::failed("Data must be an object".to_string());
        };
        let Some(section_value) = object.get(section.as_str()) else {
            return ValidationReport::failed(format!("Section '{section}' not found in data"));
        };

        let sub_schema = self
            .schema
            .get("properties")
            .and_then(|properties| properties.get(section.as_str()))
            .cloned()
            .unwrap_or_else(|| json!({}));
        let mut properties = serde_json::Map::new();
        properties.insert(section.as_str().to_string(), sub_schema);
        let wrapper_schema = json!({
            "type": "object",
            "properties": properties,
            "required": [section.as_str()],
        });

        let compiled = match jsonschema::validator_for(&wrapper_schema) {
            Ok(compiled) => compiled,
            Err(error) => {
                return ValidationReport::failed(format!(
                    "Failed to compile section schema: {error}"
                ));
            }
        };

        let mut wrapped_map = serde_json::Map::new();
        wrapped_map.insert(section.as_str().to_string(), section_value.clone());
        let wrapped = Value::Object(wrapped_map);
        if compiled.is_valid(&wrapped) {
            ValidationReport::valid(None)
        } else {
            let violations: Vec<SchemaViolation> = compiled
                .iter_errors(&wrapped)
                .map(|error| SchemaViolation {
                    instance_path: error.instance_path.to_string(),
                    schema_path: error.schema_path.to_string(),
                    message: error.to_string(),
                })
                .collect();
            ValidationReport::invalid(violations)
        }
    }

    /// Title, version and top-level property names of the schema.
    pub fn schema_info(&self) -> SchemaInfo {
        let title = self
            .schema
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("HBOI Schema")
            .to_string();
        let version = self
            .schema
            .get("meta")
            .and_then(|meta| meta.get("schema_version"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let sections = self
            .schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| properties.keys().cloned().collect())
            .unwrap_or_default();

        SchemaInfo {
            title,
            version,
            sections,
        }
    }

    /// The cleaned schema this validator was compiled from.
    pub fn schema(&self) -> &Value {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn validator() -> SchemaValidator {
        SchemaValidator::new(fixtures::sample_schema()).unwrap()
    }

    #[test]
    fn valid_dataset_decodes_to_typed_shape() {
        let validator = validator();
        let report = validator.validate(&fixtures::sample_dataset_value());

        assert!(report.is_valid);
        let dataset = report.data.unwrap();
        assert_eq!(dataset.activiteiten.len(), 5);
        assert_eq!(dataset.beheersingsniveaus.len(), 4);
        assert!(report.error_message.is_none());
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = validator();
        let value = fixtures::sample_dataset_value();

        assert!(validator.validate(&value).is_valid);
        assert!(validator.validate(&value).is_valid);
    }

    #[test]
    fn empty_object_fails_with_violations() {
        let validator = validator();
        let report = validator.validate(&json!({}));

        assert!(!report.is_valid);
        assert!(!report.violations.is_empty());
        let message = report.error_message.unwrap();
        assert!(message.starts_with("Validation failed:"));
        assert!(message.contains("1. "));
    }

    #[test]
    fn non_object_inputs_fail() {
        let validator = validator();
        for value in [json!(null), json!(42), json!("text"), json!([1, 2, 3])] {
            assert!(!validator.validate(&value).is_valid, "accepted {value}");
        }
    }

    #[test]
    fn strips_schema_metadata_before_compiling() {
        let mut schema = fixtures::sample_schema();
        schema["$schema"] = json!("http://json-schema.org/draft-07/schema#");
        schema["$id"] = json!("https://example.org/hboi.schema.json");

        let validator = SchemaValidator::new(schema).unwrap();
        assert!(validator.schema().get("$schema").is_none());
        assert!(validator.schema().get("$id").is_none());
        assert!(validator.validate(&fixtures::sample_dataset_value()).is_valid);
    }

    #[test]
    fn bad_schema_is_a_construction_error() {
        let result = SchemaValidator::new(json!({"type": 12}));
        assert!(matches!(result, Err(HboiError::SchemaCompile(_))));
    }

    #[test]
    fn validate_section_accepts_present_section() {
        let validator = validator();
        let report =
            validator.validate_section(&fixtures::sample_dataset_value(), Section::Activiteiten);
        assert!(report.is_valid);
        assert!(report.data.is_none());
    }

    #[test]
    fn validate_section_rejects_missing_section() {
        let validator = validator();
        let report = validator.validate_section(&json!({}), Section::Activiteiten);
        assert!(!report.is_valid);
        assert!(report
            .error_message
            .unwrap()
            .contains("Section 'activiteiten' not found"));
    }

    #[test]
    fn validate_section_rejects_non_object_input() {
        let validator = validator();
        let report = validator.validate_section(&json!([1, 2]), Section::Meta);
        assert!(!report.is_valid);
        assert_eq!(report.error_message.as_deref(), Some("Data must be an object"));
    }

    #[test]
    fn validate_section_rejects_wrong_shape() {
        let validator = validator();
        let report = validator.validate_section(
            &json!({"beheersingsniveaus": "not an array"}),
            Section::Beheersingsniveaus,
        );
        assert!(!report.is_valid);
        assert!(!report.violations.is_empty());
    }

    #[test]
    fn schema_info_reports_title_version_and_sections() {
        let validator = validator();
        let info = validator.schema_info();

        assert!(!info.title.is_empty());
        assert_eq!(info.version, "1.0.0");
        assert!(info.sections.contains(&"activiteiten".to_string()));
        assert!(info.sections.contains(&"beroepstaken".to_string()));
    }

    #[test]
    fn format_violations_renders_numbered_list() {
        let violations = vec![
            SchemaViolation {
                instance_path: "/activiteiten/0".into(),
                schema_path: "/properties/activiteiten".into(),
                message: "missing naam".into(),
            },
            SchemaViolation {
                instance_path: String::new(),
                schema_path: String::new(),
                message: "missing meta".into(),
            },
        ];
        let rendered = format_violations(&violations);
        assert!(rendered.contains("1. /activiteiten/0: missing naam"));
        assert!(rendered.contains("2. root: missing meta"));
    }

    #[test]
    fn format_violations_empty_case() {
        assert_eq!(format_violations(&[]), "No validation errors");
    }
}
