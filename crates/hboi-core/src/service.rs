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

//! Orchestrating service composing loader, validator, cache and queries.
//!
//! `initialize` wires the parts together once at startup: a missing or
//! uncompilable schema is fatal, a missing or invalid dataset merely leaves
//! the query service unseeded (queries then fail with its own
//! `NotInitialized` error). After that the service hands out the dataset
//! cache-first and revalidates on every cache miss.

use crate::cache::{CacheConfig, CacheStats, DatasetCache};
use crate::error::{HboiError, HboiResult};
use crate::loader::{DataLoader, LoaderConfig};
use crate::model::Dataset;
use crate::query::DataService;
use crate::section::Section;
use crate::validator::{SchemaInfo, SchemaValidator, ValidationReport};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Cache key for the canonical example dataset.
pub const EXAMPLE_DATA_KEY: &str = "example_data";

/// Configuration for the orchestrating service.
#[derive(Debug, Clone)]
pub struct HboiServiceConfig {
    pub loader: LoaderConfig,
    pub cache: CacheConfig,
    /// Disables the dataset cache entirely when `false`.
    pub enable_caching: bool,
}

impl Default for HboiServiceConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            cache: CacheConfig::default(),
            enable_caching: true,
        }
    }
}

impl HboiServiceConfig {
    /// Default configuration rooted at `base_dir`, with caching enabled.
    pub fn with_base_dir(base_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            loader: LoaderConfig {
                base_dir: base_dir.into(),
                ..Default::default()
            },
            cache: CacheConfig::default(),
            enable_caching: true,
        }
    }
}

/// Unified entry point over loading, validation, caching and queries.
///
/// State machine: constructed → initializing → ready. Failures during
/// `initialize` other than dataset validation are fatal and leave the
/// service unready.
pub struct HboiService {
    loader: DataLoader,
    validator: Option<SchemaValidator>,
    cache: DatasetCache<Arc<Dataset>>,
    data_service: DataService,
    enable_caching: bool,
    initialized: bool,
}

impl HboiService {
    pub fn new(config: HboiServiceConfig) -> Self {
        Self {
            loader: DataLoader::new(config.loader),
            validator: None,
            cache: DatasetCache::new(config.cache),
            data_service: DataService::new(),
            enable_caching: config.enable_caching,
            initialized: false,
        }
    }

    /// Load the schema, compile the validator, and seed the query service
    /// with the validated example dataset.
    ///
    /// A missing schema file or a schema that fails to compile is fatal.
    /// A missing data file logs a warning and continues; a dataset that
    /// fails validation does the same, leaving the query service unseeded.
    pub fn initialize(&mut self) -> HboiResult<()> {
        info!("initializing HBO-i service");

        let status = self.loader.check_files();
        if !status.schema {
            return Err(HboiError::SchemaFileMissing(
                self.loader.schema_path().display().to_string(),
            ));
        }
        if !status.example_data {
            warn!(
                path = %self.loader.data_path().display(),
                "example data file not found, continuing without it"
            );
        }

        let schema = self.loader.load_schema()?;
        let validator = SchemaValidator::new(schema)?;

        if status.example_data {
            let raw = self.loader.load_dataset()?;
            let report = validator.validate(&raw);
            if report.is_valid {
                if let Some(dataset) = report.data {
                    let dataset = Arc::new(dataset);
                    if self.data_service.is_initialized() {
                        self.data_service.reload(Arc::clone(&dataset));
                    } else {
                        self.data_service.initialize(Arc::clone(&dataset))?;
                    }
                    if self.enable_caching {
                        self.cache.set(EXAMPLE_DATA_KEY, dataset);
                    }
                    info!("example data loaded and validated");
                }
            } else {
                warn!(
                    error = report.error_message.as_deref().unwrap_or("unknown"),
                    "example data validation failed"
                );
            }
        }

        self.validator = Some(validator);
        self.initialized = true;
        info!("HBO-i service initialized");
        Ok(())
    }

    /// The validated dataset, cache-first.
    ///
    /// On a cache miss the dataset is reloaded from disk and revalidated;
    /// failures on that path degrade to `Ok(None)` rather than erroring.
    pub fn data(&self) -> HboiResult<Option<Arc<Dataset>>> {
        let validator = self.validator()?;

        if self.enable_caching {
            if let Some(dataset) = self.cache.get(EXAMPLE_DATA_KEY) {
                return Ok(Some(dataset));
            }
        }

        let raw = match self.loader.load_dataset() {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "failed to load example data");
                return Ok(None);
            }
        };

        let report = validator.validate(&raw);
        if !report.is_valid {
            warn!(
                error = report.error_message.as_deref().unwrap_or("unknown"),
                "example data validation failed"
            );
            return Ok(None);
        }
        let Some(dataset) = report.data else {
            return Ok(None);
        };

        let dataset = Arc::new(dataset);
        if self.enable_caching {
            self.cache.set(EXAMPLE_DATA_KEY, Arc::clone(&dataset));
        }
        Ok(Some(dataset))
    }

    /// Validate arbitrary input and cache the typed dataset under `key`
    /// when it conforms.
    pub fn validate_and_cache(&self, value: &Value, key: &str) -> HboiResult<ValidationReport> {
        let validator = self.validator()?;
        let report = validator.validate(value);
        if report.is_valid && self.enable_caching {
            if let Some(dataset) = &report.data {
                self.cache.set(key, Arc::new(dataset.clone()));
            }
        }
        Ok(report)
    }

    /// One top-level section of the dataset as JSON, `None` when no dataset
    /// is available or the section is absent.
    pub fn section(&self, section: Section) -> HboiResult<Option<Value>> {
        let Some(dataset) = self.data()? else {
            return Ok(None);
        };
        section_value(&dataset, section)
    }

    /// Generic substring search over the dataset JSON.
    ///
    /// With a section, array sections yield matching items and object
    /// sections matching `{key, value}` pairs; without one, top-level
    /// dataset entries are scanned. Matching is deep: an item matches when
    /// its JSON rendition contains the query.
    pub fn search(&self, query: &str, section: Option<Section>) -> HboiResult<Vec<Value>> {
        let Some(dataset) = self.data()? else {
            return Ok(Vec::new());
        };
        let needle = query.to_lowercase();

        let target = match section {
            Some(section) => match section_value(&dataset, section)? {
                Some(value) => value,
                None => return Ok(Vec::new()),
            },
            None => serde_json::to_value(dataset.as_ref())?,
        };
        Ok(perform_search(&target, &needle))
    }

    pub fn schema_info(&self) -> Option<SchemaInfo> {
        self.validator.as_ref().map(SchemaValidator::schema_info)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn is_ready(&self) -> bool {
        self.initialized
    }

    pub fn data_service(&self) -> &DataService {
        &self.data_service
    }

    pub fn loader(&self) -> &DataLoader {
        &self.loader
    }

    /// The compiled validator; `ServiceNotReady` before `initialize`.
    pub fn validator(&self) -> HboiResult<&SchemaValidator> {
        self.validator.as_ref().ok_or(HboiError::ServiceNotReady)
    }
}

fn section_value(dataset: &Dataset, section: Section) -> HboiResult<Option<Value>> {
    let value = match section {
        Section::Meta => Some(serde_json::to_value(&dataset.meta)?),
        Section::Raamwerken => Some(serde_json::to_value(&dataset.raamwerken)?),
        Section::Beheersingsniveaus => Some(serde_json::to_value(&dataset.beheersingsniveaus)?),
        Section::Activiteiten => Some(serde_json::to_value(&dataset.activiteiten)?),
        Section::Architectuurlagen => Some(serde_json::to_value(&dataset.architectuurlagen)?),
        Section::ProfessionalSkills => dataset
            .professional_skills
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?,
        Section::Beroepstaken => Some(serde_json::to_value(&dataset.beroepstaken)?),
        Section::Verbanden => dataset
            .verbanden
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?,
        Section::Bijlagen => dataset
            .bijlagen
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?,
    };
    Ok(value)
}

fn perform_search(value: &Value, needle: &str) -> Vec<Value> {
    let mut results = Vec::new();
    match value {
        Value::Array(items) => {
            for item in items {
                if matches_deep(item, needle) {
                    results.push(item.clone());
                }
            }
        }
        Value::Object(map) => {
            for (key, entry) in map {
                if key.to_lowercase().contains(needle) || matches_deep(entry, needle) {
                    results.push(json!({ "key": key, "value": entry }));
                }
            }
        }
        _ => {}
    }
    results
}

fn matches_deep(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(text) => text.to_lowercase().contains(needle),
        Value::Object(_) | Value::Array(_) => value.to_string().to_lowercase().contains(needle),
        _ => false,
    }
}
