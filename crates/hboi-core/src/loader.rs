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

//! Filesystem loading of the HBO-i schema and dataset documents.

use crate::error::HboiResult;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory the schema and data files live in.
    pub base_dir: PathBuf,
    pub schema_file: String,
    pub data_file: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            schema_file: "hboi.schema.json".to_string(),
            data_file: "hboi.example.json".to_string(),
        }
    }
}

/// Presence check result for the configured files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    pub schema: bool,
    pub example_data: bool,
}

/// Loads schema and dataset JSON from disk.
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    config: LoaderConfig,
}

impl DataLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Loader rooted at `base_dir` with the default file names.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(LoaderConfig {
            base_dir: base_dir.into(),
            ..Default::default()
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn schema_path(&self) -> PathBuf {
        self.config.base_dir.join(&self.config.schema_file)
    }

    pub fn data_path(&self) -> PathBuf {
        self.config.base_dir.join(&self.config.data_file)
    }

    /// Load and parse the JSON Schema document.
    pub fn load_schema(&self) -> HboiResult<Value> {
        let path = self.schema_path();
        info!(path = %path.display(), "loading schema");
        let schema = read_json(&path)?;
        let sections = schema
            .get("properties")
            .and_then(Value::as_object)
            .map_or(0, |properties| properties.len());
        info!(sections, "schema loaded");
        Ok(schema)
    }

    /// Load and parse the example dataset as raw JSON.
    pub fn load_dataset(&self) -> HboiResult<Value> {
        let path = self.data_path();
        info!(path = %path.display(), "loading example data");
        let data = read_json(&path)?;
        info!("example data loaded");
        Ok(data)
    }

    /// Load any JSON file relative to the base directory.
    pub fn load_file(&self, file: &str) -> HboiResult<Value> {
        let path = self.config.base_dir.join(file);
        info!(path = %path.display(), "loading file");
        read_json(&path)
    }

    /// Check which of the configured files exist.
    pub fn check_files(&self) -> FileStatus {
        FileStatus {
            schema: self.schema_path().is_file(),
            example_data: self.data_path().is_file(),
        }
    }
}

fn read_json(path: &Path) -> HboiResult<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HboiError;
    use std::fs;
    use tempfile::TempDir;

    fn loader_in(dir: &TempDir) -> DataLoader {
        DataLoader::with_base_dir(dir.path())
    }

    #[test]
    fn loads_schema_and_data() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("hboi.schema.json"),
            r#"{"title": "t", "properties": {"meta": {}}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("hboi.example.json"), r#"{"meta": {}}"#).unwrap();

        let loader = loader_in(&dir);
        let status = loader.check_files();
        assert!(status.schema);
        assert!(status.example_data);

        let schema = loader.load_schema().unwrap();
        assert_eq!(schema["title"], "t");
        let data = loader.load_dataset().unwrap();
        assert!(data.get("meta").is_some());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let loader = loader_in(&dir);

        let status = loader.check_files();
        assert!(!status.schema);
        assert!(!status.example_data);
        assert!(matches!(loader.load_schema(), Err(HboiError::Io(_))));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hboi.schema.json"), "{not json").unwrap();

        let loader = loader_in(&dir);
        assert!(matches!(loader.load_schema(), Err(HboiError::Json(_))));
    }

    #[test]
    fn load_file_resolves_relative_to_base_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("extra.json"), r#"[1, 2, 3]"#).unwrap();

        let loader = loader_in(&dir);
        let value = loader.load_file("extra.json").unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }
}
