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

//! End-to-end lifecycle against the shipped schema and dataset files.

use hboi_core::{
    Coordinate, DataLoader, FilterOptions, HboiService, HboiServiceConfig, SchemaValidator,
    Section,
};
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn ready_service() -> HboiService {
    let mut service = HboiService::new(HboiServiceConfig::with_base_dir(data_dir()));
    service.initialize().expect("initialize against shipped data");
    service
}

#[test]
fn shipped_dataset_conforms_to_shipped_schema() {
    let loader = DataLoader::with_base_dir(data_dir());
    let schema = loader.load_schema().unwrap();
    let dataset = loader.load_dataset().unwrap();

    let validator = SchemaValidator::new(schema).unwrap();
    let report = validator.validate(&dataset);
    assert!(
        report.is_valid,
        "shipped dataset invalid: {}",
        report.error_message.unwrap_or_default()
    );
}

#[test]
fn initialize_wires_all_components() {
    let service = ready_service();

    assert!(service.is_ready());
    assert!(service.data_service().is_initialized());

    let stats = service.data_service().stats().unwrap();
    assert_eq!(stats.total_activiteiten, 5);
    assert_eq!(stats.total_architectuurlagen, 5);
    assert_eq!(stats.total_beheersingsniveaus, 4);
    assert_eq!(stats.total_aandachtsgebieden, 4);
    assert_eq!(stats.total_competenties, 12);
    assert!(stats.total_beroepstaken >= 6);

    let info = service.schema_info().unwrap();
    assert_eq!(info.sections.len(), 9);
    assert!(info.title.contains("HBO-i"));
}

#[test]
fn canonical_queries_work_end_to_end() {
    let service = ready_service();
    let data = service.data_service();

    let filtered = data
        .filter_beroepstaken(&FilterOptions {
            activiteit_id: Some("act.analyseren".to_string()),
            architectuurlaag_id: Some("arch.software".to_string()),
            beheersingsniveau_id: Some(3),
            kwaliteitseisen: None,
        })
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "bt.software.analyseren.3");

    let path = data
        .progression_path(
            &Coordinate {
                activiteit_id: "act.analyseren".to_string(),
                architectuurlaag_id: "arch.software".to_string(),
                beheersingsniveau_id: 1,
            },
            &Coordinate {
                activiteit_id: "act.analyseren".to_string(),
                architectuurlaag_id: "arch.software".to_string(),
                beheersingsniveau_id: 3,
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(path.steps.len(), 2);

    assert_eq!(
        data.resolve_alias("ANALYSEREN").unwrap().as_deref(),
        Some("act.analyseren")
    );

    let competenties = data.competenties_for_activiteit("act.analyseren").unwrap();
    assert!(!competenties.is_empty());
}

#[test]
fn sections_and_search_through_the_orchestrator() {
    let service = ready_service();

    let niveaus = service.section(Section::Beheersingsniveaus).unwrap().unwrap();
    assert_eq!(niveaus.as_array().map(Vec::len), Some(4));

    let results = service
        .search("requirements", Some(Section::Beroepstaken))
        .unwrap();
    assert!(!results.is_empty());
}
