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

//! Sample dataset and schema for tests.
//!
//! Compiled for this crate's own tests and, behind the `fixtures` feature,
//! for downstream test suites. Not part of the public API surface proper.

use crate::model::Dataset;
use serde_json::{json, Value};
use std::path::Path;

/// A small but representative dataset: the full five activities, five
/// layers and four levels, a handful of beroepstaken concentrated on the
/// software layer, and two professional-skill focus areas.
pub fn sample_dataset_value() -> Value {
    json!({
        "meta": {
            "schema_version": "1.0.0",
            "dataset_version": "test-1.0.0",
            "generated_at": "2024-01-01T00:00:00Z",
            "language": "nl",
            "source": {
                "title": "HBO-i Domeinbeschrijving - Test Dataset",
                "publisher": "HBO-i",
                "year": 2024,
                "isbn": "978-90-834007-1-6",
                "license": "CC BY-NC-ND",
                "license_url": "https://creativecommons.org/licenses/by-nc-nd/4.0/",
                "document_url": "https://www.hbo-i.nl"
            }
        },
        "raamwerken": {
            "ecf": {
                "areas": ["Plan", "Build", "Run"],
                "activity_area_mapping": [
                    { "activity_id": "act.analyseren", "ecf_area": "Plan", "notes": "Analyse en requirements engineering" },
                    { "activity_id": "act.adviseren", "ecf_area": "Plan", "notes": "Business analysis en consultancy" },
                    { "activity_id": "act.ontwerpen", "ecf_area": "Plan", "notes": "Solution architecture en design" },
                    { "activity_id": "act.realiseren", "ecf_area": "Build", "notes": "Development en implementation" },
                    { "activity_id": "act.manage_control", "ecf_area": "Run", "notes": "Service management en operations" }
                ]
            },
            "sfia": {
                "levels": [1, 2, 3, 4, 5, 6, 7],
                "notes": "SFIA responsibility levels 1-7."
            },
            "beheersingsniveaus_crosswalk": [
                { "hboi_niveau": 1, "nlqf": 5, "qf_ehea": "short", "eqf": 5, "ecf_proficiency": "e2", "sfia_responsibility": 2, "bron": { "pagina": 27, "sectie": "kruistabel beheersingsniveaus" } },
                { "hboi_niveau": 2, "nlqf": 6, "qf_ehea": "first", "eqf": 6, "ecf_proficiency": "e3", "sfia_responsibility": 3, "bron": { "pagina": 27, "sectie": "kruistabel beheersingsniveaus" } },
                { "hboi_niveau": 3, "nlqf": 7, "qf_ehea": "second", "eqf": 7, "ecf_proficiency": "e4", "sfia_responsibility": 4, "bron": { "pagina": 27, "sectie": "kruistabel beheersingsniveaus" } },
                { "hboi_niveau": 4, "nlqf": 8, "qf_ehea": "third", "eqf": 8, "ecf_proficiency": "e5", "sfia_responsibility": 5, "bron": { "pagina": 27, "sectie": "kruistabel beheersingsniveaus" } }
            ]
        },
        "beheersingsniveaus": [
            {
                "id": 1,
                "naam": "Taakgericht",
                "beschrijving": "Werkt onder algemene richtlijnen in een omgeving waar onvoorspelbare veranderingen optreden.",
                "criteria": {
                    "zelfstandigheid": "Werkt onder algemene richtlijnen in een omgeving waar onvoorspelbare veranderingen optreden.",
                    "complexiteit_context": "Gestructureerd - voorspelbare context, probleem gedefinieerd, aanpak en oplossing bekend bij opdrachtgever.",
                    "complexiteit_inhoud": "Enkele basisconcepten die voortbouwen op vooropleiding."
                }
            },
            {
                "id": 2,
                "naam": "Probleemgericht",
                "beschrijving": "Lost zelfstandig interactieve vraagstukken op die voortkomen uit projectactiviteiten.",
                "criteria": {
                    "zelfstandigheid": "Lost zelfstandig interactieve vraagstukken op die voortkomen uit projectactiviteiten.",
                    "complexiteit_context": "Gestructureerd - onvoorspelbare context, probleem gegeven, keuze van aanpak en oplossingsruimte beperkt.",
                    "complexiteit_inhoud": "Combinatie van meerdere basisconcepten en enkele verdiepingsconcepten die voortbouwen op basisconcepten."
                }
            },
            {
                "id": 3,
                "naam": "Situatiegericht",
                "beschrijving": "Werkt zelfstandig om interactieve problemen op te lossen. Heeft een positief effect op teamprestaties.",
                "criteria": {
                    "zelfstandigheid": "Werkt zelfstandig om interactieve problemen op te lossen. Heeft een positief effect op teamprestaties.",
                    "complexiteit_context": "Gestructureerd - onvoorspelbare context, vage problemen, aanpak en oplossingsruimte open.",
                    "complexiteit_inhoud": "Combinatie van meerdere concepten voor verdieping en innovatie in de lokale situatie."
                }
            },
            {
                "id": 4,
                "naam": "Professiegericht",
                "beschrijving": "Coördineert en stuurt. Pakt vraagstukken aan met veel interacterende factoren.",
                "criteria": {
                    "zelfstandigheid": "Coördineert en stuurt. Pakt vraagstukken aan met veel interacterende factoren.",
                    "complexiteit_context": "Ongestructureerd multidisciplinair en/of specialistisch context.",
                    "complexiteit_inhoud": "Nieuwe concepten voor verdieping en innovatie die overdraagbaar zijn naar andere situaties."
                }
            }
        ],
        "activiteiten": [
            {
                "id": "act.analyseren",
                "naam": "Analyseren",
                "beschrijving": "Het analyseren van processen, producten en informatiestromen in hun onderlinge samenhang en context.",
                "koppelingen": {
                    "ecf_areas": ["Plan"],
                    "sfia_note": "Analyse en requirements engineering",
                    "ecf_context": "e-CF dimension 1 (areas): de activiteit 'analyseren' valt grofweg binnen een deel van het 'area' 'Plan'."
                },
                "kwaliteitsaspecten": ["security", "budget", "tijd", "duurzaamheid"]
            },
            {
                "id": "act.adviseren",
                "naam": "Adviseren",
                "beschrijving": "Het adviseren over de inrichting van processen en/of informatie voor een nieuw te ontwikkelen, aan te schaffen of aan te passen ICT-systeem.",
                "koppelingen": {
                    "ecf_areas": ["Plan"],
                    "sfia_note": "Business analysis en consultancy",
                    "ecf_context": "e-CF dimension 1 (areas): de activiteit 'adviseren' valt grofweg binnen een deel van het 'area' 'Plan'."
                },
                "kwaliteitsaspecten": ["security", "budget", "tijd", "duurzaamheid"]
            },
            {
                "id": "act.ontwerpen",
                "naam": "Ontwerpen",
                "beschrijving": "Het ontwerpen van een (onderdeel van een) ICT-systeem op basis van requirements.",
                "koppelingen": {
                    "ecf_areas": ["Plan", "Build"],
                    "sfia_note": "Solution architecture en design",
                    "ecf_context": "e-CF dimension 1 (areas): de activiteit 'ontwerpen' valt grofweg binnen een deel van het 'area' 'Plan'."
                },
                "kwaliteitsaspecten": ["security", "budget", "tijd", "duurzaamheid"]
            },
            {
                "id": "act.realiseren",
                "naam": "Realiseren",
                "beschrijving": "Het realiseren en testen van een (onderdeel van een) ICT-systeem op basis van een ontwerp.",
                "koppelingen": {
                    "ecf_areas": ["Build"],
                    "sfia_note": "Development en implementation",
                    "ecf_context": "e-CF dimension 1 (areas): de activiteit 'realiseren' valt grofweg binnen het 'area' 'Build'."
                },
                "kwaliteitsaspecten": ["security", "budget", "tijd", "duurzaamheid"]
            },
            {
                "id": "act.manage_control",
                "naam": "Manage & Control",
                "beschrijving": "Het beheren, monitoren en optimaliseren van de ontwikkeling, ingebruikname en het gebruik van ICT-systemen.",
                "koppelingen": {
                    "ecf_areas": ["Run"],
                    "sfia_note": "Service management en operations",
                    "ecf_context": "e-CF dimension 1 (areas): de activiteit 'manage & control' valt overwegend binnen het 'area' 'Run'."
                },
                "kwaliteitsaspecten": ["security", "budget", "tijd", "duurzaamheid"]
            }
        ],
        "architectuurlagen": [
            {
                "id": "arch.gebruikersinteractie",
                "naam": "Gebruikersinteractie",
                "beschrijving": "Communicatie tussen de (eind)gebruiker en het ICT-systeem."
            },
            {
                "id": "arch.organisatieprocessen",
                "naam": "Organisatieprocessen",
                "beschrijving": "Beheersing van operationele, tactische en strategische organisatieprocessen en de bijbehorende informatievoorziening."
            },
            {
                "id": "arch.infrastructuur",
                "naam": "Infrastructuur",
                "beschrijving": "Het geheel van ICT-systemen die worden gebruikt om organisatieprocessen te faciliteren."
            },
            {
                "id": "arch.software",
                "naam": "Software",
                "beschrijving": "Het ontwikkelen van diverse soorten software die na oplevering wordt opgenomen in een ICT-infrastructuur.",
                "activiteit_niveau_beschrijvingen": [
                    {
                        "activiteit_id": "act.analyseren",
                        "beheersingsniveau_id": 1,
                        "beschrijving": "Analyseren van een eenvoudig softwaresysteem met beperkte functionaliteit"
                    },
                    {
                        "activiteit_id": "act.analyseren",
                        "beheersingsniveau_id": 2,
                        "beschrijving": "Analyseren van een softwaresysteem met meerdere componenten en basis integratie"
                    },
                    {
                        "activiteit_id": "act.analyseren",
                        "beheersingsniveau_id": 3,
                        "beschrijving": "Analyseren van een complex softwaresysteem met geavanceerde architectuur en integratie"
                    },
                    {
                        "activiteit_id": "act.analyseren",
                        "beheersingsniveau_id": 4,
                        "beschrijving": "Analyseren van een enterprise softwaresysteem met microservices en cloud-native architectuur"
                    }
                ]
            },
            {
                "id": "arch.hardware_interfacing",
                "naam": "Hardware interfacing",
                "beschrijving": "Interactie tussen software en hardware, van embedded systemen tot sensornetwerken."
            }
        ],
        "professional_skills": {
            "aandachtsgebieden": [
                {
                    "id": "ps.onderzoekend_vermogen",
                    "naam": "Onderzoekend vermogen",
                    "beschrijving": "Het vermogen om methodisch en kritisch te onderzoeken.",
                    "competenties": [
                        {
                            "id": "ps.competentie.methodische_probleemaanpak",
                            "naam": "Methodische probleemaanpak",
                            "beschrijving": "Problemen methodisch aanpakken en oplossen."
                        },
                        {
                            "id": "ps.competentie.onderzoek",
                            "naam": "Onderzoek",
                            "beschrijving": "Onderzoek opzetten en uitvoeren."
                        },
                        {
                            "id": "ps.competentie.communicatie",
                            "naam": "Communicatie",
                            "beschrijving": "Doelgericht communiceren met stakeholders."
                        }
                    ]
                },
                {
                    "id": "ps.persoonlijk_leiderschap",
                    "naam": "Persoonlijk leiderschap",
                    "beschrijving": "Sturing geven aan de eigen ontwikkeling en loopbaan.",
                    "competenties": [
                        {
                            "id": "ps.competentie.ondernemend_zijn",
                            "naam": "Ondernemend zijn",
                            "beschrijving": "Kansen zien en benutten."
                        }
                    ]
                }
            ]
        },
        "beroepstaken": [
            {
                "id": "bt.software.analyseren.1",
                "titel": "Eenvoudige software analyse",
                "beschrijving": "Analyseren van een eenvoudig softwaresysteem.",
                "activiteit_id": "act.analyseren",
                "architectuurlaag_id": "arch.software",
                "beheersingsniveau_id": 1,
                "kwaliteitseisen": ["security"],
                "voorbeelden": ["Analyse van een kleine webapplicatie."],
                "bronverwijzing": { "pagina": 45, "paragraaf": "3.2.1" },
                "role": "exemplar"
            },
            {
                "id": "bt.software.analyseren.2",
                "titel": "Middelmatige software analyse",
                "beschrijving": "Analyseren van een softwaresysteem met meerdere componenten.",
                "activiteit_id": "act.analyseren",
                "architectuurlaag_id": "arch.software",
                "beheersingsniveau_id": 2,
                "kwaliteitseisen": ["security", "performance"],
                "voorbeelden": ["Analyse van een gelaagde webapplicatie."],
                "bronverwijzing": { "pagina": 45, "paragraaf": "3.2.1" },
                "role": "exemplar"
            },
            {
                "id": "bt.software.analyseren.3",
                "titel": "Requirements-analyse voor softwaresysteem",
                "beschrijving": "Uitvoeren van een requirements-analyse.",
                "activiteit_id": "act.analyseren",
                "architectuurlaag_id": "arch.software",
                "beheersingsniveau_id": 3,
                "kwaliteitseisen": ["security", "performance"],
                "voorbeelden": [
                    "Analyse uitvoeren op de integratie van een nieuw CRM-systeem.",
                    "Inventariseren van security-eisen."
                ],
                "bronverwijzing": { "pagina": 45, "paragraaf": "3.2.1" },
                "role": "exemplar"
            },
            {
                "id": "bt.software.analyseren.4",
                "titel": "Complexe software analyse",
                "beschrijving": "Uitvoeren van een complexe software analyse.",
                "activiteit_id": "act.analyseren",
                "architectuurlaag_id": "arch.software",
                "beheersingsniveau_id": 4,
                "kwaliteitseisen": ["security", "performance"],
                "voorbeelden": ["Enterprise software architectuur analyse."],
                "bronverwijzing": { "pagina": 45, "paragraaf": "3.2.1" },
                "role": "exemplar"
            },
            {
                "id": "bt.software.realiseren.2",
                "titel": "Software component implementeren",
                "beschrijving": "Implementeren van een software component.",
                "activiteit_id": "act.realiseren",
                "architectuurlaag_id": "arch.software",
                "beheersingsniveau_id": 2,
                "kwaliteitseisen": ["performance"],
                "voorbeelden": ["Bouwen van een REST API endpoint."],
                "bronverwijzing": { "pagina": 50, "paragraaf": "3.3.1" },
                "role": "exemplar"
            },
            {
                "id": "bt.infrastructuur.adviseren.2",
                "titel": "Infrastructuur advies",
                "beschrijving": "Adviseren over infrastructuur oplossingen.",
                "activiteit_id": "act.adviseren",
                "architectuurlaag_id": "arch.infrastructuur",
                "beheersingsniveau_id": 2,
                "kwaliteitseisen": ["security", "compliance"],
                "voorbeelden": ["Cloud infrastructuur advies."],
                "bronverwijzing": { "pagina": 50, "paragraaf": "3.3.1" },
                "role": "exemplar"
            }
        ],
        "verbanden": {
            "activiteit_naar_professional_skills": [
                {
                    "activiteit_id": "act.analyseren",
                    "competentie_ids": [
                        "ps.competentie.methodische_probleemaanpak",
                        "ps.competentie.onderzoek",
                        "ps.competentie.communicatie"
                    ],
                    "notities": "Analyse vereist methodische aanpak en onderzoek"
                }
            ]
        },
        "bijlagen": {
            "bronnen": [
                {
                    "titel": "European e-Competence Framework (e-CF)",
                    "url": "https://www.ecompetences.eu/",
                    "bron": { "pagina": 43, "sectie": "bronnenlijst" }
                },
                {
                    "titel": "Skills Framework for the Information Age (SFIA)",
                    "url": "https://www.sfia-online.org/",
                    "bron": { "pagina": 43, "sectie": "bronnenlijst" }
                }
            ],
            "afkortingen": [
                {
                    "term": "e-CF",
                    "uitleg": "European e-Competence Framework",
                    "bron": { "pagina": 44, "sectie": "afkortingen" }
                },
                {
                    "term": "SFIA",
                    "uitleg": "Skills Framework for the Information Age",
                    "bron": { "pagina": 44, "sectie": "afkortingen" }
                }
            ]
        }
    })
}

/// The sample dataset decoded into its typed shape.
pub fn sample_dataset() -> Dataset {
    serde_json::from_value(sample_dataset_value()).expect("sample dataset is well-formed")
}

/// A deliberately loose schema matching the sample dataset: section presence,
/// collection shapes and minimum counts, without the full canonical
/// enumerations.
pub fn sample_schema() -> Value {
    json!({
        "title": "HBO-i Domeinbeschrijving - Canonieke Dataset",
        "meta": { "schema_version": "1.0.0" },
        "type": "object",
        "properties": {
            "meta": { "type": "object" },
            "raamwerken": { "type": "object" },
            "beheersingsniveaus": { "type": "array", "minItems": 4 },
            "activiteiten": { "type": "array", "minItems": 5 },
            "architectuurlagen": { "type": "array", "minItems": 5 },
            "professional_skills": { "type": "object" },
            "beroepstaken": { "type": "array" },
            "verbanden": { "type": "object" },
            "bijlagen": { "type": "object" }
        },
        "required": [
            "meta",
            "beheersingsniveaus",
            "activiteiten",
            "architectuurlagen",
            "professional_skills",
            "beroepstaken",
            "bijlagen"
        ]
    })
}

/// Write the sample schema and dataset into `dir` under the default loader
/// file names.
pub fn write_sample_files(dir: &Path) -> std::io::Result<()> {
    std::fs::write(
        dir.join("hboi.schema.json"),
        serde_json::to_string_pretty(&sample_schema()).expect("schema serializes"),
    )?;
    std::fs::write(
        dir.join("hboi.example.json"),
        serde_json::to_string_pretty(&sample_dataset_value()).expect("dataset serializes"),
    )
}
