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

//! Typed data model for the HBO-i domeinbeschrijving canonical dataset.
//!
//! The three axis entities ([`Activiteit`], [`Architectuurlaag`],
//! [`Beheersingsniveau`]) form a coordinate space; a [`Beroepstaak`] is a
//! point in that space annotated with content. IDs are plain strings; the
//! canonical enumerations (5 activities, 5 layers, 4 levels) are enforced by
//! schema validation at load time, not by the model. All entities are
//! immutable once loaded.

use serde::{Deserialize, Serialize};

/// The complete canonical dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub meta: Meta,
    #[serde(default)]
    pub raamwerken: Raamwerken,
    #[serde(default)]
    pub beheersingsniveaus: Vec<Beheersingsniveau>,
    #[serde(default)]
    pub activiteiten: Vec<Activiteit>,
    #[serde(default)]
    pub architectuurlagen: Vec<Architectuurlaag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_skills: Option<ProfessionalSkills>,
    #[serde(default)]
    pub beroepstaken: Vec<Beroepstaak>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbanden: Option<Verbanden>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bijlagen: Option<Bijlagen>,
}

/// Dataset provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub schema_version: String,
    pub dataset_version: String,
    pub generated_at: String,
    pub language: String,
    pub source: SourceInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub title: String,
    pub publisher: String,
    pub year: u32,
    pub isbn: String,
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

/// Page-level source reference used throughout the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bron {
    pub pagina: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraaf: Option<String>,
}

// --- External framework crosswalk tables ---

/// Static crosswalk tables towards external frameworks (e-CF, SFIA, NLQF/EQF).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Raamwerken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecf: Option<EcfFramework>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfia: Option<SfiaFramework>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nlqf_eqf_qf: Option<Vec<QualificationCrosswalk>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beheersingsniveaus_crosswalk: Option<Vec<NiveauCrosswalk>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcfFramework {
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub activity_area_mapping: Vec<ActivityAreaMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityAreaMapping {
    pub activity_id: String,
    pub ecf_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfiaFramework {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Qualification row (AD/Bachelor/Master/…) against NLQF/EQF/QF-EHEA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationCrosswalk {
    pub qualification: String,
    pub nlqf: u8,
    pub eqf: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qf_ehea_cycle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecf_dimension3_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfia_level_hint: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hboi_beheersingsniveau_hint: Option<u8>,
}

/// One row of the beheersingsniveau crosswalk (niveau → NLQF/EQF/e-CF/SFIA).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiveauCrosswalk {
    pub hboi_niveau: u8,
    pub nlqf: u8,
    pub qf_ehea: String,
    pub eqf: u8,
    pub ecf_proficiency: String,
    pub sfia_responsibility: u8,
    pub bron: Bron,
}

// --- Axis entities ---

/// One of the four ordered proficiency levels (1 = taakgericht … 4 = professiegericht).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beheersingsniveau {
    pub id: u8,
    pub naam: String,
    pub beschrijving: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beschrijving_canoniek: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bron: Option<Bron>,
    pub criteria: NiveauCriteria,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiveauCriteria {
    pub zelfstandigheid: String,
    pub complexiteit_context: String,
    pub complexiteit_inhoud: String,
}

/// One of the five SDLC-based professional activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activiteit {
    pub id: String,
    pub naam: String,
    pub beschrijving: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beschrijving_canoniek: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bron: Option<Bron>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub koppelingen: Option<Koppelingen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwaliteitsaspecten: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

/// External-framework links of a single activiteit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Koppelingen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecf_areas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfia_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecf_context: Option<String>,
}

/// One of the five architecture layers a task may target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architectuurlaag {
    pub id: String,
    pub naam: String,
    pub beschrijving: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beschrijving_canoniek: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bron: Option<Bron>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activiteit_niveau_beschrijvingen: Option<Vec<ActiviteitNiveauBeschrijving>>,
}

/// Layer-specific description for one (activiteit, niveau) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiviteitNiveauBeschrijving {
    pub activiteit_id: String,
    pub beheersingsniveau_id: u8,
    pub beschrijving: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beschrijving_canoniek: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bron: Option<Bron>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_aspect: Option<String>,
}

// --- Professional skills ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalSkills {
    #[serde(default)]
    pub aandachtsgebieden: Vec<Aandachtsgebied>,
}

/// A professional-skill focus area holding exactly three competencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aandachtsgebied {
    pub id: String,
    pub naam: String,
    pub beschrijving: String,
    #[serde(default)]
    pub competenties: Vec<Competentie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competentie {
    pub id: String,
    pub naam: String,
    pub beschrijving: String,
}

// --- Professional tasks ---

/// A concrete professional task located at one (activiteit, laag, niveau) coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beroepstaak {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titel: Option<String>,
    pub beschrijving: String,
    pub activiteit_id: String,
    pub architectuurlaag_id: String,
    pub beheersingsniveau_id: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwaliteitseisen: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voorbeelden: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bronverwijzing: Option<Bronverwijzing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bronverwijzing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagina: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraaf: Option<String>,
}

// --- Relations and appendices ---

/// Activity ↔ professional-skills crosswalk (Bijlage 3 of the source document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verbanden {
    #[serde(default)]
    pub activiteit_naar_professional_skills: Vec<ActiviteitVerband>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiviteitVerband {
    pub activiteit_id: String,
    #[serde(default)]
    pub competentie_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notities: Option<String>,
}

/// Machine-readable appendices (bibliography, abbreviations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bijlagen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bronnen: Option<Vec<BronVermelding>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afkortingen: Option<Vec<Afkorting>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BronVermelding {
    pub titel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub bron: Bron,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Afkorting {
    pub term: String,
    pub uitleg: String,
    pub bron: Bron,
}
