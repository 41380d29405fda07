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

//! Read queries over one validated dataset snapshot.
//!
//! The service holds the snapshot for the remaining process lifetime and
//! answers entity lookups, hierarchical and relational joins, filters,
//! substring search, alias resolution, framework crosswalks and the
//! progression-path computation. Lookup misses are `None`, unknown filter
//! targets are empty sequences; the only error surfaces are the
//! initialization preconditions.

use crate::error::{HboiError, HboiResult};
use crate::model::{
    Aandachtsgebied, Activiteit, Architectuurlaag, Beheersingsniveau, Beroepstaak, Competentie,
    Dataset, ProfessionalSkills, Verbanden,
};
use crate::section::Section;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Filter criteria for beroepstaken. All constraints are conjunctive; absent
/// fields (and empty-string ids, and a niveau of 0) mean "no constraint".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterOptions {
    pub activiteit_id: Option<String>,
    pub architectuurlaag_id: Option<String>,
    pub beheersingsniveau_id: Option<u8>,
    pub kwaliteitseisen: Option<Vec<String>>,
}

/// Options for the cross-collection search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
}

/// A point in the (activiteit, architectuurlaag, beheersingsniveau) space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub activiteit_id: String,
    pub architectuurlaag_id: String,
    pub beheersingsniveau_id: u8,
}

/// One synthetic step of a progression path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionStep {
    pub activiteit_id: String,
    pub architectuurlaag_id: String,
    pub beheersingsniveau_id: u8,
    pub description: String,
}

/// A progression path between two coordinates.
///
/// The step generation is a placeholder, not a path search: the dataset has
/// no prerequisite graph to walk. Same activiteit and laag yields one step
/// per intermediate niveau; anything else yields a single direct transition.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressionPath {
    pub from: Coordinate,
    pub to: Coordinate,
    pub steps: Vec<ProgressionStep>,
    #[serde(rename = "estimatedDuration")]
    pub estimated_duration: String,
    pub prerequisites: Vec<String>,
}

/// Entity counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStats {
    pub total_activiteiten: usize,
    pub total_architectuurlagen: usize,
    pub total_beheersingsniveaus: usize,
    pub total_beroepstaken: usize,
    pub total_aandachtsgebieden: usize,
    pub total_competenties: usize,
}

/// Query service over one validated dataset snapshot.
///
/// State machine: uninitialized → initialized, one way. Replacing the
/// snapshot afterwards is an explicit, separate operation ([`reload`]) so an
/// accidental double [`initialize`] is detectable.
///
/// [`initialize`]: DataService::initialize
/// [`reload`]: DataService::reload
#[derive(Debug, Default)]
pub struct DataService {
    data: Option<Arc<Dataset>>,
}

impl DataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the service with a validated dataset.
    pub fn initialize(&mut self, data: Arc<Dataset>) -> HboiResult<()> {
        if self.data.is_some() {
            return Err(HboiError::AlreadyInitialized);
        }
        self.data = Some(data);
        info!("data service initialized");
        Ok(())
    }

    /// Replace the snapshot of an already-initialized service.
    pub fn reload(&mut self, data: Arc<Dataset>) {
        self.data = Some(data);
        info!("data service reloaded");
    }

    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    /// The full snapshot, if initialized.
    pub fn data(&self) -> Option<Arc<Dataset>> {
        self.data.clone()
    }

    fn dataset(&self) -> HboiResult<&Dataset> {
        self.data.as_deref().ok_or(HboiError::NotInitialized)
    }

    // --- Entity access ---

    pub fn activiteiten(&self) -> HboiResult<&[Activiteit]> {
        Ok(&self.dataset()?.activiteiten)
    }

    pub fn activiteit(&self, id: &str) -> HboiResult<Option<&Activiteit>> {
        Ok(self.activiteiten()?.iter().find(|a| a.id == id))
    }

    pub fn architectuurlagen(&self) -> HboiResult<&[Architectuurlaag]> {
        Ok(&self.dataset()?.architectuurlagen)
    }

    pub fn architectuurlaag(&self, id: &str) -> HboiResult<Option<&Architectuurlaag>> {
        Ok(self.architectuurlagen()?.iter().find(|a| a.id == id))
    }

    pub fn beheersingsniveaus(&self) -> HboiResult<&[Beheersingsniveau]> {
        Ok(&self.dataset()?.beheersingsniveaus)
    }

    pub fn beheersingsniveau(&self, id: u8) -> HboiResult<Option<&Beheersingsniveau>> {
        Ok(self.beheersingsniveaus()?.iter().find(|b| b.id == id))
    }

    pub fn beroepstaken(&self) -> HboiResult<&[Beroepstaak]> {
        Ok(&self.dataset()?.beroepstaken)
    }

    pub fn beroepstaak(&self, id: &str) -> HboiResult<Option<&Beroepstaak>> {
        Ok(self.beroepstaken()?.iter().find(|b| b.id == id))
    }

    pub fn professional_skills(&self) -> HboiResult<Option<&ProfessionalSkills>> {
        Ok(self.dataset()?.professional_skills.as_ref())
    }

    pub fn aandachtsgebieden(&self) -> HboiResult<&[Aandachtsgebied]> {
        Ok(self
            .professional_skills()?
            .map(|skills| skills.aandachtsgebieden.as_slice())
            .unwrap_or_default())
    }

    pub fn aandachtsgebied(&self, id: &str) -> HboiResult<Option<&Aandachtsgebied>> {
        Ok(self.aandachtsgebieden()?.iter().find(|a| a.id == id))
    }

    /// All competencies, flattened over the focus areas in dataset order.
    pub fn competenties(&self) -> HboiResult<Vec<&Competentie>> {
        Ok(self
            .aandachtsgebieden()?
            .iter()
            .flat_map(|gebied| gebied.competenties.iter())
            .collect())
    }

    pub fn competentie(&self, id: &str) -> HboiResult<Option<&Competentie>> {
        Ok(self.competenties()?.into_iter().find(|c| c.id == id))
    }

    pub fn verbanden(&self) -> HboiResult<Option<&Verbanden>> {
        Ok(self.dataset()?.verbanden.as_ref())
    }

    // --- Hierarchical queries ---

    pub fn competenties_for_aandachtsgebied(&self, id: &str) -> HboiResult<&[Competentie]> {
        Ok(self
            .aandachtsgebied(id)?
            .map(|gebied| gebied.competenties.as_slice())
            .unwrap_or_default())
    }

    pub fn beroepstaken_for_activiteit(&self, activiteit_id: &str) -> HboiResult<Vec<&Beroepstaak>> {
        Ok(self
            .beroepstaken()?
            .iter()
            .filter(|taak| taak.activiteit_id == activiteit_id)
            .collect())
    }

    pub fn beroepstaken_for_architectuurlaag(
        &self,
        architectuurlaag_id: &str,
    ) -> HboiResult<Vec<&Beroepstaak>> {
        Ok(self
            .beroepstaken()?
            .iter()
            .filter(|taak| taak.architectuurlaag_id == architectuurlaag_id)
            .collect())
    }

    pub fn beroepstaken_for_beheersingsniveau(
        &self,
        beheersingsniveau_id: u8,
    ) -> HboiResult<Vec<&Beroepstaak>> {
        Ok(self
            .beroepstaken()?
            .iter()
            .filter(|taak| taak.beheersingsniveau_id == beheersingsniveau_id)
            .collect())
    }

    pub fn beroepstaken_for_activiteit_en_architectuurlaag(
        &self,
        activiteit_id: &str,
        architectuurlaag_id: &str,
    ) -> HboiResult<Vec<&Beroepstaak>> {
        Ok(self
            .beroepstaken()?
            .iter()
            .filter(|taak| {
                taak.activiteit_id == activiteit_id
                    && taak.architectuurlaag_id == architectuurlaag_id
            })
            .collect())
    }

    /// Three-key exact match: all beroepstaken at one coordinate.
    pub fn beroepstaken_at(
        &self,
        activiteit_id: &str,
        architectuurlaag_id: &str,
        beheersingsniveau_id: u8,
    ) -> HboiResult<Vec<&Beroepstaak>> {
        Ok(self
            .beroepstaken()?
            .iter()
            .filter(|taak| {
                taak.activiteit_id == activiteit_id
                    && taak.architectuurlaag_id == architectuurlaag_id
                    && taak.beheersingsniveau_id == beheersingsniveau_id
            })
            .collect())
    }

    // --- Relational queries ---

    /// Competencies linked to an activiteit through the verbanden mapping.
    /// Ids that resolve to no competentie are dropped silently.
    pub fn competenties_for_activiteit(
        &self,
        activiteit_id: &str,
    ) -> HboiResult<Vec<&Competentie>> {
        let Some(verbanden) = self.verbanden()? else {
            return Ok(Vec::new());
        };
        let Some(verband) = verbanden
            .activiteit_naar_professional_skills
            .iter()
            .find(|v| v.activiteit_id == activiteit_id)
        else {
            return Ok(Vec::new());
        };

        let mut competenties = Vec::new();
        for id in &verband.competentie_ids {
            if let Some(competentie) = self.competentie(id)? {
                competenties.push(competentie);
            }
        }
        Ok(competenties)
    }

    // --- Filtering and search ---

    /// Apply the conjunctive filters of `options` to all beroepstaken.
    /// No constraints returns the full collection in dataset order.
    pub fn filter_beroepstaken(&self, options: &FilterOptions) -> HboiResult<Vec<&Beroepstaak>> {
        let mut taken: Vec<&Beroepstaak> = self.beroepstaken()?.iter().collect();

        if let Some(id) = options.activiteit_id.as_deref().filter(|id| !id.is_empty()) {
            taken.retain(|taak| taak.activiteit_id == id);
        }
        if let Some(id) = options
            .architectuurlaag_id
            .as_deref()
            .filter(|id| !id.is_empty())
        {
            taken.retain(|taak| taak.architectuurlaag_id == id);
        }
        // A niveau of 0 is treated the same as absent.
        if let Some(niveau) = options.beheersingsniveau_id.filter(|n| *n != 0) {
            taken.retain(|taak| taak.beheersingsniveau_id == niveau);
        }
        if let Some(eisen) = options
            .kwaliteitseisen
            .as_ref()
            .filter(|eisen| !eisen.is_empty())
        {
            taken.retain(|taak| {
                taak.kwaliteitseisen
                    .as_ref()
                    .is_some_and(|have| eisen.iter().any(|eis| have.contains(eis)))
            });
        }

        Ok(taken)
    }

    /// Substring search across activiteiten, architectuurlagen,
    /// beheersingsniveaus, beroepstaken and competenties. An entity matches
    /// when any top-level string field, or string element of a top-level
    /// array field, contains the query.
    pub fn search(&self, query: &str, options: SearchOptions) -> HboiResult<Vec<Value>> {
        let needle = normalize(query, options.case_sensitive);
        let mut results = Vec::new();

        results.extend(search_entities(
            self.activiteiten()?.iter(),
            &needle,
            options.case_sensitive,
        ));
        results.extend(search_entities(
            self.architectuurlagen()?.iter(),
            &needle,
            options.case_sensitive,
        ));
        results.extend(search_entities(
            self.beheersingsniveaus()?.iter(),
            &needle,
            options.case_sensitive,
        ));
        results.extend(search_entities(
            self.beroepstaken()?.iter(),
            &needle,
            options.case_sensitive,
        ));
        results.extend(search_entities(
            self.competenties()?,
            &needle,
            options.case_sensitive,
        ));

        Ok(results)
    }

    /// The same substring scan restricted to one section. Only the five
    /// entity sections are searchable; the rest yield an empty sequence.
    /// Always case-insensitive.
    pub fn search_in_section(&self, section: Section, query: &str) -> HboiResult<Vec<Value>> {
        let needle = query.to_lowercase();
        match section {
            Section::Activiteiten => Ok(search_entities(self.activiteiten()?.iter(), &needle, false)),
            Section::Architectuurlagen => {
                Ok(search_entities(self.architectuurlagen()?.iter(), &needle, false))
            }
            Section::Beheersingsniveaus => {
                Ok(search_entities(self.beheersingsniveaus()?.iter(), &needle, false))
            }
            Section::Beroepstaken => Ok(search_entities(self.beroepstaken()?.iter(), &needle, false)),
            Section::ProfessionalSkills => Ok(search_entities(self.competenties()?, &needle, false)),
            _ => Ok(Vec::new()),
        }
    }

    // --- Alias resolution ---

    /// Resolve an alias to a canonical id.
    ///
    /// Tried in fixed priority order (activiteit, architectuurlaag,
    /// beroepstaak, competentie), matching case-insensitively on naam/titel
    /// or exactly on id. The first hit wins, which is the tiebreaker for
    /// names that are not globally unique.
    pub fn resolve_alias(&self, alias: &str) -> HboiResult<Option<String>> {
        let lowered = alias.to_lowercase();

        if let Some(activiteit) = self
            .activiteiten()?
            .iter()
            .find(|a| a.naam.to_lowercase() == lowered || a.id == alias)
        {
            return Ok(Some(activiteit.id.clone()));
        }
        if let Some(laag) = self
            .architectuurlagen()?
            .iter()
            .find(|a| a.naam.to_lowercase() == lowered || a.id == alias)
        {
            return Ok(Some(laag.id.clone()));
        }
        if let Some(taak) = self.beroepstaken()?.iter().find(|b| {
            b.titel
                .as_deref()
                .is_some_and(|titel| titel.to_lowercase() == lowered)
                || b.id == alias
        }) {
            return Ok(Some(taak.id.clone()));
        }
        if let Some(competentie) = self
            .competenties()?
            .into_iter()
            .find(|c| c.naam.to_lowercase() == lowered || c.id == alias)
        {
            return Ok(Some(competentie.id.clone()));
        }

        Ok(None)
    }

    // --- Crosswalks ---

    /// e-CF areas linked to an activiteit; empty when the id is unknown or
    /// the activiteit carries no koppelingen.
    pub fn ecf_areas_for_activiteit(&self, activiteit_id: &str) -> HboiResult<Vec<String>> {
        Ok(self
            .activiteit(activiteit_id)?
            .and_then(|a| a.koppelingen.as_ref())
            .and_then(|k| k.ecf_areas.clone())
            .unwrap_or_default())
    }

    /// SFIA label for a beheersingsniveau.
    ///
    /// Uses a fixed four-row mapping rather than the dataset's own
    /// `raamwerken` crosswalk table.
    // TODO: source this from raamwerken.beheersingsniveaus_crosswalk once the
    // dataset table carries the SFIA level labels.
    pub fn sfia_for_niveau(&self, beheersingsniveau_id: u8) -> HboiResult<Option<&'static str>> {
        if self.beheersingsniveau(beheersingsniveau_id)?.is_none() {
            return Ok(None);
        }
        Ok(match beheersingsniveau_id {
            1 => Some("Level 1 - Follow"),
            2 => Some("Level 2 - Assist"),
            3 => Some("Level 3 - Apply"),
            4 => Some("Level 4 - Enable"),
            _ => None,
        })
    }

    pub fn sfia_note_for_activiteit(&self, activiteit_id: &str) -> HboiResult<Option<String>> {
        Ok(self
            .activiteit(activiteit_id)?
            .and_then(|a| a.koppelingen.as_ref())
            .and_then(|k| k.sfia_note.clone()))
    }

    // --- Progression paths ---

    /// Synthetic progression path between two coordinates, or `None` when
    /// either endpoint has no beroepstaak.
    pub fn progression_path(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> HboiResult<Option<ProgressionPath>> {
        let from_taken = self.beroepstaken_at(
            &from.activiteit_id,
            &from.architectuurlaag_id,
            from.beheersingsniveau_id,
        )?;
        let to_taken = self.beroepstaken_at(
            &to.activiteit_id,
            &to.architectuurlaag_id,
            to.beheersingsniveau_id,
        )?;
        if from_taken.is_empty() || to_taken.is_empty() {
            return Ok(None);
        }

        let mut steps = Vec::new();
        if from.activiteit_id == to.activiteit_id
            && from.architectuurlaag_id == to.architectuurlaag_id
        {
            let start = from.beheersingsniveau_id.saturating_add(1);
            for niveau in start..=to.beheersingsniveau_id {
                steps.push(ProgressionStep {
                    activiteit_id: from.activiteit_id.clone(),
                    architectuurlaag_id: from.architectuurlaag_id.clone(),
                    beheersingsniveau_id: niveau,
                    description: format!("Verhoog beheersingsniveau naar {niveau}"),
                });
            }
        } else {
            steps.push(ProgressionStep {
                activiteit_id: to.activiteit_id.clone(),
                architectuurlaag_id: to.architectuurlaag_id.clone(),
                beheersingsniveau_id: to.beheersingsniveau_id,
                description: format!(
                    "Transitie naar {} in {}",
                    to.activiteit_id, to.architectuurlaag_id
                ),
            });
        }

        Ok(Some(ProgressionPath {
            from: from.clone(),
            to: to.clone(),
            estimated_duration: format!("{} maanden", steps.len() * 6),
            prerequisites: vec![
                "Relevante werkervaring".to_string(),
                "Training in nieuwe technologieën".to_string(),
            ],
            steps,
        }))
    }

    // --- Statistics ---

    pub fn stats(&self) -> HboiResult<DataStats> {
        Ok(DataStats {
            total_activiteiten: self.activiteiten()?.len(),
            total_architectuurlagen: self.architectuurlagen()?.len(),
            total_beheersingsniveaus: self.beheersingsniveaus()?.len(),
            total_beroepstaken: self.beroepstaken()?.len(),
            total_aandachtsgebieden: self.aandachtsgebieden()?.len(),
            total_competenties: self.competenties()?.len(),
        })
    }
}

fn normalize(query: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    }
}

fn contains(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.contains(needle)
    } else {
        haystack.to_lowercase().contains(needle)
    }
}

/// Keep entities whose top-level string values (or string elements of
/// top-level arrays) contain the needle. Nested objects are not descended
/// into.
fn search_entities<I, T>(items: I, needle: &str, case_sensitive: bool) -> Vec<Value>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    items
        .into_iter()
        .filter_map(|item| {
            let value = serde_json::to_value(&item).ok()?;
            entity_matches(&value, needle, case_sensitive).then_some(value)
        })
        .collect()
}

fn entity_matches(value: &Value, needle: &str, case_sensitive: bool) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.values().any(|field| match field {
        Value::String(text) => contains(text, needle, case_sensitive),
        Value::Array(items) => items.iter().any(|item| {
            item.as_str()
                .is_some_and(|text| contains(text, needle, case_sensitive))
        }),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn service() -> DataService {
        let mut service = DataService::new();
        service
            .initialize(Arc::new(fixtures::sample_dataset()))
            .unwrap();
        service
    }

    fn coordinate(activiteit: &str, laag: &str, niveau: u8) -> Coordinate {
        Coordinate {
            activiteit_id: activiteit.to_string(),
            architectuurlaag_id: laag.to_string(),
            beheersingsniveau_id: niveau,
        }
    }

    #[test]
    fn queries_before_initialize_fail() {
        let service = DataService::new();
        assert!(matches!(
            service.activiteiten(),
            Err(HboiError::NotInitialized)
        ));
        assert!(matches!(
            service.beroepstaak("bt.x"),
            Err(HboiError::NotInitialized)
        ));
        assert!(matches!(service.stats(), Err(HboiError::NotInitialized)));
        assert!(service.data().is_none());
    }

    #[test]
    fn double_initialize_is_rejected() {
        let mut service = service();
        let result = service.initialize(Arc::new(fixtures::sample_dataset()));
        assert!(matches!(result, Err(HboiError::AlreadyInitialized)));
    }

    #[test]
    fn reload_replaces_the_snapshot() {
        let mut service = service();
        let mut dataset = fixtures::sample_dataset();
        dataset.beroepstaken.clear();
        service.reload(Arc::new(dataset));
        assert_eq!(service.beroepstaken().unwrap().len(), 0);
    }

    #[test]
    fn entity_accessors_return_dataset_order() {
        let service = service();

        let activiteiten = service.activiteiten().unwrap();
        assert_eq!(activiteiten.len(), 5);
        assert_eq!(activiteiten[0].id, "act.analyseren");

        assert_eq!(service.architectuurlagen().unwrap().len(), 5);
        assert_eq!(service.beheersingsniveaus().unwrap().len(), 4);
        assert_eq!(service.beroepstaken().unwrap().len(), 6);
    }

    #[test]
    fn lookup_by_id_and_misses() {
        let service = service();

        let activiteit = service.activiteit("act.analyseren").unwrap().unwrap();
        assert_eq!(activiteit.naam, "Analyseren");
        assert!(service.activiteit("act.nonexistent").unwrap().is_none());

        let laag = service.architectuurlaag("arch.software").unwrap().unwrap();
        assert_eq!(laag.naam, "Software");

        let niveau = service.beheersingsniveau(1).unwrap().unwrap();
        assert_eq!(niveau.naam, "Taakgericht");
        assert!(service.beheersingsniveau(99).unwrap().is_none());

        let taak = service
            .beroepstaak("bt.software.analyseren.3")
            .unwrap()
            .unwrap();
        assert_eq!(
            taak.titel.as_deref(),
            Some("Requirements-analyse voor softwaresysteem")
        );
        assert!(service.beroepstaak("bt.nope").unwrap().is_none());
    }

    #[test]
    fn competenties_flatten_over_aandachtsgebieden() {
        let service = service();

        assert_eq!(service.aandachtsgebieden().unwrap().len(), 2);
        let competenties = service.competenties().unwrap();
        assert_eq!(competenties.len(), 4);
        assert_eq!(competenties[0].id, "ps.competentie.methodische_probleemaanpak");

        let onderzoek = service
            .competentie("ps.competentie.onderzoek")
            .unwrap()
            .unwrap();
        assert_eq!(onderzoek.naam, "Onderzoek");
        assert!(service.competentie("ps.competentie.niet").unwrap().is_none());
    }

    #[test]
    fn competenties_for_aandachtsgebied_unknown_is_empty() {
        let service = service();
        assert_eq!(
            service
                .competenties_for_aandachtsgebied("ps.onderzoekend_vermogen")
                .unwrap()
                .len(),
            3
        );
        assert!(service
            .competenties_for_aandachtsgebied("ps.onbekend")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn hierarchical_filters() {
        let service = service();

        assert_eq!(
            service
                .beroepstaken_for_activiteit("act.analyseren")
                .unwrap()
                .len(),
            4
        );
        assert_eq!(
            service
                .beroepstaken_for_architectuurlaag("arch.software")
                .unwrap()
                .len(),
            5
        );
        assert_eq!(
            service.beroepstaken_for_beheersingsniveau(2).unwrap().len(),
            3
        );
        assert_eq!(
            service
                .beroepstaken_for_activiteit_en_architectuurlaag("act.analyseren", "arch.software")
                .unwrap()
                .len(),
            4
        );
        let at = service
            .beroepstaken_at("act.analyseren", "arch.software", 3)
            .unwrap();
        assert_eq!(at.len(), 1);
        assert_eq!(at[0].id, "bt.software.analyseren.3");
    }

    #[test]
    fn competenties_for_activiteit_via_verbanden() {
        let service = service();

        let competenties = service.competenties_for_activiteit("act.analyseren").unwrap();
        assert_eq!(competenties.len(), 3);
        assert_eq!(competenties[0].naam, "Methodische probleemaanpak");

        // No verbanden entry for this activiteit.
        assert!(service
            .competenties_for_activiteit("act.realiseren")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn competenties_for_activiteit_drops_unresolvable_ids() {
        let mut service = DataService::new();
        let mut dataset = fixtures::sample_dataset();
        dataset
            .verbanden
            .as_mut()
            .unwrap()
            .activiteit_naar_professional_skills[0]
            .competentie_ids
            .push("ps.competentie.spook".to_string());
        service.initialize(Arc::new(dataset)).unwrap();

        let competenties = service.competenties_for_activiteit("act.analyseren").unwrap();
        assert_eq!(competenties.len(), 3);
    }

    #[test]
    fn filter_without_constraints_returns_everything_in_order() {
        let service = service();
        let all = service.filter_beroepstaken(&FilterOptions::default()).unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, "bt.software.analyseren.1");
        assert_eq!(all[5].id, "bt.infrastructuur.adviseren.2");
    }

    #[test]
    fn filter_three_axis_pinpoints_single_task() {
        let service = service();
        let options = FilterOptions {
            activiteit_id: Some("act.analyseren".to_string()),
            architectuurlaag_id: Some("arch.software".to_string()),
            beheersingsniveau_id: Some(3),
            kwaliteitseisen: None,
        };
        let filtered = service.filter_beroepstaken(&options).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "bt.software.analyseren.3");
    }

    #[test]
    fn filter_by_kwaliteitseisen_is_set_intersection() {
        let service = service();
        let options = FilterOptions {
            kwaliteitseisen: Some(vec!["compliance".to_string(), "privacy".to_string()]),
            ..Default::default()
        };
        let filtered = service.filter_beroepstaken(&options).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "bt.infrastructuur.adviseren.2");
    }

    #[test]
    fn filter_treats_empty_and_zero_as_unconstrained() {
        let service = service();
        let options = FilterOptions {
            activiteit_id: Some(String::new()),
            architectuurlaag_id: Some(String::new()),
            beheersingsniveau_id: Some(0),
            kwaliteitseisen: Some(Vec::new()),
        };
        assert_eq!(service.filter_beroepstaken(&options).unwrap().len(), 6);
    }

    #[test]
    fn search_scans_all_five_collections() {
        let service = service();

        let results = service.search("analyseren", SearchOptions::default()).unwrap();
        // Matches the activiteit, layer cell texts live in nested objects and
        // are ignored, and the four analyse beroepstaken.
        assert!(results.len() >= 5);

        let results = service.search("Onderzoek", SearchOptions::default()).unwrap();
        assert!(results
            .iter()
            .any(|value| value["id"] == "ps.competentie.onderzoek"));
    }

    #[test]
    fn search_case_sensitivity() {
        let service = service();

        let insensitive = service.search("ANALYSEREN", SearchOptions::default()).unwrap();
        assert!(!insensitive.is_empty());

        let sensitive = service
            .search("ANALYSEREN", SearchOptions { case_sensitive: true })
            .unwrap();
        assert!(sensitive.is_empty());
    }

    #[test]
    fn search_matches_string_array_elements() {
        let service = service();
        let results = service.search("CRM-systeem", SearchOptions::default()).unwrap();
        assert!(results
            .iter()
            .any(|value| value["id"] == "bt.software.analyseren.3"));
    }

    #[test]
    fn search_does_not_descend_into_nested_objects() {
        let service = service();
        // Only present inside beheersingsniveau criteria objects.
        let results = service
            .search("voortbouwen op vooropleiding", SearchOptions::default())
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn search_in_section_scopes_the_scan() {
        let service = service();

        let taken = service
            .search_in_section(Section::Beroepstaken, "analyse")
            .unwrap();
        assert!(!taken.is_empty());
        assert!(taken.iter().all(|value| value["id"]
            .as_str()
            .is_some_and(|id| id.starts_with("bt."))));

        let competenties = service
            .search_in_section(Section::ProfessionalSkills, "onderzoek")
            .unwrap();
        assert!(!competenties.is_empty());
    }

    #[test]
    fn search_in_unsearchable_section_is_empty() {
        let service = service();
        assert!(service
            .search_in_section(Section::Meta, "hbo")
            .unwrap()
            .is_empty());
        assert!(service
            .search_in_section(Section::Verbanden, "analyse")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn resolve_alias_priority_and_case() {
        let service = service();

        assert_eq!(
            service.resolve_alias("ANALYSEREN").unwrap().as_deref(),
            Some("act.analyseren")
        );
        assert_eq!(
            service.resolve_alias("act.ontwerpen").unwrap().as_deref(),
            Some("act.ontwerpen")
        );
        assert_eq!(
            service.resolve_alias("software").unwrap().as_deref(),
            Some("arch.software")
        );
        assert_eq!(
            service.resolve_alias("Infrastructuur advies").unwrap().as_deref(),
            Some("bt.infrastructuur.adviseren.2")
        );
        assert_eq!(
            service.resolve_alias("communicatie").unwrap().as_deref(),
            Some("ps.competentie.communicatie")
        );
        assert_eq!(service.resolve_alias("nonexistent-xyz").unwrap(), None);
    }

    #[test]
    fn ecf_crosswalk() {
        let service = service();
        assert_eq!(
            service.ecf_areas_for_activiteit("act.ontwerpen").unwrap(),
            vec!["Plan".to_string(), "Build".to_string()]
        );
        assert!(service
            .ecf_areas_for_activiteit("act.onbekend")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn sfia_crosswalk_is_the_fixed_table() {
        let service = service();
        assert_eq!(
            service.sfia_for_niveau(1).unwrap(),
            Some("Level 1 - Follow")
        );
        assert_eq!(
            service.sfia_for_niveau(4).unwrap(),
            Some("Level 4 - Enable")
        );
        assert_eq!(service.sfia_for_niveau(9).unwrap(), None);

        assert_eq!(
            service
                .sfia_note_for_activiteit("act.realiseren")
                .unwrap()
                .as_deref(),
            Some("Development en implementation")
        );
        assert_eq!(service.sfia_note_for_activiteit("act.x").unwrap(), None);
    }

    #[test]
    fn progression_same_axis_steps_through_intermediate_niveaus() {
        let service = service();
        let path = service
            .progression_path(
                &coordinate("act.analyseren", "arch.software", 1),
                &coordinate("act.analyseren", "arch.software", 3),
            )
            .unwrap()
            .unwrap();

        assert_eq!(path.steps.len(), 2);
        assert_eq!(path.steps[0].beheersingsniveau_id, 2);
        assert_eq!(path.steps[1].beheersingsniveau_id, 3);
        assert_eq!(path.steps[0].description, "Verhoog beheersingsniveau naar 2");
        assert_eq!(path.estimated_duration, "12 maanden");
        assert_eq!(path.prerequisites.len(), 2);
    }

    #[test]
    fn progression_downward_has_no_steps() {
        let service = service();
        let path = service
            .progression_path(
                &coordinate("act.analyseren", "arch.software", 3),
                &coordinate("act.analyseren", "arch.software", 1),
            )
            .unwrap()
            .unwrap();

        assert!(path.steps.is_empty());
        assert_eq!(path.estimated_duration, "0 maanden");
    }

    #[test]
    fn progression_across_axes_is_single_transition() {
        let service = service();
        let path = service
            .progression_path(
                &coordinate("act.analyseren", "arch.software", 1),
                &coordinate("act.adviseren", "arch.infrastructuur", 2),
            )
            .unwrap()
            .unwrap();

        assert_eq!(path.steps.len(), 1);
        assert_eq!(
            path.steps[0].description,
            "Transitie naar act.adviseren in arch.infrastructuur"
        );
        assert_eq!(path.estimated_duration, "6 maanden");
    }

    #[test]
    fn progression_requires_tasks_at_both_endpoints() {
        let service = service();
        // No beroepstaak exists at (manage_control, software, 1).
        assert!(service
            .progression_path(
                &coordinate("act.manage_control", "arch.software", 1),
                &coordinate("act.analyseren", "arch.software", 3),
            )
            .unwrap()
            .is_none());
        assert!(service
            .progression_path(
                &coordinate("act.analyseren", "arch.software", 1),
                &coordinate("act.analyseren", "arch.software", 2),
            )
            .unwrap()
            .is_some());
    }

    #[test]
    fn stats_counts_collections() {
        let service = service();
        let stats = service.stats().unwrap();
        assert_eq!(
            stats,
            DataStats {
                total_activiteiten: 5,
                total_architectuurlagen: 5,
                total_beheersingsniveaus: 4,
                total_beroepstaken: 6,
                total_aandachtsgebieden: 2,
                total_competenties: 4,
            }
        );
    }
}
