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

//! Top-level dataset sections as a closed enum.
//!
//! Section names arrive as strings at the tool boundary; parsing them into
//! this enum up front gives exhaustive dispatch everywhere else. A string
//! that names no section parses to `None`, which callers translate into an
//! empty result rather than an error.

use std::fmt;

/// One of the nine top-level sections of the canonical dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Meta,
    Raamwerken,
    Beheersingsniveaus,
    Activiteiten,
    Architectuurlagen,
    ProfessionalSkills,
    Beroepstaken,
    Verbanden,
    Bijlagen,
}

impl Section {
    /// All sections, in dataset order.
    pub const ALL: [Section; 9] = [
        Section::Meta,
        Section::Raamwerken,
        Section::Beheersingsniveaus,
        Section::Activiteiten,
        Section::Architectuurlagen,
        Section::ProfessionalSkills,
        Section::Beroepstaken,
        Section::Verbanden,
        Section::Bijlagen,
    ];

    /// The JSON key of this section.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Meta => "meta",
            Section::Raamwerken => "raamwerken",
            Section::Beheersingsniveaus => "beheersingsniveaus",
            Section::Activiteiten => "activiteiten",
            Section::Architectuurlagen => "architectuurlagen",
            Section::ProfessionalSkills => "professional_skills",
            Section::Beroepstaken => "beroepstaken",
            Section::Verbanden => "verbanden",
            Section::Bijlagen => "bijlagen",
        }
    }

    /// Parse a section name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_sections() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
    }

    #[test]
    fn parse_unknown_section() {
        assert_eq!(Section::parse("invalid_section"), None);
        assert_eq!(Section::parse(""), None);
        assert_eq!(Section::parse("Activiteiten"), None);
    }

    #[test]
    fn display_matches_json_key() {
        assert_eq!(Section::ProfessionalSkills.to_string(), "professional_skills");
    }
}
