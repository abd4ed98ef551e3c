// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Place classification from template cross-references.
//!
//! A base `pnml` document carries no kind information for places; the richer
//! `method` shape encodes it indirectly through `*Template` elements whose
//! `placeRef` children point back at place ids. The importer collects those
//! refs into a [`TemplateRefs`] and reconstructs each place's kind here.

use super::graph::NodeKind;

/// The semantic class reconstructed for a `place` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceClass {
    Material,
    Condition,
    Result,
    Unclassified,
}

impl From<PlaceClass> for NodeKind {
    fn from(class: PlaceClass) -> Self {
        match class {
            PlaceClass::Material => NodeKind::Material,
            PlaceClass::Condition => NodeKind::Condition,
            PlaceClass::Result => NodeKind::Result,
            PlaceClass::Unclassified => NodeKind::Unclassified,
        }
    }
}

/// Place ids referenced by templates, collected from anywhere in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRefs {
    pub material: Vec<String>,
    pub condition: Vec<String>,
    pub result: Vec<String>,
}

/// Classify a place id against the three reference lists.
///
/// Membership is checked material first, then condition, then result; the
/// first match wins even when an id appears in more than one list. That
/// precedence is part of the interchange contract and must not change. An id
/// in none of the lists is `Unclassified`, never an error.
pub fn classify(place_id: &str, refs: &TemplateRefs) -> PlaceClass {
    if refs.material.iter().any(|id| id == place_id) {
        PlaceClass::Material
    } else if refs.condition.iter().any(|id| id == place_id) {
        PlaceClass::Condition
    } else if refs.result.iter().any(|id| id == place_id) {
        PlaceClass::Result
    } else {
        PlaceClass::Unclassified
    }
}
