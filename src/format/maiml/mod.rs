// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! MaiML export/import for process graphs.
//!
//! Two document shapes share one vocabulary: the base `pnml` envelope
//! (places, transitions, arcs) and the richer `method`/`program` envelope
//! that additionally carries per-transition instructions and per-place
//! templates. Element and attribute names are the contract the external
//! execution tooling matches byte-for-byte.

pub mod import;
pub mod method;
pub mod pnml;
mod writer;

pub use import::{import_document, import_into, MaimlImportError};
pub use method::export_method;
pub use pnml::export_pnml;
pub use writer::MaimlWriteError;

use crate::model::{NodeKind, PlaceClass};

/// Reference element name nested inside `instruction`.
///
/// The spelling is historical but load-bearing: the consuming tooling
/// matches it verbatim. Do not correct it.
pub const TRANSITION_REF: &str = "transisionRef";

/// Fixed filename the host offers for a produced document.
pub const EXPORT_FILE_NAME: &str = "petri_net.xml";

/// Extensions the host's file picker offers. Document content is
/// authoritative regardless of extension.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".xml", ".maiml"];

/// The three template vocabularies, in their fixed precedence/grouping
/// order (material, then condition, then result).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Material,
    Condition,
    Result,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Material, Self::Condition, Self::Result];

    pub fn element_name(self) -> &'static str {
        match self {
            Self::Material => "materialTemplate",
            Self::Condition => "conditionTemplate",
            Self::Result => "resultTemplate",
        }
    }

    /// Initial letter used when deriving synthetic template ids
    /// (`def<m|c|r><place id>`).
    pub fn initial(self) -> char {
        match self {
            Self::Material => 'm',
            Self::Condition => 'c',
            Self::Result => 'r',
        }
    }

    pub fn place_class(self) -> PlaceClass {
        match self {
            Self::Material => PlaceClass::Material,
            Self::Condition => PlaceClass::Condition,
            Self::Result => PlaceClass::Result,
        }
    }

    /// The template kind a node contributes on method export, if any.
    /// Transitions and unclassified places contribute none.
    pub fn of_kind(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::Material => Some(Self::Material),
            NodeKind::Condition => Some(Self::Condition),
            NodeKind::Result => Some(Self::Result),
            NodeKind::Transition | NodeKind::Unclassified => None,
        }
    }
}
