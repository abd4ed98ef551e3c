// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations the editing collaborator applies to the session
//! graph.
//!
//! Every op runs synchronously to completion within one host-triggered
//! action; a failed op leaves the model untouched, so the host can keep its
//! current state on screen and surface the diagnostic.

use std::fmt;

use crate::format::maiml::{import_document, MaimlImportError};
use crate::model::{ArcId, GraphModel, LinkError, NodeId, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    AddNode { kind: NodeKind },
    AddArc { source_id: NodeId, target_id: NodeId },
    RemoveNode { node_id: NodeId },
    RemoveArc { arc_id: ArcId },
    Clear,
    ImportDocument { xml: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    CreatedNode { node_id: NodeId },
    CreatedArc { arc_id: ArcId },
    Done,
    /// The model's content was replaced wholesale by an imported document.
    Replaced { nodes: usize, arcs: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Link(LinkError),
    Import(MaimlImportError),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(err) => write!(f, "refused arc creation: {err}"),
            Self::Import(err) => write!(f, "import failed: {err}"),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Apply one op to the session graph.
///
/// Removal of unknown ids is a no-op reported as `Outcome::Done`; refusals
/// and import failures return an error with the model unchanged.
pub fn apply_op(graph: &mut GraphModel, op: Op) -> Result<Outcome, ApplyError> {
    match op {
        Op::AddNode { kind } => Ok(Outcome::CreatedNode {
            node_id: graph.add_node(kind),
        }),
        Op::AddArc {
            source_id,
            target_id,
        } => graph
            .add_arc(&source_id, &target_id)
            .map(|arc_id| Outcome::CreatedArc { arc_id })
            .map_err(ApplyError::Link),
        Op::RemoveNode { node_id } => {
            graph.remove_node(&node_id);
            Ok(Outcome::Done)
        }
        Op::RemoveArc { arc_id } => {
            graph.remove_arc(&arc_id);
            Ok(Outcome::Done)
        }
        Op::Clear => {
            graph.clear();
            Ok(Outcome::Done)
        }
        Op::ImportDocument { xml } => {
            let imported = import_document(&xml).map_err(ApplyError::Import)?;
            let nodes = imported.nodes().len();
            let arcs = imported.arcs().len();
            *graph = imported;
            Ok(Outcome::Replaced { nodes, arcs })
        }
    }
}

#[cfg(test)]
mod tests;
