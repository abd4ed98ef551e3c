// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-side snapshots for the rendering collaborator.
//!
//! The host populates its selector widgets and redraws the canvas from
//! these; it never reaches into the model directly.

use serde::Serialize;

use crate::model::GraphModel;
use crate::model::NodeKind;

/// One row of the node selector: `{id, kind}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub kind: NodeKind,
}

/// One row of the arc selector: `{id, source_id, target_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArcView {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
}

/// Snapshot of all nodes in insertion order.
pub fn node_views(graph: &GraphModel) -> Vec<NodeView> {
    graph
        .nodes()
        .iter()
        .map(|node| NodeView {
            id: node.id().as_str().to_owned(),
            kind: node.kind(),
        })
        .collect()
}

/// Snapshot of all arcs in insertion order.
pub fn arc_views(graph: &GraphModel) -> Vec<ArcView> {
    graph
        .arcs()
        .iter()
        .map(|arc| ArcView {
            id: arc.id().as_str().to_owned(),
            source_id: arc.source_id().as_str().to_owned(),
            target_id: arc.target_id().as_str().to_owned(),
        })
        .collect()
}
