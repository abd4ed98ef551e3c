// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::ids::{ArcId, NodeId};

/// The semantic kind of a node.
///
/// Every kind except `Transition` is a place. `Unclassified` is the generic
/// fallback for an imported place that matches none of the template
/// reference lists; it behaves as a place everywhere but never produces a
/// template on method export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Material,
    Condition,
    Result,
    Transition,
    Unclassified,
}

impl NodeKind {
    pub fn is_place(self) -> bool {
        !matches!(self, Self::Transition)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
}

impl Node {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// A directed edge between two nodes, stored by endpoint id.
///
/// Arcs never hold node references; incidence is computed by scanning, so
/// the model stays an acyclic arena of plain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    id: ArcId,
    source_id: NodeId,
    target_id: NodeId,
}

impl Arc {
    pub fn id(&self) -> &ArcId {
        &self.id
    }

    pub fn source_id(&self) -> &NodeId {
        &self.source_id
    }

    pub fn target_id(&self) -> &NodeId {
        &self.target_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    UnknownSource { id: NodeId },
    UnknownTarget { id: NodeId },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSource { id } => write!(f, "arc source is not a known node (id={id})"),
            Self::UnknownTarget { id } => write!(f, "arc target is not a known node (id={id})"),
        }
    }
}

impl std::error::Error for LinkError {}

/// The insertion-ordered node/arc arena one editing session runs against.
///
/// Invariant: every arc endpoint names a node in the same model. Mutations
/// run synchronously to completion; exporters only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node under a freshly minted unique id.
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(format!("n:{}", Uuid::new_v4())).expect("valid node id");
        self.nodes.push(Node {
            id: id.clone(),
            kind,
        });
        id
    }

    /// Append an arc between two existing nodes.
    ///
    /// Fails without mutating anything when either endpoint is unknown.
    pub fn add_arc(&mut self, source_id: &NodeId, target_id: &NodeId) -> Result<ArcId, LinkError> {
        if !self.contains_node(source_id) {
            return Err(LinkError::UnknownSource {
                id: source_id.clone(),
            });
        }
        if !self.contains_node(target_id) {
            return Err(LinkError::UnknownTarget {
                id: target_id.clone(),
            });
        }

        let id = ArcId::new(format!("a:{}", Uuid::new_v4())).expect("valid arc id");
        self.arcs.push(Arc {
            id: id.clone(),
            source_id: source_id.clone(),
            target_id: target_id.clone(),
        });
        Ok(id)
    }

    /// Remove a node and every arc incident to it. No-op when the id is
    /// unknown.
    pub fn remove_node(&mut self, id: &NodeId) {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.id() != id);
        if self.nodes.len() == before {
            return;
        }
        self.arcs
            .retain(|arc| arc.source_id() != id && arc.target_id() != id);
    }

    /// Remove exactly one arc. No-op when the id is unknown.
    pub fn remove_arc(&mut self, id: &ArcId) {
        self.arcs.retain(|arc| arc.id() != id);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Arcs in insertion order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn arc(&self, id: &ArcId) -> Option<&Arc> {
        self.arcs.iter().find(|arc| arc.id() == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Append a node preserving a verbatim id (import path).
    ///
    /// Returns `false` and leaves the model unchanged when the id is already
    /// taken; the importer treats that as a skippable element.
    pub(crate) fn insert_node(&mut self, id: NodeId, kind: NodeKind) -> bool {
        if self.contains_node(&id) {
            return false;
        }
        self.nodes.push(Node { id, kind });
        true
    }

    /// Append an arc preserving a verbatim id (import path).
    ///
    /// Returns `false` when either endpoint is unknown or the arc id is
    /// already taken, keeping the endpoint-subset invariant intact.
    pub(crate) fn insert_arc(&mut self, id: ArcId, source_id: NodeId, target_id: NodeId) -> bool {
        if !self.contains_node(&source_id) || !self.contains_node(&target_id) {
            return false;
        }
        if self.arc(&id).is_some() {
            return false;
        }
        self.arcs.push(Arc {
            id,
            source_id,
            target_id,
        });
        true
    }
}
