// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core process-graph data model.
//!
//! One `GraphModel` per editing session; a successful import replaces its
//! content wholesale, never merges.

pub mod classify;
pub mod graph;
pub mod ids;

pub use classify::{classify, PlaceClass, TemplateRefs};
pub use graph::{Arc, GraphModel, LinkError, Node, NodeKind};
pub use ids::{ArcId, Id, IdError, NodeId};
