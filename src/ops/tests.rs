// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{apply_op, ApplyError, Op, Outcome};
use crate::model::{GraphModel, LinkError, NodeId, NodeKind};

#[test]
fn add_node_op_returns_the_created_id() {
    let mut graph = GraphModel::new();

    let outcome = apply_op(&mut graph, Op::AddNode { kind: NodeKind::Material }).expect("apply");
    let Outcome::CreatedNode { node_id } = outcome else {
        panic!("expected CreatedNode, got {outcome:?}");
    };

    assert_eq!(graph.node(&node_id).expect("node").kind(), NodeKind::Material);
}

#[test]
fn add_arc_op_connects_existing_nodes() {
    let mut graph = GraphModel::new();
    let m = graph.add_node(NodeKind::Material);
    let t = graph.add_node(NodeKind::Transition);

    let outcome = apply_op(
        &mut graph,
        Op::AddArc {
            source_id: m.clone(),
            target_id: t.clone(),
        },
    )
    .expect("apply");

    let Outcome::CreatedArc { arc_id } = outcome else {
        panic!("expected CreatedArc, got {outcome:?}");
    };
    let arc = graph.arc(&arc_id).expect("arc");
    assert_eq!(arc.source_id(), &m);
    assert_eq!(arc.target_id(), &t);
}

#[test]
fn refused_arc_creation_leaves_the_model_untouched() {
    let mut graph = GraphModel::new();
    let m = graph.add_node(NodeKind::Material);
    let ghost = NodeId::new("n:ghost").expect("node id");
    let snapshot = graph.clone();

    let err = apply_op(
        &mut graph,
        Op::AddArc {
            source_id: m,
            target_id: ghost.clone(),
        },
    )
    .unwrap_err();

    assert_eq!(err, ApplyError::Link(LinkError::UnknownTarget { id: ghost }));
    assert_eq!(graph, snapshot);
}

#[test]
fn remove_ops_are_noops_for_unknown_ids() {
    let mut graph = GraphModel::new();
    graph.add_node(NodeKind::Condition);
    let snapshot = graph.clone();

    let outcome = apply_op(
        &mut graph,
        Op::RemoveNode {
            node_id: NodeId::new("n:ghost").expect("node id"),
        },
    )
    .expect("apply");
    assert_eq!(outcome, Outcome::Done);

    let outcome = apply_op(
        &mut graph,
        Op::RemoveArc {
            arc_id: "a:ghost".parse().expect("arc id"),
        },
    )
    .expect("apply");
    assert_eq!(outcome, Outcome::Done);

    assert_eq!(graph, snapshot);
}

#[test]
fn remove_node_op_cascades_to_incident_arcs() {
    let mut graph = GraphModel::new();
    let m = graph.add_node(NodeKind::Material);
    let t = graph.add_node(NodeKind::Transition);
    graph.add_arc(&m, &t).expect("arc");

    apply_op(&mut graph, Op::RemoveNode { node_id: t }).expect("apply");

    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.arcs().is_empty());
}

#[test]
fn clear_op_empties_the_session() {
    let mut graph = GraphModel::new();
    let m = graph.add_node(NodeKind::Material);
    let t = graph.add_node(NodeKind::Transition);
    graph.add_arc(&m, &t).expect("arc");

    apply_op(&mut graph, Op::Clear).expect("apply");

    assert!(graph.nodes().is_empty());
    assert!(graph.arcs().is_empty());
}

#[test]
fn import_op_replaces_content_and_reports_counts() {
    let mut graph = GraphModel::new();
    let old = graph.add_node(NodeKind::Result);

    let xml = r#"<pnml><place id="p1"/><transition id="t1"/>
        <arc id="a1" source="p1" target="t1"/></pnml>"#;
    let outcome = apply_op(
        &mut graph,
        Op::ImportDocument {
            xml: xml.to_owned(),
        },
    )
    .expect("apply");

    assert_eq!(outcome, Outcome::Replaced { nodes: 2, arcs: 1 });
    assert!(graph.node(&old).is_none());
    assert_eq!(graph.nodes().len(), 2);
}

#[test]
fn failed_import_op_keeps_the_current_model() {
    let mut graph = GraphModel::new();
    graph.add_node(NodeKind::Material);
    let snapshot = graph.clone();

    let err = apply_op(
        &mut graph,
        Op::ImportDocument {
            xml: "<pnml".to_owned(),
        },
    )
    .unwrap_err();

    assert!(matches!(err, ApplyError::Import(_)));
    assert_eq!(graph, snapshot);
}
