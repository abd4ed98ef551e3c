// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Base `pnml` document export.

use std::io;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::writer::{document_string, emit, write_placeholders, write_uuid, MaimlWriteError};
use crate::model::{GraphModel, NodeKind};

/// Export the base interchange document.
///
/// Child order inside `pnml` is fixed: `uuid`, the empty placeholders, then
/// all places, then all transitions, then all arcs. Places and transitions
/// each follow node insertion order, arcs follow arc insertion order;
/// categories are never interleaved.
pub fn export_pnml(graph: &GraphModel) -> Result<String, MaimlWriteError> {
    let mut writer = Writer::new(Vec::new());
    write_pnml_element(&mut writer, graph)?;
    document_string(writer)
}

pub(super) fn write_pnml_element<W: io::Write>(
    writer: &mut Writer<W>,
    graph: &GraphModel,
) -> Result<(), MaimlWriteError> {
    let mut root = BytesStart::new("pnml");
    root.push_attribute(("id", "defPnml"));
    emit(writer, Event::Start(root))?;
    write_uuid(writer)?;
    write_placeholders(writer)?;

    for node in graph.nodes().iter().filter(|node| node.kind().is_place()) {
        let mut place = BytesStart::new("place");
        place.push_attribute(("id", node.id().as_str()));
        emit(writer, Event::Empty(place))?;
    }

    for node in graph
        .nodes()
        .iter()
        .filter(|node| node.kind() == NodeKind::Transition)
    {
        let mut transition = BytesStart::new("transition");
        transition.push_attribute(("id", node.id().as_str()));
        emit(writer, Event::Empty(transition))?;
    }

    for arc in graph.arcs() {
        let mut element = BytesStart::new("arc");
        element.push_attribute(("id", arc.id().as_str()));
        element.push_attribute(("source", arc.source_id().as_str()));
        element.push_attribute(("target", arc.target_id().as_str()));
        emit(writer, Event::Empty(element))?;
    }

    emit(writer, Event::End(BytesEnd::new("pnml")))
}
