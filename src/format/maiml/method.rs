// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `method`/`program` document export.
//!
//! Wraps the base `pnml` block in a `method` envelope and adds the execution
//! metadata the downstream tooling consumes: one `instruction` per
//! transition and one kind template per classified place. Templates are what
//! let a later import reconstruct each place's semantic kind.

use std::io;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::pnml::write_pnml_element;
use super::writer::{document_string, emit, write_placeholders, write_uuid, MaimlWriteError};
use super::{TemplateKind, TRANSITION_REF};
use crate::model::{GraphModel, NodeId, NodeKind};

/// Export the richer interchange document.
///
/// `method` children in fixed order: `uuid`, placeholders, the full `pnml`
/// block, then `program`. Inside `program`: `uuid`, placeholders, all
/// instructions (transition insertion order), then templates grouped by
/// kind — every material template, then every condition template, then every
/// result template — regardless of the nodes' original relative order.
pub fn export_method(graph: &GraphModel) -> Result<String, MaimlWriteError> {
    let mut writer = Writer::new(Vec::new());

    let mut method = BytesStart::new("method");
    method.push_attribute(("id", "defMethod"));
    emit(&mut writer, Event::Start(method))?;
    write_uuid(&mut writer)?;
    write_placeholders(&mut writer)?;

    write_pnml_element(&mut writer, graph)?;

    let mut program = BytesStart::new("program");
    program.push_attribute(("id", "defProgram"));
    emit(&mut writer, Event::Start(program))?;
    write_uuid(&mut writer)?;
    write_placeholders(&mut writer)?;

    for node in graph
        .nodes()
        .iter()
        .filter(|node| node.kind() == NodeKind::Transition)
    {
        write_instruction(&mut writer, node.id())?;
    }

    for kind in TemplateKind::ALL {
        for node in graph
            .nodes()
            .iter()
            .filter(|node| TemplateKind::of_kind(node.kind()) == Some(kind))
        {
            write_template(&mut writer, kind, node.id())?;
        }
    }

    emit(&mut writer, Event::End(BytesEnd::new("program")))?;
    emit(&mut writer, Event::End(BytesEnd::new("method")))?;
    document_string(writer)
}

fn write_instruction<W: io::Write>(
    writer: &mut Writer<W>,
    transition_id: &NodeId,
) -> Result<(), MaimlWriteError> {
    let instruction_id = format!("instID_{transition_id}");
    let mut instruction = BytesStart::new("instruction");
    instruction.push_attribute(("id", instruction_id.as_str()));
    emit(writer, Event::Start(instruction))?;
    write_uuid(writer)?;

    let ref_id = format!("tref_{transition_id}");
    let mut transition_ref = BytesStart::new(TRANSITION_REF);
    transition_ref.push_attribute(("id", ref_id.as_str()));
    transition_ref.push_attribute(("ref", transition_id.as_str()));
    emit(writer, Event::Empty(transition_ref))?;

    emit(writer, Event::End(BytesEnd::new("instruction")))
}

fn write_template<W: io::Write>(
    writer: &mut Writer<W>,
    kind: TemplateKind,
    place_id: &NodeId,
) -> Result<(), MaimlWriteError> {
    let template_id = format!("def{}{place_id}", kind.initial());
    let mut template = BytesStart::new(kind.element_name());
    template.push_attribute(("id", template_id.as_str()));
    emit(writer, Event::Start(template))?;
    write_uuid(writer)?;

    let ref_id = format!("pref_{template_id}");
    let mut place_ref = BytesStart::new("placeRef");
    place_ref.push_attribute(("id", ref_id.as_str()));
    place_ref.push_attribute(("ref", place_id.as_str()));
    emit(writer, Event::Empty(place_ref))?;

    emit(writer, Event::End(BytesEnd::new(kind.element_name())))
}
