// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document import for both the `pnml` and `method` shapes.
//!
//! The importer does not care which envelope wraps the payload: `place`,
//! `transition`, `arc`, and `*Template` elements are collected from anywhere
//! in the document, so both shapes (and foreign wrappers) import uniformly.
//! Malformed markup is a hard failure; unresolvable references inside
//! well-formed markup are skipped leniently.

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::TemplateKind;
use crate::model::{classify, ArcId, GraphModel, NodeId, TemplateRefs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaimlImportError {
    Parse { position: u64, message: String },
}

impl fmt::Display for MaimlImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { position, message } => {
                write!(f, "malformed document at byte {position}: {message}")
            }
        }
    }
}

impl std::error::Error for MaimlImportError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawArc {
    id: String,
    source: String,
    target: String,
}

#[derive(Debug, Default)]
struct Collected {
    refs: TemplateRefs,
    places: Vec<String>,
    transitions: Vec<String>,
    arcs: Vec<RawArc>,
}

/// Parse a document and rebuild a fresh `GraphModel` from it.
///
/// Place kinds are reconstructed by classifying each `place@id` against the
/// template reference lists found in the document; ids are preserved
/// verbatim. Arcs whose endpoints did not make it into the node set are
/// dropped silently. Repeated imports of the same text produce structurally
/// identical models.
pub fn import_document(xml: &str) -> Result<GraphModel, MaimlImportError> {
    let collected = collect(xml)?;

    let mut graph = GraphModel::new();
    for place_id in &collected.places {
        let Ok(id) = NodeId::new(place_id.clone()) else {
            continue;
        };
        graph.insert_node(id, classify(place_id, &collected.refs).into());
    }
    for transition_id in &collected.transitions {
        let Ok(id) = NodeId::new(transition_id.clone()) else {
            continue;
        };
        graph.insert_node(id, crate::model::NodeKind::Transition);
    }
    for raw in collected.arcs {
        let (Ok(id), Ok(source_id), Ok(target_id)) = (
            ArcId::new(raw.id),
            NodeId::new(raw.source),
            NodeId::new(raw.target),
        ) else {
            continue;
        };
        // Returns false for dangling endpoints; that arc is simply dropped.
        graph.insert_arc(id, source_id, target_id);
    }
    Ok(graph)
}

/// Replace `graph`'s content with the parsed document, wholesale.
///
/// On failure the existing content is left untouched, so a host can keep the
/// current diagram on screen and surface the diagnostic instead.
pub fn import_into(graph: &mut GraphModel, xml: &str) -> Result<(), MaimlImportError> {
    *graph = import_document(xml)?;
    Ok(())
}

fn collect(xml: &str) -> Result<Collected, MaimlImportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;
    let mut collected = Collected::default();
    let mut open_template: Option<TemplateKind> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                return Err(MaimlImportError::Parse {
                    position: reader.buffer_position(),
                    message: err.to_string(),
                })
            }
        };
        let position = reader.buffer_position();

        match event {
            Event::Start(start) => match template_kind_of(&start) {
                Some(kind) => open_template = Some(kind),
                None => collect_element(&start, open_template, &mut collected, position)?,
            },
            // An empty template element carries no placeRef children.
            Event::Empty(start) => {
                if template_kind_of(&start).is_none() {
                    collect_element(&start, open_template, &mut collected, position)?;
                }
            }
            Event::End(end) => {
                let closes_template = TemplateKind::ALL
                    .iter()
                    .any(|kind| kind.element_name().as_bytes() == end.name().as_ref());
                if closes_template {
                    open_template = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(collected)
}

fn template_kind_of(start: &BytesStart<'_>) -> Option<TemplateKind> {
    TemplateKind::ALL
        .into_iter()
        .find(|kind| kind.element_name().as_bytes() == start.name().as_ref())
}

fn collect_element(
    start: &BytesStart<'_>,
    open_template: Option<TemplateKind>,
    collected: &mut Collected,
    position: u64,
) -> Result<(), MaimlImportError> {
    match start.name().as_ref() {
        b"place" => {
            if let Some(id) = attr_value(start, "id", position)? {
                collected.places.push(id);
            }
        }
        b"transition" => {
            if let Some(id) = attr_value(start, "id", position)? {
                collected.transitions.push(id);
            }
        }
        b"arc" => {
            let id = attr_value(start, "id", position)?;
            let source = attr_value(start, "source", position)?;
            let target = attr_value(start, "target", position)?;
            if let (Some(id), Some(source), Some(target)) = (id, source, target) {
                collected.arcs.push(RawArc { id, source, target });
            }
        }
        b"placeRef" => {
            let Some(kind) = open_template else {
                return Ok(());
            };
            if let Some(place_ref) = attr_value(start, "ref", position)? {
                let list = match kind {
                    TemplateKind::Material => &mut collected.refs.material,
                    TemplateKind::Condition => &mut collected.refs.condition,
                    TemplateKind::Result => &mut collected.refs.result,
                };
                list.push(place_ref);
            }
        }
        _ => {}
    }
    Ok(())
}

fn attr_value(
    start: &BytesStart<'_>,
    name: &str,
    position: u64,
) -> Result<Option<String>, MaimlImportError> {
    let parse_error = |message: String| MaimlImportError::Parse { position, message };

    let Some(attr) = start
        .try_get_attribute(name)
        .map_err(|err| parse_error(err.to_string()))?
    else {
        return Ok(None);
    };

    attr.unescape_value()
        .map(|value| Some(value.into_owned()))
        .map_err(|err| parse_error(err.to_string()))
}
