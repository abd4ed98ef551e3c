// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared helpers over `quick_xml::Writer` for the two exporters.

use std::fmt;
use std::io;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaimlWriteError {
    Emit { message: String },
    NonUtf8Output,
}

impl fmt::Display for MaimlWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emit { message } => write!(f, "failed to emit document event: {message}"),
            Self::NonUtf8Output => f.write_str("document serialization produced non-UTF-8 output"),
        }
    }
}

impl std::error::Error for MaimlWriteError {}

pub(super) fn emit<W: io::Write>(
    writer: &mut Writer<W>,
    event: Event<'_>,
) -> Result<(), MaimlWriteError> {
    writer
        .write_event(event)
        .map_err(|err| MaimlWriteError::Emit {
            message: err.to_string(),
        })
}

/// Emit a `<uuid>` child carrying a freshly generated v4 value.
pub(super) fn write_uuid<W: io::Write>(writer: &mut Writer<W>) -> Result<(), MaimlWriteError> {
    let value = Uuid::new_v4().to_string();
    emit(writer, Event::Start(BytesStart::new("uuid")))?;
    emit(writer, Event::Text(BytesText::new(&value)))?;
    emit(writer, Event::End(BytesEnd::new("uuid")))
}

/// Emit the empty `name`/`description`/`annotation` placeholders every
/// envelope carries.
pub(super) fn write_placeholders<W: io::Write>(
    writer: &mut Writer<W>,
) -> Result<(), MaimlWriteError> {
    for name in ["name", "description", "annotation"] {
        emit(writer, Event::Empty(BytesStart::new(name)))?;
    }
    Ok(())
}

pub(super) fn document_string(writer: Writer<Vec<u8>>) -> Result<String, MaimlWriteError> {
    String::from_utf8(writer.into_inner()).map_err(|_| MaimlWriteError::NonUtf8Output)
}
