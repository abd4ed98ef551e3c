// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton — process-graph editor core (model + MaiML interchange).
//!
//! The host UI owns rendering, drag/zoom, selectors, and file chrome; it
//! drives this crate through `ops`, reads back through `query`, and moves
//! documents in and out through `format::maiml`.

pub mod format;
pub mod model;
pub mod ops;
pub mod query;
