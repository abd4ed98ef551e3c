// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interchange document export/import.
//!
//! Currently this module covers the MaiML dialect (`pnml` and
//! `method`/`program` document shapes).

pub mod maiml;
