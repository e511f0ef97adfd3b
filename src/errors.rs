// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the ledger engine. Validation failures are rejected
/// before any I/O; storage failures abort the current append without
/// touching the target file.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("storage failure at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt ledger {path}: {reason}")]
    CorruptLedger { path: PathBuf, reason: String },

    #[error("no income configured for {currency}")]
    NoIncomeConfigured { currency: String },

    #[error("installment {index} ({date}) failed: {source}")]
    Installment {
        index: usize,
        date: NaiveDate,
        #[source]
        source: Box<LedgerError>,
    },
}

impl LedgerError {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LedgerError::Storage {
            path: path.into(),
            source,
        }
    }
}
