// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly CSV ledger store.
//!
//! One file per (year, month, environment), named
//! `expense_YYYY-MM.csv` under `<base>/current` (or `dev_YYYY-MM.csv`
//! under `<base>/dev`). An append to an existing file first copies the
//! prior bytes to a timestamped backup under
//! `<base>/backups/<env>/<YYYY-MM>/`, then rewrites the whole file
//! with the new row concatenated last.
//!
//! Known limitation: no locking is provided. Two processes appending
//! to the same monthly file race on the full rewrite and the last
//! write wins.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::Config;
use crate::errors::LedgerError;
use crate::models::{Month, Transaction};

pub struct LedgerStore {
    root: PathBuf,
    env: &'static str,
    prefix: &'static str,
}

impl LedgerStore {
    pub fn new(cfg: &Config) -> Self {
        let (env, prefix) = if cfg.developing {
            ("dev", "dev")
        } else {
            ("current", "expense")
        };
        LedgerStore {
            root: cfg.base_dir.clone(),
            env,
            prefix,
        }
    }

    pub fn ledger_dir(&self) -> PathBuf {
        self.root.join(self.env)
    }

    pub fn ledger_path(&self, month: Month) -> PathBuf {
        self.ledger_dir()
            .join(format!("{}_{}.csv", self.prefix, month))
    }

    fn backup_dir(&self, month: Month) -> PathBuf {
        self.root
            .join("backups")
            .join(self.env)
            .join(month.to_string())
    }

    /// Merge-or-create append. Returns the full resulting ledger, new
    /// row last. When the file already existed its prior contents are
    /// copied to a backup before the rewrite; a backup failure aborts
    /// before the primary file is touched.
    pub fn append(&self, row: &Transaction) -> Result<Vec<Transaction>, LedgerError> {
        let month = row.month();
        let dir = self.ledger_dir();
        fs::create_dir_all(&dir).map_err(|e| LedgerError::storage(&dir, e))?;

        let path = self.ledger_path(month);
        let mut rows = if path.exists() {
            let existing = read_rows(&path)?;
            self.write_backup(month, &path)?;
            existing
        } else {
            Vec::new()
        };
        rows.push(row.clone());
        write_rows(&path, &rows)?;
        Ok(rows)
    }

    pub fn read(&self, month: Month) -> Result<Vec<Transaction>, LedgerError> {
        read_rows(&self.ledger_path(month))
    }

    /// Months that have a ledger file in this environment, sorted
    /// chronologically.
    pub fn months(&self) -> Result<Vec<Month>, LedgerError> {
        let dir = self.ledger_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|e| LedgerError::storage(&dir, e))?;
        let mut months = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LedgerError::storage(&dir, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(stem) = name
                .strip_prefix(self.prefix)
                .and_then(|s| s.strip_prefix('_'))
                .and_then(|s| s.strip_suffix(".csv"))
            else {
                continue;
            };
            if let Ok(month) = stem.parse::<Month>() {
                months.push(month);
            }
        }
        months.sort();
        Ok(months)
    }

    /// Copy the current ledger bytes verbatim to a timestamped backup.
    /// Same-second appends fall back to a numeric suffix so no backup
    /// is ever clobbered.
    fn write_backup(&self, month: Month, ledger_path: &Path) -> Result<PathBuf, LedgerError> {
        let dir = self.backup_dir(month);
        fs::create_dir_all(&dir).map_err(|e| LedgerError::storage(&dir, e))?;
        let stamp = Local::now().format("%Y-%m-%d_%H:%M:%S%.3f").to_string();
        let mut target = dir.join(format!("backup_{}.csv", stamp));
        let mut n = 1;
        while target.exists() {
            target = dir.join(format!("backup_{}_{}.csv", stamp, n));
            n += 1;
        }
        fs::copy(ledger_path, &target).map_err(|e| LedgerError::storage(&target, e))?;
        Ok(target)
    }
}

pub fn read_rows(path: &Path) -> Result<Vec<Transaction>, LedgerError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let mut rows = Vec::new();
    for record in rdr.deserialize::<Transaction>() {
        rows.push(record.map_err(|e| csv_error(path, e))?);
    }
    Ok(rows)
}

fn write_rows(path: &Path, rows: &[Transaction]) -> Result<(), LedgerError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    for row in rows {
        wtr.serialize(row).map_err(|e| csv_error(path, e))?;
    }
    wtr.flush()
        .map_err(|e| LedgerError::storage(path, e))?;
    Ok(())
}

/// I/O problems surface as `Storage`; anything else means the file
/// does not match the ledger schema and surfaces as `CorruptLedger`.
fn csv_error(path: &Path, e: csv::Error) -> LedgerError {
    let reason = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(source) => LedgerError::storage(path, source),
        _ => LedgerError::CorruptLedger {
            path: path.to_path_buf(),
            reason,
        },
    }
}
