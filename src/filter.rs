// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/filter.rs - Active design selection for variant tables.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `filter` Module
 *
 * This module turns a loaded [BoilerplateTable] into the ordered sequence
 * of designs whose status is `Active`.
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinstub::filter::{HEADER_ROWS, active_designs};
 * use pinstub::loader::BoilerplateTable;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let table = BoilerplateTable::from_filename("Base.csv")?;
 *
 *     for record in active_designs(&table, HEADER_ROWS) {
 *         let record = record?;
 *         println!("{} uses {}", record.design, record.footprint);
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use tracing::trace;

use crate::error::Result;
use crate::loader::{BoilerplateTable, Row};

/// Number of leading rows that are always skipped, whatever they contain.
pub const HEADER_ROWS: usize = 4;

/// Status value that selects a row for output. Compared case-sensitively.
pub const ACTIVE_STATUS: &str = "Active";

pub const DESIGN_COLUMN: usize = 1;
pub const STATUS_COLUMN: usize = 2;
pub const FOOTPRINT_COLUMN: usize = 5;

/// A design selected from an Active row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignRecord {
    /// Zero-based index of the source row in the table.
    pub row: usize,
    /// The design (part variant) name, used verbatim in file names.
    pub design: String,
    /// The footprint (package) name.
    pub footprint: String,
}

impl DesignRecord {
    /// Extracts a design from `row`, which sits at position `index` in its
    /// table.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the row is not Active, or a [crate::Error::MalformedRow]
    /// if a required column is missing.
    pub fn from_row(index: usize, row: &Row) -> Result<Option<Self>> {
        let status = row.field(index, STATUS_COLUMN)?;
        if status != ACTIVE_STATUS {
            trace!(row = index, status, "skipping inactive row");
            return Ok(None);
        }

        let design = row.field(index, DESIGN_COLUMN)?.to_string();
        let footprint = row.field(index, FOOTPRINT_COLUMN)?.to_string();

        Ok(Some(Self {
            row: index,
            design,
            footprint,
        }))
    }
}

/// Yields the Active designs of `table` in row order, after skipping the
/// first `header_rows` rows.
///
/// Rows are examined lazily, so a malformed row is only reported once every
/// design before it has been yielded.
pub fn active_designs(
    table: &BoilerplateTable,
    header_rows: usize,
) -> impl Iterator<Item = Result<DesignRecord>> + '_ {
    table
        .iter()
        .enumerate()
        .skip(header_rows)
        .filter_map(|(index, row)| DesignRecord::from_row(index, row).transpose())
}
