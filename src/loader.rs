// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/loader.rs - Loader for microcontroller variant tables.
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
 * # `loader` Module
 *
 * This module reads a comma-delimited variant table (usually `Base.csv`)
 * fully into memory.
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinstub::loader::BoilerplateTable;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let table = BoilerplateTable::from_filename("Base.csv")?;
 *
 *     println!("{} rows", table.len());
 *     for row in table.iter() {
 *         println!("{:?}", row.get(1));
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv;
use tracing::debug;

use crate::error::{Error, Result};

/// A single record of the variant table.
///
/// No arity is enforced; columns are looked up by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(csv::StringRecord);

impl Row {
    /// Builds a row from its fields.
    pub fn new<I, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self(fields.into_iter().collect())
    }

    /// The number of fields in the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the field at `column`, if present.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(column)
    }

    /// Returns the field at `column`, or a [Error::MalformedRow] naming the
    /// (zero-based) `row` it came from.
    pub fn field(&self, row: usize, column: usize) -> Result<&str> {
        self.0.get(column).ok_or(Error::MalformedRow {
            row,
            column,
            fields: self.0.len(),
        })
    }
}

/// The full, ordered contents of a variant table.
#[derive(Debug, Default)]
pub struct BoilerplateTable {
    rows: Vec<Row>,
}

impl BoilerplateTable {
    /// Reads and parses the table at `path`.
    ///
    /// The file handle is released before this returns.
    pub fn from_filename(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), rows = table.len(), "loaded variant table");
        Ok(table)
    }

    /// Parses a table from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        let rows = reader
            .records()
            .map(|record| record.map(Row))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// The total number of rows, header rows included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl FromIterator<Row> for BoilerplateTable {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BoilerplateTable {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
