// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for the pinstub crate.
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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading the variant table or writing its outputs.
#[derive(Error, Debug)]
pub enum Error {
    /// A file or directory could not be read, written or created.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input is not valid delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A row is too short to hold a required column.
    #[error("row {row} has {fields} fields, column {column} is required")]
    MalformedRow {
        row: usize,
        column: usize,
        fields: usize,
    },
    /// An output path exists but is not a directory.
    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// The same design appears in two Active rows.
    #[error("design {design:?} on row {row} was already defined on row {first_row}")]
    DuplicateDesign {
        design: String,
        row: usize,
        first_row: usize,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
