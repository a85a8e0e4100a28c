// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/config.rs - Run configuration.
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

use std::path::PathBuf;

use crate::artifact::DEFAULT_GENERATOR;
use crate::filter::HEADER_ROWS;

/// Input file read when none is given.
pub const DEFAULT_INPUT: &str = "Base.csv";

/// Which set of outputs a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Batch script on stdout and definition files only. No directories are
    /// created.
    Minimal,
    /// Batch script in `script.txt`, a `run_generate` script, and the
    /// `topsrc`/`pinsrc` directories.
    #[default]
    Extended,
}

/// What to do when two Active rows name the same design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later row's definition file replaces the earlier one.
    #[default]
    LastWriteWins,
    /// Abort the run at the second occurrence.
    Reject,
}

/// Historical command line options. They are accepted and kept, but no part
/// of the pipeline reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyOptions {
    pub design: Option<String>,
    pub variant: Option<String>,
    pub group: Option<String>,
    pub directory: Option<String>,
    pub part: Option<String>,
}

impl LegacyOptions {
    pub fn is_empty(&self) -> bool {
        self.design.is_none()
            && self.variant.is_none()
            && self.group.is_none()
            && self.directory.is_none()
            && self.part.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The variant table. `-` reads it from stdin.
    pub input: PathBuf,
    /// Root that output files and directories are placed under.
    pub output_dir: PathBuf,
    /// Leading rows skipped before filtering.
    pub header_rows: usize,
    pub variant: Variant,
    pub duplicates: DuplicatePolicy,
    /// Command prefix written to each `run_generate` line.
    pub generator: String,
    pub legacy: LegacyOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            header_rows: HEADER_ROWS,
            variant: Variant::default(),
            duplicates: DuplicatePolicy::default(),
            generator: DEFAULT_GENERATOR.to_string(),
            legacy: LegacyOptions::default(),
        }
    }
}
