// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/pipeline.rs - End-to-end stub generation.
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

use std::io::{self, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::bootstrap::{REQUIRED_DIRECTORIES, ensure_directories};
use crate::config::{Config, Variant};
use crate::emitter::{EmitSummary, Emitter};
use crate::error::Result;
use crate::filter::active_designs;
use crate::loader::BoilerplateTable;

fn load(input: &Path) -> Result<BoilerplateTable> {
    if input == Path::new("-") {
        BoilerplateTable::from_reader(BufReader::new(io::stdin().lock()))
    } else {
        BoilerplateTable::from_filename(input)
    }
}

/// Runs a complete generation pass as described by `config`.
///
/// Every output is rewritten from scratch. On error, definition files written
/// before the failure are left in place.
pub fn run(config: &Config) -> Result<EmitSummary> {
    if !config.legacy.is_empty() {
        debug!(legacy = ?config.legacy, "ignoring legacy options");
    }

    let table = load(&config.input)?;

    if config.variant == Variant::Extended {
        ensure_directories(&config.output_dir, &REQUIRED_DIRECTORIES)?;
    }

    let mut emitter = Emitter::new(config);
    for record in active_designs(&table, config.header_rows) {
        emitter.emit(&record?)?;
    }
    let summary = emitter.finish()?;

    info!(
        rows = table.len(),
        designs = summary.designs,
        definition_files = summary.definition_files,
        duplicates = summary.duplicates,
        "generation complete"
    );

    Ok(summary)
}
