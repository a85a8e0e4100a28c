// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/emitter.rs - Output writer for Active designs.
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
 * # `emitter` Module
 *
 * This module writes the outputs for each Active design.
 *
 * Definition files are written as soon as a design is emitted. The batch
 * script and the `run_generate` script are buffered and written once by
 * [Emitter::finish].
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinstub::config::Config;
 * use pinstub::emitter::Emitter;
 * use pinstub::filter::{HEADER_ROWS, active_designs};
 * use pinstub::loader::BoilerplateTable;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let table = BoilerplateTable::from_filename("Base.csv")?;
 *     let mut emitter = Emitter::new(&Config::default());
 *
 *     for record in active_designs(&table, HEADER_ROWS) {
 *         emitter.emit(&record?)?;
 *     }
 *
 *     let summary = emitter.finish()?;
 *     println!("{} designs", summary.designs);
 *
 *     Ok(())
 * }
 * ```
 */

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::artifact::{
    BATCH_SCRIPT_NAME, BatchScript, DEFINITION_DIR, DefinitionFile, RUN_GENERATE_NAME,
    RunGenerateScript,
};
use crate::config::{Config, DuplicatePolicy, Variant};
use crate::error::{Error, Result};
use crate::filter::DesignRecord;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Active rows emitted, duplicates included.
    pub designs: usize,
    /// Distinct definition files on disk.
    pub definition_files: usize,
    /// Active rows whose design had already been emitted.
    pub duplicates: usize,
}

/// Accumulates the shared scripts and writes per-design files.
#[derive(Debug)]
pub struct Emitter {
    output_dir: PathBuf,
    variant: Variant,
    duplicates: DuplicatePolicy,
    batch: BatchScript,
    run_generate: RunGenerateScript,
    // design -> first row it appeared on
    seen: HashMap<String, usize>,
    summary: EmitSummary,
}

impl Emitter {
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            variant: config.variant,
            duplicates: config.duplicates,
            batch: BatchScript::new(),
            run_generate: RunGenerateScript::new(config.generator.clone()),
            seen: HashMap::new(),
            summary: EmitSummary::default(),
        }
    }

    /// Emits a single design.
    ///
    /// Its lines are queued for the shared scripts and its definition file is
    /// written immediately, replacing any earlier file of the same name.
    pub fn emit(&mut self, record: &DesignRecord) -> Result<()> {
        if let Some(&first_row) = self.seen.get(&record.design) {
            match self.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateDesign {
                        design: record.design.clone(),
                        row: record.row,
                        first_row,
                    });
                }
                DuplicatePolicy::LastWriteWins => {
                    warn!(
                        design = %record.design,
                        row = record.row,
                        first_row,
                        "duplicate design, overwriting definition file"
                    );
                    self.summary.duplicates += 1;
                }
            }
        } else {
            self.seen.insert(record.design.clone(), record.row);
        }

        self.batch.push(record);
        self.run_generate.push(record);

        let definition = DefinitionFile::from(record);
        // Joined as one relative string so an absolute design name stays
        // under the definition directory.
        let path = self
            .output_dir
            .join(format!("{}/{}", DEFINITION_DIR, definition.file_name()));
        fs::write(&path, definition.render()).map_err(|e| Error::io(&path, e))?;
        debug!(
            design = %record.design,
            footprint = %record.footprint,
            path = %path.display(),
            "wrote definition file"
        );

        self.summary.designs += 1;
        Ok(())
    }

    /// Writes the buffered scripts, sending the batch script to stdout in the
    /// minimal variant.
    pub fn finish(self) -> Result<EmitSummary> {
        let stdout = io::stdout();
        let handle = stdout.lock();
        self.finish_with(handle)
    }

    /// Like [Emitter::finish], but writes the minimal variant's batch script
    /// to `out`.
    pub fn finish_with<W: Write>(self, mut out: W) -> Result<EmitSummary> {
        match self.variant {
            Variant::Minimal => {
                out.write_all(self.batch.render().as_bytes())
                    .and_then(|_| out.flush())
                    .map_err(|e| Error::io("<stdout>", e))?;
            }
            Variant::Extended => {
                let script = self.output_dir.join(BATCH_SCRIPT_NAME);
                fs::write(&script, self.batch.render()).map_err(|e| Error::io(&script, e))?;

                let run_generate = self.output_dir.join(RUN_GENERATE_NAME);
                fs::write(&run_generate, self.run_generate.render())
                    .map_err(|e| Error::io(&run_generate, e))?;
            }
        }

        Ok(EmitSummary {
            definition_files: self.seen.len(),
            ..self.summary
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::bootstrap::{REQUIRED_DIRECTORIES, ensure_directories};

    fn record(row: usize, design: &str, footprint: &str) -> DesignRecord {
        DesignRecord {
            row,
            design: design.to_string(),
            footprint: footprint.to_string(),
        }
    }

    fn setup(variant: Variant, duplicates: DuplicatePolicy) -> (TempDir, Emitter) {
        let temp_dir = TempDir::new().unwrap();
        ensure_directories(temp_dir.path(), &REQUIRED_DIRECTORIES).unwrap();
        let config = Config {
            output_dir: temp_dir.path().to_path_buf(),
            variant,
            duplicates,
            ..Default::default()
        };
        let emitter = Emitter::new(&config);
        (temp_dir, emitter)
    }

    #[test]
    fn test_definition_file_written_on_emit() {
        let (temp_dir, mut emitter) = setup(Variant::Extended, DuplicatePolicy::LastWriteWins);
        emitter.emit(&record(4, "DESIGN1", "FOOT1")).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("topsrc/DESIGN1.csv")).unwrap();
        assert_eq!(content, "DEF,DESIGN1\nFOOT,FOOT1\nPINFILE,DESIGN1.csv\n");
        assert!(!temp_dir.path().join("script.txt").exists());
    }

    #[test]
    fn test_extended_finish_writes_scripts() {
        let (temp_dir, mut emitter) = setup(Variant::Extended, DuplicatePolicy::LastWriteWins);
        emitter.emit(&record(4, "A", "x")).unwrap();
        emitter.emit(&record(6, "B", "y")).unwrap();

        let mut stdout = Vec::new();
        let summary = emitter.finish_with(&mut stdout).unwrap();

        assert!(stdout.is_empty());
        assert_eq!(
            summary,
            EmitSummary {
                designs: 2,
                definition_files: 2,
                duplicates: 0
            }
        );
        let script = fs::read_to_string(temp_dir.path().join("script.txt")).unwrap();
        assert_eq!(
            script,
            "rm -r out\nload  A\ncsv pinout pinsrc/A.csv\nload  B\ncsv pinout pinsrc/B.csv\nexit\n"
        );
        let run_generate = fs::read_to_string(temp_dir.path().join("run_generate")).unwrap();
        assert_eq!(run_generate.lines().count(), 2);
        assert!(run_generate.ends_with("--design B\n"));
    }

    #[test]
    fn test_minimal_finish_writes_to_stdout() {
        let (temp_dir, mut emitter) = setup(Variant::Minimal, DuplicatePolicy::LastWriteWins);
        emitter.emit(&record(4, "A", "x")).unwrap();

        let mut stdout = Vec::new();
        emitter.finish_with(&mut stdout).unwrap();

        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            "rm -r out\nload  A\ncsv pinout pinsrc/A.csv\nexit\n"
        );
        assert!(!temp_dir.path().join("script.txt").exists());
        assert!(!temp_dir.path().join("run_generate").exists());
    }

    #[test]
    fn test_duplicate_last_write_wins() {
        let (temp_dir, mut emitter) = setup(Variant::Extended, DuplicatePolicy::LastWriteWins);
        emitter.emit(&record(4, "DUP", "FIRST")).unwrap();
        emitter.emit(&record(5, "DUP", "SECOND")).unwrap();
        let summary = emitter.finish_with(io::sink()).unwrap();

        assert_eq!(summary.designs, 2);
        assert_eq!(summary.definition_files, 1);
        assert_eq!(summary.duplicates, 1);
        let content = fs::read_to_string(temp_dir.path().join("topsrc/DUP.csv")).unwrap();
        assert_eq!(content, "DEF,DUP\nFOOT,SECOND\nPINFILE,DUP.csv\n");
    }

    #[test]
    fn test_duplicate_rejected() {
        let (temp_dir, mut emitter) = setup(Variant::Extended, DuplicatePolicy::Reject);
        emitter.emit(&record(4, "DUP", "FIRST")).unwrap();
        let err = emitter.emit(&record(7, "DUP", "SECOND")).unwrap_err();

        match err {
            Error::DuplicateDesign {
                design,
                row,
                first_row,
            } => assert_eq!((design.as_str(), row, first_row), ("DUP", 7, 4)),
            other => panic!("unexpected error: {other:?}"),
        }
        let content = fs::read_to_string(temp_dir.path().join("topsrc/DUP.csv")).unwrap();
        assert!(content.contains("FOOT,FIRST"));
    }

    #[test]
    fn test_missing_definition_dir_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            output_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut emitter = Emitter::new(&config);
        let err = emitter.emit(&record(4, "A", "x")).unwrap_err();
        assert!(matches!(err, Error::Io { path, .. } if path.ends_with("topsrc/A.csv")));
    }
}
