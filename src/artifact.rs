// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/artifact.rs - Output file formats.
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
 * # `artifact` Module
 *
 * Typed records for each generated file, each with a single `render`.
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinstub::artifact::{BatchScript, DefinitionFile};
 * use pinstub::filter::DesignRecord;
 *
 * let record = DesignRecord {
 *     row: 4,
 *     design: "STM32F030C8Tx".to_string(),
 *     footprint: "LQFP48".to_string(),
 * };
 *
 * let definition = DefinitionFile::from(&record);
 * print!("{}", definition.render());
 *
 * let mut script = BatchScript::new();
 * script.push(&record);
 * print!("{}", script.render());
 * ```
 */

use crate::filter::DesignRecord;

/// Directory holding the per-design definition files.
pub const DEFINITION_DIR: &str = "topsrc";
/// Directory the symbol generator reads pinout files from.
pub const PINOUT_DIR: &str = "pinsrc";

pub const BATCH_SCRIPT_NAME: &str = "script.txt";
pub const RUN_GENERATE_NAME: &str = "run_generate";

/// Generator invocation used when none is configured.
pub const DEFAULT_GENERATOR: &str = "python3 generate.py";

/// The three-line definition file written for each Active design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionFile {
    pub design: String,
    pub footprint: String,
}

impl DefinitionFile {
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.design)
    }

    pub fn render(&self) -> String {
        let mut content = String::new();
        content.push_str(&format!("DEF,{}\n", self.design));
        content.push_str(&format!("FOOT,{}\n", self.footprint));
        content.push_str(&format!("PINFILE,{}.csv\n", self.design));
        content
    }
}

impl From<&DesignRecord> for DefinitionFile {
    fn from(record: &DesignRecord) -> Self {
        Self {
            design: record.design.clone(),
            footprint: record.footprint.clone(),
        }
    }
}

/// Command script for the symbol generator.
///
/// Wraps one `load`/`csv pinout` pair per design between a `rm -r out`
/// preamble and an `exit` trailer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchScript {
    designs: Vec<String>,
}

impl BatchScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &DesignRecord) {
        self.designs.push(record.design.clone());
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    pub fn render(&self) -> String {
        let mut content = String::from("rm -r out\n");
        for design in &self.designs {
            // Two spaces after `load` are part of the format.
            content.push_str(&format!("load  {}\n", design));
            content.push_str(&format!("csv pinout {}/{}.csv\n", PINOUT_DIR, design));
        }
        content.push_str("exit\n");
        content
    }
}

/// Shell script with one generator invocation per design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunGenerateScript {
    generator: String,
    designs: Vec<String>,
}

impl RunGenerateScript {
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            designs: Vec::new(),
        }
    }

    pub fn push(&mut self, record: &DesignRecord) {
        self.designs.push(record.design.clone());
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    pub fn render(&self) -> String {
        self.designs
            .iter()
            .map(|design| {
                format!(
                    "{} --group stm32 --directory ./{}/ --design {}\n",
                    self.generator, DEFINITION_DIR, design
                )
            })
            .collect()
    }
}

impl Default for RunGenerateScript {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATOR)
    }
}
