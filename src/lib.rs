// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Pinout stub generator library for microcontroller variants.
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
 * # `pinstub` Crate
 *
 * A library for turning a microcontroller variant table (`Base.csv`) into
 * per-design definition files and the scripts that drive an external symbol
 * generator.
 *
 * This crate provides a full pipeline:
 *
 * 1. [loader]: Reads the delimited table into memory.
 * 2. [filter]: Skips the header rows and selects the `Active` designs.
 * 3. [artifact]: Formats each output file.
 * 4. [bootstrap]: Creates the output directories.
 * 5. [emitter]: Writes definition files and the buffered scripts.
 *
 * [pipeline::run] chains these together according to a [config::Config].
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinstub::config::Config;
 * use pinstub::pipeline;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let summary = pipeline::run(&Config::default())?;
 *     println!("Generated {} designs", summary.designs);
 *
 *     Ok(())
 * }
 * ```
 */

pub mod artifact;
pub mod bootstrap;
pub mod config;
pub mod emitter;
pub mod error;
pub mod filter;
pub mod loader;
pub mod pipeline;

pub use error::{Error, Result};
