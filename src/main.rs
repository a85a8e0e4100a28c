// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/main.rs - Command line interface for pinstub.
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
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use pinstub::artifact::DEFAULT_GENERATOR;
use pinstub::config::*;
use pinstub::filter::HEADER_ROWS;
use pinstub::pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The variant table to read, or `-` for stdin.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory to write outputs under.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of leading rows to skip.
    #[arg(long, default_value_t = HEADER_ROWS)]
    header_rows: usize,

    /// Print the batch script to stdout and skip `run_generate`.
    #[arg(long)]
    minimal: bool,

    /// Fail if two Active rows name the same design.
    #[arg(long)]
    reject_duplicates: bool,

    /// Command written at the start of each `run_generate` line.
    #[arg(long, default_value = DEFAULT_GENERATOR)]
    generator: String,

    /// Increase log verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Accepted for compatibility; ignored.
    #[arg(long, hide = true)]
    design: Option<String>,

    /// Accepted for compatibility; ignored.
    #[arg(long, hide = true)]
    variant: Option<String>,

    /// Accepted for compatibility; ignored.
    #[arg(long, hide = true)]
    group: Option<String>,

    /// Accepted for compatibility; ignored.
    #[arg(long, hide = true)]
    directory: Option<String>,

    /// Accepted for compatibility; ignored.
    #[arg(long, hide = true)]
    part: Option<String>,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn into_config(self) -> Config {
        Config {
            input: self.input,
            output_dir: self.output_dir,
            header_rows: self.header_rows,
            variant: if self.minimal {
                Variant::Minimal
            } else {
                Variant::Extended
            },
            duplicates: if self.reject_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::LastWriteWins
            },
            generator: self.generator,
            legacy: LegacyOptions {
                design: self.design,
                variant: self.variant,
                group: self.group,
                directory: self.directory,
                part: self.part,
            },
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pinstub={level}")));

    // Logs go to stderr so the minimal variant's script can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());

    let config = args.into_config();
    match pipeline::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error processing {:?}: {}", &config.input, error);
            ExitCode::FAILURE
        }
    }
}
