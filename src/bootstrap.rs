// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/bootstrap.rs - Output directory creation.
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

use std::fs::create_dir_all;
use std::path::Path;

use tracing::debug;

use crate::artifact::{DEFINITION_DIR, PINOUT_DIR};
use crate::error::{Error, Result};

/// Directories that must exist under the output root before emitting.
pub const REQUIRED_DIRECTORIES: [&str; 2] = [DEFINITION_DIR, PINOUT_DIR];

/// Creates each of `names` under `root`, along with any missing ancestors.
///
/// Directories that already exist are left alone, so calling this again is a
/// no-op.
pub fn ensure_directories(root: &Path, names: &[&str]) -> Result<()> {
    for name in names {
        let dir = root.join(name);
        if dir.is_dir() {
            continue;
        }
        if dir.exists() {
            return Err(Error::NotADirectory(dir));
        }

        create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        debug!(path = %dir.display(), "created output directory");
    }

    Ok(())
}
