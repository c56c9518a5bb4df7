// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wordfactor_core::Dictionary;

/// Returns the first existing file named `filename` in `paths`.
/// Absolute paths are returned as-is if they exist.
pub(crate) fn find_in_search_path(filename: &Path, paths: &[PathBuf]) -> Option<PathBuf> {
    if filename.is_absolute() {
        return Some(filename.to_owned()).filter(|path| path.is_file());
    }
    paths
        .iter()
        .map(|dir| dir.join(filename))
        .find(|path| path.is_file())
}

/// Loads the word list. A list that can't be found or opened isn't
/// fatal: the search runs against an empty dictionary and finds
/// nothing.
pub fn load_dictionary(filename: &Path, search_path: &[PathBuf]) -> Dictionary {
    let path = match find_in_search_path(filename, search_path) {
        Some(path) => path,
        None => {
            warn!(
                "Could not find word list `{}`, using an empty dictionary. Search path:{}",
                filename.display(),
                search_path
                    .iter()
                    .map(|path| format!("\n  {}", path.display()))
                    .collect::<Vec<String>>()
                    .join("")
            );
            return Dictionary::empty();
        }
    };
    match File::open(&path) {
        Ok(file) => {
            let dict = Dictionary::from_reader(BufReader::new(file));
            info!(
                path = %path.display(),
                words = dict.word_count(),
                rejected = dict.rejected_count(),
                "loaded word list"
            );
            dict
        }
        Err(err) => {
            warn!("Failed to open word list `{}`: {}", path.display(), err);
            Dictionary::empty()
        }
    }
}
