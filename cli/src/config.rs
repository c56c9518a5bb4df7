// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use color_eyre::Result;
use eyre::{eyre, WrapErr};
use serde_derive::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::PathBuf;
use wordfactor_core::{SearchOptions, Strategy, DEFAULT_EXPONENT};

pub fn config_dir() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    path.push("wordfactor");
    Ok(path)
}

pub fn config_toml_path() -> Result<PathBuf> {
    let mut path = config_dir()?;
    path.push("config.toml");
    Ok(path)
}

#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dictionary: Dictionary,
    pub search: Search,
    pub rsa: Rsa,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Dictionary {
    /// Word list, one word per line. Relative paths are looked up in
    /// the working directory, then the config directory.
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Search {
    /// Search on a thread pool instead of the main thread.
    pub parallel: bool,
    /// Size of the thread pool. 0 picks one thread per core.
    pub threads: usize,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Rsa {
    /// Public exponent used when decrypting a ciphertext.
    pub exponent: u64,
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary {
            path: PathBuf::from("words_alpha.txt"),
        }
    }
}

impl Default for Rsa {
    fn default() -> Self {
        Rsa {
            exponent: u64::from(DEFAULT_EXPONENT),
        }
    }
}

impl Config {
    /// Resolves how to search. An explicit job count from the command
    /// line always means a parallel search.
    pub fn search_options(&self, jobs: Option<usize>) -> SearchOptions {
        let threads = jobs.unwrap_or(self.search.threads);
        let strategy = if jobs.is_some() || self.search.parallel {
            Strategy::Parallel
        } else {
            Strategy::Sequential
        };
        SearchOptions {
            strategy,
            threads: if threads == 0 { None } else { Some(threads) },
        }
    }
}

/// Directories searched for relative word list paths, in order.
pub fn search_path() -> Vec<PathBuf> {
    let mut search_path = vec![PathBuf::from("./")];
    if let Ok(config_dir) = config_dir() {
        search_path.push(config_dir);
    }
    if let Some(prefix) = option_env!("WORDFACTOR_PATH") {
        search_path.push(prefix.into());
    }
    search_path
}

pub fn read_config(override_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = override_path {
        PathBuf::from(path)
    } else {
        config_toml_path()?
    };
    match read_to_string(path) {
        // Hard fail if the file has invalid TOML.
        Ok(result) => toml::from_str(&result).wrap_err("While parsing config.toml"),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(override_path) = override_path {
                // Hard fail if user-provided config path doesn't exist
                Err(eyre!(err).wrap_err(format!(
                    "Failed to read provided config file `{}`",
                    override_path
                )))
            } else {
                Ok(Config::default())
            }
        }
        // Hard fail for other IO errors (e.g. permissions).
        Err(err) => Err(eyre!(err).wrap_err("Failed to read config.toml")),
    }
}
