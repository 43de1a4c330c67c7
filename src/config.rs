//! Configuration file structures for Duke.
//!
//! The configuration is read from an optional YAML file, then overridden by
//! environment variables prefixed with `DUKE_` (nested keys separated by
//! `__`). Every setting has a default, so no file is required.
//!
//! # Configuration File Format
//!
//! ```yaml
//! storage:
//!   # JSON save file, created on the first change
//!   path: "data/tasks.json"
//!
//! locale:
//!   # english or german, unknown names fall back to english
//!   name: "english"
//!
//! dates:
//!   # parse /by and /at as dd/mm/yyyy [HH:MM]; false keeps them as free text
//!   parse: true
//!
//! ui:
//!   # prefix of every output line
//!   indent: "\t"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export DUKE_STORAGE__PATH="/home/me/.duke/tasks.json"
//! export DUKE_LOCALE__NAME="german"
//! export DUKE_DATES__PARSE=false
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: Storage,
    pub locale: Locale,
    pub dates: Dates,
    pub ui: Ui,
}

/// Where the task list is saved.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Storage {
    /// Path of the JSON save file.
    pub path: String,
}

impl Default for Storage {
    fn default() -> Self {
        Storage {
            path: "data/tasks.json".to_string(),
        }
    }
}

/// Language of every message.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Locale {
    pub name: String,
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            name: crate::locale::DEFAULT_LOCALE.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Dates {
    /// Whether deadline and event times must be valid dates.
    pub parse: bool,
}

impl Default for Dates {
    fn default() -> Self {
        Dates { parse: true }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Ui {
    /// Prefix written before every output line.
    pub indent: String,
}

impl Default for Ui {
    fn default() -> Self {
        Ui {
            indent: "\t".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from `path` and the `DUKE_` environment.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file is not valid YAML or a value
    /// has the wrong type.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("DUKE_").split("__"))
            .extract()
    }
}
