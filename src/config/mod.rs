//! Layered configuration resolution
//!
//! Properties come from a flat key/value file (default `runtest.properties`,
//! or the file named by the first `-prop <path>` pair on the command line)
//! and may be overridden by command-line flag/value pairs. The file is
//! validated against the recognized property set before any override is
//! applied; overrides with unrecognized flags only warn.

mod key;

pub use key::PropertyKey;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::common::{Error, Result};

/// Properties file consulted when no `-prop` flag is given.
pub const DEFAULT_PROPERTIES_FILE: &str = "runtest.properties";

/// Resolved configuration: canonical property -> value.
///
/// Populated once from the properties file, then mutated by the override
/// scan, then read-only for the rest of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    values: HashMap<PropertyKey, String>,
}

impl Configuration {
    /// Get the value of a property, if set.
    pub fn get(&self, key: PropertyKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Set the value of a property, overwriting any existing value.
    pub fn set(&mut self, key: PropertyKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }
}

/// Resolve the full configuration from the raw command-line tokens.
///
/// Order: properties-file path resolution, file load, file validation,
/// command-line overrides. Returning `Ok` guarantees the file was fully
/// read and every override pair was scanned; it does not guarantee that
/// any particular property ended up set.
pub fn resolve(args: &[String]) -> Result<Configuration> {
    let path = properties_file_path(args);
    let entries = load_properties(&path)?;
    validate(&entries)?;

    let mut config = Configuration::default();
    for (name, value) in entries {
        // validate() established that every name is canonical
        if let Some(key) = PropertyKey::from_name(&name) {
            config.set(key, value);
        }
    }
    apply_overrides(&mut config, args);
    Ok(config)
}

/// Determine the properties-file path from the argument sequence.
///
/// The first `-prop` occurrence wins; a trailing `-prop` with no following
/// token, or no `-prop` at all, falls back to [`DEFAULT_PROPERTIES_FILE`].
pub fn properties_file_path(args: &[String]) -> PathBuf {
    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        if token == PropertyKey::Prop.flag() {
            if let Some(path) = tokens.next() {
                return PathBuf::from(path);
            }
            break;
        }
    }
    PathBuf::from(DEFAULT_PROPERTIES_FILE)
}

/// Load the properties file, preserving line order.
///
/// Failure to open or read the file is fatal; there is no fallback to an
/// empty configuration.
pub fn load_properties(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::PropertiesFile {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_properties(&content))
}

/// Parse flat `key=value` property text.
///
/// Accepts `=` or `:` as separator, skips blank lines and `#`/`!` comment
/// lines, and treats a separator-less line as a key with an empty value.
fn parse_properties(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        match line.find(['=', ':']) {
            Some(pos) => {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().to_string();
                entries.push((key, value));
            }
            None => entries.push((line.to_string(), String::new())),
        }
    }
    entries
}

/// Check that every file-derived key is a recognized canonical name.
///
/// Fails on the first unrecognized key in file order. Runs before
/// command-line overrides are applied.
pub fn validate(entries: &[(String, String)]) -> Result<()> {
    for (name, _) in entries {
        if PropertyKey::from_name(name).is_none() {
            return Err(Error::UnrecognizedProperty { name: name.clone() });
        }
    }
    Ok(())
}

/// Apply command-line overrides to the configuration.
///
/// Tokens are consumed in non-overlapping `(flag, value)` pairs starting at
/// index 0; a single trailing unpaired token is ignored. Recognized flags
/// set the canonical property to the trimmed value; unrecognized flags are
/// logged and skipped.
pub fn apply_overrides(config: &mut Configuration, args: &[String]) {
    let mut i = 0;
    while i + 1 < args.len() {
        match PropertyKey::from_flag(&args[i]) {
            Some(key) => config.set(key, args[i + 1].trim()),
            None => warn!("Unknown property - {}", args[i]),
        }
        i += 2;
    }
}
