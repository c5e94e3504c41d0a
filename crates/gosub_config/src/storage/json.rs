use crate::errors::Error;
use crate::settings::Setting;
use crate::StorageAdapter;
use gosub_shared::types::Result;
use log::warn;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Stores settings in a flat json object: `{ "treeview.glyph.collapsed": "s:+" }`
pub struct JsonStorageAdapter {
    path: PathBuf,
    elements: Mutex<HashMap<String, Setting>>,
}

impl TryFrom<&str> for JsonStorageAdapter {
    type Error = anyhow::Error;

    /// Opens the json file at the given path. A missing file is created as an empty object.
    fn try_from(path: &str) -> Result<Self> {
        let path = PathBuf::from(path);

        match fs::metadata(&path) {
            Ok(metadata) if !metadata.is_file() => {
                return Err(Error::Config(format!("{} is not a regular file", path.display())).into());
            }
            Ok(_) => {}
            Err(_) => fs::write(&path, "{}").map_err(Error::IO)?,
        }

        let adapter = JsonStorageAdapter {
            elements: Mutex::new(Self::read_file(&path)?),
            path,
        };

        Ok(adapter)
    }
}

impl StorageAdapter for JsonStorageAdapter {
    fn get(&self, key: &str) -> Option<Setting> {
        let lock = self.elements.lock().unwrap_or_else(PoisonError::into_inner);
        lock.get(key).cloned()
    }

    fn set(&self, key: &str, value: Setting) {
        let mut lock = self.elements.lock().unwrap_or_else(PoisonError::into_inner);
        lock.insert(key.to_owned(), value);

        if let Err(err) = self.write_file(&lock) {
            warn!("could not write settings to {}: {err}", self.path.display());
        }
    }

    fn all(&self) -> Result<HashMap<String, Setting>> {
        let lock = self.elements.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(lock.clone())
    }
}

impl JsonStorageAdapter {
    /// Read the whole json file. Entries that cannot be parsed into a setting are skipped.
    fn read_file(path: &Path) -> Result<HashMap<String, Setting>> {
        let buf = fs::read_to_string(path).map_err(Error::IO)?;
        let parsed_json: Value = serde_json::from_str(&buf).map_err(Error::JsonSerde)?;

        let mut elements = HashMap::new();
        if let Value::Object(settings) = parsed_json {
            for (key, value) in settings {
                match serde_json::from_value(value) {
                    Ok(setting) => {
                        elements.insert(key, setting);
                    }
                    Err(err) => {
                        warn!("problem reading setting {key} from json: {err}");
                    }
                }
            }
        }

        Ok(elements)
    }

    /// Write all settings back to the file, replacing its contents
    fn write_file(&self, elements: &HashMap<String, Setting>) -> Result<()> {
        let json = serde_json::to_string_pretty(elements).map_err(Error::JsonSerde)?;
        fs::write(&self.path, json).map_err(Error::IO)?;
        Ok(())
    }
}
