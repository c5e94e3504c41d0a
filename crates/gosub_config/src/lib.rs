pub mod errors;
pub mod settings;
pub mod storage;

use crate::errors::Error;
use crate::settings::{Setting, SettingInfo};
use crate::storage::MemoryStorageAdapter;
use gosub_shared::types::Result;
use lazy_static::lazy_static;
use log::warn;
use serde_derive::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::mem;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use wildmatch::WildMatch;

/// Settings are described in a json file which is compiled into the binary.
const SETTINGS_JSON: &str = include_str!("./settings.json");

/// `StorageAdapter` is the interface for storing and retrieving settings.
/// Adapters must be `Send + Sync` as the config store is shared globally.
pub trait StorageAdapter: Send + Sync {
    /// Retrieves a setting from the storage
    fn get(&self, key: &str) -> Option<Setting>;

    /// Stores a given setting to the storage. Adapters use interior mutability so settings can be
    /// stored through a shared reference.
    fn set(&self, key: &str, value: Setting);

    /// Retrieves all the settings in the storage in one go. Used for preloading the settings
    /// into the `ConfigStore`.
    fn all(&self) -> Result<HashMap<String, Setting>>;
}

lazy_static! {
    // Initial config store uses a memory storage adapter: changes live for the session only.
    static ref CONFIG_STORE: RwLock<ConfigStore> = RwLock::new(ConfigStore::default());
}

/// Returns a read guard on the global config store:
/// `gosub_config::config_store().get("treeview.glyph.collapsed")`
pub fn config_store() -> RwLockReadGuard<'static, ConfigStore> {
    CONFIG_STORE.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn config_store_write() -> RwLockWriteGuard<'static, ConfigStore> {
    CONFIG_STORE.write().unwrap_or_else(PoisonError::into_inner)
}

/// These macro's simplify calls to the global config store:
///
/// `let strict = config!(bool "treeview.hierarchy.strict");`
/// `config_set!(bool "treeview.hierarchy.strict", true);`
///
/// Unknown keys return an empty value. Test for existence with `config_store().has("key")`.
#[macro_export]
macro_rules! config {
    (string $key:expr) => {
        match $crate::config_store().get($key) {
            Some(setting) => setting.as_string(),
            None => String::new(),
        }
    };
    (bool $key:expr) => {
        match $crate::config_store().get($key) {
            Some(setting) => setting.to_bool(),
            None => false,
        }
    };
    (uint $key:expr) => {
        match $crate::config_store().get($key) {
            Some(setting) => setting.to_uint(),
            None => 0,
        }
    };
    (sint $key:expr) => {
        match $crate::config_store().get($key) {
            Some(setting) => setting.to_sint(),
            None => 0,
        }
    };
    (map $key:expr) => {
        match $crate::config_store().get($key) {
            Some(setting) => setting.to_map(),
            None => Vec::new(),
        }
    };
}

#[macro_export]
macro_rules! config_set {
    (string $key:expr, $val:expr) => {
        $crate::config_store().set($key, $crate::settings::Setting::String($val))
    };
    (bool $key:expr, $val:expr) => {
        $crate::config_store().set($key, $crate::settings::Setting::Bool($val))
    };
    (uint $key:expr, $val:expr) => {
        $crate::config_store().set($key, $crate::settings::Setting::UInt($val))
    };
    (sint $key:expr, $val:expr) => {
        $crate::config_store().set($key, $crate::settings::Setting::SInt($val))
    };
    (map $key:expr, $val:expr) => {
        $crate::config_store().set($key, $crate::settings::Setting::Map($val))
    };
}

/// `JsonEntry` is used for parsing the settings.json file
#[derive(Debug, Deserialize)]
struct JsonEntry {
    key: String,
    #[serde(rename = "type")]
    _entry_type: String,
    default: String,
    description: String,
}

/// Configuration storage is the place where the tree view finds all configurable options
pub struct ConfigStore {
    /// All current settings. The mutex lets `get()` cache values loaded from storage through `&self`.
    settings: Mutex<HashMap<String, Setting>>,
    /// Descriptions, default values and type information of all known settings
    settings_info: HashMap<String, SettingInfo>,
    /// Keys of all settings in definition order
    setting_keys: Vec<String>,
    /// The storage adapter used for persisting and loading keys
    storage: Box<dyn StorageAdapter>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        let mut store = Self {
            settings: Mutex::new(HashMap::new()),
            settings_info: HashMap::new(),
            setting_keys: Vec::new(),
            storage: Box::new(MemoryStorageAdapter::new()),
        };

        if let Err(err) = store.populate_default_settings() {
            warn!("config: could not load default settings: {err}");
        }
        store
    }
}

impl ConfigStore {
    /// Sets a new storage engine and loads every setting it holds into the store. Settings
    /// already in the store are overwritten by the ones found in the storage.
    pub fn set_storage(&mut self, storage: Box<dyn StorageAdapter>) {
        self.storage = storage;

        match self.storage.all() {
            Ok(all_settings) => {
                let mut settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
                for (key, value) in all_settings {
                    if !self.settings_info.contains_key(&key) {
                        warn!("config: storage contains unknown setting {key}");
                        continue;
                    }
                    settings.insert(key, value);
                }
            }
            Err(err) => warn!("config: could not load settings from storage: {err}"),
        }
    }

    /// Returns true when the store knows about the given key
    pub fn has(&self, key: &str) -> bool {
        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Returns a list of keys that matches the given search string (can use ? and *) for search
    /// wildcards.
    pub fn find(&self, search: &str) -> Vec<String> {
        let search = WildMatch::new(search);

        self.setting_keys
            .iter()
            .filter(|key| search.matches(key))
            .cloned()
            .collect()
    }

    /// Retrieves information about the given key, or returns None when key is unknown
    pub fn get_info(&self, key: &str) -> Option<SettingInfo> {
        self.settings_info.get(key).cloned()
    }

    /// Returns the setting with the given key. Settings not in the store are loaded from the
    /// storage, then from the defaults. Unknown keys return `None`.
    pub fn get(&self, key: &str) -> Option<Setting> {
        let mut settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(setting) = settings.get(key) {
            return Some(setting.clone());
        }

        if let Some(setting) = self.storage.get(key) {
            settings.insert(key.to_string(), setting.clone());
            return Some(setting);
        }

        if let Some(info) = self.settings_info.get(key) {
            return Some(info.default.clone());
        }

        warn!("config: setting {key} is not known");
        None
    }

    /// Sets the given setting to the given value and persists it to the storage. Only known
    /// settings of the same type as their default are accepted.
    pub fn set(&self, key: &str, value: Setting) {
        let Some(info) = self.settings_info.get(key) else {
            warn!("config: setting {key} is not known");
            return;
        };

        if mem::discriminant(&info.default) != mem::discriminant(&value) {
            warn!("config: setting {key} is of different type than setting expects");
            return;
        }

        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.clone());

        self.storage.set(key, value);
    }

    /// Populates the settings in the store from the settings.json file
    fn populate_default_settings(&mut self) -> Result<()> {
        let json_data: Value = serde_json::from_str(SETTINGS_JSON).map_err(Error::JsonSerde)?;

        let Value::Object(data) = json_data else {
            return Err(Error::Config("settings.json must contain an object".into()).into());
        };

        let mut settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        for (section_prefix, section_entries) in data {
            let section_entries: Vec<JsonEntry> = serde_json::from_value(section_entries).map_err(Error::JsonSerde)?;

            for entry in section_entries {
                let key = format!("{}.{}", section_prefix, entry.key);

                let info = SettingInfo {
                    key: key.clone(),
                    description: entry.description,
                    default: Setting::from_str(&entry.default)?,
                };

                settings.insert(key.clone(), info.default.clone());
                self.setting_keys.push(key.clone());
                self.settings_info.insert(key, info);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::storage::MemoryStorageAdapter;

    #[test]
    fn defaults() {
        let store = ConfigStore::default();
        assert_eq!(store.get("treeview.css.root"), Some(Setting::String("b-node".into())));
        assert_eq!(store.get("treeview.glyph.expanded"), Some(Setting::String("\u{2212}".into())));
        assert_eq!(store.get("treeview.hierarchy.strict"), Some(Setting::Bool(false)));

        let info = store.get_info("treeview.glyph.collapsed").unwrap();
        assert_eq!(info.default, Setting::String("+".into()));
        assert!(store.get_info("treeview.nope").is_none());
    }

    #[test]
    fn find_keys() {
        let store = ConfigStore::default();
        assert_eq!(
            store.find("treeview.glyph.*"),
            vec!["treeview.glyph.collapsed".to_string(), "treeview.glyph.expanded".to_string()]
        );
        assert_eq!(store.find("treeview.css.*").len(), 8);
        assert!(store.find("dns.*").is_empty());
    }

    #[test]
    fn set_and_storage() {
        let mut store = ConfigStore::default();
        let storage = MemoryStorageAdapter::new();
        storage.set("treeview.glyph.collapsed", Setting::String(">".into()));
        storage.set("something.else", Setting::Bool(true));
        store.set_storage(Box::new(storage));

        assert_eq!(store.get("treeview.glyph.collapsed"), Some(Setting::String(">".into())));
        assert!(!store.has("something.else"));

        store.set("treeview.hierarchy.strict", Setting::Bool(true));
        assert_eq!(store.get("treeview.hierarchy.strict"), Some(Setting::Bool(true)));
    }

    #[test]
    fn invalid_setting() {
        testing_logger::setup();
        let store = ConfigStore::default();

        store.set("treeview.hierarchy.strict", Setting::String("wont accept strings".into()));
        assert_eq!(store.get("treeview.hierarchy.strict"), Some(Setting::Bool(false)));

        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 1);
            assert_eq!(captured_logs[0].level, log::Level::Warn);
        });
    }

    #[test]
    fn unknown_key() {
        testing_logger::setup();
        let store = ConfigStore::default();

        assert!(store.get("this.key.doesnt.exist").is_none());
        store.set("this.key.doesnt.exist", Setting::Bool(true));
        assert!(!store.has("this.key.doesnt.exist"));

        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 2);
            assert!(captured_logs.iter().all(|log| log.level == log::Level::Warn));
        });
    }

    #[test]
    fn macro_usage() {
        config_set!(string "treeview.element.tag", "li".into());
        assert_eq!(config!(string "treeview.element.tag"), "li");
        config_set!(string "treeview.element.tag", "div".into());

        assert!(config!(bool "treeview.hierarchy.report_orphans"));
        assert_eq!(config!(string "this.key.doesnt.exist"), "");
    }
}
