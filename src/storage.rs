use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use crate::constants::{EMAIL_KEY, STORAGE_FILE, SURVEY_CODES_KEY};
use crate::logging::{log_error, log_warn};

/// Device-local key-value store for small values that survive sign-out,
/// like the remembered sign-in email and the consumed survey codes.
/// All operations are best effort: errors are logged, never propagated.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn open() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Storage {
            path: home_dir.join(STORAGE_FILE),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Storage { path }
    }

    fn read_map(&self) -> HashMap<String, Value> {
        if !self.path.exists() {
            return HashMap::new();
        }
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    log_error(&format!("Ignoring corrupt storage file: {}", e));
                    HashMap::new()
                }
            },
            Err(e) => {
                log_error(&format!("Failed to read storage file: {}", e));
                HashMap::new()
            }
        }
    }

    fn write_map(&self, map: &HashMap<String, Value>) -> bool {
        let result = (|| -> Result<(), Box<dyn std::error::Error>> {
            let contents = serde_json::to_string_pretty(map)?;
            let dir = self.path.parent().ok_or("Storage path has no parent")?;
            let mut tmp = NamedTempFile::new_in(dir)?;
            tmp.write_all(contents.as_bytes())?;
            tmp.persist(&self.path)?;
            Ok(())
        })();

        if let Err(e) = result {
            log_warn(&format!("Failed to write storage file: {}", e));
            return false;
        }
        true
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.read_map().get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn set_string(&self, key: &str, value: &str) -> bool {
        let mut map = self.read_map();
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read_map().remove(key)?;
        match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(e) => {
                log_warn(&format!("Ignoring malformed storage value '{}': {}", key, e));
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                log_warn(&format!("Failed to encode storage value '{}': {}", key, e));
                return false;
            }
        };
        let mut map = self.read_map();
        map.insert(key.to_string(), json);
        self.write_map(&map)
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.get_string(EMAIL_KEY)
    }

    pub fn remember_email(&self, email: &str) -> bool {
        self.set_string(EMAIL_KEY, email)
    }

    pub fn consumed_codes(&self) -> Vec<String> {
        self.get(SURVEY_CODES_KEY).unwrap_or_default()
    }

    pub fn has_consumed(&self, code: &str) -> bool {
        self.consumed_codes().iter().any(|c| c == code)
    }

    pub fn add_consumed_code(&self, code: &str) -> bool {
        let mut codes = self.consumed_codes();
        codes.push(code.to_string());
        self.set(SURVEY_CODES_KEY, &codes)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Storage::open()
    }
}
