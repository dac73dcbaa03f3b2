use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Identity fields of a device, keyed by field name.
pub type DeviceDetails = BTreeMap<String, String>;

/// Value stored in the session metadata.
///
/// Closed on purpose: the only thing ever stored is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
}

impl Default for MetaValue {
    fn default() -> Self {
        MetaValue::Text(String::new())
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionMeta {
    entries: HashMap<String, MetaValue>,
}

impl SessionMeta {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// Value under `key`, or the zero value when the key was never inserted.
    pub fn lookup(&self, key: &str) -> MetaValue {
        self.get(key).cloned().unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub index: usize,
    pub value: String,
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.index, self.value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub paths: Vec<PathEntry>,
    pub lookup_key: String,
    pub value: MetaValue,
}

impl Report {
    /// Text rendering: one line per path, then the looked-up value.
    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self.paths.iter().map(ToString::to_string).collect();
        out.push(self.value.to_string());
        out
    }
}
