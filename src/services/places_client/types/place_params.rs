use std::collections::BTreeMap;

use tracing::warn;
use urlencoding::encode;

/// Caller-supplied parameters merged on top of an endpoint's own parameters.
pub type ExtraParams = BTreeMap<String, String>;

pub const KEY_PARAM: &str = "key";

/// Ordered query parameters for a single Places request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceParams {
    entries: Vec<(String, String)>,
}

impl PlaceParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an existing value in place.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges `extras` in. The key parameter and every name in `required`
    /// keep their current values; anything else may be overridden.
    pub fn merge_extra(&mut self, extras: &ExtraParams, required: &[&str]) {
        for (name, value) in extras {
            if name == KEY_PARAM || required.contains(&name.as_str()) {
                warn!("Ignoring extra parameter {:?}: it cannot be overridden", name);
                continue;
            }

            self.insert(name, value.as_str());
        }
    }

    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(n, v)| format!("{}={}", encode(n), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
