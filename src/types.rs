//! Common types and data structures

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

/// Topic ratings in the order the user first touched each topic.
///
/// Only topics that were explicitly set appear here; a topic the user never
/// moved is absent rather than stored with the default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingMap {
    entries: Vec<(String, u8)>,
}

impl RatingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten topic keeps its original position.
    pub fn set(&mut self, topic: &str, value: u8) {
        match self.entries.iter_mut().find(|(t, _)| t == topic) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((topic.to_string(), value)),
        }
    }

    pub fn get(&self, topic: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(t, _)| t == topic)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), *v))
    }

    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// Written by hand so the JSON object keeps insertion order
impl Serialize for RatingMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (topic, value) in &self.entries {
            map.serialize_entry(topic, value)?;
        }
        map.end()
    }
}

/// Which rendering of the last generated snapshot is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputView {
    #[default]
    Json,
    Prompt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map = RatingMap::new();
        map.set("Space", 3);
        map.set("AI", 7);
        map.set("Space", 9);

        let order: Vec<_> = map.iter().collect();
        assert_eq!(order, vec![("Space", 9), ("AI", 7)]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut map = RatingMap::new();
        map.set("Technology", 5);
        map.set("AI", 10);
        map.set("Business", 4);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Technology":5,"AI":10,"Business":4}"#);
    }

    #[test]
    fn empty_map_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&RatingMap::new()).unwrap(), "{}");
    }
}
