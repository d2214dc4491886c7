//! Prompt snapshot: the payload produced by "Generate Prompt"

use crate::types::RatingMap;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Request body must include 'ratings' object with topic-weight pairs")]
    MissingRatings,
    #[error("Weight for topic '{topic}' must be a number between 0 and 10")]
    WeightOutOfRange { topic: String },
    #[error("Weight for topic '{topic}' must be a whole number")]
    FractionalWeight { topic: String },
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Field order here is the key order of the serialized JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptSnapshot {
    pub ratings: RatingMap,
    pub location: String,
    pub timestamp: String,
}

impl PromptSnapshot {
    pub fn new(ratings: RatingMap, location: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            ratings,
            location: location.into(),
            timestamp: format_timestamp(at),
        }
    }

    /// Two-space indented JSON, same shape as `JSON.stringify(v, null, 2)`
    pub fn to_pretty_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a snapshot. Weights may be 0-10; key order is kept.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(text)?;
        let entries = raw.ratings.ok_or(SnapshotError::MissingRatings)?;

        let mut ratings = RatingMap::new();
        for (topic, value) in entries.0 {
            let weight = value
                .as_f64()
                .filter(|w| (0.0..=10.0).contains(w))
                .ok_or_else(|| SnapshotError::WeightOutOfRange { topic: topic.clone() })?;
            if weight.fract() != 0.0 {
                return Err(SnapshotError::FractionalWeight { topic });
            }
            ratings.set(&topic, weight as u8);
        }

        DateTime::parse_from_rfc3339(&raw.timestamp).map_err(|source| {
            SnapshotError::Timestamp {
                value: raw.timestamp.clone(),
                source,
            }
        })?;

        Ok(Self {
            ratings,
            location: raw.location,
            timestamp: raw.timestamp,
        })
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-16T09:30:00.123Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    ratings: Option<OrderedEntries>,
    #[serde(default)]
    location: String,
    timestamp: String,
}

/// JSON object entries in document order
struct OrderedEntries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of topic-weight pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
