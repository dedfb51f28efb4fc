use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::record::MeasurementRecord;

/// All measurements from one build, keyed by artifact name.
///
/// Keys keep the order in which they were first inserted. Serializes as a
/// JSON object `{ "<name>": <record>, ... }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<(String, MeasurementRecord)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name. A repeated name keeps its
    /// original position and takes the new value.
    pub fn insert(&mut self, record: MeasurementRecord) {
        let key = record.name.clone();
        self.insert_keyed(key, record);
    }

    fn insert_keyed(&mut self, key: String, record: MeasurementRecord) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((key, record)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&MeasurementRecord> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, r)| r)
    }

    /// Record for `name`, or a fresh empty placeholder when absent.
    pub fn lookup(&self, name: &str) -> MeasurementRecord {
        self.get(name).cloned().unwrap_or_else(MeasurementRecord::empty)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &MeasurementRecord> {
        self.entries.iter().map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MeasurementRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = MeasurementRecord>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for record in iter {
            snapshot.insert(record);
        }
        snapshot
    }
}

/// Names from `base` (in order) followed by names only present in `current`.
/// A missing base contributes nothing.
pub fn union_names<'a>(base: Option<&'a Snapshot>, current: &'a Snapshot) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    base.into_iter()
        .flat_map(|b| b.names())
        .chain(current.names())
        .filter(|name| seen.insert(*name))
        .collect()
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of artifact name to measurement record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut snapshot = Snapshot::new();
        while let Some((key, record)) = access.next_entry::<String, MeasurementRecord>()? {
            snapshot.insert_keyed(key, record);
        }
        Ok(snapshot)
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}
