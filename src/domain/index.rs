use std::collections::HashMap;

use crate::domain::models::MediaRecord;
use crate::media::metadata;

/// Summary-key index over one side of the match (subtitles or targets).
///
/// Keys iterate in first-insertion order; inserting under an existing key
/// replaces the record but keeps the key's original position, so a batch
/// behaves the same however the colliding names were ordered on disk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MediaIndex {
    map: HashMap<String, MediaRecord>,
    order: Vec<String>,
}

impl MediaIndex {
    pub fn new() -> Self {
        MediaIndex::default()
    }

    /// Insert under the record's summary key. Last write wins.
    pub fn insert(&mut self, record: MediaRecord) {
        let key = record.summary_key();
        if !self.map.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.map.insert(key, record);
    }

    pub fn get(&self, key: &str) -> Option<&MediaRecord> {
        self.map.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MediaRecord)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.map.get(key).map(|record| (key.as_str(), record)))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Parse every filename and index the resulting records by summary key.
pub fn build_index(filenames: &[String]) -> MediaIndex {
    let mut index = MediaIndex::new();
    for filename in filenames {
        let record = MediaRecord::new(filename, metadata::parse(filename));
        index.insert(record);
    }
    index
}
