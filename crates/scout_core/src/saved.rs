use crate::GroundingSource;

/// Bookmarked listings, in insertion order, never two with the same `uri`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedJobs {
    entries: Vec<GroundingSource>,
}

impl SavedJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from stored entries; the first occurrence of a `uri` wins.
    pub fn from_sources(sources: impl IntoIterator<Item = GroundingSource>) -> Self {
        let mut saved = Self::new();
        for source in sources {
            if !saved.contains(&source.uri) {
                saved.entries.push(source);
            }
        }
        saved
    }

    /// Adds `source` when absent, removes the entry with its `uri` when present.
    /// Returns whether the source is saved afterwards.
    pub fn toggle(&mut self, source: GroundingSource) -> bool {
        if let Some(pos) = self.position(&source.uri) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(source);
            true
        }
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.position(uri).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&GroundingSource> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroundingSource> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<GroundingSource> {
        self.entries.clone()
    }

    fn position(&self, uri: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.uri == uri)
    }
}
