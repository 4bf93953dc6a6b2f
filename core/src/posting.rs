use crate::DocId;
use std::collections::{HashMap, HashSet};

/// Documents containing one trigram, with how often the trigram occurs in each.
///
/// `doc_ids` and the key set of `freq` always hold the same ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Posting {
    doc_ids: HashSet<DocId>,
    freq: HashMap<DocId, u32>,
}

impl Posting {
    pub fn new() -> Self { Self::default() }

    pub fn doc_ids(&self) -> &HashSet<DocId> { &self.doc_ids }

    /// Occurrences of the trigram in `doc_id`; 0 when absent.
    pub fn frequency(&self, doc_id: DocId) -> u32 {
        self.freq.get(&doc_id).copied().unwrap_or(0)
    }

    pub fn contains(&self, doc_id: DocId) -> bool { self.doc_ids.contains(&doc_id) }

    pub fn len(&self) -> usize { self.doc_ids.len() }

    pub fn is_empty(&self) -> bool { self.doc_ids.is_empty() }

    /// Sum of frequencies over all documents.
    pub fn total_occurrences(&self) -> u64 {
        self.freq.values().map(|&f| f as u64).sum()
    }

    /// Count one more occurrence in `doc_id`.
    pub(crate) fn record(&mut self, doc_id: DocId) {
        *self.freq.entry(doc_id).or_insert(0) += 1;
        self.doc_ids.insert(doc_id);
    }

    /// Drop one occurrence of `doc_id`. A frequency above one is decremented;
    /// anything else removes the document outright. Returns true once the
    /// posting holds no documents.
    pub(crate) fn release(&mut self, doc_id: DocId) -> bool {
        match self.freq.get_mut(&doc_id) {
            Some(f) if *f > 1 => *f -= 1,
            _ => {
                self.freq.remove(&doc_id);
                self.doc_ids.remove(&doc_id);
            }
        }
        debug_assert_eq!(self.freq.len(), self.doc_ids.len());
        self.doc_ids.is_empty()
    }
}
