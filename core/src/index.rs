use crate::posting::Posting;
use crate::trigram::trigrams;
use crate::{DocId, Trigram};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// In-memory trigram inverted index.
///
/// The index never stores document text. Deleting a document requires the
/// caller to supply the same text that was added.
#[derive(Debug, Default)]
pub struct TrigramIndex {
    pub(crate) postings: HashMap<Trigram, Posting>,
    max_doc_id: DocId,
    // every id handed out by `add`; served for patterns shorter than a trigram
    pub(crate) live: BTreeSet<DocId>,
}

impl TrigramIndex {
    pub fn new() -> Self { Self::default() }

    /// Index `doc` and return its newly assigned id. Short or empty documents
    /// still consume an id.
    pub fn add<T: AsRef<[u8]> + ?Sized>(&mut self, doc: &T) -> DocId {
        let doc_id = self.max_doc_id + 1;
        let mut count = 0usize;
        for trigram in trigrams(doc) {
            self.postings.entry(trigram).or_default().record(doc_id);
            count += 1;
        }
        self.max_doc_id = doc_id;
        self.live.insert(doc_id);
        tracing::trace!(doc_id, trigrams = count, "added document");
        doc_id
    }

    /// Remove the contribution of `doc_id`, walking the trigrams of `doc`.
    ///
    /// Stops at the first trigram that has no posting; trigrams after it are
    /// left untouched. The id stays in the live set and is never reissued.
    pub fn delete<T: AsRef<[u8]> + ?Sized>(&mut self, doc: &T, doc_id: DocId) {
        for trigram in trigrams(doc) {
            let Entry::Occupied(mut entry) = self.postings.entry(trigram) else {
                tracing::debug!(doc_id, trigram, "trigram not indexed, delete stopped");
                return;
            };
            if entry.get_mut().release(doc_id) {
                entry.remove();
            }
        }
    }

    pub fn posting(&self, trigram: Trigram) -> Option<&Posting> { self.postings.get(&trigram) }

    pub fn postings(&self) -> impl Iterator<Item = (Trigram, &Posting)> + '_ {
        self.postings.iter().map(|(&t, p)| (t, p))
    }

    pub fn trigram_count(&self) -> usize { self.postings.len() }

    /// Number of ids in the live set, deleted documents included.
    pub fn doc_count(&self) -> usize { self.live.len() }

    pub fn max_doc_id(&self) -> DocId { self.max_doc_id }

    pub fn contains_doc(&self, doc_id: DocId) -> bool { self.live.contains(&doc_id) }

    pub fn is_empty(&self) -> bool { self.live.is_empty() }
}
