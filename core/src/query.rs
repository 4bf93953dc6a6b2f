use crate::index::TrigramIndex;
use crate::trigram::trigrams;
use crate::DocId;
use std::borrow::Cow;
use std::collections::HashSet;

/// Intersect two id sets by walking the smaller one and probing the larger.
pub fn intersect(a: &HashSet<DocId>, b: &HashSet<DocId>) -> HashSet<DocId> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|id| large.contains(id)).copied().collect()
}

impl TrigramIndex {
    /// Ids of documents containing every trigram of `pattern`, ascending.
    ///
    /// A pattern shorter than three bytes matches every live id. A trigram
    /// missing from the index makes the whole result empty.
    pub fn query<T: AsRef<[u8]> + ?Sized>(&self, pattern: &T) -> Vec<DocId> {
        let mut iter = trigrams(pattern);
        let Some(first) = iter.next() else {
            return self.live.iter().copied().collect();
        };
        let Some(posting) = self.postings.get(&first) else {
            return Vec::new();
        };
        let mut candidates: Cow<'_, HashSet<DocId>> = Cow::Borrowed(posting.doc_ids());
        for trigram in iter {
            let Some(posting) = self.postings.get(&trigram) else {
                return Vec::new();
            };
            candidates = Cow::Owned(intersect(&candidates, posting.doc_ids()));
        }
        let mut ids: Vec<DocId> = candidates.iter().copied().collect();
        ids.sort_unstable();
        tracing::trace!(pattern_len = pattern.as_ref().len(), hits = ids.len(), "query");
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[DocId]) -> HashSet<DocId> { ids.iter().copied().collect() }

    #[test]
    fn intersect_keeps_common_ids() {
        let a = set(&[1, 2]);
        let b = set(&[1]);
        assert_eq!(intersect(&a, &b), set(&[1]));
        assert_eq!(intersect(&b, &b), set(&[1]));
        let a = set(&[1, 2, 3, 4]);
        let b = set(&[1, 3]);
        assert_eq!(intersect(&b, &a), set(&[1, 3]));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        assert!(intersect(&set(&[1, 2]), &set(&[3, 4])).is_empty());
        assert!(intersect(&set(&[]), &set(&[3, 4])).is_empty());
    }

    #[test]
    fn missing_later_trigram_empties_result() {
        let mut idx = TrigramIndex::new();
        idx.add("abcd");
        assert_eq!(idx.query("abc"), vec![1]);
        assert!(idx.query("abcx").is_empty());
        assert!(idx.query("zzz").is_empty());
    }
}
