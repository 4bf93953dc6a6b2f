//! Substring search over short documents using a trigram inverted index.

pub mod index;
pub mod posting;
pub mod query;
pub mod trigram;

pub type Trigram = u32;
pub type DocId = u64;

pub use index::TrigramIndex;
pub use posting::Posting;
pub use query::intersect;
pub use trigram::{extract, pack, trigrams, unpack};
