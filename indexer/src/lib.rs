use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use trigram::{unpack, DocId, Trigram, TrigramIndex};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(default)]
    id: Option<String>,
    body: String,
}

#[derive(Debug, Clone)]
pub struct StoredDoc {
    pub external_id: Option<String>,
    pub body: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub external_id: Option<String>,
    pub preview: String,
}

#[derive(Serialize)]
pub struct Stats {
    pub num_docs: usize,
    pub num_trigrams: usize,
    pub max_doc_id: DocId,
    pub top_trigrams: Vec<TrigramStat>,
}

#[derive(Serialize)]
pub struct TrigramStat {
    pub trigram: Trigram,
    pub text: String,
    pub docs: usize,
    pub occurrences: u64,
}

const PREVIEW_CHARS: usize = 80;

/// A trigram index plus the text of each indexed document, so documents can be
/// deleted by id alone.
#[derive(Default)]
pub struct Corpus {
    pub index: TrigramIndex,
    docs: HashMap<DocId, StoredDoc>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Load every supported file under `input` (a file or a directory).
    pub fn load<P: AsRef<Path>>(input: P) -> Result<Self> {
        let mut corpus = Corpus::new();
        let files = collect_files(input.as_ref());
        if files.is_empty() {
            tracing::warn!(path = %input.as_ref().display(), "no .json, .jsonl or .txt input found");
        }
        for file in files {
            let loaded = match file.extension().and_then(|s| s.to_str()) {
                Some("jsonl") => corpus.load_jsonl(&file),
                Some("json") => corpus.load_json(&file),
                _ => corpus.load_txt(&file),
            };
            loaded.with_context(|| format!("loading {}", file.display()))?;
        }
        tracing::info!(num_docs = corpus.index.doc_count(), num_trigrams = corpus.index.trigram_count(), "loaded corpus");
        Ok(corpus)
    }

    pub fn insert(&mut self, external_id: Option<String>, body: String) -> DocId {
        let doc_id = self.index.add(&body);
        self.docs.insert(doc_id, StoredDoc { external_id, body });
        doc_id
    }

    /// Delete a document using its stored text. Returns false for unknown ids.
    pub fn remove(&mut self, doc_id: DocId) -> bool {
        match self.docs.remove(&doc_id) {
            Some(doc) => {
                self.index.delete(&doc.body, doc_id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, doc_id: DocId) -> Option<&StoredDoc> { self.docs.get(&doc_id) }

    /// Run `pattern` against the index. With `verify`, candidates whose text
    /// does not contain the pattern are dropped.
    pub fn search(&self, pattern: &str, verify: bool) -> SearchResponse {
        let start = std::time::Instant::now();
        let mut results = Vec::new();
        for doc_id in self.index.query(pattern) {
            // ids removed through `remove` still come back for short patterns
            let Some(doc) = self.docs.get(&doc_id) else { continue };
            if verify && !doc.body.contains(pattern) {
                continue;
            }
            let preview = doc.body.chars().take(PREVIEW_CHARS).collect();
            results.push(SearchHit { doc_id, external_id: doc.external_id.clone(), preview });
        }
        let elapsed = start.elapsed();
        SearchResponse { query: pattern.to_string(), took_s: elapsed.as_secs_f64(), total_hits: results.len(), results }
    }

    pub fn stats(&self, top: usize) -> Stats {
        let mut ranked: Vec<(Trigram, usize, u64)> = self
            .index
            .postings()
            .map(|(t, p)| (t, p.len(), p.total_occurrences()))
            .collect();
        // most documents first, trigram value breaks ties so output is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let top_trigrams = ranked
            .into_iter()
            .take(top)
            .map(|(trigram, docs, occurrences)| TrigramStat {
                trigram,
                text: String::from_utf8_lossy(&unpack(trigram)).into_owned(),
                docs,
                occurrences,
            })
            .collect();
        Stats {
            num_docs: self.docs.len(),
            num_trigrams: self.index.trigram_count(),
            max_doc_id: self.index.max_doc_id(),
            top_trigrams,
        }
    }

    fn load_jsonl(&mut self, file: &Path) -> Result<()> {
        let reader = BufReader::new(File::open(file)?);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let doc: InputDoc = serde_json::from_str(&line)?;
            self.insert(doc.id, doc.body);
        }
        Ok(())
    }

    fn load_json(&mut self, file: &Path) -> Result<()> {
        let reader = BufReader::new(File::open(file)?);
        let json: serde_json::Value = serde_json::from_reader(reader)?;
        match json {
            serde_json::Value::Array(arr) => {
                for v in arr {
                    let doc: InputDoc = serde_json::from_value(v)?;
                    self.insert(doc.id, doc.body);
                }
            }
            serde_json::Value::Object(_) => {
                let doc: InputDoc = serde_json::from_value(json)?;
                self.insert(doc.id, doc.body);
            }
            _ => tracing::warn!(file = %file.display(), "expected a JSON object or array, skipping"),
        }
        Ok(())
    }

    fn load_txt(&mut self, file: &Path) -> Result<()> {
        let reader = BufReader::new(File::open(file)?);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            self.insert(None, line);
        }
        Ok(())
    }
}

fn collect_files(input: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl" | "txt")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}
