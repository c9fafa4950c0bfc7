use crate::embeddings::cosine_similarity;
use crate::types::Document;

/// Exhaustive cosine ranking over a slice of documents.
///
/// Brute force (O(n) per query), which is fine for a single reference
/// document; an ANN index can replace it behind the same `search` signature.
pub struct FlatIndex<'a> {
    documents: &'a [Document],
}

impl<'a> FlatIndex<'a> {
    pub const fn new(documents: &'a [Document]) -> Self {
        Self { documents }
    }

    /// Top `k` documents as `(position, score)`, best first.
    ///
    /// Equal scores keep store order (the sort is stable).
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        if k == 0 || self.documents.is_empty() {
            return Vec::new();
        }

        let mut scores: Vec<(usize, f32)> = self
            .documents
            .iter()
            .enumerate()
            .map(|(idx, doc)| (idx, cosine_similarity(query, &doc.embedding)))
            .collect();

        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        scores.truncate(k);
        scores
    }

    pub const fn len(&self) -> usize {
        self.documents.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
