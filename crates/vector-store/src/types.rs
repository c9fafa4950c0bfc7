use rag_text_chunker::Chunk;
use serde::{Deserialize, Serialize};

/// A chunk with its embedding; the unit that is stored and persisted.
///
/// Serialized flat: the chunk fields sit next to `embedding` in one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub chunk: Chunk,
    pub embedding: Vec<f32>,
}

impl Document {
    pub fn new(chunk: Chunk, embedding: Vec<f32>) -> Self {
        Self { chunk, embedding }
    }

    pub fn text(&self) -> &str {
        &self.chunk.text
    }

    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_serializes_flat() {
        let doc = Document::new(
            Chunk::new("婚姻自由", 0, 4, 0).with_source("law.txt"),
            vec![0.5, -0.25],
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "婚姻自由",
                "start_idx": 0,
                "end_idx": 4,
                "chunk_idx": 0,
                "source": "law.txt",
                "embedding": [0.5, -0.25]
            })
        );
    }

    #[test]
    fn test_document_without_source_round_trips() {
        let raw = r#"{"text":"doc1","start_idx":0,"end_idx":4,"chunk_idx":0,"embedding":[0.1,0.2]}"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.chunk.source, None);
        assert_eq!(doc.embedding, vec![0.1_f32, 0.2_f32]);
        assert_eq!(doc.dimension(), 2);
    }
}
