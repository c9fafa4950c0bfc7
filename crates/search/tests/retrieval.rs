use pretty_assertions::assert_eq;
use rag_search::{QueryResult, Retriever, DEFAULT_TOP_K};
use rag_vector_store::{Chunk, Document, EmbeddingProvider, StubEmbeddingProvider, VectorStore};
use std::sync::Arc;
use tempfile::TempDir;

fn fruit_store(path: &std::path::Path) -> VectorStore {
    let mut store = VectorStore::new(path);
    store.add_documents(vec![
        Document::new(Chunk::new("Apple is a fruit", 0, 16, 0), vec![1.0, 0.0, 0.0]),
        Document::new(Chunk::new("Car is a vehicle", 17, 33, 1), vec![0.0, 1.0, 0.0]),
        Document::new(Chunk::new("Banana is yellow", 34, 50, 2), vec![0.9, 0.1, 0.0]),
    ]);
    store
}

fn query_vector(embedding: Vec<f32>) -> Arc<dyn EmbeddingProvider> {
    Arc::new(move |_: &str| -> rag_vector_store::Result<Vec<f32>> { Ok(embedding.clone()) })
}

#[test]
fn ranks_by_cosine_similarity() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let retriever = Retriever::new(fruit_store(temp.path()), query_vector(vec![1.0, 0.0, 0.0]));

    let results = retriever.retrieve("fruit", 2)?;
    let texts: Vec<&str> = results.iter().map(QueryResult::text).collect();
    assert_eq!(texts, vec!["Apple is a fruit", "Banana is yellow"]);

    assert!((results[0].score - 1.0).abs() < 1e-6);
    assert!(results[1].score > 0.99 && results[1].score < 1.0);
    assert!(results[0].score >= results[1].score);
    Ok(())
}

#[test]
fn near_fruit_query_returns_apple_then_banana() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let retriever =
        Retriever::new(fruit_store(temp.path()), query_vector(vec![0.95, 0.05, 0.0]));

    let results = retriever.retrieve("what is a fruit", 2)?;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].chunk.chunk_idx, 0);
    assert_eq!(results[0].text(), "Apple is a fruit");
    assert_eq!(results[1].chunk.chunk_idx, 2);
    assert_eq!(results[1].text(), "Banana is yellow");
    assert!(results[0].score >= results[1].score);
    assert!(results.iter().all(|r| r.text() != "Car is a vehicle"));
    Ok(())
}

#[test]
fn results_carry_chunk_fields_but_no_embedding() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let retriever = Retriever::new(fruit_store(temp.path()), query_vector(vec![0.0, 1.0, 0.0]));

    let results = retriever.retrieve("vehicle", 1)?;
    assert_eq!(results[0].chunk, Chunk::new("Car is a vehicle", 17, 33, 1));

    let value = serde_json::to_value(&results[0])?;
    let object = value.as_object().expect("object");
    assert!(!object.contains_key("embedding"));
    for key in ["text", "start_idx", "end_idx", "chunk_idx", "score"] {
        assert!(object.contains_key(key), "missing {key}");
    }
    Ok(())
}

#[test]
fn zero_vectors_score_zero() -> anyhow::Result<()> {
    let mut store = VectorStore::new("unused");
    store.add_documents(vec![Document::new(Chunk::new("blank", 0, 5, 0), vec![0.0, 0.0])]);

    let retriever = Retriever::new(store.clone(), query_vector(vec![1.0, 0.0]));
    let results = retriever.retrieve("q", 1)?;
    assert_eq!(results[0].score, 0.0);
    assert!(!results[0].score.is_nan());

    let retriever = Retriever::new(store, query_vector(vec![0.0, 0.0]));
    assert_eq!(retriever.retrieve("q", 1)?[0].score, 0.0);
    Ok(())
}

#[test]
fn degenerate_k_and_empty_store() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let retriever = Retriever::new(fruit_store(temp.path()), query_vector(vec![1.0, 0.0, 0.0]));

    assert!(retriever.retrieve("q", 0)?.is_empty());
    assert_eq!(retriever.retrieve("q", 10)?.len(), 3);
    assert_eq!(retriever.retrieve("q", DEFAULT_TOP_K)?.len(), 3);

    let empty = Retriever::new(VectorStore::new(temp.path()), query_vector(vec![1.0, 0.0, 0.0]));
    assert!(empty.retrieve("q", DEFAULT_TOP_K)?.is_empty());
    Ok(())
}

#[test]
fn open_existing_reads_a_saved_index() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let provider = StubEmbeddingProvider::new(32);

    let mut store = VectorStore::new(temp.path());
    let texts = ["婚姻自由", "男女平等", "離婚時財產分割"];
    store.add_documents(
        texts
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let embedding = provider.embed(text)?;
                Ok(Document::new(Chunk::new(*text, 0, text.chars().count(), idx), embedding))
            })
            .collect::<rag_vector_store::Result<Vec<_>>>()?,
    );
    store.save("legal_index.json")?;

    let retriever = Retriever::open_existing(temp.path(), "legal_index.json", Arc::new(provider))?;
    let results = retriever.retrieve("男女平等", 1)?;
    assert_eq!(results[0].text(), "男女平等");
    assert!((results[0].score - 1.0).abs() < 1e-5);
    Ok(())
}
