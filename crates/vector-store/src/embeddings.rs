use crate::error::Result;

/// Text → vector capability consumed by indexing and retrieval.
///
/// Implementations return a fixed-length vector, or an empty one when no
/// embedding is available for the input. Errors are reserved for provider
/// faults and are propagated untouched by callers.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

impl<F> EmbeddingProvider for F
where
    F: Fn(&str) -> Result<Vec<f32>> + Send + Sync,
{
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self(text)
    }
}

/// Deterministic, model-free provider backed by character feature hashing.
///
/// Identical texts map to identical vectors; blank texts yield no embedding.
#[derive(Clone, Debug)]
pub struct StubEmbeddingProvider {
    dimension: usize,
}

impl StubEmbeddingProvider {
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    pub const fn dimension(&self) -> usize {
        self.dimension
    }
}

impl EmbeddingProvider for StubEmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(hashed_features(text, self.dimension))
    }
}

/// Cosine similarity with a zero convention.
///
/// Returns `0.0` when either vector has zero norm, the lengths differ, or a
/// component is not finite, so the result is never NaN. Accumulates in `f64`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot = x.mul_add(y, dot);
        norm_a = x.mul_add(x, norm_a);
        norm_b = y.mul_add(y, norm_b);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let score = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !score.is_finite() || score == 0.0 {
        // also folds -0.0 into 0.0 so ties compare equal under total_cmp
        return 0.0;
    }
    score.clamp(-1.0, 1.0) as f32
}

/// Signed feature hashing over character unigrams and bigrams, L2-normalized.
///
/// Whitespace is ignored and letters are lowercased, so texts sharing
/// characters land near each other.
fn hashed_features(text: &str, dimension: usize) -> Vec<f32> {
    let mut features = vec![0.0_f32; dimension];
    if dimension == 0 {
        return features;
    }

    let chars: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    for gram in chars.windows(1).chain(chars.windows(2)) {
        let hash = gram_hash(gram);
        let bucket = (hash % dimension as u64) as usize;
        features[bucket] += if hash & (1 << 32) == 0 { 1.0 } else { -1.0 };
    }

    let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        features.iter_mut().for_each(|v| *v /= norm);
    }
    features
}

// FNV-1a over the code points of one gram
fn gram_hash(gram: &[char]) -> u64 {
    gram.iter().fold(0xcbf2_9ce4_8422_2325_u64, |hash, c| {
        (hash ^ u64::from(*c)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
