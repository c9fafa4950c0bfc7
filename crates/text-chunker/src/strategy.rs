use crate::config::{ChunkerConfig, ChunkingStrategy};
use crate::types::Chunk;
use regex::Regex;
use std::sync::OnceLock;

/// How far back (in characters) a fixed window may retreat to find a boundary
const BOUNDARY_LOOKBACK: usize = 50;

/// Clause and sentence punctuation a fixed window may be cut after
const BOUNDARY_PUNCTUATION: [char; 13] = [
    '.', ',', ';', ':', '!', '?', '。', '，', '！', '？', '；', '：', '、',
];

/// Characters that close a sentence
const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Assumed width of the blank line between two paragraphs
const PARAGRAPH_SEPARATOR_WIDTH: usize = 2;

fn paragraph_break() -> &'static Regex {
    static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\n\s*\n").expect("valid paragraph break pattern"))
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(&c)
}

/// Character-addressable view over a `&str`
struct CharText<'a> {
    text: &'a str,
    /// Byte offset of every char, plus the total byte length as sentinel
    offsets: Vec<usize>,
}

impl<'a> CharText<'a> {
    fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.text[self.offsets[idx]..].chars().next()
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }
}

/// Execute chunking strategy on source text
pub struct StrategyExecutor {
    config: ChunkerConfig,
}

impl StrategyExecutor {
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Execute the configured strategy
    pub fn execute(&self, text: &str) -> Vec<Chunk> {
        match self.config.strategy {
            ChunkingStrategy::FixedWindow => {
                chunk_fixed(text, self.config.chunk_size, self.config.overlap)
            }
            ChunkingStrategy::BySentence => self.chunk_by_sentence(text),
            ChunkingStrategy::ByParagraph => self.chunk_by_paragraph(text),
        }
    }

    /// Pack sentences into chunks of at most `chunk_size` characters.
    ///
    /// Offsets are reconstructed as the sum of sentence lengths plus one
    /// separator character each, so they drift from the source whenever the
    /// real separator is wider or absent.
    fn chunk_by_sentence(&self, text: &str) -> Vec<Chunk> {
        let text_len = text.chars().count();
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_len = 0usize;
        let mut buffer_start = 0usize;
        let mut char_pos = 0usize;

        for sentence in split_sentences(text) {
            let sentence_len = sentence.chars().count();

            if buffer_len + sentence_len > self.config.chunk_size && !buffer.is_empty() {
                chunks.push(Chunk::new(
                    buffer.trim(),
                    buffer_start.min(text_len),
                    char_pos.min(text_len),
                    chunks.len(),
                ));
                buffer.clear();
                buffer_len = 0;
                buffer_start = char_pos;
            }

            buffer.push_str(sentence);
            buffer.push(' ');
            buffer_len += sentence_len + 1;
            char_pos += sentence_len + 1;
        }

        let tail = buffer.trim();
        if !tail.is_empty() {
            chunks.push(Chunk::new(
                tail,
                buffer_start.min(text_len),
                text_len,
                chunks.len(),
            ));
        }

        chunks
    }

    /// One chunk per paragraph; paragraphs above `chunk_size` fall back to
    /// fixed windows whose offsets are shifted by the paragraph start.
    ///
    /// Paragraph starts assume a two character separator, so offsets are
    /// approximate when the blank lines carry extra whitespace.
    fn chunk_by_paragraph(&self, text: &str) -> Vec<Chunk> {
        let text_len = text.chars().count();
        let mut chunks: Vec<Chunk> = Vec::new();
        let mut char_pos = 0usize;

        let paragraphs = paragraph_break()
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty());

        for paragraph in paragraphs {
            let paragraph_len = paragraph.chars().count();

            if paragraph_len <= self.config.chunk_size {
                chunks.push(Chunk::new(
                    paragraph,
                    char_pos.min(text_len),
                    (char_pos + paragraph_len).min(text_len),
                    chunks.len(),
                ));
            } else {
                for sub in chunk_fixed(paragraph, self.config.chunk_size, self.config.overlap) {
                    chunks.push(Chunk {
                        start_idx: (sub.start_idx + char_pos).min(text_len),
                        end_idx: (sub.end_idx + char_pos).min(text_len),
                        chunk_idx: chunks.len(),
                        ..sub
                    });
                }
            }

            char_pos += paragraph_len + PARAGRAPH_SEPARATOR_WIDTH;
        }

        chunks
    }
}

/// Sliding window chunking that avoids splitting words.
///
/// A window that ends before the text end is pulled back to just after the
/// nearest boundary character within `BOUNDARY_LOOKBACK` characters. The next
/// window starts `overlap` characters before the previous end; when a short
/// boundary cut would not move the start forward, the overlap is dropped for
/// that step.
pub(crate) fn chunk_fixed(text: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    let chars = CharText::new(text);
    let len = chars.len();
    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < len {
        let mut end = (start + chunk_size).min(len);

        if end < len {
            let floor = start.max(end.saturating_sub(BOUNDARY_LOOKBACK));
            if let Some(cut) = (floor + 1..=end)
                .rev()
                .find(|&idx| chars.char_at(idx).is_some_and(is_boundary))
            {
                end = cut + 1;
            }
        }

        let piece = chars.slice(start, end).trim();
        if !piece.is_empty() {
            chunks.push(Chunk::new(piece, start, end, chunks.len()));
        }

        if end >= len {
            break;
        }

        let next = end.saturating_sub(overlap);
        start = if next > start { next } else { end };
    }

    chunks
}

/// Split after sentence terminators, dropping blank pieces.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut segment_start = 0usize;

    for (idx, c) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&c) {
            let segment_end = idx + c.len_utf8();
            sentences.push(text[segment_start..segment_end].trim());
            segment_start = segment_end;
        }
    }
    sentences.push(text[segment_start..].trim());

    sentences.retain(|s| !s.is_empty());
    sentences
}
