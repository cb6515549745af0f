//! The document: an ordered token list addressed by flat character offsets.

use std::ops::Range;

use super::token::Token;

/// Ordered sequence of tokens whose concatenated text is the full visible
/// expression. Left-to-right token order is reading order.
///
/// All offsets are character offsets into the flattened text. Inserting
/// inside a token splits it into two runs carrying the same ink, matching
/// how a rich-text surface splits a formatted run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.tokens.iter().map(Token::len_chars).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Concatenated text of all tokens
    pub fn plain_text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Insert a token at a character offset, splitting the run it lands in.
    ///
    /// Offsets past the end append. Inserting an empty token is a no-op.
    pub fn insert_at(&mut self, offset: usize, token: Token) {
        if token.is_empty() {
            return;
        }

        let mut pos = 0;
        for i in 0..self.tokens.len() {
            let len = self.tokens[i].len_chars();
            if offset == pos {
                self.tokens.insert(i, token);
                return;
            }
            if offset < pos + len {
                // Split the containing run, keep its ink on both halves
                let split = offset - pos;
                let left = self.tokens[i].clipped(0, split);
                let right = self.tokens[i].clipped(split, len);
                self.tokens.splice(i..=i, [left, token, right]);
                return;
            }
            pos += len;
        }
        self.tokens.push(token);
    }

    /// Delete a character range, trimming or dropping the tokens it covers
    pub fn delete_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }

        let mut kept = Vec::with_capacity(self.tokens.len());
        let mut pos = 0;
        for token in self.tokens.drain(..) {
            let len = token.len_chars();
            let span = pos..pos + len;
            pos += len;

            if span.end <= range.start || span.start >= range.end {
                kept.push(token);
                continue;
            }
            if range.start > span.start {
                kept.push(token.clipped(0, range.start - span.start));
            }
            if range.end < span.end {
                kept.push(token.clipped(range.end - span.start, len));
            }
        }
        kept.retain(|t| !t.is_empty());
        self.tokens = kept;
    }

    /// Copy of the tokens overlapping a character range, clipped to it
    pub fn slice(&self, range: Range<usize>) -> Vec<Token> {
        let mut out = Vec::new();
        let mut pos = 0;
        for token in &self.tokens {
            let len = token.len_chars();
            let span = pos..pos + len;
            pos += len;

            if span.end <= range.start || span.start >= range.end {
                continue;
            }
            let start = range.start.saturating_sub(span.start);
            let end = (range.end - span.start).min(len);
            let clip = token.clipped(start, end);
            if !clip.is_empty() {
                out.push(clip);
            }
        }
        out
    }
}
