//! Tokenization layer: splitting sentence text into tokens.
//!
//! Recipe sentences are short and written in plain English, so tokenization
//! is a whitespace split with surrounding punctuation trimmed off each word.
//! Hyphenated and degree-marked words ("medium-high", "350°F") survive as a
//! single token; downstream pattern scans work on the raw text anyway.

/// A single token extracted from input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's text value, lowercased and stripped of punctuation.
    pub value: String,
    /// The original text before normalization.
    pub original: String,
    /// Zero-based position in the token sequence.
    pub position: usize,
    /// What kind of token this is.
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A word token (alphabetic, possibly with inner hyphens or apostrophes).
    Word,
    /// A numeric token ("350", "1.5", "1/2").
    Number,
    /// A token made only of punctuation ("-", "&").
    Punctuation,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

fn is_edge_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && c != '°'
}

/// Tokenize input text into a sequence of tokens.
///
/// Splits on whitespace, trims leading/trailing punctuation from every word
/// and classifies what is left.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0;

    for word in text.split_whitespace() {
        let trimmed = word.trim_matches(is_edge_punctuation);

        let (value, kind) = if trimmed.is_empty() {
            (word.to_string(), TokenKind::Punctuation)
        } else if trimmed
            .chars()
            .all(|c| c.is_numeric() || c == '.' || c == ',' || c == '/')
        {
            (trimmed.to_string(), TokenKind::Number)
        } else {
            (trimmed.to_lowercase(), TokenKind::Word)
        };

        tokens.push(Token {
            value,
            original: word.to_string(),
            position,
            kind,
        });
        position += 1;
    }

    tokens
}

/// Split a block of instruction text into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace (or the end of
/// the text). Decimal points such as "1.5" never end a sentence because no
/// whitespace follows them.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_none_or(|n| n.is_whitespace()) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_simple_instruction() {
        let tokens = tokenize("Stir the sauce gently.");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].value, "stir");
        assert_eq!(tokens[1].value, "the");
        assert_eq!(tokens[2].value, "sauce");
        assert_eq!(tokens[3].value, "gently");
    }

    #[test]
    fn tokenize_preserves_original_case() {
        let tokens = tokenize("Preheat Oven,");
        assert_eq!(tokens[0].value, "preheat");
        assert_eq!(tokens[0].original, "Preheat");
        assert_eq!(tokens[1].value, "oven");
        assert_eq!(tokens[1].original, "Oven,");
    }

    #[test]
    fn tokenize_classifies_numbers_and_punctuation() {
        let tokens = tokenize("bake 20 - 25 minutes");
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[2].kind, TokenKind::Punctuation);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert!(tokens[4].is_word());
    }

    #[test]
    fn split_sentences_keeps_decimals_together() {
        let sentences = split_sentences("Add 1.5 cups flour. Mix well! Is it smooth?");
        assert_eq!(
            sentences,
            vec!["Add 1.5 cups flour.", "Mix well!", "Is it smooth?"]
        );
    }

    #[test]
    fn split_sentences_keeps_trailing_fragment() {
        let sentences = split_sentences("Chop the onions. Serve warm");
        assert_eq!(sentences, vec!["Chop the onions.", "Serve warm"]);
    }
}
