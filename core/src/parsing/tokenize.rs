//! Line-record tokenization shared by both file grammars
//!
//! Both archive formats are line-oriented: every meaningful line is a key
//! token followed by value tokens, separated by runs of whitespace. The
//! tokenizer keeps 1-based line numbers with each record so every later
//! stage can report where in the source file it failed.

/// One non-blank line of an input file, whitespace-split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source text
    pub line: usize,
    /// Whitespace-separated tokens; [`tokenize_lines`] never produces an
    /// empty list
    pub tokens: Vec<String>,
}

impl Record {
    /// First token of the record, the grammar key; empty for a record
    /// with no tokens
    pub fn key(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or("")
    }

    /// Tokens after the key
    pub fn rest(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }
}

/// Splits text into whitespace-tokenized records
///
/// Blank lines and lines exactly matching an entry of `skip` (section
/// headings with no record content) are dropped. Any run of whitespace
/// separates tokens, so indented values tokenize the same as single-space
/// separated ones.
pub fn tokenize_lines(text: &str, skip: &[&str]) -> Vec<Record> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || skip.contains(&trimmed) {
            continue;
        }
        records.push(Record {
            line: idx + 1,
            tokens: trimmed.split_whitespace().map(str::to_string).collect(),
        });
    }
    records
}
