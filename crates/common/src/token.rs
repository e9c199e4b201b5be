//! Parsed representation of one script line.

use crate::hash::joaat;
use crate::opcode::Opcode;

/// Comment marker: a line whose head starts with this is skipped entirely.
pub const COMMENT_MARKER: &str = "//";

/// One parsed script line: mnemonic, parameters, and metadata.
///
/// The opcode is derived from the mnemonic hash once at construction and
/// never recomputed; parameters are immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// First whitespace-delimited word on the line (the mnemonic, or an
    /// unrecognized identifier).
    pub text: String,
    /// joaat hash of `text`.
    pub hash: u32,
    /// Symbolic identity resolved from `hash`.
    pub opcode: Opcode,
    /// Remaining whitespace-delimited words, in order.
    pub parameters: Vec<String>,
    /// 1-based source line number, for diagnostics.
    pub line: usize,
    /// Stack slot index, assigned during variable allocation. `None`
    /// until allocated; only declarations ever receive one.
    pub slot: Option<usize>,
}

impl Token {
    /// Build a token from a mnemonic and its parameters.
    pub fn new(text: impl Into<String>, parameters: Vec<String>, line: usize) -> Self {
        let text = text.into();
        let hash = joaat(text.as_bytes());
        Self {
            hash,
            opcode: Opcode::resolve(hash),
            text,
            parameters,
            line,
            slot: None,
        }
    }

    /// Parse one script line into a token.
    ///
    /// The line is split on whitespace: the first word is the mnemonic,
    /// the rest are parameters. Returns `None` for blank lines and for
    /// lines whose head begins with `//`.
    pub fn parse(line: &str, line_number: usize) -> Option<Token> {
        let mut words = line.split_whitespace();
        let head = words.next()?;
        if head.starts_with(COMMENT_MARKER) {
            return None;
        }
        let parameters = words.map(str::to_owned).collect();
        Some(Token::new(head, parameters, line_number))
    }

    /// The declared variable name (first parameter), for declarations.
    pub fn name(&self) -> Option<&str> {
        self.parameters.first().map(String::as_str)
    }
}

/// True if `word` parses as a signed 32-bit integer literal.
pub fn is_integer_literal(word: &str) -> bool {
    word.parse::<i32>().is_ok()
}

/// True if `word` is a syntactic identifier rather than a numeric constant.
///
/// A word starting with an ASCII digit, or with a minus sign followed by
/// one, is numeric-shaped and never names a variable.
pub fn is_identifier(word: &str) -> bool {
    match word.as_bytes() {
        [] => false,
        [b'-', rest @ ..] => !matches!(rest.first(), Some(b) if b.is_ascii_digit()),
        bytes => !bytes[0].is_ascii_digit(),
    }
}
