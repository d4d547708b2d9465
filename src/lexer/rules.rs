//! Lexical rule configuration.
//!
//! The lexer is driven by data, not code: the keyword set, the primitive
//! type names and the operator vocabularies are all held in a
//! [`LexerOptions`] value and can be swapped out wholesale. [`DEFAULT_RULES`]
//! holds the language's standard rule set.

use lazy_static::lazy_static;

/// Operator vocabularies, grouped by category.
///
/// Classification priority when one string appears in several groups
/// follows [`LexerOperators::classify`].
#[derive(Debug, Clone)]
pub struct LexerOperators {
    pub arithmetic: Vec<String>,
    pub assignment: Vec<String>,
    pub unary: Vec<String>,
    pub logical: Vec<String>,
    pub binary: Vec<String>,
    pub comment: Vec<String>,
    pub long_comment: Vec<String>,
    pub other: Vec<String>,
}

/// The category an operator string resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    Arithmetic,
    Assignment,
    Binary,
    Logical,
    Comment,
    CommentMultiline,
    Unary,
    Other,
}

impl LexerOperators {
    /// Resolves an operator string to its most specific category.
    ///
    /// Priority order: arithmetic, assignment, binary, logical, comment,
    /// long-comment, unary, other.
    pub fn classify(&self, op: &str) -> Option<OperatorClass> {
        if self.arithmetic.iter().any(|o| o == op) {
            Some(OperatorClass::Arithmetic)
        } else if self.assignment.iter().any(|o| o == op) {
            Some(OperatorClass::Assignment)
        } else if self.binary.iter().any(|o| o == op) {
            Some(OperatorClass::Binary)
        } else if self.logical.iter().any(|o| o == op) {
            Some(OperatorClass::Logical)
        } else if self.comment.iter().any(|o| o == op) {
            Some(OperatorClass::Comment)
        } else if self.long_comment.iter().any(|o| o == op) {
            Some(OperatorClass::CommentMultiline)
        } else if self.unary.iter().any(|o| o == op) {
            Some(OperatorClass::Unary)
        } else if self.other.iter().any(|o| o == op) {
            Some(OperatorClass::Other)
        } else {
            None
        }
    }

    fn groups(&self) -> [&Vec<String>; 8] {
        [
            &self.arithmetic,
            &self.assignment,
            &self.unary,
            &self.logical,
            &self.binary,
            &self.comment,
            &self.long_comment,
            &self.other,
        ]
    }
}

/// Full lexer configuration: keywords, primitive type names and operator
/// vocabularies.
#[derive(Debug, Clone)]
pub struct LexerOptions {
    pub keywords: Vec<String>,
    pub types: Vec<String>,
    pub operators: LexerOperators,
}

impl LexerOptions {
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.iter().any(|t| t == word)
    }

    /// Whether a character belongs to the merged operator vocabulary and
    /// may therefore extend an operator accumulator.
    pub fn is_operator_char(&self, ch: char) -> bool {
        let mut buffer = [0u8; 4];
        let ch = &*ch.encode_utf8(&mut buffer);
        self.operators
            .groups()
            .iter()
            .any(|group| group.iter().any(|op| op == ch))
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}

lazy_static! {
    /// The language's standard rule set.
    pub static ref DEFAULT_RULES: LexerOptions = LexerOptions {
        operators: LexerOperators {
            arithmetic: owned(&["+", "-", "*", "/", "%"]),
            assignment: owned(&["=", "+=", "-=", "/=", "*=", "%=", "?=", ":="]),
            unary: owned(&["++", "--", "!"]),
            logical: owned(&["==", "!=", "&&", "||", "<", "<=", ">", ">="]),
            binary: owned(&["^", "&", "|"]),
            comment: owned(&["//"]),
            long_comment: owned(&["/*", "*/"]),
            other: owned(&[":", ".", "??", "?", "(", ")", ",", "?.", ";"]),
        },
        types: owned(&[
            "i32", "i64", "u32", "u64", "str", "char", "bool", "null", "void", "f32", "f64",
        ]),
        keywords: owned(&[
            "let",
            "const",
            "func",
            "import",
            "export",
            "class",
            "interface",
            "true",
            "false",
            "extends",
            "implements",
            "as",
            "while",
            "if",
            "else",
            "for",
            "assert",
            "return",
        ]),
    };
}
