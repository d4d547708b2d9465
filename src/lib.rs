#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod type_checker;

/// A 1-based line/column location in the source text.
///
/// The lexer advances the column once per character and resets it on every
/// newline; both counters start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn null() -> Self {
        Position { line: 0, col: 0 }
    }
}

/// The region of source text a token or AST node was built from.
///
/// For composite nodes `start`/`end` always cover the first through last
/// consumed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn between(start: Span, end: Span) -> Span {
        Span {
            start: start.start,
            end: end.end,
        }
    }
}

pub fn get_line(content: &str, line_number: u32) -> Option<&str> {
    if line_number == 0 {
        return None;
    }

    content.lines().nth(line_number as usize - 1)
}


pub fn display_error(error: &Error, file: &Path) {
    /*
        Error: message
        -> final.slang
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let content = fs::read_to_string(file).unwrap_or_default();
    let line_text = get_line(&content, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}:{}:{}", file.display(), position.line, position.col);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let col = (position.col as usize).max(removed_whitespace + 1);
    let arrows = col - removed_whitespace;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
