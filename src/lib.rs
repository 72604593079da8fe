#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod semantics;

extern crate regex;

/// A byte offset into a source unit, paired with the unit's name.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Locates the line containing a byte offset. Returns the 1-based line
/// number, the line's text, and the offset within that line. Offsets at
/// or past the end of the source (an error at EOF) resolve to the last
/// line.
pub fn line_at_offset(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), line.len().saturating_sub(1));
        start = end;
        line_number += 1;
    }

    last
}

pub fn display_error(error: &Error, source: &str, unit: &str) {
    /*
        Error: message
        -> input.val
           |
        20 | giez a = #;
           | ---------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = line_at_offset(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", unit);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

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
