//! Splits a raw simulator log line into a command and its attributes.

use std::collections::HashMap;


/// Untyped attribute map of a single line
pub type AttributeMap = HashMap<String, String>;

const PREAMBLE_SEPARATOR: &str = " - ";
const FRAGMENT_SEPARATOR: &str = "; ";
const KEY_VALUE_SEPARATOR: &str = ": ";

/// A log line split into its command token and attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedLine {
    /// Command token directly after the preamble
    pub command: String,
    /// Attribute values keyed by attribute name
    pub attributes: AttributeMap,
}

impl ParsedLine {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|value| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }
}

/// Returns the part of the line after the first preamble separator with
/// trailing newline characters removed
pub fn line_body(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');

    line.split_once(PREAMBLE_SEPARATOR)
        .map(|(_, body)| body)
}

/// Lexes `<preamble> - <command>; <key>: <value>; ...` into a [`ParsedLine`],
/// returns `None` if the line has no preamble separator or no `;` delimited body,
/// fragments without a `: ` separator are ignored
///
/// ```rust
/// use spiking_neural_network_logs::lexer::lex_line;
///
/// let parsed = lex_line("t0 - fire; id: n1; timestamp: 74.0 ms\n").unwrap();
///
/// assert_eq!(parsed.command, "fire");
/// assert_eq!(parsed.get("id"), Some("n1"));
/// assert_eq!(parsed.get("timestamp"), Some("74.0 ms"));
/// assert!(lex_line("no separator here").is_none());
/// ```
pub fn lex_line(line: &str) -> Option<ParsedLine> {
    let body = line_body(line)?;

    let mut fragments = body.split(FRAGMENT_SEPARATOR);
    let command = fragments.next()?;

    if command.len() == body.len() {
        return None;
    }

    let attributes = fragments
        .filter_map(|fragment| fragment.split_once(KEY_VALUE_SEPARATOR))
        .map(|(key, value)| (String::from(key), String::from(value)))
        .collect();

    Some(
        ParsedLine {
            command: String::from(command),
            attributes,
        }
    )
}
