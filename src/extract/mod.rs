//! Extraction of typed event tables from the lines of a single run.
//!
//! Every extractor scans the lines of a run in order, checks each line against the
//! shape of its event kind (command token plus the presence of every required
//! attribute key), lexes matching lines and coerces their attributes into a typed row.
//! Lines of other kinds or unrelated framework output are skipped, while a matched
//! line with an unparseable or absent field aborts the extraction.
//!
//! ```rust
//! use spiking_neural_network_logs::extract::{EventExtractor, SpikeExtractor};
//!
//! let lines = vec![
//!     "t0 - INFO framework started",
//!     "t0 - fire; id: n1; timestamp: 74.0 ms; signal_intensity: -0.5 mV; last_fire: 0.0 ms",
//! ];
//!
//! let spikes = SpikeExtractor::default().extract(&lines).unwrap();
//!
//! assert_eq!(spikes.len(), 1);
//! assert_eq!(spikes.rows()[0].neuron_id, "n1");
//! assert_eq!(spikes.rows()[0].signal_time, 74.0);
//! ```

use regex::Regex;
use tracing::debug;
use crate::{
    coordinate::{parse_coordinate, Coordinate},
    error::ExtractionError,
    lexer::{lex_line, ParsedLine},
    schema::{EventKind, LogSchema},
    table::Table,
};
mod events;
pub use events::*;
mod network;
pub use network::{NetworkInfoExtractor, NetworkMetadata};


lazy_static::lazy_static! {
    static ref COMMAND_PATTERN: Regex = Regex::new(r"^.*? - (?P<command>.*?); ")
        .expect("Command pattern is valid");
}

/// Command token of a raw line, if the line has a preamble and a `;` delimited body
pub fn command_token(line: &str) -> Option<&str> {
    COMMAND_PATTERN.captures(line)
        .and_then(|captures| captures.name("command"))
        .map(|command| command.as_str())
}

/// Shape predicate for one kind of line, a line matches when its command token
/// is the expected one, every required key is present and no excluded key is
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    command: String,
    required: Vec<String>,
    excluded: Vec<String>,
}

impl LineShape {
    pub fn new(command: &str, required: &[&str]) -> Self {
        LineShape {
            command: String::from(command),
            required: required.iter().map(|key| String::from(*key)).collect(),
            excluded: Vec::new(),
        }
    }

    /// Shape of the given event kind under the given schema
    pub fn for_event(schema: &LogSchema, kind: EventKind) -> Self {
        LineShape::new(schema.commands.name(kind.command()), kind.required_fields())
    }

    /// Rejects lines carrying any of the given keys
    pub fn excluding(mut self, keys: &[&str]) -> Self {
        self.excluded.extend(keys.iter().map(|key| String::from(*key)));

        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Lexes the line and returns it only if it has this shape
    pub fn accept(&self, line: &str) -> Option<ParsedLine> {
        let parsed = lex_line(line)?;

        let matched = parsed.command == self.command &&
            self.required.iter().all(|key| parsed.contains_key(key)) &&
            !self.excluded.iter().any(|key| parsed.contains_key(key));

        if matched { Some(parsed) } else { None }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.accept(line).is_some()
    }
}

/// Typed access to the attributes of a matched line, failures carry the line
/// and field so a malformed log can be diagnosed without re-parsing
pub struct FieldReader<'a> {
    parsed: ParsedLine,
    line: &'a str,
    line_number: usize,
    schema: &'a LogSchema,
}

impl<'a> FieldReader<'a> {
    /// Wraps a line accepted by a [`LineShape`], `line_number` starts at 1
    pub fn new(parsed: ParsedLine, line: &'a str, line_number: usize, schema: &'a LogSchema) -> Self {
        FieldReader { parsed, line, line_number, schema }
    }

    fn line(&self) -> String {
        String::from(self.line.trim_end_matches(|c| c == '\n' || c == '\r'))
    }

    fn raw(&self, field: &str) -> Result<&str, ExtractionError> {
        self.parsed.get(field)
            .map(|value| value.trim())
            .ok_or_else(|| ExtractionError::MissingField {
                line_number: self.line_number,
                line: self.line(),
                field: String::from(field),
            })
    }

    /// Identifier field, must be non-empty
    pub fn text(&self, field: &str) -> Result<String, ExtractionError> {
        let value = self.raw(field)?;

        if value.is_empty() {
            return Err(
                ExtractionError::MissingField {
                    line_number: self.line_number,
                    line: self.line(),
                    field: String::from(field),
                }
            );
        }

        Ok(String::from(value))
    }

    /// Numeric field with its unit suffix removed, must be finite
    pub fn number(&self, field: &str) -> Result<f64, ExtractionError> {
        let value = self.raw(field)?;

        match self.schema.strip_unit(value).parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            _ => Err(
                ExtractionError::NumericParseFailure {
                    line_number: self.line_number,
                    line: self.line(),
                    field: String::from(field),
                    value: String::from(value),
                }
            ),
        }
    }

    pub fn coordinate(&self, field: &str) -> Result<Coordinate, ExtractionError> {
        let value = self.raw(field)?;

        parse_coordinate(value)
            .map_err(|source| ExtractionError::MalformedCoordinate {
                line_number: self.line_number,
                line: self.line(),
                field: String::from(field),
                source,
            })
    }
}

/// Turns the lines of one run into a table of one event kind
pub trait EventExtractor: Sync {
    /// Row type of the produced table
    type Row: Send;
    /// Kind of event this extractor materializes
    fn kind(&self) -> EventKind;
    /// Schema the extractor was built with
    fn schema(&self) -> &LogSchema;
    /// Shape a line must have to become a row
    fn shape(&self) -> &LineShape;
    /// Builds one row from a matched line
    fn build_row(&self, reader: &FieldReader) -> Result<Self::Row, ExtractionError>;

    /// Extracts one row per matching line in log order, an empty table is
    /// returned if no line matches
    fn extract<S: AsRef<str>>(&self, lines: &[S]) -> Result<Table<Self::Row>, ExtractionError> {
        let mut table = Table::new();
        let mut skipped: usize = 0;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            let parsed = match self.shape().accept(line) {
                Some(parsed) => parsed,
                None => {
                    skipped += 1;
                    continue;
                }
            };

            let reader = FieldReader::new(parsed, line, index + 1, self.schema());

            table.push(self.build_row(&reader)?);
        }

        if table.is_empty() {
            debug!(kind = ?self.kind(), lines = lines.len(), "no matching lines, table is empty");
        }
        debug!(kind = ?self.kind(), rows = table.len(), skipped, "extracted event table");

        Ok(table)
    }
}
