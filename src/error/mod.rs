use std::io;
use thiserror::Error;
use crate::schema::MetadataSection;


/// Error set for coordinate literals
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Coordinate literal does not have three components or a component is not a number
    #[error("Malformed coordinate `{literal}`: {reason}")]
    MalformedCoordinate {
        literal: String,
        reason: String,
    },
}

/// Error set for failures on lines that matched an event shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// Coordinate field on a matched line could not be parsed
    #[error("Line {line_number}, field `{field}`: {source} (line: `{line}`)")]
    MalformedCoordinate {
        line_number: usize,
        line: String,
        field: String,
        source: CoordinateError,
    },
    /// Numeric field on a matched line is not a finite real number
    #[error("Line {line_number}, field `{field}`: cannot parse `{value}` as a number (line: `{line}`)")]
    NumericParseFailure {
        line_number: usize,
        line: String,
        field: String,
        value: String,
    },
    /// Required field is absent on a matched line
    #[error("Line {line_number}: missing field `{field}` (line: `{line}`)")]
    MissingField {
        line_number: usize,
        line: String,
        field: String,
    },
}

/// Error set for reading learning function parameters out of network metadata
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LearningError {
    /// `learning_type` is not one of the supported kernels
    #[error("Unknown learning type: `{0}`")]
    UnknownLearningType(String),
    /// Metadata does not contain the given header section
    #[error("Network metadata has no `{0}` section")]
    MissingSection(MetadataSection),
    /// Learning section lacks a key required by the selected learning type
    #[error("Learning section is missing field `{field}`")]
    MissingField {
        field: String,
    },
    /// Learning parameter is not a finite real number
    #[error("Learning field `{field}`: cannot parse `{value}` as a number")]
    NumericParseFailure {
        field: String,
        value: String,
    },
    /// Zero offset of the alpha function is only defined for a negative baseline
    /// and a positive time constant
    #[error("Alpha function needs baseline < 0 and time constant > 0, found baseline {baseline} and time constant {time_constant}")]
    UnsupportedAlphaParameters {
        baseline: f64,
        time_constant: f64,
    },
    /// Time axis bounds or step cannot produce a finite sequence of times
    #[error("Cannot sample times from {start} to {end} with step {step}")]
    InvalidTimeAxis {
        start: f64,
        end: f64,
        step: f64,
    },
}

/// Extraction failure on one run of a series
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Run {run}: {source}")]
pub struct SeriesError<E: std::error::Error + 'static> {
    /// Identifier of the run whose lines failed to extract
    pub run: usize,
    /// Error returned by the extractor
    pub source: E,
}

/// Error set for loading a log schema
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read schema file: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot parse schema: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Error set for writing tables out
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot write table: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot serialize table: {0}")]
    Csv(#[from] csv::Error),
}

/// A set of errors that may occur when using the library
#[derive(Error, Debug)]
pub enum SpikingLogError {
    /// Errors related to coordinate literals
    #[error(transparent)]
    CoordinateRelatedError(#[from] CoordinateError),
    /// Errors related to event extraction
    #[error(transparent)]
    ExtractionRelatedError(#[from] ExtractionError),
    /// Errors related to learning parameters
    #[error(transparent)]
    LearningRelatedError(#[from] LearningError),
    /// Errors related to extraction over a run series
    #[error(transparent)]
    SeriesRelatedError(#[from] SeriesError<ExtractionError>),
    /// Errors related to schema configuration
    #[error(transparent)]
    ConfigRelatedError(#[from] ConfigError),
    /// Errors related to table export
    #[error(transparent)]
    ExportRelatedError(#[from] ExportError),
}
