//! Parsing of the bracketed spatial literals neurons are logged with.

use std::str::FromStr;
use serde::Serialize;
use crate::error::CoordinateError;


const NORM_MARKER: &str = ", norm";

/// Cartesian position of a neuron
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
}

impl Coordinate {
    pub fn new(x1: f64, x2: f64, x3: f64) -> Self {
        Coordinate { x1, x2, x3 }
    }

    /// Euclidean distance between two coordinates
    pub fn distance(&self, other: &Coordinate) -> f64 {
        ((self.x1 - other.x1).powi(2) + (self.x2 - other.x2).powi(2) + (self.x3 - other.x3).powi(2))
            .sqrt()
    }

    /// Euclidean norm, the `norm` the simulator appends to locations
    pub fn norm(&self) -> f64 {
        self.distance(&Coordinate::default())
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        parse_coordinate(literal)
    }
}

fn malformed(literal: &str, reason: String) -> CoordinateError {
    CoordinateError::MalformedCoordinate {
        literal: String::from(literal),
        reason,
    }
}

fn parse_component(literal: &str, component: &str) -> Result<f64, CoordinateError> {
    let value = match component.split_once('=') {
        Some((_, value)) => value,
        None => component,
    };

    let token = value.split_whitespace()
        .next()
        .ok_or_else(|| malformed(literal, format!("empty component `{}`", component.trim())))?;

    match token.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(malformed(literal, format!("`{}` is not a number", token))),
    }
}

/// Parses `(x=<v1> <unit>, y=<v2> <unit>, z=<v3> <unit>)[, norm=<d> <unit>]`,
/// the norm is ignored and units are discarded
///
/// ```rust
/// use spiking_neural_network_logs::coordinate::{parse_coordinate, Coordinate};
///
/// let plain = parse_coordinate("(x=1 µm, y=2 µm, z=3 µm)").unwrap();
/// let with_norm = parse_coordinate("(x=1 µm, y=2 µm, z=3 µm), norm=3.74 µm").unwrap();
///
/// assert_eq!(plain, Coordinate::new(1., 2., 3.));
/// assert_eq!(plain, with_norm);
/// ```
pub fn parse_coordinate(literal: &str) -> Result<Coordinate, CoordinateError> {
    let components = match literal.find(NORM_MARKER) {
        Some(index) => &literal[..index],
        None => literal,
    };

    let components = components.trim()
        .trim_start_matches('(')
        .trim_end_matches(')');

    let values = components.split(',')
        .map(|component| parse_component(literal, component))
        .collect::<Result<Vec<f64>, CoordinateError>>()?;

    match values.as_slice() {
        [x1, x2, x3] => Ok(Coordinate::new(*x1, *x2, *x3)),
        _ => Err(malformed(literal, format!("expected 3 components, found {}", values.len()))),
    }
}
