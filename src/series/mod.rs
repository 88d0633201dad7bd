//! Applying one extractor across every run of a series.

use std::{
    collections::{BTreeMap, HashMap},
    error::Error,
};
use rayon::prelude::*;
use tracing::info;
use crate::{error::SeriesError, schema::LogSchema};


/// Per-run results keyed by run identifier, iteration is always by
/// ascending run identifier
#[derive(Debug, Clone, PartialEq)]
pub struct RunSeries<T> {
    runs: BTreeMap<usize, T>,
}

impl<T> Default for RunSeries<T> {
    fn default() -> Self {
        RunSeries { runs: BTreeMap::new() }
    }
}

impl<T> FromIterator<(usize, T)> for RunSeries<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        RunSeries { runs: iter.into_iter().collect() }
    }
}

impl<T> RunSeries<T> {
    pub fn get(&self, run: usize) -> Option<&T> {
        self.runs.get(&run)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Run identifiers in ascending order
    pub fn run_ids(&self) -> Vec<usize> {
        self.runs.keys().copied().collect()
    }

    /// Iterates over runs in ascending order of their identifier
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.runs.iter().map(|(run, value)| (*run, value))
    }

    /// Derives a new series by applying a function to every run
    pub fn map<U, F: Fn(&T) -> U>(&self, f: F) -> RunSeries<U> {
        self.runs.iter()
            .map(|(run, value)| (*run, f(value)))
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<usize, T> {
        self.runs
    }
}

/// Applies `extractor` to the lines of every run independently and collects the
/// results under their run identifier, if `parallel` is `true` runs are extracted
/// on rayon workers, the first failing run aborts the aggregation
///
/// ```rust
/// use std::collections::HashMap;
/// use spiking_neural_network_logs::{
///     extract::{EventExtractor, SpikeExtractor},
///     series::aggregate_series,
/// };
///
/// let runs = HashMap::from([
///     (2, vec!["t - fire; id: b; timestamp: 2 ms; signal_intensity: 1 mV; last_fire: 0 ms"]),
///     (1, vec!["t - fire; id: a; timestamp: 1 ms; signal_intensity: 1 mV; last_fire: 0 ms"]),
/// ]);
///
/// let extractor = SpikeExtractor::default();
/// let series = aggregate_series(&runs, |lines| extractor.extract(lines), true).unwrap();
///
/// assert_eq!(series.run_ids(), vec![1, 2]);
/// assert_eq!(series.get(1).unwrap().rows()[0].neuron_id, "a");
/// ```
pub fn aggregate_series<S, T, E, F>(
    runs: &HashMap<usize, Vec<S>>,
    extractor: F,
    parallel: bool,
) -> Result<RunSeries<T>, SeriesError<E>>
where
    S: AsRef<str> + Sync,
    T: Send,
    E: Error + Send + 'static,
    F: Fn(&[S]) -> Result<T, E> + Sync,
{
    let extract_run = |(run, lines): (&usize, &Vec<S>)| {
        extractor(lines.as_slice())
            .map(|table| (*run, table))
            .map_err(|source| SeriesError { run: *run, source })
    };

    let extracted: Vec<(usize, T)> = if parallel {
        runs.par_iter()
            .map(extract_run)
            .collect::<Result<Vec<(usize, T)>, SeriesError<E>>>()?
    } else {
        runs.iter()
            .map(extract_run)
            .collect::<Result<Vec<(usize, T)>, SeriesError<E>>>()?
    };

    let series: RunSeries<T> = extracted.into_iter().collect();

    info!(runs = series.len(), parallel, "aggregated run series");

    Ok(series)
}

/// Same as [`aggregate_series`] with the fan out decided by `schema.parallel`
pub fn aggregate_series_with_schema<S, T, E, F>(
    runs: &HashMap<usize, Vec<S>>,
    extractor: F,
    schema: &LogSchema,
) -> Result<RunSeries<T>, SeriesError<E>>
where
    S: AsRef<str> + Sync,
    T: Send,
    E: Error + Send + 'static,
    F: Fn(&[S]) -> Result<T, E> + Sync,
{
    aggregate_series(runs, extractor, schema.parallel)
}
