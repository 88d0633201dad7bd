//! Ordered event tables with grouping, numeric columns and CSV export.

use std::{
    collections::HashMap,
    fs::File,
    hash::Hash,
    io::Write,
    path::Path,
    slice::Iter,
};
use ndarray::Array1;
use serde::Serialize;
use crate::error::ExportError;


/// Rows of one event kind in the order they appeared in the log
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table { rows: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Table<T> {
    fn from(rows: Vec<T>) -> Self {
        Table { rows }
    }
}

impl<T> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Table { rows: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Rows sharing one key, in log order
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup<'a, K, T> {
    pub key: K,
    pub rows: Vec<&'a T>,
}

impl<'a, K, T> RowGroup<'a, K, T> {
    /// First row of the group, used as the group's label
    pub fn first(&self) -> Option<&'a T> {
        self.rows.first().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Table::default()
    }

    pub fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// An empty table means the log has no events of this kind, callers
    /// decide how to present that
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Collects one numeric field of every row into an array
    pub fn column<F: Fn(&T) -> f64>(&self, field: F) -> Array1<f64> {
        self.rows.iter()
            .map(field)
            .collect()
    }

    /// Groups rows by the given key, groups are ordered by the first
    /// appearance of their key and rows keep their log order
    ///
    /// ```rust
    /// use spiking_neural_network_logs::table::Table;
    ///
    /// let table = Table::from(vec![("b", 1), ("a", 2), ("b", 3)]);
    /// let groups = table.group_by(|row| row.0);
    ///
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups[0].key, "b");
    /// assert_eq!(groups[0].first(), Some(&("b", 1)));
    /// assert_eq!(groups[0].rows, vec![&("b", 1), &("b", 3)]);
    /// assert_eq!(groups[1].key, "a");
    /// ```
    pub fn group_by<K, F>(&self, key: F) -> Vec<RowGroup<'_, K, T>>
    where
        K: Hash + Eq + Clone,
        F: Fn(&T) -> K,
    {
        let mut group_indices: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<RowGroup<'_, K, T>> = Vec::new();

        for row in self.rows.iter() {
            let row_key = key(row);

            match group_indices.get(&row_key) {
                Some(index) => groups[*index].rows.push(row),
                None => {
                    group_indices.insert(row_key.clone(), groups.len());
                    groups.push(RowGroup { key: row_key, rows: vec![row] });
                }
            }
        }

        groups
    }
}

impl<T: Serialize> Table<T> {
    /// Writes the table as CSV with a header row of field names
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for row in self.rows.iter() {
            csv_writer.serialize(row)?;
        }

        csv_writer.flush()?;

        Ok(())
    }

    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let file = File::create(path)?;

        self.write_csv(file)
    }
}
